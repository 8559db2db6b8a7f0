//! Keybinding definitions
//!
//! The single table the help overlay is built from. The handler matches
//! keys directly; this table is the user-facing description of it.

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active on every step in normal mode
    Global,
    /// Active on the post type step
    TypePicker,
    /// Active while a text field has focus
    Editing,
    /// Active on the review step
    Confirm,
}

impl KeyContext {
    pub const ALL: [KeyContext; 4] = [
        KeyContext::Global,
        KeyContext::TypePicker,
        KeyContext::Editing,
        KeyContext::Confirm,
    ];

    /// Section heading in the help overlay
    pub fn heading(self) -> &'static str {
        match self {
            Self::Global => "Navigation",
            Self::TypePicker => "Post Type",
            Self::Editing => "Editing a Field",
            Self::Confirm => "Review",
        }
    }
}

const fn kb(key: KeyCode, description: &'static str, context: KeyContext) -> Keybinding {
    Keybinding {
        key,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    kb(KeyCode::Right, "Next step", KeyContext::Global),
    kb(KeyCode::Char(' '), "Next step", KeyContext::Global),
    kb(KeyCode::Left, "Previous step", KeyContext::Global),
    kb(KeyCode::Enter, "Edit field / continue", KeyContext::Global),
    kb(KeyCode::Tab, "Next field on this step", KeyContext::Global),
    kb(KeyCode::Char('x'), "Remove last tag or question", KeyContext::Global),
    kb(KeyCode::Char('g'), "Jump to first missing field", KeyContext::Global),
    kb(KeyCode::Char('?'), "Show help", KeyContext::Global),
    kb(KeyCode::Char('q'), "Quit", KeyContext::Global),
    kb(KeyCode::Down, "Next post type", KeyContext::TypePicker),
    kb(KeyCode::Up, "Previous post type", KeyContext::TypePicker),
    kb(KeyCode::Enter, "Confirm type and continue", KeyContext::TypePicker),
    kb(KeyCode::Enter, "Save field / add entry", KeyContext::Editing),
    kb(KeyCode::Esc, "Leave field", KeyContext::Editing),
    kb(KeyCode::Char('c'), "Toggle consent", KeyContext::Confirm),
    kb(KeyCode::Enter, "Submit post", KeyContext::Confirm),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    }
}
