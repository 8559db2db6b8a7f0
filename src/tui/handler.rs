//! Event handler for the TUI
//!
//! Routes keyboard events based on the current input mode. While a text
//! field has focus every printable key goes to the field, so step
//! navigation only happens in normal mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::wizard::Step;

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        // Close help on any key
        app.close_dialog();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let step = app.wizard.step();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Step navigation; leaving the type step forward confirms the highlight
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
            if step == Step::Type {
                app.commit_content_type();
            }
            app.next_step()
        }
        KeyCode::Left | KeyCode::Char('h') => app.prev_step(),
        KeyCode::Char('g') => app.jump_to_first_missing(),

        // Type picker
        KeyCode::Down | KeyCode::Char('j') if step == Step::Type => {
            app.cycle_content_type(true)
        }
        KeyCode::Up | KeyCode::Char('k') if step == Step::Type => {
            app.cycle_content_type(false)
        }

        KeyCode::Enter => match step {
            Step::Confirm => app.submit(),
            Step::Welcome => app.next_step(),
            Step::Type => {
                app.commit_content_type();
                app.next_step()
            }
            _ => app.begin_edit(),
        },
        KeyCode::Char('i') | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Tab => app.cycle_field(),
        KeyCode::Char('x') => app.remove_last_entry(),
        KeyCode::Char('c') if step == Step::Confirm => app.toggle_consent(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while a text field has focus
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            return Ok(());
        }
        KeyCode::Esc => {
            app.sync_live_field();
            app.end_edit();
            return Ok(());
        }
        KeyCode::Char(c) => app.input.insert(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        _ => return Ok(()),
    }

    app.sync_live_field();
    Ok(())
}
