//! Wizard steps and the content-type skip rules
//!
//! Steps are strictly linear. A step is skipped in both directions when the
//! selected content type has nothing to enter there: text posts have no
//! cover image or description, image posts are their own cover image.

use std::fmt;

use crate::models::ContentType;

/// One ordinal position in the submission wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Welcome,
    Questions,
    Type,
    Title,
    Content,
    Thumbnail,
    Description,
    Tags,
    Confirm,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 9] = [
        Step::Welcome,
        Step::Questions,
        Step::Type,
        Step::Title,
        Step::Content,
        Step::Thumbnail,
        Step::Description,
        Step::Tags,
        Step::Confirm,
    ];

    /// The first step
    pub const FIRST: Step = Step::Welcome;

    /// The terminal step, the only one submission is allowed from
    pub const LAST: Step = Step::Confirm;

    /// Ordinal index of the step
    pub fn index(self) -> usize {
        self as usize
    }

    /// Step at an ordinal index, clamped to the last step
    pub fn from_index(index: usize) -> Step {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Whether the step is shown for the given content type
    pub fn is_applicable(self, content_type: ContentType) -> bool {
        match self {
            Step::Thumbnail => content_type.accepts_thumbnail(),
            Step::Description => content_type.accepts_description(),
            _ => true,
        }
    }

    /// The step `go_next` lands on, clamped at [`Step::LAST`]
    pub fn next_for(self, content_type: ContentType) -> Step {
        Self::ALL[self.index() + 1..]
            .iter()
            .copied()
            .find(|step| step.is_applicable(content_type))
            .unwrap_or(Self::LAST)
    }

    /// The step `go_back` lands on, clamped at [`Step::FIRST`]
    pub fn prev_for(self, content_type: ContentType) -> Step {
        Self::ALL[..self.index()]
            .iter()
            .rev()
            .copied()
            .find(|step| step.is_applicable(content_type))
            .unwrap_or(Self::FIRST)
    }

    /// Position among the applicable steps (1-based) and their total
    pub fn progress(self, content_type: ContentType) -> (usize, usize) {
        let applicable: Vec<Step> = Self::ALL
            .iter()
            .copied()
            .filter(|step| step.is_applicable(content_type))
            .collect();
        let position = applicable.iter().filter(|step| **step < self).count() + 1;
        (position.min(applicable.len()), applicable.len())
    }

    /// Heading shown above the step
    pub fn title(self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Questions => "Research Questions",
            Step::Type => "Post Type",
            Step::Title => "Title",
            Step::Content => "Content",
            Step::Thumbnail => "Cover Image",
            Step::Description => "Description",
            Step::Tags => "Tags",
            Step::Confirm => "Review Submission",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_forward(content_type: ContentType) -> Vec<Step> {
        let mut visited = vec![Step::FIRST];
        let mut step = Step::FIRST;
        while step != Step::LAST {
            step = step.next_for(content_type);
            visited.push(step);
        }
        visited
    }

    #[test]
    fn test_text_skips_thumbnail_and_description() {
        assert_eq!(Step::Content.next_for(ContentType::Text), Step::Tags);
        assert_eq!(Step::Tags.prev_for(ContentType::Text), Step::Content);
        let visited = walk_forward(ContentType::Text);
        assert!(!visited.contains(&Step::Thumbnail));
        assert!(!visited.contains(&Step::Description));
    }

    #[test]
    fn test_image_skips_thumbnail_only() {
        assert_eq!(Step::Content.next_for(ContentType::Image), Step::Description);
        assert_eq!(Step::Description.prev_for(ContentType::Image), Step::Content);
        let visited = walk_forward(ContentType::Image);
        assert!(!visited.contains(&Step::Thumbnail));
        assert!(visited.contains(&Step::Description));
    }

    #[test]
    fn test_other_types_visit_every_step() {
        for content_type in [ContentType::Video, ContentType::Audio, ContentType::Pdf] {
            assert_eq!(walk_forward(content_type), Step::ALL.to_vec());
            for window in Step::ALL.windows(2) {
                assert_eq!(window[1].prev_for(content_type), window[0]);
            }
        }
    }

    #[test]
    fn test_clamped_at_both_ends() {
        for content_type in ContentType::ALL {
            assert_eq!(Step::LAST.next_for(content_type), Step::LAST);
            assert_eq!(Step::FIRST.prev_for(content_type), Step::FIRST);
        }
    }

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(Step::from_index(4), Step::Content);
        assert_eq!(Step::from_index(42), Step::Confirm);
        assert_eq!(Step::Tags.index(), 7);
    }

    #[test]
    fn test_progress() {
        assert_eq!(Step::Welcome.progress(ContentType::Video), (1, 9));
        assert_eq!(Step::Tags.progress(ContentType::Text), (6, 7));
        assert_eq!(Step::Confirm.progress(ContentType::Image), (8, 8));
    }
}
