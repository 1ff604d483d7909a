//! Helpers for server-rendered pages: comment replies, required fields,
//! image previews, and the scroll-to-top button.

/// Border color for a required field left blank.
pub const INVALID_BORDER: &str = "#ef4444";

/// Title color of the comment form while replying.
pub const REPLY_TITLE_COLOR: &str = "#3b82f6";

// ---------------------------------------------------------------------------
// Comment replies
// ---------------------------------------------------------------------------

/// What the comment form should show when replying to `author`.
///
/// Values go through DOM text/value setters, so no quote escaping is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
    pub parent_id: String,
    pub text: String,
    pub title: String,
}

impl ReplyDraft {
    pub fn new(comment_id: &str, author: &str) -> Self {
        let author = author.trim();
        Self {
            parent_id: comment_id.trim().to_string(),
            text: format!("@{author} "),
            title: format!("Replying to {author}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Required fields
// ---------------------------------------------------------------------------

/// Keys of required fields whose value is blank after trimming.
pub fn blank_required_fields<K, V, I>(fields: I) -> Vec<K>
where
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .filter(|(_, value)| value.as_ref().trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

// ---------------------------------------------------------------------------
// Image preview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewStyle {
    pub max_width_px: u32,
    pub max_height_px: u32,
    pub radius_px: u32,
    pub margin_top_px: u32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            max_width_px: 200,
            max_height_px: 150,
            radius_px: 8,
            margin_top_px: 10,
        }
    }
}

impl PreviewStyle {
    pub fn css(&self) -> String {
        format!(
            "max-width: {}px; max-height: {}px; border-radius: {}px; margin-top: {}px;",
            self.max_width_px, self.max_height_px, self.radius_px, self.margin_top_px
        )
    }
}

// ---------------------------------------------------------------------------
// Scroll to top
// ---------------------------------------------------------------------------

pub fn scroll_top_visible(offset: f64, threshold: u32) -> bool {
    offset > f64::from(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_draft_mentions_author() {
        let draft = ReplyDraft::new("42", "Ana O'Neil");
        assert_eq!(draft.parent_id, "42");
        assert_eq!(draft.text, "@Ana O'Neil ");
        assert_eq!(draft.title, "Replying to Ana O'Neil");
    }

    #[test]
    fn whitespace_only_fields_are_blank() {
        let blank = blank_required_fields([("name", "Ana"), ("email", "  "), ("message", "")]);
        assert_eq!(blank, ["email", "message"]);
    }

    #[test]
    fn owned_values_keyed_by_index() {
        let values = vec![String::from("x"), String::from("\n\t")];
        let blank = blank_required_fields(values.into_iter().enumerate());
        assert_eq!(blank, [1]);
    }

    #[test]
    fn preview_css_has_all_constraints() {
        assert_eq!(
            PreviewStyle::default().css(),
            "max-width: 200px; max-height: 150px; border-radius: 8px; margin-top: 10px;"
        );
    }

    #[test]
    fn scroll_button_appears_past_threshold() {
        assert!(!scroll_top_visible(0.0, 300));
        assert!(!scroll_top_visible(300.0, 300));
        assert!(scroll_top_visible(300.5, 300));
    }
}
