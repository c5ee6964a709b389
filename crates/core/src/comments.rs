//! Comment validation rules.
//!
//! Length limits are counted in Unicode scalar values, not bytes, so a
//! 500-character comment in any script is accepted.

/// Maximum length of comment text in characters.
pub const MAX_COMMENT_TEXT_LENGTH: usize = 500;

/// Validate comment text: must be non-empty and within the length limit.
pub fn validate_comment_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Comment text cannot be empty".to_string());
    }
    if text.chars().count() > MAX_COMMENT_TEXT_LENGTH {
        return Err(format!(
            "Comment text exceeds maximum length of {MAX_COMMENT_TEXT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the comment author's display name.
pub fn validate_author_name(author_name: &str) -> Result<(), String> {
    if author_name.trim().is_empty() {
        return Err("Author name cannot be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(validate_comment_text("").is_err());
    }

    #[test]
    fn text_at_limit_is_accepted() {
        let text = "a".repeat(MAX_COMMENT_TEXT_LENGTH);
        assert!(validate_comment_text(&text).is_ok());
    }

    #[test]
    fn text_over_limit_is_rejected() {
        let text = "a".repeat(MAX_COMMENT_TEXT_LENGTH + 1);
        let err = validate_comment_text(&text).unwrap_err();
        assert!(err.contains("500"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 500 two-byte characters: 1000 bytes, still within the limit.
        let text = "é".repeat(MAX_COMMENT_TEXT_LENGTH);
        assert!(validate_comment_text(&text).is_ok());
    }

    #[test]
    fn blank_author_name_is_rejected() {
        assert!(validate_author_name("   ").is_err());
        assert!(validate_author_name("Ann").is_ok());
    }
}
