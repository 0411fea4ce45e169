// ABOUTME: Utility functions for the slidemaster library
// ABOUTME: Provides text truncation and input validation helpers

use crate::errors::{Result, SlideError};

/// Marker appended to a title that was cut short
pub const ELLIPSIS: &str = "...";

/// Keep at most `limit` characters of `text`
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Keep at most `limit` characters, appending an ellipsis when anything was dropped
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        format!("{}{}", truncate_chars(text, limit), ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Validate a generation prompt, returning it trimmed
pub fn validate_prompt(prompt: &str) -> Result<&str> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(SlideError::ValidationError(
            "Prompt must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Parse a positive integer setting
pub fn parse_positive(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SlideError::ConfigError(format!(
            "{} must be a positive integer, got {:?}",
            name, value
        ))),
    }
}

/// A filesystem-friendly name derived from a presentation title
pub fn file_stem(title: &str) -> String {
    let stem: String = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if stem.is_empty() {
        "presentation".to_string()
    } else {
        stem
    }
}
