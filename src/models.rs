// ABOUTME: Data model for the slidemaster library
// ABOUTME: Defines slides, presentations and the identifiers that tie them together

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder text for a freshly added bullet point
pub const DEFAULT_BULLET: &str = "New bullet point";

/// Generate a fresh identifier. Identifiers are never reused.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The two kinds of slide a deck can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
}

impl SlideKind {
    /// Title given to a slide of this kind when it is added from the editor
    pub fn default_title(self) -> &'static str {
        match self {
            SlideKind::Title => "New Title Slide",
            SlideKind::Content => "New Slide",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideKind::Title => write!(f, "title"),
            SlideKind::Content => write!(f, "content"),
        }
    }
}

/// A single slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    pub title: String,
    /// Bullet points, in display order. Only content slides carry them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    /// Create a title slide
    pub fn title_slide(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            kind: SlideKind::Title,
            title: title.into(),
            content: None,
            notes: None,
        }
    }

    /// Create a content slide with the given bullets
    pub fn content_slide<I, S>(title: impl Into<String>, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: new_id(),
            kind: SlideKind::Content,
            title: title.into(),
            content: Some(bullets.into_iter().map(Into::into).collect()),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// A structurally identical copy carrying a new id
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: new_id(),
            ..self.clone()
        }
    }

    pub fn bullets(&self) -> &[String] {
        self.content.as_deref().unwrap_or_default()
    }
}

/// An ordered deck of slides plus its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: String,
    pub title: String,
    pub last_edited: DateTime<Utc>,
    pub slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(title: impl Into<String>, slides: Vec<Slide>, last_edited: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            last_edited,
            slides,
        }
    }

    pub fn slide(&self, slide_id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == slide_id)
    }

    pub fn slide_position(&self, slide_id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == slide_id)
    }

    /// "3 slides", "1 slide"
    pub fn slide_count_label(&self) -> String {
        let count = self.slides.len();
        format!("{} slide{}", count, if count == 1 { "" } else { "s" })
    }

    /// Human-readable form of `last_edited` relative to `now`
    pub fn last_edited_label(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.last_edited);
        if age < Duration::minutes(1) {
            "Just now".to_string()
        } else {
            self.last_edited.format("%B %-d, %Y").to_string()
        }
    }
}
