// ABOUTME: Query engine for the slidemaster library
// ABOUTME: Filters presentations by title and sorts them by date, title or slide count

use crate::errors::{Result, SlideError};
use crate::models::Presentation;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering applied to a presentation listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    SlidesDesc,
    SlidesAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::SlidesDesc,
        SortKey::SlidesAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::SlidesDesc => "slides-desc",
            SortKey::SlidesAsc => "slides-asc",
        }
    }

    fn compare(self, a: &Presentation, b: &Presentation) -> Ordering {
        match self {
            SortKey::DateDesc => b.last_edited.cmp(&a.last_edited),
            SortKey::DateAsc => a.last_edited.cmp(&b.last_edited),
            SortKey::TitleAsc => compare_titles(&a.title, &b.title),
            SortKey::TitleDesc => compare_titles(&b.title, &a.title),
            SortKey::SlidesDesc => b.slides.len().cmp(&a.slides.len()),
            SortKey::SlidesAsc => a.slides.len().cmp(&b.slides.len()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SlideError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| SlideError::ValidationError(format!("Unknown sort key: {}", s)))
    }
}

/// Primary collation key: canonical decomposition with combining marks removed, lowercased
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style title comparison. Base letters decide first, so `É` sorts with `E`;
/// then accents, unaccented first; then case, lowercase first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Whether `title` contains `query`, ignoring case. Only an empty query matches everything.
pub fn matches_query(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Derive the displayed listing: filter by title then stable-sort by `sort_key`.
/// The input is left untouched.
pub fn view(presentations: &[Presentation], query: &str, sort_key: SortKey) -> Vec<Presentation> {
    let mut shown: Vec<Presentation> = presentations
        .iter()
        .filter(|p| matches_query(&p.title, query))
        .cloned()
        .collect();
    shown.sort_by(|a, b| sort_key.compare(a, b));
    shown
}
