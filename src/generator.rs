// ABOUTME: Deck synthesis for the slidemaster library
// ABOUTME: Builds a presentation from a free-text prompt using a fixed template

use crate::errors::Result;
use crate::models::{Presentation, Slide};
use crate::utils;
use chrono::{DateTime, Utc};
use log::debug;

/// Template used to turn a prompt into a starter deck
#[derive(Debug, Clone)]
pub struct DeckGenerator {
    /// Characters of the prompt kept in the presentation title
    pub title_limit: usize,
    /// Characters of the prompt kept on the title slide
    pub slide_title_limit: usize,
}

impl Default for DeckGenerator {
    fn default() -> Self {
        Self {
            title_limit: 30,
            slide_title_limit: 50,
        }
    }
}

impl DeckGenerator {
    pub fn new(title_limit: usize, slide_title_limit: usize) -> Self {
        Self {
            title_limit,
            slide_title_limit,
        }
    }

    /// Synthesize a deck: a title slide followed by two content slides
    pub fn generate(&self, prompt: &str, now: DateTime<Utc>) -> Result<Presentation> {
        let prompt = utils::validate_prompt(prompt)?;
        debug!("Synthesizing deck for prompt of {} chars", prompt.chars().count());

        let slides = vec![
            Slide::title_slide(utils::truncate_chars(prompt, self.slide_title_limit))
                .with_notes("Introduction slide for your presentation."),
            Slide::content_slide("Overview", ["Key point 1", "Key point 2", "Key point 3"])
                .with_notes("Discuss the main topics."),
            Slide::content_slide(
                "Details",
                ["Important detail", "Supporting information", "Examples"],
            )
            .with_notes("Go deeper into the subject."),
        ];

        Ok(Presentation::new(
            utils::truncate_with_ellipsis(prompt, self.title_limit),
            slides,
            now,
        ))
    }
}
