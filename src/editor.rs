// ABOUTME: Slide editing operations for the slidemaster library
// ABOUTME: Pure functions that return a new presentation snapshot for every edit

use crate::clock::{system_clock, SharedClock};
use crate::errors::{Result, SlideError};
use crate::models::{new_id, Presentation, Slide, SlideKind, DEFAULT_BULLET};
use log::{debug, warn};

/// Direction for a single-step slide move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Editing operations over one presentation's deck.
///
/// The editor never touches a store: callers hand the returned snapshot to
/// `PresentationStore::update`. References to slides or bullets that do not
/// exist leave the deck as it was.
#[derive(Clone)]
pub struct SlideEditor {
    clock: SharedClock,
}

impl Default for SlideEditor {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

impl SlideEditor {
    pub fn new(clock: SharedClock) -> Self {
        Self { clock }
    }

    fn snapshot(&self, presentation: &Presentation, slides: Vec<Slide>) -> Presentation {
        Presentation {
            id: presentation.id.clone(),
            title: presentation.title.clone(),
            last_edited: self.clock.now(),
            slides,
        }
    }

    /// Apply `edit` to a copy of the slide with `slide_id`
    fn edit_slide<F>(&self, presentation: &Presentation, slide_id: &str, edit: F) -> Presentation
    where
        F: FnOnce(&mut Slide),
    {
        let mut slides = presentation.slides.clone();
        match slides.iter_mut().find(|s| s.id == slide_id) {
            Some(slide) => edit(slide),
            None => debug!("No slide {} in presentation {}", slide_id, presentation.id),
        }
        self.snapshot(presentation, slides)
    }

    /// Append a new slide of `kind`. Returns the new snapshot and the new slide's id.
    pub fn add_slide(&self, presentation: &Presentation, kind: SlideKind) -> (Presentation, String) {
        let slide = Slide {
            id: new_id(),
            kind,
            title: kind.default_title().to_string(),
            content: match kind {
                SlideKind::Content => Some(vec![DEFAULT_BULLET.to_string(); 2]),
                SlideKind::Title => None,
            },
            notes: Some(String::new()),
        };
        let slide_id = slide.id.clone();
        let mut slides = presentation.slides.clone();
        slides.push(slide);
        debug!("Added {} slide {} to {}", kind, slide_id, presentation.id);
        (self.snapshot(presentation, slides), slide_id)
    }

    /// Remove a slide. The last remaining slide cannot be deleted.
    pub fn delete_slide(&self, presentation: &Presentation, slide_id: &str) -> Result<Presentation> {
        if presentation.slides.len() <= 1 {
            warn!(
                "Refusing to delete the only slide of presentation {}",
                presentation.id
            );
            return Err(SlideError::InvalidOperation(
                "A presentation must have at least one slide".to_string(),
            ));
        }
        let slides = presentation
            .slides
            .iter()
            .filter(|s| s.id != slide_id)
            .cloned()
            .collect();
        Ok(self.snapshot(presentation, slides))
    }

    /// Swap a slide with its neighbour. Moving past either end does nothing.
    pub fn move_slide(
        &self,
        presentation: &Presentation,
        slide_id: &str,
        direction: MoveDirection,
    ) -> Presentation {
        let mut slides = presentation.slides.clone();
        if let Some(index) = presentation.slide_position(slide_id) {
            let target = match direction {
                MoveDirection::Up => index.checked_sub(1),
                MoveDirection::Down => Some(index + 1).filter(|&t| t < slides.len()),
            };
            if let Some(target) = target {
                slides.swap(index, target);
            }
        }
        self.snapshot(presentation, slides)
    }

    pub fn update_slide_title(
        &self,
        presentation: &Presentation,
        slide_id: &str,
        title: &str,
    ) -> Presentation {
        self.edit_slide(presentation, slide_id, |slide| {
            slide.title = title.to_string();
        })
    }

    pub fn update_bullet(
        &self,
        presentation: &Presentation,
        slide_id: &str,
        index: usize,
        text: &str,
    ) -> Presentation {
        self.edit_slide(presentation, slide_id, |slide| {
            if let Some(bullet) = slide.content.as_mut().and_then(|c| c.get_mut(index)) {
                *bullet = text.to_string();
            }
        })
    }

    /// Append a placeholder bullet. Title slides have no bullets and are left alone.
    pub fn add_bullet(&self, presentation: &Presentation, slide_id: &str) -> Presentation {
        self.edit_slide(presentation, slide_id, |slide| {
            if let Some(content) = slide.content.as_mut() {
                content.push(DEFAULT_BULLET.to_string());
            }
        })
    }

    pub fn delete_bullet(
        &self,
        presentation: &Presentation,
        slide_id: &str,
        index: usize,
    ) -> Presentation {
        self.edit_slide(presentation, slide_id, |slide| {
            if let Some(content) = slide.content.as_mut() {
                if index < content.len() {
                    content.remove(index);
                }
            }
        })
    }

    pub fn update_notes(
        &self,
        presentation: &Presentation,
        slide_id: &str,
        notes: &str,
    ) -> Presentation {
        self.edit_slide(presentation, slide_id, |slide| {
            slide.notes = Some(notes.to_string());
        })
    }

    /// Insert a copy of a slide, with a new id, right after the original
    pub fn duplicate_slide(
        &self,
        presentation: &Presentation,
        slide_id: &str,
    ) -> (Presentation, Option<String>) {
        let mut slides = presentation.slides.clone();
        let copy_id = presentation.slide_position(slide_id).map(|index| {
            let copy = slides[index].with_fresh_id();
            let id = copy.id.clone();
            slides.insert(index + 1, copy);
            id
        });
        (self.snapshot(presentation, slides), copy_id)
    }

    pub fn rename(&self, presentation: &Presentation, title: &str) -> Presentation {
        let mut renamed = self.snapshot(presentation, presentation.slides.clone());
        renamed.title = title.to_string();
        renamed
    }
}
