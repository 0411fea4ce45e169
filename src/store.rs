// ABOUTME: Presentation store for the slidemaster library
// ABOUTME: Owns the canonical in-memory collection of presentations, most recent first

use crate::clock::{system_clock, SharedClock};
use crate::errors::Result;
use crate::generator::DeckGenerator;
use crate::models::{new_id, Presentation, Slide};
use crate::query::{self, SortKey};
use crate::samples;
use log::{debug, info};

/// Suffix appended to the title of a duplicated presentation
pub const COPY_SUFFIX: &str = " (Copy)";

/// In-memory collection of presentations.
///
/// Every mutation builds the next collection and swaps it in whole, so a
/// reader holding an earlier `list()` never observes a partial update.
pub struct PresentationStore {
    presentations: Vec<Presentation>,
    clock: SharedClock,
    generator: DeckGenerator,
}

impl Default for PresentationStore {
    fn default() -> Self {
        Self::new(system_clock(), DeckGenerator::default())
    }
}

impl PresentationStore {
    /// Create an empty store
    pub fn new(clock: SharedClock, generator: DeckGenerator) -> Self {
        Self {
            presentations: Vec::new(),
            clock,
            generator,
        }
    }

    /// Create a store seeded with the sample presentations
    pub fn with_samples(clock: SharedClock, generator: DeckGenerator) -> Self {
        Self {
            presentations: samples::sample_presentations(),
            clock,
            generator,
        }
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    pub fn generator(&self) -> &DeckGenerator {
        &self.generator
    }

    /// Synthesize a presentation from `prompt` and insert it at the head
    pub fn create(&mut self, prompt: &str) -> Result<Presentation> {
        let presentation = self.generator.generate(prompt, self.clock.now())?;
        info!(
            "Created presentation {:?} ({})",
            presentation.title, presentation.id
        );
        self.insert(presentation.clone());
        Ok(presentation)
    }

    /// Deep-copy `original` with fresh presentation and slide ids, inserting the copy at the head
    pub fn duplicate(&mut self, original: &Presentation) -> Presentation {
        let copy = Presentation {
            id: new_id(),
            title: format!("{}{}", original.title, COPY_SUFFIX),
            last_edited: self.clock.now(),
            slides: original.slides.iter().map(Slide::with_fresh_id).collect(),
        };
        info!("Duplicated presentation {} as {}", original.id, copy.id);
        self.insert(copy.clone());
        copy
    }

    /// Insert an already-built presentation at the head, as a generation result would be
    pub fn insert(&mut self, presentation: Presentation) {
        let mut next = Vec::with_capacity(self.presentations.len() + 1);
        next.push(presentation);
        next.extend(self.presentations.iter().cloned());
        self.presentations = next;
    }

    /// Remove the presentation with `id`. Absent ids are ignored.
    pub fn delete(&mut self, id: &str) {
        if !self.contains(id) {
            debug!("Delete ignored, no presentation {}", id);
            return;
        }
        self.presentations = self
            .presentations
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        info!("Deleted presentation {}", id);
    }

    /// Replace the stored presentation sharing `presentation.id`. Absent ids are ignored.
    pub fn update(&mut self, presentation: Presentation) {
        if !self.contains(&presentation.id) {
            debug!("Update ignored, no presentation {}", presentation.id);
            return;
        }
        debug!("Updating presentation {}", presentation.id);
        self.presentations = self
            .presentations
            .iter()
            .map(|p| {
                if p.id == presentation.id {
                    presentation.clone()
                } else {
                    p.clone()
                }
            })
            .collect();
    }

    /// The full collection in store order
    pub fn list(&self) -> Vec<Presentation> {
        self.presentations.clone()
    }

    /// The collection filtered by title and sorted by `sort_key`
    pub fn query(&self, query: &str, sort_key: SortKey) -> Vec<Presentation> {
        query::view(&self.presentations, query, sort_key)
    }

    pub fn get(&self, id: &str) -> Option<Presentation> {
        self.presentations.iter().find(|p| p.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.presentations.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.presentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presentations.is_empty()
    }
}
