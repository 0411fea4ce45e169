// ABOUTME: Simulated long-running actions for the slidemaster library
// ABOUTME: Generation, translation, audio, media and export resolve after a fixed delay on a worker thread

use crate::clock::SharedClock;
use crate::errors::{Result, SlideError};
use crate::generator::DeckGenerator;
use crate::languages::Language;
use crate::models::{new_id, Presentation, Slide};
use crate::utils;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

/// Delays applied to each simulated action
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub generation_delay: Duration,
    pub translation_delay: Duration,
    pub audio_delay: Duration,
    pub media_delay: Duration,
    pub export_delay: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            generation_delay: Duration::from_millis(2000),
            translation_delay: Duration::from_millis(2000),
            audio_delay: Duration::from_millis(1500),
            media_delay: Duration::from_millis(1000),
            export_delay: Duration::from_millis(1500),
        }
    }
}

impl SimulatorConfig {
    /// Every action resolves immediately
    pub fn instant() -> Self {
        Self {
            generation_delay: Duration::ZERO,
            translation_delay: Duration::ZERO,
            audio_delay: Duration::ZERO,
            media_delay: Duration::ZERO,
            export_delay: Duration::ZERO,
        }
    }
}

/// Handle to a simulated action running in the background.
///
/// There is no cancellation: dropping the handle discards the result once
/// the worker finishes.
pub struct SimulatedTask<T> {
    label: &'static str,
    receiver: Receiver<Result<T>>,
}

impl<T: Send + 'static> SimulatedTask<T> {
    fn spawn<F>(label: &'static str, delay: Duration, work: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        debug!("Starting simulated {} ({} ms)", label, delay.as_millis());
        thread::spawn(move || {
            thread::sleep(delay);
            // The receiver may already be gone; nobody is waiting then.
            let _ = tx.send(work());
        });
        Self {
            label,
            receiver: rx,
        }
    }

    fn worker_lost(&self) -> SlideError {
        SlideError::SimulationError(format!("{} worker stopped without a result", self.label))
    }

    /// Block until the action resolves
    pub fn wait(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(result) => result,
            Err(_) => Err(self.worker_lost()),
        }
    }

    /// Wait at most `timeout`; `Ok(None)` means still running
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Option<T>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => result.map(Some),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(self.worker_lost()),
        }
    }

    /// Poll without blocking; `Ok(None)` means still running
    pub fn try_result(&self) -> Result<Option<T>> {
        match self.receiver.try_recv() {
            Ok(result) => result.map(Some),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(self.worker_lost()),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// A finished (simulated) translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub presentation_id: String,
    pub language: Language,
}

/// Narration generated for one slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    pub slide_id: String,
    /// Caption text, seeded from the slide's speaker notes
    pub captions: String,
}

/// A placeholder image suggested for a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub slide_id: String,
    pub caption: String,
}

/// Number of media suggestions returned per fetch
pub const MEDIA_RESULTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Pptx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Pptx => "pptx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = SlideError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "pptx" => Ok(ExportFormat::Pptx),
            other => Err(SlideError::ValidationError(format!(
                "Unsupported export format: {}",
                other
            ))),
        }
    }
}

/// What an export would have produced. Nothing is written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    pub file_name: String,
    pub format: ExportFormat,
    pub slide_count: usize,
}

/// Runs the simulated actions with the configured delays
#[derive(Clone)]
pub struct Simulator {
    config: SimulatorConfig,
    generator: DeckGenerator,
    clock: SharedClock,
}

impl Simulator {
    pub fn new(config: SimulatorConfig, generator: DeckGenerator, clock: SharedClock) -> Self {
        Self {
            config,
            generator,
            clock,
        }
    }

    /// Produce a deck from `prompt`. The caller inserts the result into its store.
    pub fn generate(&self, prompt: &str) -> SimulatedTask<Presentation> {
        let prompt = prompt.to_string();
        let generator = self.generator.clone();
        let clock = self.clock.clone();
        SimulatedTask::spawn("generation", self.config.generation_delay, move || {
            let presentation = generator.generate(&prompt, clock.now())?;
            info!("Generated presentation {:?}", presentation.title);
            Ok(presentation)
        })
    }

    pub fn translate(
        &self,
        presentation: &Presentation,
        language: Language,
    ) -> SimulatedTask<Translation> {
        let presentation_id = presentation.id.clone();
        info!("Translating {} to {}", presentation_id, language.english);
        SimulatedTask::spawn("translation", self.config.translation_delay, move || {
            Ok(Translation {
                presentation_id,
                language,
            })
        })
    }

    pub fn synthesize_audio(&self, slide: &Slide) -> SimulatedTask<AudioClip> {
        let clip = AudioClip {
            slide_id: slide.id.clone(),
            captions: slide.notes.clone().unwrap_or_default(),
        };
        SimulatedTask::spawn("audio synthesis", self.config.audio_delay, move || Ok(clip))
    }

    pub fn fetch_media(&self, slide: &Slide) -> SimulatedTask<Vec<MediaItem>> {
        let slide_id = slide.id.clone();
        let title = slide.title.clone();
        SimulatedTask::spawn("media fetch", self.config.media_delay, move || {
            Ok((1..=MEDIA_RESULTS)
                .map(|n| MediaItem {
                    id: new_id(),
                    slide_id: slide_id.clone(),
                    caption: format!("{} image {}", title, n),
                })
                .collect())
        })
    }

    pub fn export(
        &self,
        presentation: &Presentation,
        format: ExportFormat,
    ) -> SimulatedTask<ExportArtifact> {
        let artifact = ExportArtifact {
            file_name: format!(
                "{}.{}",
                utils::file_stem(&presentation.title),
                format.extension()
            ),
            format,
            slide_count: presentation.slides.len(),
        };
        SimulatedTask::spawn("export", self.config.export_delay, move || Ok(artifact))
    }
}
