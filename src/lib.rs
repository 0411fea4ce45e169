// ABOUTME: Library module for the slidemaster presentation editor.
// ABOUTME: Contains the slide data model, store, editor, query engine and simulated actions.

// Reexport modules
pub mod clock;
pub mod config;
pub mod editor;
pub mod errors;
pub mod generator;
pub mod languages;
pub mod models;
pub mod notify;
pub mod query;
pub mod samples;
pub mod simulate;
pub mod store;
pub mod utils;
pub mod workspace;

// Reexport common types and functions
pub use clock::{system_clock, Clock, ManualClock, SharedClock, SystemClock};
pub use config::Config;
pub use editor::{MoveDirection, SlideEditor};
pub use errors::{Result, SlideError};
pub use generator::DeckGenerator;
pub use languages::Language;
pub use models::{Presentation, Slide, SlideKind};
pub use notify::{Level, LogNotifier, Notification, Notifier, RecordingNotifier};
pub use query::{view, SortKey};
pub use simulate::{
    AudioClip, ExportArtifact, ExportFormat, MediaItem, SimulatedTask, Simulator, SimulatorConfig,
    Translation,
};
pub use store::PresentationStore;
pub use workspace::{EditSession, Workspace};
