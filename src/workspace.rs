// ABOUTME: Workspace glue for the slidemaster library
// ABOUTME: Applies editor operations to stored presentations and reports outcomes to a notifier

use crate::editor::{MoveDirection, SlideEditor};
use crate::errors::{Result, SlideError};
use crate::languages::Language;
use crate::models::{Presentation, Slide, SlideKind};
use crate::notify::{Notification, Notifier};
use crate::query::SortKey;
use crate::simulate::{ExportArtifact, Translation};
use crate::store::PresentationStore;
use log::{debug, error, warn};

/// Editor-screen state: which presentation is open and which slide is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub presentation_id: String,
    selected_slide_id: Option<String>,
}

impl EditSession {
    /// Open `presentation` with its first slide selected
    pub fn open(presentation: &Presentation) -> Self {
        Self {
            presentation_id: presentation.id.clone(),
            selected_slide_id: presentation.slides.first().map(|s| s.id.clone()),
        }
    }

    pub fn select(&mut self, slide_id: impl Into<String>) {
        self.selected_slide_id = Some(slide_id.into());
    }

    pub fn selected_slide_id(&self) -> Option<&str> {
        self.selected_slide_id.as_deref()
    }

    /// The selected slide, or the first slide when the selection is stale
    pub fn selected_slide<'a>(&self, presentation: &'a Presentation) -> Option<&'a Slide> {
        self.selected_slide_id
            .as_deref()
            .and_then(|id| presentation.slide(id))
            .or_else(|| presentation.slides.first())
    }

    /// Drop a selection that no longer exists in `presentation`
    fn reconcile(&mut self, presentation: &Presentation) {
        let still_there = self
            .selected_slide_id
            .as_deref()
            .is_some_and(|id| presentation.slide(id).is_some());
        if !still_there {
            self.selected_slide_id = presentation.slides.first().map(|s| s.id.clone());
        }
    }
}

/// A store, an editor and a notification sink working together
pub struct Workspace {
    store: PresentationStore,
    editor: SlideEditor,
    notifier: Box<dyn Notifier>,
}

impl Workspace {
    pub fn new(store: PresentationStore, editor: SlideEditor, notifier: Box<dyn Notifier>) -> Self {
        Self {
            store,
            editor,
            notifier,
        }
    }

    pub fn store(&self) -> &PresentationStore {
        &self.store
    }

    pub fn editor(&self) -> &SlideEditor {
        &self.editor
    }

    pub fn list(&self, query: &str, sort_key: SortKey) -> Vec<Presentation> {
        self.store.query(query, sort_key)
    }

    pub fn create(&mut self, prompt: &str) -> Result<Presentation> {
        match self.store.create(prompt) {
            Ok(presentation) => {
                self.notifier
                    .notify(Notification::success("Presentation created"));
                Ok(presentation)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Fold a finished generation task into the store
    pub fn accept_generated(&mut self, presentation: Presentation) {
        self.store.insert(presentation);
        self.notifier
            .notify(Notification::success("Presentation generated"));
    }

    pub fn duplicate(&mut self, presentation_id: &str) -> Option<Presentation> {
        let original = self.store.get(presentation_id)?;
        let copy = self.store.duplicate(&original);
        self.notifier
            .notify(Notification::success("Presentation duplicated"));
        Some(copy)
    }

    pub fn delete(&mut self, presentation_id: &str) {
        if self.store.contains(presentation_id) {
            self.store.delete(presentation_id);
            self.notifier
                .notify(Notification::success("Presentation deleted"));
        }
    }

    pub fn open(&self, presentation_id: &str) -> Option<EditSession> {
        self.store.get(presentation_id).map(|p| EditSession::open(&p))
    }

    /// The current snapshot of the presentation open in `session`
    pub fn current(&self, session: &EditSession) -> Option<Presentation> {
        self.store.get(&session.presentation_id)
    }

    /// Run `edit` against the stored presentation and write the result back.
    ///
    /// A missing presentation is a silent no-op (`Ok(None)`). A rejected edit
    /// is reported to the notifier and leaves the store unchanged.
    pub fn edit<F>(
        &mut self,
        session: &mut EditSession,
        success: Option<&str>,
        edit: F,
    ) -> Result<Option<Presentation>>
    where
        F: FnOnce(&SlideEditor, &Presentation) -> Result<Presentation>,
    {
        let Some(current) = self.current(session) else {
            debug!("Edit ignored, presentation {} is gone", session.presentation_id);
            return Ok(None);
        };
        match edit(&self.editor, &current) {
            Ok(next) => {
                self.store.update(next.clone());
                session.reconcile(&next);
                if let Some(message) = success {
                    self.notifier.notify(Notification::success(message));
                }
                Ok(Some(next))
            }
            Err(e) => {
                if e.is_rejected_action() {
                    warn!("Edit rejected: {}", e);
                } else {
                    error!("Edit failed: {}", e);
                }
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Append a slide and select it
    pub fn add_slide(&mut self, session: &mut EditSession, kind: SlideKind) -> Option<String> {
        let mut added = None;
        self.edit(session, Some("Slide added"), |editor, p| {
            let (next, slide_id) = editor.add_slide(p, kind);
            added = Some(slide_id);
            Ok(next)
        })
        .ok()
        .flatten()?;
        let slide_id = added?;
        session.select(slide_id.clone());
        Some(slide_id)
    }

    pub fn delete_slide(
        &mut self,
        session: &mut EditSession,
        slide_id: &str,
    ) -> Result<Option<Presentation>> {
        self.edit(session, Some("Slide deleted"), |editor, p| {
            editor.delete_slide(p, slide_id)
        })
    }

    pub fn duplicate_slide(&mut self, session: &mut EditSession, slide_id: &str) -> Option<String> {
        let mut copied = None;
        self.edit(session, None, |editor, p| {
            let (next, copy_id) = editor.duplicate_slide(p, slide_id);
            copied = copy_id;
            Ok(next)
        })
        .ok()
        .flatten()?;
        let copy_id = copied?;
        self.notifier.notify(Notification::success("Slide duplicated"));
        session.select(copy_id.clone());
        Some(copy_id)
    }

    pub fn move_slide(
        &mut self,
        session: &mut EditSession,
        slide_id: &str,
        direction: MoveDirection,
    ) -> Option<Presentation> {
        self.edit(session, None, |editor, p| {
            Ok(editor.move_slide(p, slide_id, direction))
        })
        .ok()
        .flatten()
    }

    pub fn update_slide_title(
        &mut self,
        session: &mut EditSession,
        slide_id: &str,
        title: &str,
    ) -> Option<Presentation> {
        self.edit(session, None, |editor, p| {
            Ok(editor.update_slide_title(p, slide_id, title))
        })
        .ok()
        .flatten()
    }

    pub fn update_bullet(
        &mut self,
        session: &mut EditSession,
        slide_id: &str,
        index: usize,
        text: &str,
    ) -> Option<Presentation> {
        self.edit(session, None, |editor, p| {
            Ok(editor.update_bullet(p, slide_id, index, text))
        })
        .ok()
        .flatten()
    }

    pub fn add_bullet(&mut self, session: &mut EditSession, slide_id: &str) -> Option<Presentation> {
        self.edit(session, None, |editor, p| Ok(editor.add_bullet(p, slide_id)))
            .ok()
            .flatten()
    }

    pub fn delete_bullet(
        &mut self,
        session: &mut EditSession,
        slide_id: &str,
        index: usize,
    ) -> Option<Presentation> {
        self.edit(session, None, |editor, p| {
            Ok(editor.delete_bullet(p, slide_id, index))
        })
        .ok()
        .flatten()
    }

    pub fn update_notes(
        &mut self,
        session: &mut EditSession,
        slide_id: &str,
        notes: &str,
    ) -> Option<Presentation> {
        self.edit(session, None, |editor, p| {
            Ok(editor.update_notes(p, slide_id, notes))
        })
        .ok()
        .flatten()
    }

    pub fn rename(&mut self, session: &mut EditSession, title: &str) -> Option<Presentation> {
        self.edit(session, Some("Presentation renamed"), |editor, p| {
            Ok(editor.rename(p, title))
        })
        .ok()
        .flatten()
    }

    /// Report that a translation is under way
    pub fn begin_translation(&self, language: Language) {
        self.notifier.notify(Notification::info(format!(
            "Translating to {}...",
            language.english
        )));
    }

    /// Report a finished translation. Slide content is not rewritten.
    pub fn accept_translation(&self, translation: &Translation) {
        self.notifier.notify(Notification::success(format!(
            "Translated to {}",
            translation.language.english
        )));
    }

    pub fn accept_export(&self, artifact: &ExportArtifact) {
        self.notifier.notify(Notification::success(format!(
            "Exported {}",
            artifact.file_name
        )));
    }

    /// Report a failed simulated action. Presentation state is left as it was.
    pub fn report_failure(&self, action: &str, error: &SlideError) {
        self.notifier
            .notify(Notification::error(format!("{} failed: {}", action, error)));
    }
}
