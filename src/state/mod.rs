use crate::models::{Note, DEFAULT_TITLE};
use crate::platform::BrowserPlatform;
use crate::storage::LocalNoteStore;
use crate::theme::{load_theme, Theme};
use leptos::prelude::*;
use std::sync::Arc;

/// Persistence port for the canonical note collection.
///
/// `load` never fails: a missing key, an unparsable blob, or an unavailable
/// backing store all degrade to an empty collection. `save` replaces the
/// whole stored collection; there are no partial writes.
pub(crate) trait NoteStore: Send + Sync {
    fn load(&self) -> Vec<Note>;
    fn save(&self, notes: &[Note]);
}

/// Browser-environment inputs the controller depends on.
///
/// Injected so the state machine can be driven from native tests without a
/// UI runtime: a wall clock, an id mint, and the destructive-action
/// confirmation dialog.
pub(crate) trait Platform: Send + Sync {
    fn now_ms(&self) -> i64;
    fn mint_id(&self) -> String;
    fn confirm(&self, message: &str) -> bool;
}

/// Editable fields of a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoteField {
    Title,
    Content,
}

/// The view-state controller: canonical notes collection, search term,
/// selection, and editing flag in one owned value.
///
/// Every operation is total — unknown ids and absent selections are no-ops,
/// nothing is surfaced as an error. Mutations of the collection end with an
/// explicit `persist()`, and operations that can break the selection
/// invariant end with an explicit `heal_selection()` rather than relying on
/// ambient reactivity.
pub(crate) struct NotesController {
    store: Arc<dyn NoteStore>,
    platform: Arc<dyn Platform>,

    notes: Vec<Note>,
    search_term: String,
    selected_id: Option<String>,
    editing: bool,
}

impl NotesController {
    pub fn new(store: Arc<dyn NoteStore>, platform: Arc<dyn Platform>) -> Self {
        let notes = store.load();
        let mut controller = Self {
            store,
            platform,
            notes,
            search_term: String::new(),
            selected_id: None,
            editing: false,
        };
        controller.heal_selection();
        controller
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// The filtered, recency-ordered list the UI renders.
    ///
    /// An empty (or whitespace) search term yields the whole collection;
    /// otherwise the term matches case-insensitively against title or
    /// content. Ordering is `last_modified` descending with id as the
    /// tie-break so equal timestamps stay stable across reloads.
    pub fn visible_notes(&self) -> Vec<Note> {
        let term = self.search_term.trim().to_lowercase();
        let mut visible: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| {
                term.is_empty()
                    || n.title.to_lowercase().contains(&term)
                    || n.content.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| {
            b.last_modified
                .cmp(&a.last_modified)
                .then_with(|| a.id.cmp(&b.id))
        });
        visible
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.heal_selection();
    }

    /// Create a note with the default title and select it for editing.
    pub fn create_note(&mut self) {
        let mut id = self.platform.mint_id();
        while self.notes.iter().any(|n| n.id == id) {
            id = self.platform.mint_id();
        }

        let note = Note {
            id: id.clone(),
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            last_modified: self.platform.now_ms(),
        };

        self.notes.insert(0, note);
        self.selected_id = Some(id);
        self.editing = true;
        self.persist();
    }

    /// Remove a note after the user confirms.
    ///
    /// A declined confirmation leaves everything untouched; an unknown id
    /// after an accepted one is a no-op.
    pub fn delete_note(&mut self, id: &str) {
        if !self.platform.confirm("Delete this note?") {
            return;
        }

        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return;
        }

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.editing = false;
        self.heal_selection();
        self.persist();
    }

    /// Point the detail editor at a note. A nonexistent id is accepted as an
    /// inert state; the next invariant pass re-routes it.
    pub fn select_note(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
        self.editing = false;
    }

    /// Update one field of the selected note and refresh its timestamp.
    /// No-op when nothing (or a vanished id) is selected.
    pub fn edit_field(&mut self, field: NoteField, value: &str) {
        let Some(id) = self.selected_id.clone() else {
            return;
        };
        let now = self.platform.now_ms();
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return;
        };

        match field {
            NoteField::Title => note.title = value.to_string(),
            NoteField::Content => note.content = value.to_string(),
        }
        note.last_modified = now;
        self.editing = true;
        self.persist();
    }

    /// End the edit session. Persistence already happened per keystroke.
    pub fn commit_edit(&mut self) {
        self.editing = false;
    }

    /// Invariant pass: keep a valid selection whenever one is possible.
    ///
    /// Runs when the collection or the search term changed. A selection that
    /// still exists in the collection is kept even if the current search
    /// filters it out of the visible list.
    fn heal_selection(&mut self) {
        let selected_exists = self
            .selected_id
            .as_deref()
            .is_some_and(|id| self.notes.iter().any(|n| n.id == id));

        if !selected_exists {
            self.selected_id = self.visible_notes().first().map(|n| n.id.clone());
        }
    }

    fn persist(&self) {
        self.store.save(&self.notes);
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub controller: RwSignal<NotesController>,
    pub theme: RwSignal<Theme>,
}

impl AppState {
    pub fn new() -> Self {
        let controller =
            NotesController::new(Arc::new(LocalNoteStore), Arc::new(BrowserPlatform));
        Self {
            controller: RwSignal::new(controller),
            theme: RwSignal::new(load_theme()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
