//! Draft session persistence for interrupted editing.
//!
//! The surrounding application stashes an in-progress outfit so a page
//! navigation or reload does not lose the user's arrangement. The editor
//! core never touches the persistence medium itself: a [`DraftStore`]
//! abstracts it (browser local storage, a file, or the in-memory store
//! used in tests), and [`DraftSession`] is the serializable value that
//! moves through it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::editor::{OutfitEditor, OutfitForm};
use crate::format::{self, FormatError, PlacedItemEntry};

/// Storage key under which the pending outfit draft lives.
pub const DRAFT_KEY: &str = "pending-outfit";

/// Current version of the draft format.
pub const DRAFT_VERSION: u32 = 1;

/// Errors from draft persistence.
#[derive(Error, Debug)]
pub enum DraftError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying store failed.
    #[error("draft store error: {message}")]
    Storage {
        /// Description of the store failure.
        message: String,
    },

    /// The stored draft was written by an incompatible version.
    #[error("incompatible draft version: expected {expected}, found {found}")]
    IncompatibleVersion {
        /// Version this build writes.
        expected: u32,
        /// Version found in the store.
        found: u32,
    },
}

/// Key/value persistence medium for drafts.
///
/// Implementations map to whatever the host has: local storage on the
/// web, a settings file on native. [`MemoryDraftStore`] ships for tests
/// and headless hosts.
pub trait DraftStore {
    /// Persist a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DraftError>;

    /// Read the value under a key, if present.
    fn get(&self, key: &str) -> Result<Option<String>, DraftError>;

    /// Remove the value under a key. Removing a missing key is fine.
    fn remove(&mut self, key: &str) -> Result<(), DraftError>;
}

/// In-memory draft store.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    values: HashMap<String, String>,
}

impl MemoryDraftStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn set(&mut self, key: &str, value: &str) -> Result<(), DraftError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, DraftError> {
        Ok(self.values.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), DraftError> {
        self.values.remove(key);
        Ok(())
    }
}

/// A serializable snapshot of an in-progress editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSession {
    /// Draft format version for compatibility checking.
    pub version: u32,
    /// The metadata form as the user left it.
    pub form: OutfitForm,
    /// Placed item snapshots in composition order.
    pub items: Vec<PlacedItemEntry>,
    /// Seconds since the Unix epoch when the draft was captured.
    pub saved_at_secs: u64,
}

impl DraftSession {
    /// Capture the editor's current form and composition.
    pub fn capture(editor: &OutfitEditor) -> Self {
        let saved_at_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self {
            version: DRAFT_VERSION,
            form: editor.form.clone(),
            items: editor
                .composition
                .items()
                .iter()
                .map(PlacedItemEntry::from)
                .collect(),
            saved_at_secs,
        }
    }

    /// Persist this draft under [`DRAFT_KEY`].
    pub fn save_to(&self, store: &mut dyn DraftStore) -> Result<(), DraftError> {
        let json = serde_json::to_string(self)?;
        store.set(DRAFT_KEY, &json)?;
        log::debug!("Draft saved ({} items)", self.items.len());
        Ok(())
    }

    /// Load the pending draft, if one exists.
    pub fn load_from(store: &dyn DraftStore) -> Result<Option<DraftSession>, DraftError> {
        let Some(json) = store.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        let draft: DraftSession = serde_json::from_str(&json)?;
        if draft.version != DRAFT_VERSION {
            return Err(DraftError::IncompatibleVersion {
                expected: DRAFT_VERSION,
                found: draft.version,
            });
        }
        Ok(Some(draft))
    }

    /// Remove any pending draft.
    pub fn clear(store: &mut dyn DraftStore) -> Result<(), DraftError> {
        store.remove(DRAFT_KEY)
    }
}

impl OutfitEditor {
    /// Restore a captured draft into this session.
    ///
    /// Item display data resolves from the catalog; the undo history
    /// resets since the restored state is the new baseline.
    pub fn restore_draft(&mut self, draft: &DraftSession) -> Result<(), FormatError> {
        let items = format::resolve_entries(&draft.items, self.catalog())?;
        self.composition.restore_items(items);
        self.form = draft.form.clone();
        log::info!(
            "Restored draft with {} items (saved {}s after epoch)",
            draft.items.len(),
            draft.saved_at_secs
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::message::{CanvasMessage, EditorMessage, FormMessage};
    use crate::model::{ClothingCategory, ClothingItem};

    fn editor_with_items() -> OutfitEditor {
        let catalog = Catalog::new(vec![
            ClothingItem::new("1", "Wool Sweater", ClothingCategory::Tops, "sweater.jpg"),
            ClothingItem::new("2", "Denim Jeans", ClothingCategory::Bottoms, "jeans.jpg"),
        ]);
        let mut editor = OutfitEditor::new(catalog);
        let sweater = editor.catalog().get("1").cloned().unwrap();
        editor.update(EditorMessage::Canvas(CanvasMessage::AddItem(sweater)));
        editor.update(EditorMessage::Canvas(CanvasMessage::Rotate("1".to_string())));
        editor.update(EditorMessage::Form(FormMessage::TitleChanged(
            "Half-finished".to_string(),
        )));
        editor
    }

    #[test]
    fn test_draft_round_trip() {
        let mut editor = editor_with_items();
        let mut store = MemoryDraftStore::new();

        DraftSession::capture(&editor)
            .save_to(&mut store)
            .expect("save draft");

        // Simulate losing the session.
        editor.update(EditorMessage::Canvas(CanvasMessage::Clear));
        editor.update(EditorMessage::Form(FormMessage::TitleChanged(String::new())));

        let draft = DraftSession::load_from(&store)
            .expect("load draft")
            .expect("draft present");
        editor.restore_draft(&draft).expect("restore draft");

        assert_eq!(editor.form.title, "Half-finished");
        assert_eq!(editor.composition.len(), 1);
        assert_eq!(editor.composition.item("1").map(|p| p.rotation), Some(45.0));
    }

    #[test]
    fn test_load_missing_draft_is_none() {
        let store = MemoryDraftStore::new();
        assert!(DraftSession::load_from(&store).expect("load").is_none());
    }

    #[test]
    fn test_clear_removes_draft() {
        let editor = editor_with_items();
        let mut store = MemoryDraftStore::new();
        DraftSession::capture(&editor)
            .save_to(&mut store)
            .expect("save draft");

        DraftSession::clear(&mut store).expect("clear draft");
        assert!(DraftSession::load_from(&store).expect("load").is_none());
    }

    #[test]
    fn test_incompatible_version_rejected() {
        let editor = editor_with_items();
        let mut store = MemoryDraftStore::new();
        let mut draft = DraftSession::capture(&editor);
        draft.version = DRAFT_VERSION + 1;
        draft.save_to(&mut store).expect("save draft");

        assert!(matches!(
            DraftSession::load_from(&store),
            Err(DraftError::IncompatibleVersion { .. })
        ));
    }

    #[test]
    fn test_restore_with_unknown_item_fails() {
        let editor = editor_with_items();
        let mut draft = DraftSession::capture(&editor);
        draft.items[0].clothing_item_id = "missing".to_string();

        let mut fresh = editor_with_items();
        assert!(matches!(
            fresh.restore_draft(&draft),
            Err(FormatError::UnknownItem { .. })
        ));
    }
}
