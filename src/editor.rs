//! Outfit editor session state.
//!
//! [`OutfitEditor`] aggregates everything one editing session owns: the
//! catalog view, the composition canvas, the metadata form, and the undo
//! history. The host UI feeds it [`EditorMessage`]s and drives the save
//! flow through [`OutfitEditor::begin_save`] plus the save-completion
//! messages.

use serde::{Deserialize, Serialize};

use crate::canvas::Composition;
use crate::catalog::Catalog;
use crate::config::EditorConfig;
use crate::constants::form;
use crate::format::{self, FormatError, OutfitRecord, ValidationResult};
use crate::handlers;
use crate::message::EditorMessage;
use crate::model::{join_tags, ClothingCategory, ClothingItem};
use crate::undo::{self, UndoConfig, UndoStack};

/// The outfit metadata form.
///
/// Tags are kept in their raw comma-separated form until serialization,
/// matching what the form input holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitForm {
    pub title: String,
    pub description: String,
    pub occasion: String,
    pub category: String,
    pub tags: String,
}

impl Default for OutfitForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            occasion: String::new(),
            category: form::DEFAULT_CATEGORY.to_string(),
            tags: String::new(),
        }
    }
}

/// One outfit editing session.
pub struct OutfitEditor {
    catalog: Catalog,
    /// The in-progress composition.
    pub composition: Composition,
    /// The metadata form.
    pub form: OutfitForm,
    undo: UndoStack,
    search: String,
    filter: Option<ClothingCategory>,
    saving: bool,
}

impl OutfitEditor {
    /// Create a session over a pre-fetched catalog with default settings.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &EditorConfig::default())
    }

    /// Create a session with explicit editor configuration.
    pub fn with_config(catalog: Catalog, config: &EditorConfig) -> Self {
        Self {
            catalog,
            composition: Composition::with_spawn_range(
                config.spawn.offset_min,
                config.spawn.offset_max,
            ),
            form: OutfitForm::default(),
            undo: UndoStack::with_config(UndoConfig {
                max_history: config.history.max_undo,
            }),
            search: String::new(),
            filter: None,
            saving: false,
        }
    }

    /// The read-only catalog backing the picker.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog items visible under the current search and filter.
    pub fn visible_items(&self) -> Vec<&ClothingItem> {
        self.catalog.filtered(self.filter, &self.search)
    }

    /// Current search query.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current category filter; `None` means "All".
    pub fn filter(&self) -> Option<ClothingCategory> {
        self.filter
    }

    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Process one editor message.
    ///
    /// While a save is in flight every mutating message is dropped, so the
    /// composition the record was built from cannot drift before the call
    /// resolves. Catalog browsing stays available.
    pub fn update(&mut self, msg: EditorMessage) {
        if self.saving && !matches!(msg, EditorMessage::Catalog(_)) {
            match msg {
                EditorMessage::SaveSucceeded => {
                    log::info!("✅ Outfit saved, resetting session");
                    self.composition.clear();
                    self.form = OutfitForm::default();
                    self.undo.clear();
                    self.saving = false;
                }
                EditorMessage::SaveFailed => {
                    // Keep everything; the user can retry without
                    // re-placing a single item.
                    log::warn!("Outfit save failed, session kept for retry");
                    self.saving = false;
                }
                other => {
                    log::warn!("Dropping {:?} while a save is in flight", other);
                }
            }
            return;
        }

        match msg {
            EditorMessage::Canvas(msg) => {
                handlers::handle_canvas(msg, &mut self.composition, &mut self.undo);
            }
            EditorMessage::Catalog(msg) => {
                handlers::handle_catalog(msg, &self.catalog, &mut self.search, &mut self.filter);
            }
            EditorMessage::Form(msg) => {
                handlers::handle_form(msg, &mut self.form);
            }
            EditorMessage::Undo => {
                undo::undo_command(&mut self.undo, &mut self.composition);
            }
            EditorMessage::Redo => {
                undo::redo_command(&mut self.undo, &mut self.composition);
            }
            EditorMessage::SaveSucceeded | EditorMessage::SaveFailed => {
                log::debug!("Save completion without a save in flight, ignoring");
            }
        }
    }

    /// Validate the current form and composition.
    pub fn validate(&self) -> ValidationResult {
        format::validate(&self.form, &self.composition)
    }

    /// Serialize the session and latch it into the saving state.
    ///
    /// The returned record goes to the outfit service; the host reports
    /// the outcome back via [`EditorMessage::SaveSucceeded`] or
    /// [`EditorMessage::SaveFailed`].
    pub fn begin_save(&mut self) -> Result<OutfitRecord, FormatError> {
        if self.saving {
            return Err(FormatError::SaveInProgress);
        }
        let record = format::serialize(&self.form, &self.composition)?;
        self.saving = true;
        Ok(record)
    }

    /// Load a stored outfit record for editing.
    ///
    /// Replaces the composition and form; history resets since the loaded
    /// state is the new baseline.
    pub fn load_record(&mut self, record: &OutfitRecord) -> Result<(), FormatError> {
        let items = format::load_items(record, &self.catalog)?;
        self.composition.restore_items(items);
        self.form = OutfitForm {
            title: record.title.clone(),
            description: record.description.clone().unwrap_or_default(),
            occasion: record.occasion.clone().unwrap_or_default(),
            category: record.category.clone(),
            tags: join_tags(&record.tags),
        };
        self.undo.clear();
        Ok(())
    }
}
