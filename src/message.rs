//! Editor message types.
//!
//! All input events and actions are represented as messages in the Elm
//! architecture style; the host UI translates pointer and form events into
//! these and feeds them to [`crate::editor::OutfitEditor::update`].

use crate::canvas::Pointer;
use crate::model::{ClothingCategory, ClothingItem};

/// Messages that mutate the composition canvas.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    /// Place a catalog item onto the canvas.
    AddItem(ClothingItem),
    /// Pointer went down on an item body.
    DragStart(String, Pointer),
    /// Pointer moved during an active drag.
    DragMove(Pointer),
    /// Pointer released (or left the window) during a drag.
    DragEnd,
    /// Pointer went down on an item's corner handle.
    ResizeStart(String, Pointer),
    /// Pointer moved during an active resize.
    ResizeMove(Pointer),
    /// Pointer released (or left the window) during a resize.
    ResizeEnd,
    /// Rotate an item by one step.
    Rotate(String),
    /// Remove an item from the canvas.
    Remove(String),
    /// Empty the canvas.
    Clear,
}

/// Messages that change the catalog picker view.
#[derive(Debug, Clone)]
pub enum CatalogMessage {
    /// Search query text changed.
    SearchChanged(String),
    /// Category filter changed; `None` means "All".
    FilterChanged(Option<ClothingCategory>),
}

/// Messages that edit the outfit metadata form.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Title field changed.
    TitleChanged(String),
    /// Description field changed.
    DescriptionChanged(String),
    /// Occasion field changed.
    OccasionChanged(String),
    /// Category selection changed.
    CategoryChanged(String),
    /// Comma-separated tags field changed.
    TagsChanged(String),
}

/// Top-level editor messages.
#[derive(Debug, Clone)]
pub enum EditorMessage {
    /// Canvas mutation.
    Canvas(CanvasMessage),
    /// Catalog picker view change.
    Catalog(CatalogMessage),
    /// Metadata form edit.
    Form(FormMessage),
    /// Undo the last canvas action.
    Undo,
    /// Redo the previously undone canvas action.
    Redo,
    /// The outfit save call resolved successfully; the session resets.
    SaveSucceeded,
    /// The outfit save call failed; the session stays intact for retry.
    SaveFailed,
}
