//! Lookbook - outfit composition canvas.
//!
//! The core of a personal wardrobe app's outfit editor: an interactive 2D
//! canvas where clothing items from the user's closet are placed, dragged,
//! resized, rotated, and stacked, then serialized into a persistence-ready
//! outfit record.
//!
//! The crate is headless. The host UI translates pointer and form events
//! into [`message::EditorMessage`]s, feeds them to an
//! [`editor::OutfitEditor`], and renders from the resulting state; the
//! outfit service consumes the [`format::OutfitRecord`] the editor
//! produces on save.

pub mod canvas;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod draft;
pub mod editor;
pub mod format;
pub mod handlers;
pub mod message;
pub mod model;
pub mod undo;

pub use canvas::{Composition, Gesture};
pub use catalog::Catalog;
pub use config::EditorConfig;
pub use draft::{DraftSession, DraftStore, MemoryDraftStore};
pub use editor::{OutfitEditor, OutfitForm};
pub use format::{FormatError, OutfitRecord, PlacedItemEntry, ValidationResult};
pub use message::{CanvasMessage, CatalogMessage, EditorMessage, FormMessage};
pub use model::{ClothingCategory, ClothingItem, PlacedItem, Position, Size};
pub use undo::UndoStack;
