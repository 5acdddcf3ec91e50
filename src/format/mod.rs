//! Outfit serialization boundary.
//!
//! This module turns an edited composition plus its metadata form into a
//! persistence-ready [`OutfitRecord`], and reconstructs a composition from
//! a stored record when the user edits an existing outfit.
//!
//! Validation failures (blank title, empty composition) are expected,
//! recoverable user-facing conditions; they come back as a structured
//! [`ValidationResult`], and the serialization entry points refuse with a
//! typed [`FormatError`] if a caller skips validation.

mod error;
mod outfit;

#[cfg(test)]
mod tests;

pub use error::FormatError;
pub use outfit::{OutfitRecord, PlacedItemEntry};

use crate::canvas::Composition;
use crate::catalog::Catalog;
use crate::editor::OutfitForm;
use crate::model::{parse_tag_string, PlacedItem, Position, Size, Transform};

/// Outcome of validating a composition and its metadata before save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// The title is empty after trimming.
    pub missing_title: bool,
    /// The composition has no placed items.
    pub empty_composition: bool,
}

impl ValidationResult {
    /// Check whether the composition is ready to serialize.
    pub fn is_valid(&self) -> bool {
        !self.missing_title && !self.empty_composition
    }
}

/// Validate a metadata form and composition for saving.
pub fn validate(form: &OutfitForm, composition: &Composition) -> ValidationResult {
    ValidationResult {
        missing_title: form.title.trim().is_empty(),
        empty_composition: composition.is_empty(),
    }
}

/// Produce an [`OutfitRecord`] from a metadata form and composition.
///
/// Validates first: a blank title maps to [`FormatError::MissingTitle`],
/// an empty composition to [`FormatError::EmptyComposition`]. The
/// composition itself is untouched, so a failed downstream save can retry
/// with the same state.
pub fn serialize(form: &OutfitForm, composition: &Composition) -> Result<OutfitRecord, FormatError> {
    let validation = validate(form, composition);
    if validation.missing_title {
        return Err(FormatError::MissingTitle);
    }
    if validation.empty_composition {
        return Err(FormatError::EmptyComposition);
    }

    let record = OutfitRecord {
        version: OutfitRecord::CURRENT_VERSION.to_string(),
        title: form.title.trim().to_string(),
        description: non_empty(&form.description),
        occasion: non_empty(&form.occasion),
        category: form.category.clone(),
        tags: parse_tag_string(&form.tags),
        items: composition.items().iter().map(PlacedItemEntry::from).collect(),
    };
    log::info!(
        "Serialized outfit '{}' with {} items",
        record.title,
        record.items.len()
    );
    Ok(record)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reconstruct a composition from a stored record.
///
/// Display data for each entry is resolved from the catalog; an id the
/// catalog does not know is an error rather than a silent skip, so the
/// caller can surface the stale reference. Transforms are re-clamped
/// defensively on the way in.
pub fn load(record: &OutfitRecord, catalog: &Catalog) -> Result<Composition, FormatError> {
    let items = load_items(record, catalog)?;
    let mut composition = Composition::new();
    composition.restore_items(items);
    Ok(composition)
}

/// Resolve a record's placed items after checking version compatibility.
///
/// Same semantics as [`load`], for callers that restore into an existing
/// composition instead of building a fresh one.
pub fn load_items(record: &OutfitRecord, catalog: &Catalog) -> Result<Vec<PlacedItem>, FormatError> {
    if !OutfitRecord::is_version_compatible(&record.version) {
        return Err(FormatError::VersionMismatch {
            expected: OutfitRecord::CURRENT_VERSION.to_string(),
            found: record.version.clone(),
        });
    }

    let items = resolve_entries(&record.items, catalog)?;
    log::info!("Loaded outfit '{}' with {} items", record.title, items.len());
    Ok(items)
}

/// Resolve record entries back into placed items via the catalog.
pub(crate) fn resolve_entries(
    entries: &[PlacedItemEntry],
    catalog: &Catalog,
) -> Result<Vec<PlacedItem>, FormatError> {
    entries
        .iter()
        .map(|entry| {
            let item = catalog
                .get(&entry.clothing_item_id)
                .ok_or_else(|| FormatError::UnknownItem {
                    id: entry.clothing_item_id.clone(),
                })?;
            let mut placed = PlacedItem::new(
                item.clone(),
                Position::clamped(entry.x, entry.y),
                entry.z_index,
            );
            placed.apply_transform(Transform {
                position: Position {
                    x: entry.x,
                    y: entry.y,
                },
                size: Size {
                    width: entry.width,
                    height: entry.height,
                },
                rotation: entry.rotation_degrees,
            });
            Ok(placed)
        })
        .collect()
}
