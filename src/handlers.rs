//! Message handlers for the outfit editor.
//!
//! Each handler processes one category of messages, keeping the editor's
//! update function small. Canvas handlers record undo commands after the
//! mutation lands, so every user-visible change is one undo step.

use crate::canvas::{Composition, Gesture};
use crate::catalog::Catalog;
use crate::constants::form;
use crate::editor::OutfitForm;
use crate::message::{CanvasMessage, CatalogMessage, FormMessage};
use crate::model::{ClothingCategory, Transform};
use crate::undo::{Command, UndoStack};

/// Handle canvas messages (placement, gestures, rotation, removal).
pub fn handle_canvas(msg: CanvasMessage, composition: &mut Composition, undo: &mut UndoStack) {
    match msg {
        CanvasMessage::AddItem(item) => {
            let replaced = composition.item(&item.id).cloned();
            let placed = composition.add_item(&item).clone();
            log::debug!(
                "🧥 Placed '{}' at ({:.0}, {:.0})",
                placed.item.name,
                placed.position.x,
                placed.position.y
            );
            match replaced {
                Some(old) => undo.push(Command::Batch {
                    description: format!("Replace '{}'", placed.item.name),
                    commands: vec![
                        Command::RemoveItem { placed: old },
                        Command::AddItem { placed },
                    ],
                }),
                None => undo.push(Command::AddItem { placed }),
            }
        }
        CanvasMessage::DragStart(id, pointer) => {
            // A gesture already in progress commits before the new one
            // starts, e.g. when the pointer-up event was missed.
            finish_active_gesture(composition, undo);
            composition.begin_drag(&id, pointer);
            log::debug!("Drag started on {} at ({:.1}, {:.1})", id, pointer.0, pointer.1);
        }
        CanvasMessage::DragMove(pointer) => {
            composition.update_drag(pointer);
        }
        CanvasMessage::DragEnd => {
            finish_active_gesture(composition, undo);
            log::debug!("Drag ended");
        }
        CanvasMessage::ResizeStart(id, pointer) => {
            finish_active_gesture(composition, undo);
            composition.begin_resize(&id, pointer);
            log::debug!(
                "Resize started on {} at ({:.1}, {:.1})",
                id,
                pointer.0,
                pointer.1
            );
        }
        CanvasMessage::ResizeMove(pointer) => {
            composition.update_resize(pointer);
        }
        CanvasMessage::ResizeEnd => {
            finish_active_gesture(composition, undo);
            log::debug!("Resize ended");
        }
        CanvasMessage::Rotate(id) => {
            let before = composition.item(&id).map(|placed| placed.transform());
            composition.rotate(&id);
            if let (Some(before), Some(placed)) = (before, composition.item(&id)) {
                log::debug!("🔄 Rotated {} to {:.0}°", id, placed.rotation);
                undo.push(Command::TransformItem {
                    item_id: id,
                    before,
                    after: placed.transform(),
                });
            }
        }
        CanvasMessage::Remove(id) => {
            if let Some(placed) = composition.item(&id).cloned() {
                composition.remove_item(&id);
                log::info!("🗑️ Removed '{}' from the canvas", placed.item.name);
                undo.push(Command::RemoveItem { placed });
            }
        }
        CanvasMessage::Clear => {
            if !composition.is_empty() {
                let items = composition.items().to_vec();
                log::info!("🗑️ Cleared {} items", items.len());
                composition.clear();
                undo.push(Command::ClearItems { items });
            }
        }
    }
}

/// Commit the active gesture, recording an undo command if the item's
/// transform actually changed.
fn finish_active_gesture(composition: &mut Composition, undo: &mut UndoStack) {
    let gesture = composition.gesture().clone();
    composition.end_drag();

    let (item_id, before) = match gesture {
        Gesture::Idle => return,
        Gesture::Dragging {
            item_id,
            start_position,
            ..
        } => {
            let Some(placed) = composition.item(&item_id) else {
                return;
            };
            let before = Transform {
                position: start_position,
                ..placed.transform()
            };
            (item_id, before)
        }
        Gesture::Resizing {
            item_id,
            start_size,
            ..
        } => {
            let Some(placed) = composition.item(&item_id) else {
                return;
            };
            let before = Transform {
                size: start_size,
                ..placed.transform()
            };
            (item_id, before)
        }
    };

    if let Some(placed) = composition.item(&item_id) {
        let after = placed.transform();
        if after != before {
            undo.push(Command::TransformItem {
                item_id,
                before,
                after,
            });
        }
    }
}

/// Handle catalog picker messages (search, category filter).
pub fn handle_catalog(
    msg: CatalogMessage,
    catalog: &Catalog,
    search: &mut String,
    filter: &mut Option<ClothingCategory>,
) {
    match msg {
        CatalogMessage::SearchChanged(query) => {
            *search = query;
            log::debug!(
                "🔍 Search '{}' matches {} items",
                search,
                catalog.filtered(*filter, search).len()
            );
        }
        CatalogMessage::FilterChanged(category) => {
            *filter = category;
            log::debug!(
                "🔍 Filter: {}",
                category.map_or("All", |category| category.name())
            );
        }
    }
}

/// Handle metadata form messages.
///
/// Text fields are truncated to the form limits, mirroring the length
/// caps on the surrounding form inputs.
pub fn handle_form(msg: FormMessage, outfit_form: &mut OutfitForm) {
    match msg {
        FormMessage::TitleChanged(title) => {
            outfit_form.title = truncate_chars(title, form::TITLE_MAX);
        }
        FormMessage::DescriptionChanged(description) => {
            outfit_form.description = truncate_chars(description, form::DESCRIPTION_MAX);
        }
        FormMessage::OccasionChanged(occasion) => {
            outfit_form.occasion = occasion;
        }
        FormMessage::CategoryChanged(category) => {
            outfit_form.category = category;
        }
        FormMessage::TagsChanged(tags) => {
            outfit_form.tags = tags;
        }
    }
}

/// Truncate a string to a maximum number of characters.
fn truncate_chars(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        value
    } else {
        value.chars().take(max).collect()
    }
}
