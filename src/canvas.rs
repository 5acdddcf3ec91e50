//! The outfit composition canvas.
//!
//! A [`Composition`] is the in-progress arrangement of placed items for
//! one outfit. It owns the ordered item list, the stacking order, and the
//! transient gesture state that turns pointer events into position and
//! size mutations.
//!
//! Every mutating operation that targets a missing item id is a silent
//! no-op: pointer events can arrive for an item the user just removed,
//! and the canvas stays robust against those stale references.

use rand::Rng;

use crate::constants::spawn;
use crate::model::{ClothingItem, PlacedItem, Position, Size, Transform};

/// Pointer coordinates in canvas space.
pub type Pointer = (f32, f32);

/// Generator for the spawn offset of newly added items.
///
/// Injectable so tests can substitute a fixed sequence for the default
/// random jitter.
pub type SpawnOffsets = Box<dyn FnMut() -> Pointer + Send>;

/// Build the default spawn generator: uniform jitter within the spawn region.
fn random_offsets(min: f32, max: f32) -> SpawnOffsets {
    Box::new(move || {
        let mut rng = rand::rng();
        (rng.random_range(min..=max), rng.random_range(min..=max))
    })
}

/// The exclusive gesture state of the canvas.
///
/// Only one gesture is active at a time; starting a new gesture while
/// another is active ends the previous one, leaving its last-committed
/// values on the item.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// No gesture active.
    Idle,
    /// An item is being moved. `anchor` is the last observed pointer
    /// position, so drag deltas are incremental. `start_position` is the
    /// item's position when the drag began.
    Dragging {
        item_id: String,
        anchor: Pointer,
        start_position: Position,
    },
    /// An item's corner handle is being dragged. Size deltas apply against
    /// `start_size` and the gesture-start `anchor`, so intermediate steps
    /// accumulate no rounding error.
    Resizing {
        item_id: String,
        anchor: Pointer,
        start_size: Size,
    },
}

impl Gesture {
    /// Check whether no gesture is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// The id of the item the active gesture targets, if any.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { item_id, .. } | Gesture::Resizing { item_id, .. } => {
                Some(item_id)
            }
        }
    }
}

/// The in-progress arrangement of placed items for one outfit.
pub struct Composition {
    items: Vec<PlacedItem>,
    gesture: Gesture,
    spawn: SpawnOffsets,
}

impl std::fmt::Debug for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composition")
            .field("items", &self.items)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition {
    /// Create an empty composition with random spawn jitter.
    pub fn new() -> Self {
        Self::with_spawn_range(spawn::OFFSET_MIN, spawn::OFFSET_MAX)
    }

    /// Create an empty composition spawning new items within `[min, max]`
    /// on both axes.
    pub fn with_spawn_range(min: f32, max: f32) -> Self {
        Self::with_spawn_offsets(random_offsets(min, max))
    }

    /// Create an empty composition with a custom spawn-offset generator.
    pub fn with_spawn_offsets(offsets: impl FnMut() -> Pointer + Send + 'static) -> Self {
        Self {
            items: Vec::new(),
            gesture: Gesture::Idle,
            spawn: Box::new(offsets),
        }
    }

    /// All placed items in insertion order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the composition has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current gesture state.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The id of the currently selected item (the gesture target), if any.
    pub fn selected_item(&self) -> Option<&str> {
        self.gesture.item_id()
    }

    /// Look up a placed item by its clothing item id.
    pub fn item(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|placed| placed.id() == id)
    }

    fn item_mut(&mut self, id: &str) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|placed| placed.id() == id)
    }

    /// Z-index for the next added item: one above the current maximum.
    fn next_z_index(&self) -> u32 {
        self.items
            .iter()
            .map(|placed| placed.z_index)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Place a catalog item onto the canvas.
    ///
    /// The item spawns at a jittered offset near the origin with the
    /// default size, no rotation, and a z-index above every existing item.
    /// Placements are keyed by clothing item id, so adding an id that is
    /// already on the canvas replaces the previous placement.
    pub fn add_item(&mut self, item: &ClothingItem) -> &PlacedItem {
        // Z-index stays monotonic across replacements, so it is taken
        // before the old placement leaves.
        let z_index = self.next_z_index();
        if let Some(index) = self.items.iter().position(|placed| placed.id() == item.id) {
            log::debug!("Item {} already placed, replacing placement", item.id);
            if self.gesture.item_id() == Some(item.id.as_str()) {
                self.gesture = Gesture::Idle;
            }
            self.items.remove(index);
        }

        let (dx, dy) = (self.spawn)();
        let placed = PlacedItem::new(item.clone(), Position::clamped(dx, dy), z_index);
        log::debug!(
            "Placed item {} at ({:.0}, {:.0}) z={}",
            placed.id(),
            placed.position.x,
            placed.position.y,
            placed.z_index
        );
        self.items.push(placed);
        // Just pushed, so last() is always present.
        self.items.last().unwrap()
    }

    /// Start dragging an item from a pointer position.
    ///
    /// Any gesture already active ends first, keeping its last-committed
    /// values. No-op if the id does not reference a placed item.
    pub fn begin_drag(&mut self, id: &str, pointer: Pointer) {
        let Some(start_position) = self.item(id).map(|placed| placed.position) else {
            log::debug!("Drag start ignored for unknown item {}", id);
            return;
        };
        self.gesture = Gesture::Dragging {
            item_id: id.to_string(),
            anchor: pointer,
            start_position,
        };
    }

    /// Move the dragged item by the delta since the last pointer position.
    ///
    /// The anchor resets to `pointer` each step so deltas stay incremental,
    /// and the item's position is clamped per axis to >= 0. No-op when no
    /// drag is active.
    pub fn update_drag(&mut self, pointer: Pointer) {
        let (item_id, delta) = match &mut self.gesture {
            Gesture::Dragging {
                item_id, anchor, ..
            } => {
                let delta = (pointer.0 - anchor.0, pointer.1 - anchor.1);
                *anchor = pointer;
                (item_id.clone(), delta)
            }
            _ => return,
        };
        if let Some(placed) = self.item_mut(&item_id) {
            placed.translate(delta.0, delta.1);
        }
    }

    /// End the active gesture. Idempotent.
    pub fn end_drag(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Start resizing an item via its corner handle.
    ///
    /// The anchor and the item's current size are captured once; every
    /// subsequent [`Composition::update_resize`] applies the total pointer
    /// offset against them. No-op if the id does not reference a placed
    /// item.
    pub fn begin_resize(&mut self, id: &str, pointer: Pointer) {
        let Some(start_size) = self.item(id).map(|placed| placed.size) else {
            log::debug!("Resize start ignored for unknown item {}", id);
            return;
        };
        self.gesture = Gesture::Resizing {
            item_id: id.to_string(),
            anchor: pointer,
            start_size,
        };
    }

    /// Resize the active item to its gesture-start size plus the total
    /// pointer offset, clamped to the minimum dimensions. No-op when no
    /// resize is active.
    pub fn update_resize(&mut self, pointer: Pointer) {
        let (item_id, new_size) = match &self.gesture {
            Gesture::Resizing {
                item_id,
                anchor,
                start_size,
            } => (
                item_id.clone(),
                start_size.grown(pointer.0 - anchor.0, pointer.1 - anchor.1),
            ),
            _ => return,
        };
        if let Some(placed) = self.item_mut(&item_id) {
            placed.size = new_size;
        }
    }

    /// End the active gesture. Idempotent.
    pub fn end_resize(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Advance an item's rotation by one step, wrapping at a full turn.
    /// No-op on an unknown id.
    pub fn rotate(&mut self, id: &str) {
        if let Some(placed) = self.item_mut(id) {
            placed.rotate_step();
        } else {
            log::debug!("Rotate ignored for unknown item {}", id);
        }
    }

    /// Grow an item by a size delta, clamped to the minimum dimensions.
    /// No-op on an unknown id.
    pub fn resize_by(&mut self, id: &str, dw: f32, dh: f32) {
        if let Some(placed) = self.item_mut(id) {
            placed.resize_by(dw, dh);
        } else {
            log::debug!("Resize ignored for unknown item {}", id);
        }
    }

    /// Apply a transform snapshot to an item, re-clamping defensively.
    /// No-op on an unknown id. Used by undo/redo replay.
    pub fn apply_item_transform(&mut self, id: &str, transform: Transform) {
        if let Some(placed) = self.item_mut(id) {
            placed.apply_transform(transform);
        }
    }

    /// Remove a placed item. No error if absent; an active gesture on the
    /// removed item ends.
    pub fn remove_item(&mut self, id: &str) {
        if self.gesture.item_id() == Some(id) {
            self.gesture = Gesture::Idle;
        }
        let before = self.items.len();
        self.items.retain(|placed| placed.id() != id);
        if self.items.len() == before {
            log::debug!("Remove ignored for unknown item {}", id);
        }
    }

    /// Empty the composition and drop any active gesture.
    pub fn clear(&mut self) {
        self.items.clear();
        self.gesture = Gesture::Idle;
    }

    /// Reinsert a previously removed placement, keeping its transform and
    /// z-index. An existing placement with the same id is replaced.
    pub fn restore_item(&mut self, placed: PlacedItem) {
        self.items.retain(|existing| existing.id() != placed.id());
        self.items.push(placed);
    }

    /// Replace the whole item list, dropping any active gesture. Used when
    /// restoring from an undo snapshot or a loaded record.
    pub fn restore_items(&mut self, items: Vec<PlacedItem>) {
        self.items = items;
        self.gesture = Gesture::Idle;
    }
}
