//! Placed-item data model and transform invariants.
//!
//! A placed item is one clothing item instance on the composition canvas
//! with its own transform. The invariants live here so that every mutation
//! path (gestures, direct operations, record loading) goes through the
//! same clamping:
//!
//! - position coordinates never go negative
//! - width/height never drop below the interactable minimums
//! - rotation is always a multiple of the rotation step in [0, 360)

use serde::{Deserialize, Serialize};

use crate::constants::placement;
use crate::model::clothing::ClothingItem;

/// A 2D point in canvas coordinates, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a position, clamping both coordinates to >= 0.
    pub fn clamped(x: f32, y: f32) -> Self {
        Self {
            x: x.max(0.0),
            y: y.max(0.0),
        }
    }

    /// Return this position moved by a delta, clamped per axis.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::clamped(self.x + dx, self.y + dy)
    }
}

/// Item dimensions in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a size, clamping to the interactable minimums.
    pub fn clamped(width: f32, height: f32) -> Self {
        Self {
            width: width.max(placement::MIN_WIDTH),
            height: height.max(placement::MIN_HEIGHT),
        }
    }

    /// Default size for a newly placed item.
    pub fn default_item() -> Self {
        Self {
            width: placement::DEFAULT_WIDTH,
            height: placement::DEFAULT_HEIGHT,
        }
    }

    /// Return this size grown by a delta, clamped to the minimums.
    pub fn grown(self, dw: f32, dh: f32) -> Self {
        Self::clamped(self.width + dw, self.height + dh)
    }
}

/// Normalize an angle in degrees into [0, 360).
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(placement::FULL_TURN_DEG)
}

/// Snapshot of a placed item's transform, used for undo bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Position,
    pub size: Size,
    pub rotation: f32,
}

/// One clothing item instance positioned on the composition canvas.
///
/// Identity is the owning clothing item's id; the full item is kept as a
/// display copy so the canvas can render without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Display copy of the catalog item. The id is the identity.
    pub item: ClothingItem,
    /// Top-left position in canvas coordinates.
    pub position: Position,
    /// Current dimensions.
    pub size: Size,
    /// Rotation in degrees, a multiple of the rotation step in [0, 360).
    pub rotation: f32,
    /// Stacking order; higher renders on top.
    pub z_index: u32,
}

impl PlacedItem {
    /// Place an item at a position with the default size and no rotation.
    pub fn new(item: ClothingItem, position: Position, z_index: u32) -> Self {
        Self {
            item,
            position,
            size: Size::default_item(),
            rotation: 0.0,
            z_index,
        }
    }

    /// The owning clothing item's id.
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Move the item by a delta, clamping each coordinate to >= 0.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position = self.position.translated(dx, dy);
    }

    /// Grow the item by a delta, clamping to the minimum size.
    pub fn resize_by(&mut self, dw: f32, dh: f32) {
        self.size = self.size.grown(dw, dh);
    }

    /// Advance rotation by one step, wrapping at a full turn.
    pub fn rotate_step(&mut self) {
        self.rotation = normalize_degrees(self.rotation + placement::ROTATION_STEP_DEG);
    }

    /// Current transform snapshot.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            size: self.size,
            rotation: self.rotation,
        }
    }

    /// Apply a transform snapshot, re-clamping defensively.
    pub fn apply_transform(&mut self, transform: Transform) {
        self.position = Position::clamped(transform.position.x, transform.position.y);
        self.size = Size::clamped(transform.size.width, transform.size.height);
        self.rotation = normalize_degrees(transform.rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::clothing::ClothingCategory;

    fn test_item(id: &str) -> ClothingItem {
        ClothingItem::new(id, "Test Item", ClothingCategory::Tops, "item.jpg")
    }

    #[test]
    fn test_position_clamping() {
        let pos = Position::clamped(-5.0, 10.0);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 10.0);

        let moved = Position::clamped(3.0, 3.0).translated(-100.0, 4.0);
        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 7.0);
    }

    #[test]
    fn test_size_minimums() {
        let size = Size::clamped(10.0, 10.0);
        assert_eq!(size.width, 80.0);
        assert_eq!(size.height, 100.0);

        // Arbitrarily large negative deltas still clamp.
        let shrunk = Size::default_item().grown(-1000.0, -1000.0);
        assert_eq!(shrunk.width, 80.0);
        assert_eq!(shrunk.height, 100.0);
    }

    #[test]
    fn test_rotation_closure() {
        let mut placed = PlacedItem::new(test_item("1"), Position::clamped(0.0, 0.0), 1);
        for _ in 0..8 {
            placed.rotate_step();
        }
        assert_eq!(placed.rotation, 0.0);
    }

    #[test]
    fn test_rotation_always_step_multiple() {
        let mut placed = PlacedItem::new(test_item("1"), Position::clamped(0.0, 0.0), 1);
        for _ in 0..13 {
            placed.rotate_step();
            assert!(placed.rotation >= 0.0 && placed.rotation < 360.0);
            assert_eq!(placed.rotation % 45.0, 0.0);
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(405.0), 45.0);
        assert_eq!(normalize_degrees(-45.0), 315.0);
    }

    #[test]
    fn test_apply_transform_reclamps() {
        let mut placed = PlacedItem::new(test_item("1"), Position::clamped(50.0, 50.0), 1);
        placed.apply_transform(Transform {
            position: Position { x: -10.0, y: 5.0 },
            size: Size {
                width: 1.0,
                height: 1.0,
            },
            rotation: 720.0 + 90.0,
        });
        assert_eq!(placed.position.x, 0.0);
        assert_eq!(placed.size.width, 80.0);
        assert_eq!(placed.rotation, 90.0);
    }
}
