//! Data models for the outfit editor.

mod clothing;
mod placement;
mod tag;

pub use clothing::{ClothingCategory, ClothingItem};
pub use placement::{normalize_degrees, PlacedItem, Position, Size, Transform};
pub use tag::{join_tags, parse_tag_string};
