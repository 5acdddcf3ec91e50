//! Clothing catalog data model.
//!
//! Items in the catalog are owned by the backing closet service; the
//! editor only references them by id and keeps a display copy for
//! rendering placed items.

use serde::{Deserialize, Serialize};

/// The fixed set of closet categories an item can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl ClothingCategory {
    /// Get the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ClothingCategory::Tops => "Tops",
            ClothingCategory::Bottoms => "Bottoms",
            ClothingCategory::Dresses => "Dresses",
            ClothingCategory::Outerwear => "Outerwear",
            ClothingCategory::Shoes => "Shoes",
            ClothingCategory::Accessories => "Accessories",
        }
    }

    /// Get all categories in display order.
    pub fn all() -> &'static [ClothingCategory] {
        &[
            ClothingCategory::Tops,
            ClothingCategory::Bottoms,
            ClothingCategory::Dresses,
            ClothingCategory::Outerwear,
            ClothingCategory::Shoes,
            ClothingCategory::Accessories,
        ]
    }
}

/// A single clothing item from the user's closet.
///
/// The backing service assigns the id; everything else is display data.
/// The editor never mutates an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Unique identifier assigned by the closet service.
    pub id: String,
    /// Display name of the item.
    pub name: String,
    /// Brand, free text.
    #[serde(default)]
    pub brand: String,
    /// Size, free text.
    #[serde(default)]
    pub size: String,
    /// Color, free text.
    #[serde(default)]
    pub color: String,
    /// Closet category.
    pub category: ClothingCategory,
    /// URL or content-addressed path of the item photo.
    pub image: String,
    /// Free-form tags attached to the item.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the user marked this item as a favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Whether the item has been worn at least once.
    #[serde(default)]
    pub is_worn: bool,
    /// Date the item was last worn (ISO-8601), if ever.
    #[serde(default)]
    pub last_worn: Option<String>,
    /// Creation timestamp (ISO-8601) assigned by the service.
    #[serde(default)]
    pub created_at: String,
}

impl ClothingItem {
    /// Create a new item with the required fields; free-text fields start empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ClothingCategory,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            size: String::new(),
            color: String::new(),
            category,
            image: image.into(),
            tags: Vec::new(),
            is_favorite: false,
            is_worn: false,
            last_worn: None,
            created_at: String::new(),
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Check whether this item matches a free-text search query.
    ///
    /// Matches case-insensitively against name, brand, and tags. An empty
    /// query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.brand.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }
}
