//! Read-only clothing catalog.
//!
//! The catalog holds the pre-fetched list of the user's closet items and
//! answers the picker's search/filter queries. Fetching, caching, and
//! mutation are the closet service's concern; the editor only reads.

use crate::model::{ClothingCategory, ClothingItem};

/// An in-memory, ordered collection of closet items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

impl Catalog {
    /// Create a catalog from a pre-fetched item list, preserving order.
    pub fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate all items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ClothingItem> {
        self.items.iter()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items matching a category filter and a free-text search query.
    ///
    /// `filter` of `None` means "All". The query matches name, brand, and
    /// tags case-insensitively; an empty query matches everything.
    pub fn filtered(
        &self,
        filter: Option<ClothingCategory>,
        query: &str,
    ) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| filter.is_none_or(|category| item.category == category))
            .filter(|item| item.matches_query(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            ClothingItem::new("1", "Wool Sweater", ClothingCategory::Tops, "sweater.jpg")
                .with_brand("Acme")
                .with_tags(vec!["cozy".to_string()]),
            ClothingItem::new("2", "Denim Jeans", ClothingCategory::Bottoms, "jeans.jpg"),
            ClothingItem::new("3", "Rain Jacket", ClothingCategory::Outerwear, "jacket.jpg")
                .with_tags(vec!["waterproof".to_string()]),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("2").map(|i| i.name.as_str()), Some("Denim Jeans"));
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_filter_all_with_empty_query() {
        let catalog = sample_catalog();
        assert_eq!(catalog.filtered(None, "").len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample_catalog();
        let tops = catalog.filtered(Some(ClothingCategory::Tops), "");
        assert_eq!(tops.len(), 1);
        assert_eq!(tops[0].id, "1");
    }

    #[test]
    fn test_search_matches_tags_and_brand() {
        let catalog = sample_catalog();
        assert_eq!(catalog.filtered(None, "waterproof").len(), 1);
        assert_eq!(catalog.filtered(None, "acme").len(), 1);
        assert!(catalog.filtered(None, "velvet").is_empty());
    }

    #[test]
    fn test_filter_and_search_combined() {
        let catalog = sample_catalog();
        // Query matches item 3, but the category filter excludes it.
        assert!(catalog
            .filtered(Some(ClothingCategory::Tops), "waterproof")
            .is_empty());
    }
}
