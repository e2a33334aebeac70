//! Product aggregate operations: creation, lookup by id or secondary key,
//! and the transactional update path that can replace the image set.

pub mod repository;
pub mod service;
pub mod term;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::{product, product_image};

/// Input for creating a product. The slug is derived from the title when
/// absent; images are persisted as owned child rows.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub gender: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update. Every field is optional; for `images`, `None` leaves
/// the set untouched while `Some` (even empty) replaces it wholesale.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

/// Denormalized response shape: scalar fields plus bare image URLs in
/// insertion order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub price: f64,
    pub description: Option<String>,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl ProductView {
    pub fn flatten(record: product::Model, mut images: Vec<product_image::Model>) -> Self {
        images.sort_by_key(|img| img.id);
        Self {
            id: record.id,
            title: record.title,
            slug: record.slug,
            price: record.price,
            description: record.description,
            stock: record.stock,
            sizes: record.sizes.0,
            gender: record.gender,
            tags: record.tags.0,
            images: images.into_iter().map(|img| img.url).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_absent_and_empty_images() {
        let untouched: ProductPatch = serde_json::from_str(r#"{"price": 50.0}"#).unwrap();
        assert!(untouched.images.is_none());

        let cleared: ProductPatch = serde_json::from_str(r#"{"images": []}"#).unwrap();
        assert_eq!(cleared.images, Some(vec![]));
    }

    #[test]
    fn flatten_orders_urls_by_row_id() {
        let record = product::Model {
            id: Uuid::new_v4(),
            title: "Tee".into(),
            slug: "tee".into(),
            price: 1.0,
            description: None,
            stock: 0,
            sizes: product::StringList::default(),
            gender: "unisex".into(),
            tags: product::StringList::default(),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };
        let owner = record.id;
        let images = vec![
            product_image::Model { id: 2, url: "b.jpg".into(), product_id: owner },
            product_image::Model { id: 1, url: "a.jpg".into(), product_id: owner },
        ];
        let view = ProductView::flatten(record, images);
        assert_eq!(view.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }
}
