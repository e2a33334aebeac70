use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors, product_image};

/// String collection persisted as a JSON column (portable across backends).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self { Self(v) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    /// Lowercase alternate lookup key, unique alongside the title.
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub description: Option<String>,
    pub stock: i32,
    pub sizes: StringList,
    pub gender: String,
    pub tags: StringList,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Images }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Images => Entity::has_many(product_image::Entity).into(),
        }
    }
}

impl Related<product_image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Images.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub const GENDERS: [&str; 4] = ["men", "women", "kid", "unisex"];

/// Derive a slug from free text: lowercase, spaces become underscores,
/// apostrophes dropped.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('\'', "")
}

pub fn validate_gender(g: &str) -> Result<String, errors::ModelError> {
    let low = g.to_ascii_lowercase();
    if !GENDERS.contains(&low.as_str()) {
        return Err(errors::ModelError::Validation(format!(
            "gender must be one of {GENDERS:?}"
        )));
    }
    Ok(low)
}

pub fn validate_price(p: f64) -> Result<(), errors::ModelError> {
    if !p.is_finite() || p < 0.0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_stock(s: i32) -> Result<(), errors::ModelError> {
    if s < 0 {
        return Err(errors::ModelError::Validation("stock must be >= 0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_underscores() {
        assert_eq!(slugify("Kids Cybertruck Tee"), "kids_cybertruck_tee");
    }

    #[test]
    fn slugify_strips_apostrophes() {
        assert_eq!(slugify("Men's Chill Hoodie"), "mens_chill_hoodie");
    }

    #[test]
    fn gender_accepts_known_values_case_insensitively() {
        assert_eq!(validate_gender("Unisex").unwrap(), "unisex");
        assert!(validate_gender("robots").is_err());
    }

    #[test]
    fn price_and_stock_reject_negatives() {
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_stock(-1).is_err());
        assert!(validate_stock(0).is_ok());
    }
}
