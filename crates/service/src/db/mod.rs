pub mod image_store;
pub mod product_store;
