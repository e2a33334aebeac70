pub mod errors;
pub mod db;
pub mod product;
pub mod product_image;
