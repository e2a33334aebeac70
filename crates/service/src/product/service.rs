use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use common::pagination::Pagination;

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;
use crate::product::{CreateProduct, ProductPatch, ProductView};

/// Application service for the product aggregate. Thin over the
/// repository; entry points are instrumented for tracing.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateProduct) -> Result<ProductView, ServiceError> {
        let view = self.repo.create(input).await?;
        info!(product_id = %view.id, "product_created");
        Ok(view)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<ProductView>, ServiceError> {
        self.repo.list(page).await
    }

    /// Flattened single lookup by id, slug, or case-insensitive title.
    pub async fn resolve(&self, term: &str) -> Result<ProductView, ServiceError> {
        self.repo.resolve(term).await
    }

    #[instrument(skip(self, patch), fields(product_id = %id))]
    pub async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<ProductView, ServiceError> {
        self.repo.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, term: &str) -> Result<(), ServiceError> {
        self.repo.remove(term).await?;
        info!(term, "product_removed");
        Ok(())
    }

    /// Bulk clear used by seed/reset flows.
    pub async fn delete_all(&self) -> Result<u64, ServiceError> {
        self.repo.delete_all().await
    }
}
