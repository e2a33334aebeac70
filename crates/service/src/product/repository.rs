use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::error;
use uuid::Uuid;

use common::pagination::Pagination;

use crate::db::{image_store, product_store};
use crate::errors::{classify_db_err, ServiceError};
use crate::product::term::LookupTerm;
use crate::product::{CreateProduct, ProductPatch, ProductView};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, input: CreateProduct) -> Result<ProductView, ServiceError>;
    async fn list(&self, page: Pagination) -> Result<Vec<ProductView>, ServiceError>;
    async fn resolve(&self, term: &str) -> Result<ProductView, ServiceError>;
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<ProductView, ServiceError>;
    async fn remove(&self, term: &str) -> Result<(), ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation. Owns the transaction
/// boundaries; isolation beyond that is delegated to the database.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

/// Roll back and release, never masking the error that got us here.
async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        error!(error = %err, "transaction rollback failed");
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, input: CreateProduct) -> Result<ProductView, ServiceError> {
        let record = product_store::new_product(&input)?;

        let txn = self.db.begin().await.map_err(classify_db_err)?;
        let result: Result<Uuid, DbErr> = async {
            let saved = record.insert(&txn).await?;
            image_store::insert_for_owner(&txn, saved.id, &input.images).await?;
            Ok(saved.id)
        }
        .await;

        match result {
            Ok(id) => {
                txn.commit().await.map_err(classify_db_err)?;
                self.resolve(&id.to_string()).await
            }
            Err(err) => {
                rollback(txn).await;
                Err(classify_db_err(err))
            }
        }
    }

    async fn list(&self, page: Pagination) -> Result<Vec<ProductView>, ServiceError> {
        let rows = product_store::list(&self.db, page).await.map_err(classify_db_err)?;
        Ok(rows
            .into_iter()
            .map(|(record, images)| ProductView::flatten(record, images))
            .collect())
    }

    async fn resolve(&self, term: &str) -> Result<ProductView, ServiceError> {
        let found = product_store::find_by_term(&self.db, &LookupTerm::classify(term))
            .await
            .map_err(classify_db_err)?;
        let (record, images) = found.ok_or_else(|| ServiceError::NotFound(term.to_string()))?;
        Ok(ProductView::flatten(record, images))
    }

    /// The aggregate update protocol: merge outside any transaction (a
    /// missing id short-circuits before a single write), then replace the
    /// image set and save the merged record as one unit. Any failure
    /// between begin and commit rolls the whole unit back.
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<ProductView, ServiceError> {
        let images = patch.images.clone();
        let merged = product_store::preload_merge(&self.db, id, &patch).await?;

        let txn = self.db.begin().await.map_err(classify_db_err)?;
        let result: Result<(), DbErr> = async {
            if let Some(urls) = &images {
                image_store::replace_for_owner(&txn, id, urls).await?;
            }
            merged.update(&txn).await?;
            Ok(())
        }
        .await;

        match result {
            Ok(()) => txn.commit().await.map_err(classify_db_err)?,
            Err(err) => {
                rollback(txn).await;
                return Err(classify_db_err(err));
            }
        }

        self.resolve(&id.to_string()).await
    }

    async fn remove(&self, term: &str) -> Result<(), ServiceError> {
        let found = product_store::find_by_term(&self.db, &LookupTerm::classify(term))
            .await
            .map_err(classify_db_err)?;
        let (record, _) = found.ok_or_else(|| ServiceError::NotFound(term.to_string()))?;

        let txn = self.db.begin().await.map_err(classify_db_err)?;
        match product_store::delete_product(&txn, record.id).await {
            Ok(()) => txn.commit().await.map_err(classify_db_err),
            Err(err) => {
                rollback(txn).await;
                Err(classify_db_err(err))
            }
        }
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let txn = self.db.begin().await.map_err(classify_db_err)?;
        match product_store::delete_all(&txn).await {
            Ok(count) => {
                txn.commit().await.map_err(classify_db_err)?;
                Ok(count)
            }
            Err(err) => {
                rollback(txn).await;
                Err(classify_db_err(err))
            }
        }
    }
}
