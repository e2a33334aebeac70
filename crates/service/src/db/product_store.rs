use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, LoaderTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use common::pagination::Pagination;
use models::{product, product_image};

use crate::errors::{classify_db_err, ServiceError};
use crate::product::term::LookupTerm;
use crate::product::{CreateProduct, ProductPatch};

/// Fetch a product and its images by a classified lookup term.
///
/// Primary-key terms use an exact id match; secondary terms match the
/// title case-insensitively or the slug in lowercase, in a single query.
pub async fn find_by_term<C: ConnectionTrait>(
    conn: &C,
    term: &LookupTerm,
) -> Result<Option<(product::Model, Vec<product_image::Model>)>, DbErr> {
    let select = match term {
        LookupTerm::ById(id) => product::Entity::find_by_id(*id),
        LookupTerm::BySecondary(probe) => product::Entity::find().filter(
            Condition::any()
                .add(
                    Expr::expr(Func::upper(Expr::col((
                        product::Entity,
                        product::Column::Title,
                    ))))
                    .eq(probe.to_uppercase()),
                )
                .add(product::Column::Slug.eq(probe.to_lowercase())),
        ),
    };
    let rows = select
        .find_with_related(product_image::Entity)
        .order_by(product_image::Column::Id, Order::Asc)
        .all(conn)
        .await?;
    Ok(rows.into_iter().next())
}

/// Page through products, images loaded per owner.
pub async fn list<C: ConnectionTrait>(
    conn: &C,
    page: Pagination,
) -> Result<Vec<(product::Model, Vec<product_image::Model>)>, DbErr> {
    let (limit, offset) = page.normalize();
    let products = product::Entity::find()
        .order_by_asc(product::Column::CreatedAt)
        .limit(limit)
        .offset(offset)
        .all(conn)
        .await?;
    let images = products.load_many(product_image::Entity, conn).await?;
    Ok(products.into_iter().zip(images).collect())
}

/// Build a fresh aggregate from validated input. The id is assigned here
/// and never reassigned; the slug falls back to a derivation of the title.
pub fn new_product(input: &CreateProduct) -> Result<product::ActiveModel, ServiceError> {
    product::validate_price(input.price)?;
    product::validate_stock(input.stock)?;
    let gender = product::validate_gender(&input.gender)?;
    let slug = match &input.slug {
        Some(slug) => product::slugify(slug),
        None => product::slugify(&input.title),
    };
    let now = Utc::now().into();
    Ok(product::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title.clone()),
        slug: Set(slug),
        price: Set(input.price),
        description: Set(input.description.clone()),
        stock: Set(input.stock),
        sizes: Set(input.sizes.clone().into()),
        gender: Set(gender),
        tags: Set(input.tags.clone().into()),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

/// Build the merged-but-unsaved record: the existing row overlaid with
/// the non-absent scalar fields of the patch. Nothing is persisted; the
/// image list is ignored here so the caller can attach a replacement set
/// before the first write happens.
pub async fn preload_merge<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    patch: &ProductPatch,
) -> Result<product::ActiveModel, ServiceError> {
    let existing = product::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(classify_db_err)?
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

    let mut merged: product::ActiveModel = existing.into();
    if let Some(title) = &patch.title {
        merged.title = Set(title.clone());
    }
    if let Some(slug) = &patch.slug {
        merged.slug = Set(product::slugify(slug));
    }
    if let Some(price) = patch.price {
        product::validate_price(price)?;
        merged.price = Set(price);
    }
    if let Some(description) = &patch.description {
        merged.description = Set(Some(description.clone()));
    }
    if let Some(stock) = patch.stock {
        product::validate_stock(stock)?;
        merged.stock = Set(stock);
    }
    if let Some(sizes) = &patch.sizes {
        merged.sizes = Set(sizes.clone().into());
    }
    if let Some(gender) = &patch.gender {
        merged.gender = Set(product::validate_gender(gender)?);
    }
    if let Some(tags) = &patch.tags {
        merged.tags = Set(tags.clone().into());
    }
    merged.updated_at = Set(Utc::now().into());
    Ok(merged)
}

/// Delete a product row and its images. Runs on the caller's connection
/// so a transactional caller keeps both deletes in one unit.
pub async fn delete_product<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<(), DbErr> {
    super::image_store::delete_for_owner(conn, id).await?;
    product::Entity::delete_by_id(id).exec(conn).await?;
    Ok(())
}

/// Bulk-clear the store, images first. Used by seed/reset flows only.
pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    product_image::Entity::delete_many().exec(conn).await?;
    let res = product::Entity::delete_many().exec(conn).await?;
    Ok(res.rows_affected)
}
