use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use models::product_image;

/// Build unsaved image rows for an owner, preserving URL order.
pub fn build_for_owner(owner: Uuid, urls: &[String]) -> Vec<product_image::ActiveModel> {
    urls.iter()
        .map(|url| product_image::ActiveModel {
            url: Set(url.clone()),
            product_id: Set(owner),
            ..Default::default()
        })
        .collect()
}

/// Insert one image row per URL, in order. No-op for an empty slice.
pub async fn insert_for_owner<C: ConnectionTrait>(
    conn: &C,
    owner: Uuid,
    urls: &[String],
) -> Result<(), DbErr> {
    product_image::Entity::insert_many(build_for_owner(owner, urls))
        .on_empty_do_nothing()
        .exec(conn)
        .await?;
    Ok(())
}

/// Replace the owner's whole image set: delete every existing row, then
/// reinsert from the URL list. The two steps must never be visible
/// separately, so callers run this on a transaction connection.
pub async fn replace_for_owner<C: ConnectionTrait>(
    conn: &C,
    owner: Uuid,
    urls: &[String],
) -> Result<(), DbErr> {
    product_image::Entity::delete_many()
        .filter(product_image::Column::ProductId.eq(owner))
        .exec(conn)
        .await?;
    insert_for_owner(conn, owner, urls).await
}

/// Delete every image row owned by `owner`.
pub async fn delete_for_owner<C: ConnectionTrait>(conn: &C, owner: Uuid) -> Result<(), DbErr> {
    product_image::Entity::delete_many()
        .filter(product_image::Column::ProductId.eq(owner))
        .exec(conn)
        .await?;
    Ok(())
}
