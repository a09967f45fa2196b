use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction, routes::{ApiError, MessageResponse}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Deleting order by id",
    skip(pool)
)]
pub async fn delete_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    db_interaction::delete_order(conn, order_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Order deleted successfully")))
}
