use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction, routes::{ApiError, MessageResponse}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Deleting good by id",
    skip(pool)
)]
pub async fn delete_good(
    pool: web::Data<DbPool>,
    good_id: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    db_interaction::delete_good(conn, good_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Good deleted successfully")))
}
