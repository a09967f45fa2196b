use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction, routes::{ApiError, MessageResponse}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Seeding fake orders",
    skip(pool)
)]
pub async fn fake_orders(
    pool: web::Data<DbPool>,
    count: web::Path<u32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let created = db_interaction::seed_orders(conn, count.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("{} orders created", created))))
}
