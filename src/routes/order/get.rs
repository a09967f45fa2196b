use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of orders",
    skip(pool)
)]
pub async fn get_orders(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let orders = db_interaction::get_orders(conn).await?;

    Ok(HttpResponse::Ok().json(orders))
}

#[tracing::instrument(
    "Getting order by id",
    skip(pool)
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let order = db_interaction::get_order_by_id(conn, order_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(order))
}
