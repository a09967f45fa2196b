use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction, models::OrderData, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Updating order",
    skip(pool)
)]
pub async fn update_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
    json: web::Json<OrderData>
) -> Result<HttpResponse, ApiError> {
    json.validate()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let order = db_interaction::update_order(conn, order_id.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(order))
}
