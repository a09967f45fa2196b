use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of goods",
    skip(pool)
)]
pub async fn get_goods(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let goods = db_interaction::get_goods(conn).await?;

    Ok(HttpResponse::Ok().json(goods))
}

#[tracing::instrument(
    "Getting good by id",
    skip(pool)
)]
pub async fn get_good(
    pool: web::Data<DbPool>,
    good_id: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let good = db_interaction::get_good_by_id(conn, good_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(good))
}
