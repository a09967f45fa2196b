use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction, models::GoodData, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Creating good",
    skip(pool)
)]
pub async fn create_good(
    pool: web::Data<DbPool>,
    json: web::Json<GoodData>
) -> Result<HttpResponse, ApiError> {
    json.validate()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let good = db_interaction::insert_good(conn, json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(good))
}
