use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction, models::GoodData, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Updating good",
    skip(pool)
)]
pub async fn update_good(
    pool: web::Data<DbPool>,
    good_id: web::Path<i32>,
    json: web::Json<GoodData>
) -> Result<HttpResponse, ApiError> {
    json.validate()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let good = db_interaction::update_good(conn, good_id.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(good))
}
