use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction, models::UserData, routes::ApiError, utils::{get_pooled_connection, DbPool}};

// Body is skipped from the span, it carries the plaintext password
#[tracing::instrument(
    "Creating user",
    skip(pool, json)
)]
pub async fn create_user(
    pool: web::Data<DbPool>,
    json: web::Json<UserData>
) -> Result<HttpResponse, ApiError> {
    json.validate()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let user = db_interaction::insert_user(conn, json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
