use actix_web::{web, HttpResponse};
use anyhow::Context;
use validator::Validate;

use crate::{db_interaction, models::UserData, routes::ApiError, utils::{get_pooled_connection, DbPool}};

// Full replacement: every field of UserData is required
#[tracing::instrument(
    "Updating user",
    skip(pool, json)
)]
pub async fn update_user(
    pool: web::Data<DbPool>,
    user_id: web::Path<i32>,
    json: web::Json<UserData>
) -> Result<HttpResponse, ApiError> {
    json.validate()?;

    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let user = db_interaction::update_user(conn, user_id.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
