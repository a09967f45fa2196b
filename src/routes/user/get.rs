use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::{db_interaction, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting list of users",
    skip(pool)
)]
pub async fn get_users(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let users = db_interaction::get_users(conn).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[tracing::instrument(
    "Getting user by id",
    skip(pool)
)]
pub async fn get_user(
    pool: web::Data<DbPool>,
    user_id: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let conn = get_pooled_connection(&pool)
                .await
                .context("Failed to get connection from pool")?;

    let user = db_interaction::get_user_by_id(conn, user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
