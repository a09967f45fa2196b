use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{fake_data::fake_user, models::{User, UserData}, schema::users, utils::DbConnection};

use super::{expect_affected, run_query, QueryError};

#[tracing::instrument(
    "Inserting user into the database",
    skip_all
)]
pub async fn insert_user(
    conn: DbConnection,
    user: UserData
) -> Result<User, QueryError> {
    run_query(conn, move |conn| {
        let id = diesel::insert_into(users::table)
            .values(&user)
            .returning(users::id)
            .get_result::<i32>(conn)?;

        Ok(user.into_user(id))
    })
    .await
}

#[tracing::instrument(
    "Getting users from db",
    skip_all
)]
pub async fn get_users(
    conn: DbConnection
) -> Result<Vec<User>, QueryError> {
    run_query(conn, |conn| {
        Ok(users::table
            .select(User::as_select())
            .load::<User>(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting user by id from db",
    skip(conn)
)]
pub async fn get_user_by_id(
    conn: DbConnection,
    user_id: i32
) -> Result<User, QueryError> {
    run_query(conn, move |conn| {
        users::table
            .filter(users::id.eq(user_id))
            .select(User::as_select())
            .first::<User>(conn)
            .optional()?
            .ok_or(QueryError::RowNotFound{ table: "users", id: user_id })
    })
    .await
}

#[tracing::instrument(
    "Replacing user in db",
    skip(conn, user)
)]
pub async fn update_user(
    conn: DbConnection,
    user_id: i32,
    user: UserData
) -> Result<User, QueryError> {
    run_query(conn, move |conn| {
        let affected_rows = diesel::update(users::table)
            .filter(users::id.eq(user_id))
            .set(&user)
            .execute(conn)?;

        expect_affected(affected_rows, "users", user_id)?;
        Ok(user.into_user(user_id))
    })
    .await
}

#[tracing::instrument(
    "Deleting user from db",
    skip(conn)
)]
pub async fn delete_user(
    conn: DbConnection,
    user_id: i32
) -> Result<(), QueryError> {
    run_query(conn, move |conn| {
        let affected_rows = diesel::delete(users::table)
            .filter(users::id.eq(user_id))
            .execute(conn)?;

        expect_affected(affected_rows, "users", user_id)
    })
    .await
}

// One insert per row, no transaction: a failure keeps the rows already written
#[tracing::instrument(
    "Seeding users table with fake rows",
    skip(conn)
)]
pub async fn seed_users(
    conn: DbConnection,
    count: u32
) -> Result<u32, QueryError> {
    run_query(conn, move |conn| {
        let mut rng = rand::thread_rng();

        for i in 0..count {
            diesel::insert_into(users::table)
                .values(fake_user(i, &mut rng))
                .execute(conn)?;
        }

        Ok(count)
    })
    .await
}
