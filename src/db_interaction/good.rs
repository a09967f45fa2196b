use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{fake_data::fake_good, models::{Good, GoodData}, schema::goods, utils::DbConnection};

use super::{expect_affected, run_query, QueryError};

#[tracing::instrument(
    "Inserting good into the database",
    skip_all
)]
pub async fn insert_good(
    conn: DbConnection,
    good: GoodData
) -> Result<Good, QueryError> {
    run_query(conn, move |conn| {
        let id = diesel::insert_into(goods::table)
            .values(&good)
            .returning(goods::id)
            .get_result::<i32>(conn)?;

        Ok(good.into_good(id))
    })
    .await
}

#[tracing::instrument(
    "Getting goods from db",
    skip_all
)]
pub async fn get_goods(
    conn: DbConnection
) -> Result<Vec<Good>, QueryError> {
    run_query(conn, |conn| {
        Ok(goods::table
            .select(Good::as_select())
            .load::<Good>(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting good by id from db",
    skip(conn)
)]
pub async fn get_good_by_id(
    conn: DbConnection,
    good_id: i32
) -> Result<Good, QueryError> {
    run_query(conn, move |conn| {
        goods::table
            .filter(goods::id.eq(good_id))
            .select(Good::as_select())
            .first::<Good>(conn)
            .optional()?
            .ok_or(QueryError::RowNotFound{ table: "goods", id: good_id })
    })
    .await
}

#[tracing::instrument(
    "Replacing good in db",
    skip(conn, good)
)]
pub async fn update_good(
    conn: DbConnection,
    good_id: i32,
    good: GoodData
) -> Result<Good, QueryError> {
    run_query(conn, move |conn| {
        let affected_rows = diesel::update(goods::table)
            .filter(goods::id.eq(good_id))
            .set(&good)
            .execute(conn)?;

        expect_affected(affected_rows, "goods", good_id)?;
        Ok(good.into_good(good_id))
    })
    .await
}

#[tracing::instrument(
    "Deleting good from db",
    skip(conn)
)]
pub async fn delete_good(
    conn: DbConnection,
    good_id: i32
) -> Result<(), QueryError> {
    run_query(conn, move |conn| {
        let affected_rows = diesel::delete(goods::table)
            .filter(goods::id.eq(good_id))
            .execute(conn)?;

        expect_affected(affected_rows, "goods", good_id)
    })
    .await
}

#[tracing::instrument(
    "Seeding goods table with fake rows",
    skip(conn)
)]
pub async fn seed_goods(
    conn: DbConnection,
    count: u32
) -> Result<u32, QueryError> {
    run_query(conn, move |conn| {
        let mut rng = rand::thread_rng();

        for i in 0..count {
            diesel::insert_into(goods::table)
                .values(fake_good(i, &mut rng))
                .execute(conn)?;
        }

        Ok(count)
    })
    .await
}
