use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{fake_data::fake_order, models::{Order, OrderData}, schema::orders, utils::DbConnection};

use super::{expect_affected, run_query, QueryError};

// References are written as given, a missing user or good is not an error
#[tracing::instrument(
    "Inserting order into the database",
    skip_all,
    fields(user_id = order.user_id, good_id = order.good_id)
)]
pub async fn insert_order(
    conn: DbConnection,
    order: OrderData
) -> Result<Order, QueryError> {
    run_query(conn, move |conn| {
        let id = diesel::insert_into(orders::table)
            .values(&order)
            .returning(orders::id)
            .get_result::<i32>(conn)?;

        Ok(order.into_order(id))
    })
    .await
}

#[tracing::instrument(
    "Getting orders from db",
    skip_all
)]
pub async fn get_orders(
    conn: DbConnection
) -> Result<Vec<Order>, QueryError> {
    run_query(conn, |conn| {
        Ok(orders::table
            .select(Order::as_select())
            .load::<Order>(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting order by id from db",
    skip(conn)
)]
pub async fn get_order_by_id(
    conn: DbConnection,
    order_id: i32
) -> Result<Order, QueryError> {
    run_query(conn, move |conn| {
        orders::table
            .filter(orders::id.eq(order_id))
            .select(Order::as_select())
            .first::<Order>(conn)
            .optional()?
            .ok_or(QueryError::RowNotFound{ table: "orders", id: order_id })
    })
    .await
}

#[tracing::instrument(
    "Replacing order in db",
    skip(conn, order)
)]
pub async fn update_order(
    conn: DbConnection,
    order_id: i32,
    order: OrderData
) -> Result<Order, QueryError> {
    run_query(conn, move |conn| {
        let affected_rows = diesel::update(orders::table)
            .filter(orders::id.eq(order_id))
            .set(&order)
            .execute(conn)?;

        expect_affected(affected_rows, "orders", order_id)?;
        Ok(order.into_order(order_id))
    })
    .await
}

#[tracing::instrument(
    "Deleting order from db",
    skip(conn)
)]
pub async fn delete_order(
    conn: DbConnection,
    order_id: i32
) -> Result<(), QueryError> {
    run_query(conn, move |conn| {
        let affected_rows = diesel::delete(orders::table)
            .filter(orders::id.eq(order_id))
            .execute(conn)?;

        expect_affected(affected_rows, "orders", order_id)
    })
    .await
}

#[tracing::instrument(
    "Seeding orders table with fake rows",
    skip(conn)
)]
pub async fn seed_orders(
    conn: DbConnection,
    count: u32
) -> Result<u32, QueryError> {
    run_query(conn, move |conn| {
        let mut rng = rand::thread_rng();

        for _ in 0..count {
            diesel::insert_into(orders::table)
                .values(fake_order(&mut rng))
                .execute(conn)?;
        }

        Ok(count)
    })
    .await
}
