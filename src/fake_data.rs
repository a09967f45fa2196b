//! Random row builders behind the `/fake_*` seeding routes.
//!
//! Every builder takes the loop index and the rng so values can be
//! reproduced with a seeded generator.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::{domain::OrderStatus, models::{GoodData, OrderData, UserData}};

pub const PASSWORD_SUFFIX_RANGE: RangeInclusive<u32> = 100_000..=999_999;
pub const PRICE_RANGE: RangeInclusive<f64> = 15.0..=150.0;
pub const GOOD_DESCRIPTION: &str = "nidnjncecjdcjdn";
// Seeded orders assume 30 users and 30 goods exist, nothing checks it.
pub const REFERENCE_ID_RANGE: RangeInclusive<i32> = 0..=29;
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn order_date_bounds() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2022, 1, 1).expect("2022-01-01 is a valid date"),
        NaiveDate::from_ymd_opt(2024, 3, 25).expect("2024-03-25 is a valid date")
    )
}

pub fn fake_user<R: Rng + ?Sized>(index: u32, rng: &mut R) -> UserData {
    let pw = rng.gen_range(PASSWORD_SUFFIX_RANGE);

    UserData{
        first_name: format!("User{}", index),
        second_name: format!("Petrov{}", index),
        email: format!("{}user{}@email.com", index, index),
        password: format!("useer{}", pw)
    }
}

pub fn fake_good<R: Rng + ?Sized>(index: u32, rng: &mut R) -> GoodData {
    let price = rng.gen_range(PRICE_RANGE);

    GoodData{
        name: format!("Good{}", index),
        description: GOOD_DESCRIPTION.to_string(),
        price: (price * 100.0).round() / 100.0
    }
}

pub fn fake_order<R: Rng + ?Sized>(rng: &mut R) -> OrderData {
    let status: OrderStatus = rng.gen();

    OrderData{
        user_id: rng.gen_range(REFERENCE_ID_RANGE),
        good_id: rng.gen_range(REFERENCE_ID_RANGE),
        order_date: fake_order_date(rng).format(ORDER_DATE_FORMAT).to_string(),
        order_status: status.to_string()
    }
}

// Whole-day offset from the start date, both ends included
pub fn fake_order_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let (start, end) = order_date_bounds();
    let span = (end - start).num_days() as u64;

    start + Days::new(rng.gen_range(0..=span))
}
