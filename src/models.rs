use diesel::prelude::{AsChangeset, Insertable, Queryable, Selectable};
use serde::Deserialize;
use serde::Serialize;
use validator::Validate;

use crate::schema::{goods, orders, users};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = users, check_for_backend(diesel::sqlite::Sqlite))]
pub struct User{
    pub id: i32,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub password: String
}

// Body accepted by create / update of a user, every column except the id
#[derive(Insertable, AsChangeset, Validate, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
pub struct UserData{
    #[validate(length(max = 40))]
    pub first_name: String,
    #[validate(length(max = 50))]
    pub second_name: String,
    #[validate(length(max = 128))]
    pub email: String,
    #[validate(length(max = 255))]
    pub password: String
}

impl UserData {
    pub fn into_user(self, id: i32) -> User {
        User{
            id,
            first_name: self.first_name,
            second_name: self.second_name,
            email: self.email,
            password: self.password
        }
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = goods, check_for_backend(diesel::sqlite::Sqlite))]
pub struct Good{
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64
}

#[derive(Insertable, AsChangeset, Validate, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = goods)]
pub struct GoodData{
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: String,
    pub price: f64
}

impl GoodData {
    pub fn into_good(self, id: i32) -> Good {
        Good{
            id,
            name: self.name,
            description: self.description,
            price: self.price
        }
    }
}

// user_id / good_id are not checked against their tables
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = orders, check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order{
    pub id: i32,
    pub user_id: i32,
    pub good_id: i32,
    pub order_date: String,
    pub order_status: String
}

#[derive(Insertable, AsChangeset, Validate, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
pub struct OrderData{
    pub user_id: i32,
    pub good_id: i32,
    #[validate(length(max = 10))]
    pub order_date: String,
    #[validate(length(max = 150))]
    pub order_status: String
}

impl OrderData {
    pub fn into_order(self, id: i32) -> Order {
        Order{
            id,
            user_id: self.user_id,
            good_id: self.good_id,
            order_date: self.order_date,
            order_status: self.order_status
        }
    }
}
