mod helpers;
mod health_check;
mod users;
mod goods;
