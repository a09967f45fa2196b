mod error;
mod health_check;
pub mod user;
pub mod good;
pub mod order;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use health_check::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse{
    pub message: String
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse{ message: message.into() }
    }
}
