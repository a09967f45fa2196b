mod post;
mod get;
mod update;
mod delete;
mod fake;

pub use post::*;
pub use get::*;
pub use update::*;
pub use delete::*;
pub use fake::*;
