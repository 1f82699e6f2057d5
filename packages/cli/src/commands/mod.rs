mod get;
mod list;

pub use get::{get, GetArgs};
pub use list::{list, ListArgs};
