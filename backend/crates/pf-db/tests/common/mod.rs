#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_link, create_test_project};
pub use test_db::create_test_pool;
