pub mod health;
pub mod test_db;
pub mod user;
