mod handler;
mod model;

pub use handler::{login, profile};
pub use model::{LoginRequest, LoginResponse};
