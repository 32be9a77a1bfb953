pub mod api;
pub mod config;
pub mod errors;
pub mod routes;
pub mod util;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::{AppError, Result};
