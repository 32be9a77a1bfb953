mod client;

pub use client::{ApiClient, localize_timestamps};
