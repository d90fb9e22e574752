mod client;
mod error;
pub mod models;
mod volumes;

pub use client::GoogleBooksClient;
pub use error::GoogleBooksError;
pub use models::{ImageLinks, Volume, VolumeInfo};

pub type Result<T> = std::result::Result<T, GoogleBooksError>;
