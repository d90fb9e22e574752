//! Book metadata fetching with retry and caching
//!
//! This crate wraps the Google Books volume lookup in a cache-aside,
//! retry-on-failure routine and normalizes the response into the record
//! the reading tracker displays.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            BookMetadataFetcher               │
//! │  fetch(volume_id) -> Option<BookMetadata>    │
//! └──────────────────────────────────────────────┘
//!        │                          │
//!        ▽                          ▽
//! ┌───────────────┐         ┌───────────────┐
//! │ MetadataCache │         │ VolumeSource  │
//! │ (Memory/Noop) │         │ (Google Books)│
//! └───────────────┘         └───────────────┘
//! ```
//!
//! A cache hit short-circuits the network entirely. A miss goes through
//! a bounded retry loop; exhausting the retry budget degrades to `None`
//! rather than surfacing an error, so callers render a placeholder.

mod cache;
mod error;
mod fetcher;
mod images;
mod models;
mod source;

pub use cache::{MemoryCache, MetadataCache, NoopCache};
pub use error::FetchError;
pub use fetcher::{BookMetadataFetcher, RetryConfig};
pub use models::BookMetadata;
pub use source::VolumeSource;
