use googlebooks::{ImageLinks, Volume};
use serde::{Deserialize, Serialize};

use crate::images;

/// Normalized metadata record for one volume.
///
/// This is what gets cached and handed to the host application; absent
/// upstream fields collapse to empty rather than staying optional where
/// the UI always renders them (`title`, `authors`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<i64>,
    pub categories: Vec<String>,
    pub language: Option<String>,
    /// Cover URLs with HTTPS and max-quality parameters forced.
    pub image_links: ImageLinks,
    /// Best available cover URL, by size priority.
    pub preview_image: Option<String>,
}

impl BookMetadata {
    /// Normalize a raw catalog volume into the record the tracker uses.
    pub fn from_volume(volume: Volume) -> Self {
        let info = volume.volume_info;
        let image_links = images::normalize_links(info.image_links.unwrap_or_default());
        let preview_image = images::best_image(&image_links).map(str::to_string);

        Self {
            title: info.title.unwrap_or_default(),
            authors: info.authors.unwrap_or_default(),
            description: info.description,
            publisher: info.publisher,
            published_date: info.published_date,
            page_count: info.page_count,
            categories: info.categories.unwrap_or_default(),
            language: info.language,
            image_links,
            preview_image,
        }
    }
}
