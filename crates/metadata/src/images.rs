//! Cover image URL normalization and best-size selection

use googlebooks::ImageLinks;

/// Rewrite a cover URL for maximum rendering quality.
///
/// The catalog hands out `http://` URLs with thumbnail-grade `zoom` and
/// `img` query parameter values. Force the scheme to HTTPS and the
/// parameters to their highest-quality settings; parameters the URL does
/// not carry are left absent.
pub(crate) fn normalize_url(url: &str) -> String {
    let url = match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    };

    let Some((base, query)) = url.split_once('?') else {
        return url;
    };

    let rewritten: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("zoom", _)) => "zoom=3".to_string(),
            Some(("img", _)) => "img=1".to_string(),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, rewritten.join("&"))
}

/// Normalize every URL in an image-link set.
pub(crate) fn normalize_links(links: ImageLinks) -> ImageLinks {
    let rewrite = |url: Option<String>| url.map(|u| normalize_url(&u));
    ImageLinks {
        small_thumbnail: rewrite(links.small_thumbnail),
        thumbnail: rewrite(links.thumbnail),
        small: rewrite(links.small),
        medium: rewrite(links.medium),
        large: rewrite(links.large),
        extra_large: rewrite(links.extra_large),
    }
}

/// Pick the best available cover URL.
///
/// Priority order: extraLarge > large > medium > small > thumbnail.
pub(crate) fn best_image(links: &ImageLinks) -> Option<&str> {
    links
        .extra_large
        .as_deref()
        .or(links.large.as_deref())
        .or(links.medium.as_deref())
        .or(links.small.as_deref())
        .or(links.thumbnail.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_forces_https_and_quality() {
        assert_eq!(
            normalize_url("http://example.com/img?zoom=1&img=2"),
            "https://example.com/img?zoom=3&img=1"
        );
    }

    #[test]
    fn test_normalize_url_without_query() {
        assert_eq!(
            normalize_url("http://example.com/cover.jpg"),
            "https://example.com/cover.jpg"
        );
    }

    #[test]
    fn test_normalize_url_keeps_unrelated_params() {
        assert_eq!(
            normalize_url("http://books.google.com/books?id=zyTC&img=1&zoom=5&source=gbs_api"),
            "https://books.google.com/books?id=zyTC&img=1&zoom=3&source=gbs_api"
        );
    }

    #[test]
    fn test_normalize_url_already_https() {
        assert_eq!(
            normalize_url("https://example.com/img?zoom=5"),
            "https://example.com/img?zoom=3"
        );
    }

    #[test]
    fn test_best_image_prefers_extra_large() {
        let links = ImageLinks {
            thumbnail: Some("thumb".to_string()),
            extra_large: Some("xl".to_string()),
            ..Default::default()
        };
        assert_eq!(best_image(&links), Some("xl"));
    }

    #[test]
    fn test_best_image_falls_back_in_priority_order() {
        let links = ImageLinks {
            small_thumbnail: Some("st".to_string()),
            thumbnail: Some("thumb".to_string()),
            medium: Some("med".to_string()),
            ..Default::default()
        };
        assert_eq!(best_image(&links), Some("med"));

        let links = ImageLinks {
            small_thumbnail: Some("st".to_string()),
            thumbnail: Some("thumb".to_string()),
            ..Default::default()
        };
        assert_eq!(best_image(&links), Some("thumb"));
    }

    #[test]
    fn test_best_image_empty() {
        assert_eq!(best_image(&ImageLinks::default()), None);
    }
}
