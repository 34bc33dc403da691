//! Image CDN URLs.

/// Image width bucket served by the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W200,
    W300,
    W400,
    W500,
    Original,
}

impl ImageSize {
    fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W200 => "w200",
            ImageSize::W300 => "w300",
            ImageSize::W400 => "w400",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// What a missing image is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Poster,
    Profile,
    Still,
}

impl Placeholder {
    pub fn url(&self) -> &'static str {
        match self {
            Placeholder::Poster => "https://via.placeholder.com/300x450?text=No+Image",
            Placeholder::Profile => "https://via.placeholder.com/200x300?text=No+Image",
            Placeholder::Still => "https://via.placeholder.com/150x85?text=No+Image",
        }
    }
}

/// Builds image URLs from the path fragments the API returns.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base: String,
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new("https://image.tmdb.org/t/p")
    }
}

impl ImageUrls {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// URL for `path`, or `None` when the API sent no path.
    pub fn url(&self, size: ImageSize, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty()).map(|p| {
            let sep = if p.starts_with('/') { "" } else { "/" };
            format!("{}/{}{}{}", self.base, size.as_str(), sep, p)
        })
    }

    /// URL for `path`, falling back to a placeholder image.
    pub fn or_placeholder(
        &self,
        size: ImageSize,
        path: Option<&str>,
        placeholder: Placeholder,
    ) -> String {
        self.url(size, path)
            .unwrap_or_else(|| placeholder.url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_building() {
        let urls = ImageUrls::default();
        assert_eq!(
            urls.url(ImageSize::W500, Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(urls.url(ImageSize::Original, None), None);
        assert_eq!(urls.url(ImageSize::Original, Some("")), None);
    }

    #[test]
    fn test_missing_path_uses_placeholder() {
        let urls = ImageUrls::new("https://cdn.example/t/p/");
        assert_eq!(
            urls.or_placeholder(ImageSize::W300, None, Placeholder::Still),
            "https://via.placeholder.com/150x85?text=No+Image"
        );
        assert_eq!(
            urls.or_placeholder(ImageSize::W200, Some("/p.jpg"), Placeholder::Profile),
            "https://cdn.example/t/p/w200/p.jpg"
        );
    }
}
