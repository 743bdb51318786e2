//! Hash-based routing so the site works from static hosting.

/// Application routes.
/// URL format: `#/` for the landing page, `#/blogs/<folder>` for the browser
/// (e.g., `#/blogs`, `#/blogs/math/topology`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page with the featured posts
    Home,
    /// Blog directory browser
    Blogs {
        /// Folder relative to the blog root; empty for the root
        folder: String,
    },
}

const BLOGS_PREFIX: &str = "blogs";

impl AppRoute {
    pub fn blogs(folder: impl Into<String>) -> Self {
        Self::Blogs {
            folder: folder.into().trim_matches('/').to_string(),
        }
    }

    /// Parse URL hash into a route. Unknown paths land on the home page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');

        match path.strip_prefix(BLOGS_PREFIX) {
            Some("") => Self::blogs(""),
            Some(rest) if rest.starts_with('/') => Self::blogs(rest),
            _ => Self::Home,
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Blogs { folder } if folder.is_empty() => format!("#/{}", BLOGS_PREFIX),
            Self::Blogs { folder } => format!("#/{}/{}", BLOGS_PREFIX, folder),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        // Folder names with spaces arrive percent-encoded.
        let hash = js_sys::decode_uri_component(&hash)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or(hash);
        Self::from_hash(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/blogs"), AppRoute::blogs(""));
        assert_eq!(AppRoute::from_hash("#/blogs/"), AppRoute::blogs(""));
        assert_eq!(
            AppRoute::from_hash("#/blogs/math/topology/"),
            AppRoute::Blogs {
                folder: "math/topology".to_string(),
            }
        );
        assert_eq!(AppRoute::from_hash("#/blogsmith"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/about"), AppRoute::Home);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(AppRoute::blogs("").to_hash(), "#/blogs");
        assert_eq!(AppRoute::blogs("math/topology").to_hash(), "#/blogs/math/topology");
    }
}
