//! Application configuration.
//!
//! Centralizes the constants used throughout the site and the blog source
//! settings loaded at startup from `assets/site.toml` (embedded with
//! `include_str!`).

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Site configuration file, parsed once by [`site_config`].
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the log target prefix and document title.
pub const APP_NAME: &str = "folio";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
///
/// Bounds each step of the resolution chain.
pub const FETCH_TIMEOUT_MS: i32 = 5000;

// =============================================================================
// Blog Listing
// =============================================================================

/// Index and metadata files hidden from every listing.
pub const RESERVED_FILES: &[&str] = &["index.json", "index.html"];

/// Number of posts shown by the home page's featured widget.
pub const FEATURED_LIMIT: usize = 3;

/// `id` of the element holding the JSON payload in the legacy index page.
pub const LEGACY_LIST_ELEMENT_ID: &str = "blog-list";

/// Posts shown on the home page when neither the API nor the legacy index
/// can be reached: `(file, title, date)`.
pub const LOCAL_FALLBACK_POSTS: &[(&str, &str, &str)] = &[
    ("Lp_spaces.pdf", "Lp Spaces", "Mathematics"),
    ("3_manifold.pdf", "3-Manifold Theory", "Topology"),
    (
        "Why_Homomorphism_Invocked__.pdf",
        "Why Homomorphism Invocked",
        "Algebra",
    ),
];

// =============================================================================
// Home Page Content
// =============================================================================

/// Site-relative paths of the text files backing the home page sections.
pub mod content {
    /// Name and title, one per line.
    pub const HERO: &str = "data/hero.txt";
    /// HTML fragment for the about section.
    pub const ABOUT: &str = "data/about.txt";
    /// HTML fragment for the skills section.
    pub const SKILLS: &str = "data/skills.txt";
    /// Plain text contact details.
    pub const CONTACT: &str = "data/contact.txt";
    /// `platform|url` lines.
    pub const SOCIAL: &str = "data/social.txt";
    /// Footer line.
    pub const FOOTER: &str = "data/footer.txt";
}

// =============================================================================
// Preferences
// =============================================================================

/// localStorage key for the colour theme, the only persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Site Configuration
// =============================================================================

/// Errors raised while reading `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Repository that hosts the blog posts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogSource {
    /// Repository owner (user or organisation)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Directory inside the repository holding the posts
    pub base_path: String,
    /// Branch the legacy index is read from
    pub branch: String,
    /// Hosts the URLs are built against
    pub hosts: Hosts,
}

impl Default for BlogSource {
    fn default() -> Self {
        Self {
            owner: "jdoe".to_string(),
            repo: "portfolio".to_string(),
            base_path: "blogs".to_string(),
            branch: "main".to_string(),
            hosts: Hosts::default(),
        }
    }
}

/// Hostnames for the listing API, raw content and rendered pages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Hosts {
    pub api: String,
    pub raw: String,
    pub pages: String,
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            api: "api.github.com".to_string(),
            raw: "raw.githubusercontent.com".to_string(),
            pages: "github.io".to_string(),
        }
    }
}

impl BlogSource {
    /// Repository path of a folder: the base path, joined with `folder` when
    /// it is non-empty.
    pub fn repo_path(&self, folder: &str) -> String {
        let base = self.base_path.trim_matches('/');
        let folder = folder.trim_matches('/');
        match (base.is_empty(), folder.is_empty()) {
            (_, true) => base.to_string(),
            (true, false) => folder.to_string(),
            (false, false) => format!("{}/{}", base, folder),
        }
    }

    /// Directory listing endpoint for `folder`.
    pub fn listing_url(&self, folder: &str) -> String {
        format!(
            "https://{}/repos/{}/{}/contents/{}",
            self.hosts.api,
            self.owner,
            self.repo,
            self.repo_path(folder)
        )
    }

    /// Raw URL of the legacy index page.
    pub fn legacy_index_url(&self) -> String {
        format!(
            "https://{}/{}/{}/{}/{}/index.html",
            self.hosts.raw,
            self.owner,
            self.repo,
            self.branch,
            self.repo_path("")
        )
    }

    /// Rendered-page URL of a post, `path` being relative to the base path.
    pub fn file_url(&self, path: &str) -> String {
        format!(
            "https://{}.{}/{}/{}",
            self.owner,
            self.hosts.pages,
            self.repo,
            self.repo_path(path)
        )
    }

    /// Site-relative URL of a post bundled with the site itself.
    pub fn local_file_url(&self, name: &str) -> String {
        self.repo_path(name)
    }
}

/// Top-level shape of `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub blog: BlogSource,
}

impl SiteConfig {
    /// Parse a configuration document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Load the embedded site configuration.
///
/// A malformed file is logged and replaced by the defaults so the site still
/// renders.
pub fn site_config() -> SiteConfig {
    SiteConfig::from_toml(SITE_TOML).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default site configuration");
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> BlogSource {
        BlogSource {
            owner: "alice".to_string(),
            repo: "site".to_string(),
            ..BlogSource::default()
        }
    }

    #[test]
    fn test_listing_url_root_and_folder() {
        let src = source();
        assert_eq!(
            src.listing_url(""),
            "https://api.github.com/repos/alice/site/contents/blogs"
        );
        assert_eq!(
            src.listing_url("math/topology"),
            "https://api.github.com/repos/alice/site/contents/blogs/math/topology"
        );
    }

    #[test]
    fn test_legacy_index_url() {
        assert_eq!(
            source().legacy_index_url(),
            "https://raw.githubusercontent.com/alice/site/main/blogs/index.html"
        );
    }

    #[test]
    fn test_file_urls() {
        let src = source();
        assert_eq!(
            src.file_url("math/notes.pdf"),
            "https://alice.github.io/site/blogs/math/notes.pdf"
        );
        assert_eq!(src.local_file_url("Lp_spaces.pdf"), "blogs/Lp_spaces.pdf");
    }

    #[test]
    fn test_repo_path_trims_slashes() {
        let src = BlogSource {
            base_path: "/posts/".to_string(),
            ..source()
        };
        assert_eq!(src.repo_path("/a/b/"), "posts/a/b");
        assert_eq!(src.repo_path(""), "posts");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg = SiteConfig::from_toml(
            r#"
            [blog]
            owner = "bob"
            repo = "notes"

            [blog.hosts]
            pages = "pages.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.blog.owner, "bob");
        assert_eq!(cfg.blog.base_path, "blogs");
        assert_eq!(cfg.blog.branch, "main");
        assert_eq!(cfg.blog.hosts.api, "api.github.com");
        assert_eq!(cfg.blog.hosts.pages, "pages.example.org");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(SiteConfig::from_toml("[blog\nowner = ").is_err());
    }

    #[test]
    fn test_embedded_config_parses() {
        assert!(SiteConfig::from_toml(SITE_TOML).is_ok());
    }
}
