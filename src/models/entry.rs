//! Listing entries and resolution results.

use std::fmt;

use serde::Deserialize;

use crate::config::{BlogSource, FEATURED_LIMIT, RESERVED_FILES};
use crate::core::{CancelToken, ResolveError};
use crate::utils::format::{display_name, join_path};

// =============================================================================
// Entry
// =============================================================================

/// A folder or file shown in a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Folder {
        name: String,
    },
    File {
        name: String,
        /// Display title supplied by the source (legacy index, local list)
        title: Option<String>,
        /// Free-form date or category line
        date: Option<String>,
    },
}

impl Entry {
    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder { name: name.into() }
    }

    /// A file known only by name (directory listing).
    pub fn file(name: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            title: None,
            date: None,
        }
    }

    pub fn file_with_meta(
        name: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::File {
            name: name.into(),
            title: Some(title.into()),
            date: Some(date.into()),
        }
    }

    /// Path segment identifying this entry.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name } | Self::File { name, .. } => name,
        }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Index and metadata files are never listed.
    pub fn is_reserved(&self) -> bool {
        RESERVED_FILES.contains(&self.name())
    }

    /// Heading for the card: the source's title, else the prettified name.
    pub fn title(&self) -> String {
        match self {
            Self::Folder { name } => name.clone(),
            Self::File {
                title: Some(title), ..
            } => title.clone(),
            Self::File { name, .. } => display_name(name),
        }
    }

    pub fn date(&self) -> Option<&str> {
        match self {
            Self::File { date, .. } => date.as_deref(),
            Self::Folder { .. } => None,
        }
    }
}

// =============================================================================
// Upstream payloads
// =============================================================================

/// Item kind reported by the contents API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Dir,
    /// Symlinks, submodules and anything newer
    #[serde(other)]
    Other,
}

/// One element of the contents API response.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// One element of the legacy index payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LegacyPost {
    pub file: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl From<LegacyPost> for Entry {
    fn from(post: LegacyPost) -> Self {
        Self::File {
            name: post.file,
            title: post.title,
            date: post.date,
        }
    }
}

// =============================================================================
// Request / Result
// =============================================================================

/// Where a listing came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Api,
    Legacy,
    LocalFallback,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Legacy => "legacy",
            Self::LocalFallback => "local-fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to resolve.
///
/// The folder path travels with the request (and back on the result)
/// instead of living in shared state.
#[derive(Clone, Debug, Default)]
pub struct ResolutionRequest {
    /// Folder relative to the blog base path; empty for the root
    pub folder_path: String,
    /// Set by the home page's featured widget, which may use the local list
    pub is_home_view: bool,
    pub cancel: Option<CancelToken>,
}

impl ResolutionRequest {
    /// Featured-posts request from the landing page.
    pub fn home() -> Self {
        Self {
            folder_path: String::new(),
            is_home_view: true,
            cancel: None,
        }
    }

    /// Directory browser request for `folder`.
    pub fn browse(folder: &str) -> Self {
        Self {
            folder_path: folder.trim_matches('/').to_string(),
            is_home_view: false,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.folder_path.is_empty()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// Ordered entries for one folder, tagged with their source or an error.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolutionResult {
    /// Folder the entries belong to
    pub path: String,
    pub entries: Vec<Entry>,
    pub outcome: Result<Source, ResolveError>,
}

impl ResolutionResult {
    pub fn resolved(path: impl Into<String>, source: Source, entries: Vec<Entry>) -> Self {
        Self {
            path: path.into(),
            entries: entries.into_iter().filter(|e| !e.is_reserved()).collect(),
            outcome: Ok(source),
        }
    }

    pub fn failed(path: impl Into<String>, error: ResolveError) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            outcome: Err(error),
        }
    }

    pub fn source(&self) -> Option<Source> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&ResolveError> {
        self.outcome.as_ref().err()
    }

    pub fn folders(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_folder())
    }

    pub fn files(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    /// Path of an entry relative to the blog base path.
    pub fn entry_path(&self, entry: &Entry) -> String {
        join_path(&self.path, entry.name())
    }

    /// Link target for a file card.
    ///
    /// Locally bundled posts are served by the site itself; everything else
    /// points at the rendered repository pages.
    pub fn file_link(&self, blog: &BlogSource, entry: &Entry) -> String {
        match self.source() {
            Some(Source::LocalFallback) => blog.local_file_url(entry.name()),
            _ => blog.file_url(&self.entry_path(entry)),
        }
    }
}

// =============================================================================
// Featured list
// =============================================================================

/// Home page subset of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Featured {
    /// At most [`FEATURED_LIMIT`] files, in listing order
    pub entries: Vec<Entry>,
    /// Whether to append the "view all" card
    pub view_all: bool,
}

impl Featured {
    pub fn from_result(result: &ResolutionResult) -> Self {
        Self {
            entries: result.files().take(FEATURED_LIMIT).cloned().collect(),
            view_all: result.outcome.is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FetchError;

    #[test]
    fn test_listing_item_kinds() {
        let items: Vec<ListingItem> = serde_json::from_str(
            r#"[
                {"name": "a.md", "type": "file", "size": 10},
                {"name": "math", "type": "dir"},
                {"name": "link", "type": "symlink"}
            ]"#,
        )
        .unwrap();
        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![ItemKind::File, ItemKind::Dir, ItemKind::Other]);
    }

    #[test]
    fn test_legacy_post_optional_fields() {
        let post: LegacyPost = serde_json::from_str(r#"{"file": "a.pdf"}"#).unwrap();
        assert_eq!(Entry::from(post), Entry::file("a.pdf"));
    }

    #[test]
    fn test_entry_title() {
        assert_eq!(Entry::file("my_first_post.md").title(), "my first post");
        assert_eq!(
            Entry::file_with_meta("a.pdf", "Lp Spaces", "Mathematics").title(),
            "Lp Spaces"
        );
        assert_eq!(Entry::folder("math").title(), "math");
        assert_eq!(Entry::file("a.md").date(), None);
    }

    #[test]
    fn test_resolved_drops_reserved_files() {
        let result = ResolutionResult::resolved(
            "",
            Source::Legacy,
            vec![
                Entry::file("index.html"),
                Entry::file("post.md"),
                Entry::file("index.json"),
            ],
        );
        assert_eq!(result.entries, vec![Entry::file("post.md")]);
    }

    #[test]
    fn test_file_link_by_source() {
        let blog = BlogSource::default();
        let api = ResolutionResult::resolved("math", Source::Api, vec![]);
        assert_eq!(
            api.file_link(&blog, &Entry::file("a.pdf")),
            "https://jdoe.github.io/portfolio/blogs/math/a.pdf"
        );
        let local = ResolutionResult::resolved("", Source::LocalFallback, vec![]);
        assert_eq!(local.file_link(&blog, &Entry::file("a.pdf")), "blogs/a.pdf");
    }

    #[test]
    fn test_featured_takes_first_three_files_in_order() {
        let mut entries = vec![Entry::folder("math")];
        entries.extend((0..10).map(|i| Entry::file(format!("post_{}.md", i))));
        let result = ResolutionResult::resolved("", Source::Api, entries);

        let featured = Featured::from_result(&result);
        let names: Vec<_> = featured.entries.iter().map(Entry::name).collect();
        assert_eq!(names, vec!["post_0.md", "post_1.md", "post_2.md"]);
        assert!(featured.view_all);
    }

    #[test]
    fn test_featured_on_error_has_no_view_all() {
        let result = ResolutionResult::failed("", FetchError::Timeout.into());
        let featured = Featured::from_result(&result);
        assert!(featured.entries.is_empty());
        assert!(!featured.view_all);
    }

    #[test]
    fn test_browse_request_trims_slashes() {
        let req = ResolutionRequest::browse("/math/topology/");
        assert_eq!(req.folder_path, "math/topology");
        assert!(!req.is_root());
        assert!(ResolutionRequest::home().is_root());
    }
}
