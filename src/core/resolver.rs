//! Folder listing resolution.
//!
//! [`ContentResolver::resolve`] walks an ordered list of [`Strategy`]
//! values until one produces a listing:
//!
//! 1. [`Strategy::ApiListing`] - the repository contents API
//! 2. [`Strategy::LegacyIndex`] - JSON embedded in the old `index.html` (root only)
//! 3. [`Strategy::LocalFallback`] - compiled-in posts (home page root only)
//!
//! A failed API call for a sub-folder ends the chain: no other source knows
//! about folders. Errors never escape; they come back inside the
//! [`ResolutionResult`].

use tracing::{debug, info, warn};

use super::error::{FetchError, ResolveError};
use super::fetch::Fetch;
use super::legacy::parse_legacy_index;
use crate::config::{BlogSource, LOCAL_FALLBACK_POSTS};
use crate::models::{Entry, ItemKind, ListingItem, ResolutionRequest, ResolutionResult, Source};

/// Result of one strategy attempt.
#[derive(Debug)]
enum Step {
    /// Listing produced; stop.
    Resolved(Source, Vec<Entry>),
    /// Failed; the next strategy may still succeed.
    FallThrough(ResolveError),
    /// Failed; no later strategy applies.
    Fail(ResolveError),
    /// Skipped for this request.
    NotApplicable,
}

/// Data sources in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    ApiListing,
    LegacyIndex,
    LocalFallback,
}

impl Strategy {
    pub const CHAIN: [Strategy; 3] = [
        Strategy::ApiListing,
        Strategy::LegacyIndex,
        Strategy::LocalFallback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ApiListing => "api",
            Self::LegacyIndex => "legacy",
            Self::LocalFallback => "local-fallback",
        }
    }
}

/// Produces folder listings for the blog pages.
#[derive(Clone, Debug)]
pub struct ContentResolver<F> {
    fetcher: F,
    blog: BlogSource,
}

impl<F: Fetch> ContentResolver<F> {
    pub fn new(fetcher: F, blog: BlogSource) -> Self {
        Self { fetcher, blog }
    }

    pub fn blog(&self) -> &BlogSource {
        &self.blog
    }

    /// Resolve a folder listing. Never fails; see [`ResolutionResult::outcome`].
    pub async fn resolve(&self, request: &ResolutionRequest) -> ResolutionResult {
        let path = request.folder_path.as_str();
        let mut last_error = None;

        for strategy in Strategy::CHAIN {
            if request.is_cancelled() {
                debug!(path, "resolution cancelled");
                return ResolutionResult::failed(path, ResolveError::Cancelled);
            }

            let step = self.attempt(strategy, request).await;

            // A fetch may complete after the user has navigated away.
            if request.is_cancelled() {
                debug!(path, strategy = strategy.name(), "discarding stale result");
                return ResolutionResult::failed(path, ResolveError::Cancelled);
            }

            match step {
                Step::Resolved(source, entries) => {
                    info!(path, %source, count = entries.len(), "listing resolved");
                    return ResolutionResult::resolved(path, source, entries);
                }
                Step::Fail(err) => {
                    warn!(path, strategy = strategy.name(), status = ?err.status(), error = %err, "listing failed");
                    return ResolutionResult::failed(path, err);
                }
                Step::FallThrough(err) => {
                    warn!(path, strategy = strategy.name(), error = %err, "falling back");
                    last_error = Some(err);
                }
                Step::NotApplicable => {
                    debug!(path, strategy = strategy.name(), "strategy not applicable");
                }
            }
        }

        let err = last_error
            .unwrap_or_else(|| ResolveError::parse("listing", "no content source available"));
        warn!(path, error = %err, "all content sources failed");
        ResolutionResult::failed(path, err)
    }

    async fn attempt(&self, strategy: Strategy, request: &ResolutionRequest) -> Step {
        match strategy {
            Strategy::ApiListing => self.api_listing(request).await,
            Strategy::LegacyIndex if request.is_root() => self.legacy_index().await,
            Strategy::LocalFallback if request.is_root() && request.is_home_view => {
                Step::Resolved(Source::LocalFallback, local_fallback())
            }
            Strategy::LegacyIndex | Strategy::LocalFallback => Step::NotApplicable,
        }
    }

    async fn api_listing(&self, request: &ResolutionRequest) -> Step {
        let url = self.blog.listing_url(&request.folder_path);
        debug!(%url, "requesting directory listing");

        let listing = match self.fetcher.get_text(&url).await {
            Ok(body) => serde_json::from_str::<Vec<ListingItem>>(&body)
                .map_err(|e| ResolveError::parse("directory listing", e)),
            Err(err) => Err(listing_fetch_error(request, err)),
        };

        match listing {
            Ok(items) => Step::Resolved(Source::Api, partition(items)),
            Err(err) if request.is_root() => Step::FallThrough(err),
            Err(err) => Step::Fail(err),
        }
    }

    async fn legacy_index(&self) -> Step {
        let url = self.blog.legacy_index_url();
        debug!(%url, "requesting legacy index");

        let posts = match self.fetcher.get_text(&url).await {
            Ok(html) => parse_legacy_index(&html),
            Err(err) => Err(ResolveError::Network(err)),
        };

        match posts {
            Ok(posts) => Step::Resolved(
                Source::Legacy,
                posts.into_iter().map(Entry::from).collect(),
            ),
            Err(err) => Step::FallThrough(err),
        }
    }
}

/// HTTP failures inside a folder mean there is nothing to show for it.
fn listing_fetch_error(request: &ResolutionRequest, err: FetchError) -> ResolveError {
    match err {
        FetchError::HttpError(_) if !request.is_root() => ResolveError::NotFound {
            path: request.folder_path.clone(),
            cause: err,
        },
        other => ResolveError::Network(other),
    }
}

/// Folders first, then files, each in upstream order.
fn partition(items: Vec<ListingItem>) -> Vec<Entry> {
    let (folders, files): (Vec<_>, Vec<_>) = items
        .into_iter()
        .filter(|item| item.kind != ItemKind::Other)
        .partition(|item| item.kind == ItemKind::Dir);

    folders
        .into_iter()
        .map(|item| Entry::folder(item.name))
        .chain(files.into_iter().map(|item| Entry::file(item.name)))
        .collect()
}

/// The posts bundled with the site.
pub fn local_fallback() -> Vec<Entry> {
    LOCAL_FALLBACK_POSTS
        .iter()
        .map(|(file, title, date)| Entry::file_with_meta(*file, *title, *date))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::core::CancelToken;
    use crate::models::Featured;

    /// Fetcher answering from a fixed URL table; unknown URLs are 404s.
    #[derive(Default)]
    struct ScriptedFetch {
        responses: HashMap<String, Result<String, FetchError>>,
        calls: RefCell<Vec<String>>,
        cancel_after_call: Option<CancelToken>,
    }

    impl ScriptedFetch {
        fn with(mut self, url: String, response: Result<&str, FetchError>) -> Self {
            self.responses
                .insert(url, response.map(str::to_string));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Fetch for ScriptedFetch {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.calls.borrow_mut().push(url.to_string());
            if let Some(token) = &self.cancel_after_call {
                token.cancel();
            }
            self.responses
                .get(url)
                .cloned()
                .unwrap_or(Err(FetchError::HttpError(404)))
        }
    }

    fn blog() -> BlogSource {
        BlogSource::default()
    }

    const LEGACY_HTML: &str = r#"<html><body><div id="blog-list">
        [{"file": "old_post.pdf", "title": "Old Post", "date": "2023-03-01"},
         {"file": "index.html", "title": "Index", "date": ""}]
    </div></body></html>"#;

    fn names(result: &ResolutionResult) -> Vec<&str> {
        result.entries.iter().map(Entry::name).collect()
    }

    #[tokio::test]
    async fn test_api_listing_partitions_and_filters() {
        let fetch = ScriptedFetch::default().with(
            blog().listing_url(""),
            Ok(r#"[
                {"name": "first.md", "type": "file"},
                {"name": "math", "type": "dir"},
                {"name": "index.json", "type": "file"},
                {"name": "second.pdf", "type": "file"},
                {"name": "index.html", "type": "file"},
                {"name": "physics", "type": "dir"},
                {"name": "vendored", "type": "submodule"}
            ]"#),
        );
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::browse("")).await;

        assert_eq!(result.source(), Some(Source::Api));
        assert_eq!(
            names(&result),
            vec!["math", "physics", "first.md", "second.pdf"]
        );
        assert_eq!(result.entries[2], Entry::file("first.md"));
        assert_eq!(fetch.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_subfolder_failure_never_falls_back() {
        for is_home_view in [false, true] {
            let fetch = ScriptedFetch::default()
                .with(blog().listing_url("math"), Err(FetchError::HttpError(403)))
                .with(blog().legacy_index_url(), Ok(LEGACY_HTML));
            let resolver = ContentResolver::new(&fetch, blog());
            let request = ResolutionRequest {
                is_home_view,
                ..ResolutionRequest::browse("math")
            };

            let result = resolver.resolve(&request).await;

            assert!(result.entries.is_empty());
            assert_eq!(
                result.outcome,
                Err(ResolveError::NotFound {
                    path: "math".to_string(),
                    cause: FetchError::HttpError(403),
                })
            );
            assert_eq!(result.error().and_then(ResolveError::status), Some(403));
            assert_eq!(fetch.calls(), vec![blog().listing_url("math")]);
        }
    }

    #[tokio::test]
    async fn test_subfolder_transport_error_is_network() {
        let fetch = ScriptedFetch::default()
            .with(blog().listing_url("math"), Err(FetchError::Timeout));
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::browse("math")).await;

        assert_eq!(result.outcome, Err(ResolveError::Network(FetchError::Timeout)));
        assert_eq!(fetch.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_root_failure_uses_legacy_index() {
        let fetch = ScriptedFetch::default()
            .with(blog().legacy_index_url(), Ok(LEGACY_HTML));
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::browse("")).await;

        assert_eq!(result.source(), Some(Source::Legacy));
        assert_eq!(
            result.entries,
            vec![Entry::file_with_meta("old_post.pdf", "Old Post", "2023-03-01")]
        );
        assert_eq!(
            fetch.calls(),
            vec![blog().listing_url(""), blog().legacy_index_url()]
        );
    }

    #[tokio::test]
    async fn test_root_malformed_listing_falls_back() {
        let fetch = ScriptedFetch::default()
            .with(blog().listing_url(""), Ok("{\"message\": \"rate limited\"}"))
            .with(blog().legacy_index_url(), Ok(LEGACY_HTML));
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::browse("")).await;

        assert_eq!(result.source(), Some(Source::Legacy));
    }

    #[tokio::test]
    async fn test_home_view_ends_with_local_fallback() {
        let fetch = ScriptedFetch::default()
            .with(blog().legacy_index_url(), Ok("<html><body>moved</body></html>"));
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::home()).await;

        assert_eq!(result.source(), Some(Source::LocalFallback));
        assert_eq!(result.entries.len(), 3);
        assert_eq!(
            names(&result),
            vec![
                "Lp_spaces.pdf",
                "3_manifold.pdf",
                "Why_Homomorphism_Invocked__.pdf"
            ]
        );
        assert_eq!(fetch.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_browser_root_reports_legacy_error() {
        let fetch = ScriptedFetch::default()
            .with(blog().legacy_index_url(), Err(FetchError::HttpError(500)));
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::browse("")).await;

        assert!(result.entries.is_empty());
        assert_eq!(
            result.outcome,
            Err(ResolveError::Network(FetchError::HttpError(500)))
        );
    }

    #[tokio::test]
    async fn test_home_featured_slices_api_files() {
        let body = format!(
            "[{}]",
            (0..10)
                .map(|i| format!(r#"{{"name": "post_{}.md", "type": "file"}}"#, i))
                .collect::<Vec<_>>()
                .join(",")
        );
        let fetch = ScriptedFetch::default().with(blog().listing_url(""), Ok(body.as_str()));
        let resolver = ContentResolver::new(&fetch, blog());

        let result = resolver.resolve(&ResolutionRequest::home()).await;
        let featured = Featured::from_result(&result);

        assert_eq!(result.entries.len(), 10);
        let featured_names: Vec<_> = featured.entries.iter().map(Entry::name).collect();
        assert_eq!(featured_names, vec!["post_0.md", "post_1.md", "post_2.md"]);
        assert!(featured.view_all);
    }

    #[tokio::test]
    async fn test_reserved_files_absent_from_every_source() {
        let api = ScriptedFetch::default().with(
            blog().listing_url(""),
            Ok(r#"[{"name": "index.html", "type": "file"}, {"name": "index.json", "type": "file"}]"#),
        );
        let legacy = ScriptedFetch::default().with(blog().legacy_index_url(), Ok(LEGACY_HTML));
        let local = ScriptedFetch::default();

        for (fetch, request) in [
            (&api, ResolutionRequest::browse("")),
            (&legacy, ResolutionRequest::browse("")),
            (&local, ResolutionRequest::home()),
        ] {
            let result = ContentResolver::new(fetch, blog()).resolve(&request).await;
            assert!(result.outcome.is_ok());
            assert!(result.entries.iter().all(|e| !e.is_reserved()));
        }
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let fetch = ScriptedFetch::default();
        let token = CancelToken::new();
        token.cancel();
        let request = ResolutionRequest::home().with_cancel(token);

        let result = ContentResolver::new(&fetch, blog()).resolve(&request).await;

        assert_eq!(result.outcome, Err(ResolveError::Cancelled));
        assert!(fetch.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_mid_flight_discards_response() {
        let token = CancelToken::new();
        let fetch = ScriptedFetch {
            cancel_after_call: Some(token.clone()),
            ..ScriptedFetch::default()
        }
        .with(blog().listing_url(""), Ok("[]"));
        let request = ResolutionRequest::home().with_cancel(token);

        let result = ContentResolver::new(&fetch, blog()).resolve(&request).await;

        assert!(result.error().is_some_and(ResolveError::is_cancelled));
        assert_eq!(fetch.calls().len(), 1);
    }
}
