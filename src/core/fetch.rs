//! Transport seam used by the resolver.
//!
//! The browser implementation lives in [`crate::utils::WebFetcher`]; tests
//! drive the resolver with a scripted fetcher instead.

use async_trait::async_trait;

use super::error::FetchError;

/// Fetch the body of a URL as text.
///
/// Implementations report non-OK statuses as [`FetchError::HttpError`].
#[async_trait(?Send)]
pub trait Fetch {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait(?Send)]
impl<'a, T: Fetch + ?Sized> Fetch for &'a T {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).get_text(url).await
    }
}
