//! Content loading for the blog pages.
//!
//! This module provides:
//! - [`ContentResolver`] and its fallback chain of [`Strategy`] values
//! - [`Fetch`], the transport seam the resolver is generic over
//! - [`CancelToken`] / [`CancelSlot`] to drop superseded resolutions
//! - [`parse_legacy_index`] for the pre-API `index.html`

mod cancel;
pub mod error;
mod fetch;
mod legacy;
mod resolver;

pub use cancel::{CancelSlot, CancelToken};
pub use error::{FetchError, ResolveError};
pub use fetch::Fetch;
pub use legacy::parse_legacy_index;
pub use resolver::{local_fallback, ContentResolver, Strategy};
