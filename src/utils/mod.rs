//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`WebFetcher`], [`fetch_content`] - Network fetching with timeout
//! - [`format`] - Extension, icon and file name helpers
//! - [`html`] - Sanitized HTML fragments
//! - [`log`] - `tracing` bootstrap forwarding to the browser console

pub mod dom;
mod fetch;
pub mod format;
pub mod html;
pub mod log;

pub use fetch::{fetch_content, WebFetcher};
