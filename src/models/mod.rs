//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Entry`], [`ResolutionRequest`], [`ResolutionResult`], [`Source`] - Blog listings
//! - [`Featured`] - The home page subset of a listing
//! - [`Crumb`] - Breadcrumb trail for the blog browser
//! - [`FileIcon`], [`SocialIcon`] - Semantic icon identifiers
//! - [`Hero`], [`SocialLink`] - Home page profile content
//! - [`AppRoute`] - Hash-based navigation
//! - [`Theme`] - Colour scheme preference

mod breadcrumb;
mod entry;
mod icon;
mod profile;
mod route;
mod theme;

pub use breadcrumb::{breadcrumbs, Crumb, ROOT_LABEL};
pub use entry::{
    Entry, Featured, ItemKind, LegacyPost, ListingItem, ResolutionRequest, ResolutionResult,
    Source,
};
pub use icon::{FileIcon, SocialIcon};
pub use profile::{Hero, SocialLink};
pub use route::AppRoute;
pub use theme::Theme;
