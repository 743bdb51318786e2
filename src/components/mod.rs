//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`header`] - Site header, navigation and theme toggle
//! - [`home`] - Home page with profile sections and featured posts
//! - [`blogs`] - Blog browser with breadcrumbs
//! - [`cards`] - Cards and status panels shared by both pages
//! - [`icons`] - Centralized icon definitions

pub mod blogs;
pub mod cards;
pub mod header;
pub mod home;
pub mod icons;
pub mod router;

pub use header::SiteHeader;
pub use router::AppRouter;
