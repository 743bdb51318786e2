//! Root application module.
//!
//! Contains the main App component and the AppContext shared with every
//! page, following Leptos conventions.

use leptos::prelude::*;

use crate::components::{AppRouter, SiteHeader};
use crate::config::{site_config, BlogSource, SiteConfig};
use crate::core::ContentResolver;
use crate::models::Theme;
use crate::utils::{dom, WebFetcher};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; access it with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Colour theme (persisted on change).
    pub theme: RwSignal<Theme>,

    /// Site configuration loaded at startup.
    pub site: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(site: SiteConfig, theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(theme),
            site: StoredValue::new(site),
        }
    }

    /// Repository the blog pages list.
    pub fn blog(&self) -> BlogSource {
        self.site.with_value(|site| site.blog.clone())
    }

    /// Resolver backed by the browser's `fetch`.
    pub fn resolver(&self) -> ContentResolver<WebFetcher> {
        ContentResolver::new(WebFetcher::default(), self.blog())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Applies the stored theme and re-applies it on every toggle
/// - Renders the header and the routed page
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(site_config(), dom::stored_theme());
    provide_context(ctx);

    Effect::new(move |_| dom::apply_theme(ctx.theme.get()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    text-align: center;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul style="list-style: none; padding: 0;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <SiteHeader />
            <main>
                <AppRouter />
            </main>
        </ErrorBoundary>
    }
}
