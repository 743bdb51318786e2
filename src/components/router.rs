//! Application router component.
//!
//! Handles URL-based routing with hash history so the site can be served
//! from static hosting. Uses native hashchange events instead of
//! leptos_router.
//!
//! - `#/` → Home page with featured posts
//! - `#/blogs` → Blog browser at the root
//! - `#/blogs/math/topology` → Blog browser inside a folder

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::blogs::BlogBrowser;
use crate::components::home::HomePage;
use crate::models::AppRoute;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // The browser stays mounted while moving between folders so an
    // in-flight listing can be cancelled by the next one.
    let folder = Memo::new(move |_| match route.get() {
        AppRoute::Blogs { folder } => Some(folder),
        AppRoute::Home => None,
    });

    view! {
        <Show
            when=move || folder.with(Option::is_some)
            fallback=|| view! { <HomePage /> }
        >
            <BlogBrowser folder=Signal::derive(move || folder.get().unwrap_or_default()) />
        </Show>
    }
}
