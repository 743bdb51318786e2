//! Site header with navigation and the theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{AppRoute, Theme};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class=css::header>
            <a class=css::brand href=AppRoute::Home.to_hash()>
                <Icon icon=ic::HOME />
                <span>"Home"</span>
            </a>
            <nav class=css::nav>
                <a class=css::navLink href=AppRoute::blogs("").to_hash()>
                    <Icon icon=ic::BOOK />
                    <span>"Blogs"</span>
                </a>
                <ThemeToggle />
            </nav>
        </header>
    }
}

/// Switches between light and dark; `App` persists and applies the change.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = ctx.theme;

    view! {
        <button
            class=css::themeToggle
            type="button"
            aria-label="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
            }}
        </button>
    }
}
