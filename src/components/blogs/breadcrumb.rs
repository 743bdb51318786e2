//! Breadcrumb trail above the blog listing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{breadcrumbs, AppRoute};

stylance::import_crate_style!(css, "src/components/blogs/breadcrumb.module.css");

/// Trail from the blog root to `folder`; every step but the last is a link.
#[component]
pub fn Breadcrumbs(#[prop(into)] folder: Signal<String>) -> impl IntoView {
    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                breadcrumbs(&folder.get())
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let separator = (idx > 0).then(|| view! { <span class=css::separator>"/"</span> });
                        let icon = (idx == 0).then(|| view! { <Icon icon=ic::HOME /> });
                        let step = if crumb.current {
                            view! {
                                <span class=css::segmentCurrent aria-current="page">
                                    {icon} {crumb.label}
                                </span>
                            }
                            .into_any()
                        } else {
                            view! {
                                <a class=css::segment href=AppRoute::blogs(crumb.path).to_hash()>
                                    {icon} {crumb.label}
                                </a>
                            }
                            .into_any()
                        };
                        view! { {separator} {step} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
