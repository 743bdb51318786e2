//! Profile sections of the home page.
//!
//! Every section fetches its own text file; a missing file leaves only that
//! section empty.

use leptos::prelude::*;
use leptos_icons::Icon;
use tracing::warn;

use crate::components::icons as ic;
use crate::config::content;
use crate::models::{Hero, SocialLink};
use crate::utils::fetch_content;
use crate::utils::html::{sanitize_fragment, text_with_line_breaks};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Load a site-relative text file, logging (not surfacing) failures.
fn text_resource(path: &'static str) -> LocalResource<Option<String>> {
    LocalResource::new(move || async move {
        match fetch_content(path).await {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(path, error = %err, "profile section unavailable");
                None
            }
        }
    })
}

#[component]
pub fn HeroBanner() -> impl IntoView {
    let text = text_resource(content::HERO);

    view! {
        <section class=css::hero>
            <Suspense fallback=|| ()>
                {move || text.get().flatten().map(|text| {
                    let hero = Hero::parse(&text);
                    view! {
                        <h1 class=css::heroName>{hero.name}</h1>
                        <p class=css::heroTitle>{hero.title}</p>
                    }
                })}
            </Suspense>
        </section>
    }
}

/// Titled section whose body is an authored HTML fragment.
#[component]
pub fn HtmlSection(title: &'static str, path: &'static str) -> impl IntoView {
    let text = text_resource(path);

    view! {
        <section class=css::section>
            <h2 class=css::sectionTitle>{title}</h2>
            <Suspense fallback=|| ()>
                {move || text.get().flatten().map(|html| view! {
                    <div class=css::sectionBody inner_html=sanitize_fragment(&html)></div>
                })}
            </Suspense>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let details = text_resource(content::CONTACT);
    let social = text_resource(content::SOCIAL);

    view! {
        <section class=css::section>
            <h2 class=css::sectionTitle>"Contact"</h2>
            <Suspense fallback=|| ()>
                {move || details.get().flatten().map(|text| view! {
                    <p class=css::contactDetails inner_html=text_with_line_breaks(&text)></p>
                })}
                {move || social.get().flatten().map(|text| view! {
                    <SocialLinks links=SocialLink::parse_list(&text) />
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class=css::socialLinks>
            {links
                .into_iter()
                .map(|link| {
                    let icon = ic::social_icon(link.icon());
                    view! {
                        <a
                            class=css::socialLink
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.platform.clone()
                            title=link.platform
                        >
                            <Icon icon=icon />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let text = text_resource(content::FOOTER);

    view! {
        <footer class=css::footer>
            <Suspense fallback=|| ()>
                {move || text.get().flatten().map(|text| view! { <p>{text.trim().to_string()}</p> })}
            </Suspense>
        </footer>
    }
}
