//! Cards and status panels shared by the home page and the blog browser.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{AppRoute, Entry};
use crate::utils::format::{extension_of, icon_for};

stylance::import_crate_style!(css, "src/components/cards.module.css");

/// Link into a sub-folder of the blog browser.
#[component]
pub fn FolderCard(name: String, path: String) -> impl IntoView {
    let href = AppRoute::blogs(path).to_hash();

    view! {
        <a class=format!("{} {}", css::card, css::folderCard) href=href>
            <span class=css::cardIcon>
                <Icon icon=ic::FOLDER />
            </span>
            <h3 class=css::cardTitle>{name}</h3>
            <span class=css::cardAction>"Open Folder"</span>
        </a>
    }
}

/// A post or document. Opens `href` in a new tab.
#[component]
pub fn FileCard(entry: Entry, href: String) -> impl IntoView {
    let kind = icon_for(&extension_of(entry.name()));
    let title = entry.title();
    let date = entry.date().map(str::to_string);
    let description = format!("Click to view {}", title);

    view! {
        <a
            class=format!("{} {}", css::card, css::fileCard)
            href=href
            target="_blank"
            rel="noopener noreferrer"
            title=entry.name().to_string()
        >
            <span class=css::cardIcon data-kind=kind.id()>
                <Icon icon=ic::file_icon(kind) />
            </span>
            <h3 class=css::cardTitle>{title}</h3>
            {date.map(|d| view! { <p class=css::cardDate>{d}</p> })}
            <p class=css::cardDescription>{description}</p>
            <span class=css::cardAction>"Open File"</span>
        </a>
    }
}

/// Trailing card on the home page linking to the full browser.
#[component]
pub fn ViewAllCard() -> impl IntoView {
    view! {
        <a class=format!("{} {}", css::card, css::viewAllCard) href=AppRoute::blogs("").to_hash()>
            <span class=css::cardIcon>
                <Icon icon=ic::BOOK />
            </span>
            <h3 class=css::cardTitle>"View All Posts"</h3>
            <p class=css::cardDescription>"Browse every folder and document"</p>
            <span class=css::cardAction>
                "Browse " <Icon icon=ic::ARROW_RIGHT />
            </span>
        </a>
    }
}

/// Error message with an optional link back to a folder.
#[component]
pub fn ErrorPanel(message: String, back: Option<String>) -> impl IntoView {
    view! {
        <div class=css::errorPanel role="alert">
            <span class=css::panelIcon>
                <Icon icon=ic::WARNING />
            </span>
            <p class=css::panelMessage>{message}</p>
            {back.map(|path| view! {
                <a class=css::panelLink href=AppRoute::blogs(path).to_hash()>
                    <Icon icon=ic::ARROW_LEFT />
                    " Go Back"
                </a>
            })}
        </div>
    }
}

/// Shown when a folder resolves with no entries.
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class=css::emptyState>
            <span class=css::panelIcon>
                <Icon icon=ic::EMPTY />
            </span>
            <p class=css::panelMessage>"No content found in this folder."</p>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class=css::loading aria-busy="true">
            <span class=css::spinner></span>
            <span>"Loading..."</span>
        </div>
    }
}
