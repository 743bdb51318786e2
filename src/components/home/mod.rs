//! Home page: hero banner, profile sections and featured posts.

mod featured;
mod profile;

use leptos::prelude::*;

use crate::config::content;

use featured::FeaturedPosts;
use profile::{ContactSection, HeroBanner, HtmlSection, SiteFooter};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=css::home>
            <HeroBanner />
            <HtmlSection title="About" path=content::ABOUT />
            <HtmlSection title="Skills" path=content::SKILLS />
            <FeaturedPosts />
            <ContactSection />
            <SiteFooter />
        </div>
    }
}
