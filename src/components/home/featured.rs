//! Featured posts widget: the first few files of the blog root.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::cards::{ErrorPanel, FileCard, Loading, ViewAllCard};
use crate::models::{Featured, ResolutionRequest, ResolutionResult};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn FeaturedPosts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let listing = LocalResource::new(move || {
        let resolver = ctx.resolver();
        async move { resolver.resolve(&ResolutionRequest::home()).await }
    });

    view! {
        <section class=css::section>
            <h2 class=css::sectionTitle>"Latest Posts"</h2>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || listing.get().map(|result| view! { <FeaturedGrid result=result /> })}
            </Suspense>
        </section>
    }
}

#[component]
fn FeaturedGrid(result: ResolutionResult) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if let Some(err) = result.error() {
        let message = format!("Failed to load blog posts. Error: {}", err);
        return view! { <ErrorPanel message=message back=None /> }.into_any();
    }

    let blog = ctx.blog();
    let featured = Featured::from_result(&result);
    let cards = featured
        .entries
        .iter()
        .map(|entry| {
            let href = result.file_link(&blog, entry);
            view! { <FileCard entry=entry.clone() href=href /> }
        })
        .collect_view();

    view! {
        <div class=css::featuredGrid>
            {cards}
            {featured.view_all.then(|| view! { <ViewAllCard /> })}
        </div>
    }
    .into_any()
}
