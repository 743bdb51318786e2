//! Blog browser: breadcrumbs plus the folder and file cards of one folder.
//!
//! The listing comes from [`ContentResolver`](crate::core::ContentResolver).
//! Each folder change renews the cancel slot so a slow listing for the
//! previous folder can never replace the current one.

mod breadcrumb;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::cards::{EmptyState, ErrorPanel, FileCard, FolderCard, Loading};
use crate::components::icons as ic;
use crate::core::CancelSlot;
use crate::models::{ResolutionRequest, ResolutionResult, ROOT_LABEL};
use crate::utils::format::parent_path;

pub use breadcrumb::Breadcrumbs;

stylance::import_crate_style!(css, "src/components/blogs/blogs.module.css");

/// Heading for the folder being viewed.
fn folder_title(folder: &str) -> String {
    folder
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(ROOT_LABEL)
        .to_string()
}

#[component]
pub fn BlogBrowser(#[prop(into)] folder: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let slot = Rc::new(CancelSlot::new());

    let listing = LocalResource::new(move || {
        let request = ResolutionRequest::browse(&folder.get()).with_cancel(slot.renew());
        let resolver = ctx.resolver();
        async move { resolver.resolve(&request).await }
    });

    view! {
        <section class=css::browser>
            <header class=css::browserHeader>
                <h1 class=css::title>
                    <Icon icon=ic::FOLDER_OPEN />
                    {move || folder_title(&folder.get())}
                </h1>
                <Breadcrumbs folder=folder />
            </header>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || listing.get().map(|result| view! { <Listing result=result /> })}
            </Suspense>
        </section>
    }
}

/// Cards for a resolved folder, or the reason it could not be listed.
#[component]
fn Listing(result: ResolutionResult) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    match &result.outcome {
        // Superseded by a newer navigation; its own result is on the way.
        Err(err) if err.is_cancelled() => view! { <Loading /> }.into_any(),
        Err(err) => {
            let back = (!result.path.is_empty()).then(|| parent_path(&result.path));
            view! { <ErrorPanel message=err.to_string() back=back /> }.into_any()
        }
        Ok(_) if result.entries.is_empty() => view! { <EmptyState /> }.into_any(),
        Ok(source) => {
            let blog = ctx.blog();
            let folders: Vec<_> = result
                .folders()
                .map(|entry| {
                    let name = entry.name().to_string();
                    let path = result.entry_path(entry);
                    view! { <FolderCard name=name path=path /> }
                })
                .collect();
            let files: Vec<_> = result
                .files()
                .map(|entry| {
                    let href = result.file_link(&blog, entry);
                    view! { <FileCard entry=entry.clone() href=href /> }
                })
                .collect();

            let folder_section = (!folders.is_empty()).then(|| {
                view! {
                    <h2 class=css::sectionTitle>"Folders"</h2>
                    <div class=css::grid>{folders}</div>
                }
            });
            let file_section = (!files.is_empty()).then(|| {
                view! {
                    <h2 class=css::sectionTitle>"Files"</h2>
                    <div class=css::grid>{files}</div>
                }
            });

            view! {
                <div class=css::listing data-source=source.as_str()>
                    {folder_section}
                    {file_section}
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_title() {
        assert_eq!(folder_title(""), "Blogs");
        assert_eq!(folder_title("math"), "math");
        assert_eq!(folder_title("math/topology/"), "topology");
    }
}
