//! Standard root wrapper for a panel page.
//!
//! Sets `id` (`"{usecase}--{category}"`) and `data-page-category` on the
//! root element so a page can be found from the DOM inspector.

use leptos::prelude::*;

/// Action page (exports, conversions)
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{usecase}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
