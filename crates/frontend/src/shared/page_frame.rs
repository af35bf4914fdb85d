//! PageFrame: standard root wrapper for every page shown next to the sidebar.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a001_employee--list"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```rust,ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::{page_id_for, PAGE_CAT_LIST};
//!
//! #[component]
//! pub fn MyList() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id=page_id_for("a001_employee", PAGE_CAT_LIST) category=PAGE_CAT_LIST>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "unknown page category: {category}");

    view! {
        <div
            id=page_id
            class="page"
            data-page-category=category
        >
            {children()}
        </div>
    }
}
