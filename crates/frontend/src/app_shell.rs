//! Application shell: sidebar, header and the active main view.

use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_employee_category::ui::list::EmployeeCategoryList;
use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

/// Main application layout.
///
/// Initializes router integration so that the view and the category filter
/// are mirrored in the URL (`?view=...&type=...`).
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();

    let selected_type = Signal::derive(move || ctx.selected_type.get());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || {
                        let active = ctx.active_view.get();
                        log!("📋 rendering view '{}'", active.code());
                        match active {
                            ActiveView::Employees => {
                                view! { <EmployeeList selected_type=selected_type /> }.into_any()
                            }
                            ActiveView::Categories => view! { <EmployeeCategoryList /> }.into_any(),
                        }
                    }}
                }
                .into_any()
            }
        />
    }
}
