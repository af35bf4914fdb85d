//! Sidebar: brand, view navigation and the category filter list.
//!
//! Holds no state of its own; every click is forwarded to `AppGlobalContext`.

use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::enums::type_filter::{TypeFilter, SIDEBAR_TYPE_FILTERS};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct NavEntry {
    view: ActiveView,
    label: &'static str,
    icon: &'static str,
}

const EMPLOYEES_ENTRY: NavEntry = NavEntry {
    view: ActiveView::Employees,
    label: "従業員一覧",
    icon: "users",
};

const CATEGORIES_ENTRY: NavEntry = NavEntry {
    view: ActiveView::Categories,
    label: "勤務形態管理",
    icon: "settings",
};

const FILTER_GROUP_LABEL: &str = "勤務形態別";

#[component]
fn NavItem(entry: NavEntry) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let view = entry.view;

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active_view.get() == view
            style:padding-left="12px"
            on:click=move |_| ctx.show_view(view)
        >
            <div class="app-sidebar__item-content">
                {icon(entry.icon)}
                <span>{entry.label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().unwrap_or_default();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <img class="app-sidebar__logo" src=config.app.logo alt="" />
                <span class="app-sidebar__brand-name">{config.app.brand}</span>
            </div>

            <NavItem entry=EMPLOYEES_ENTRY />

            <div class="app-sidebar__group">
                <div class="app-sidebar__group-label" style:padding-left="12px">
                    {FILTER_GROUP_LABEL}
                </div>
                <div class="app-sidebar__children">
                    {SIDEBAR_TYPE_FILTERS
                        .iter()
                        .map(|(code, label)| {
                            let filter = StoredValue::new(TypeFilter::from_code(code));
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.selected_type.with(|t| *t == filter.get_value())
                                    }
                                    style:padding-left="10px"
                                    on:click=move |_| ctx.select_type(filter.get_value())
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon("chevron-right")}
                                        <span>{*label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <NavItem entry=CATEGORIES_ENTRY />
        </div>
    }
}
