use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::data::seed::load_seed;
use crate::shared::data::RosterContext;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // View selector and category filter for the whole app.
    provide_context(AppGlobalContext::new(
        config.default_view(),
        config.default_type_filter(),
    ));

    // In-memory roster; outlives view switches.
    let roster = load_seed()
        .and_then(RosterContext::from_seed)
        .unwrap_or_else(|e| {
            log::error!("failed to load seed data: {:#}", e);
            RosterContext::empty()
        });
    provide_context(roster);

    provide_context(config);

    view! {
        <AppShell />
    }
}
