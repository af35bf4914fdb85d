use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div
            data-zone="center"
            data-view=move || ctx.active_view.get().code()
            class="app-content"
            style="flex: 1; overflow: auto;"
        >
            {children()}
        </div>
    }
}
