use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::shared::icons::icon;
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a002_employee_category::aggregate::EmployeeCategory;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

fn title_for(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Employees => Employee::list_name(),
        ActiveView::Categories => EmployeeCategory::list_name(),
    }
}

fn add_label_for(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Employees => "従業員を追加する",
        ActiveView::Categories => "勤務形態を追加する",
    }
}

// The header add button has no behavior of its own; the employee list
// carries the working add button.
fn on_header_add(view: ActiveView) {
    log::debug!("header add clicked on '{}'", view.code());
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">{move || title_for(ctx.active_view.get())}</h1>
            </div>
            <div class="header__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_header_add(ctx.active_view.get_untracked())
                >
                    {icon("plus")}
                    {move || add_label_for(ctx.active_view.get())}
                </Button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_texts_follow_view() {
        assert_eq!(title_for(ActiveView::Employees), "従業員一覧");
        assert_eq!(title_for(ActiveView::Categories), "勤務形態");
        assert_eq!(add_label_for(ActiveView::Employees), "従業員を追加する");
        assert_eq!(add_label_for(ActiveView::Categories), "勤務形態を追加する");
    }
}
