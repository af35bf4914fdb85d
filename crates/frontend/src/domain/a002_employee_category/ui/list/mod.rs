use crate::shared::data::RosterContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id_for, PAGE_CAT_LIST};
use contracts::domain::a002_employee_category::aggregate::{
    CategoryPriority, EmployeeCategory, EmployeeCategoryId,
};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use thaw::*;

// Row actions are not wired to any behavior yet.
fn on_show_employees(id: &EmployeeCategoryId) {
    log::debug!("category employees requested: {}", id.value());
}

fn on_edit_settings(id: &EmployeeCategoryId) {
    log::debug!("category settings requested: {}", id.value());
}

fn on_delete(id: &EmployeeCategoryId) {
    log::debug!("category delete requested: {}", id.value());
}

fn priority_color(priority: CategoryPriority) -> BadgeColor {
    match priority {
        CategoryPriority::Low => BadgeColor::Subtle,
        CategoryPriority::Medium => BadgeColor::Informative,
        CategoryPriority::High => BadgeColor::Warning,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeCategoryList() -> impl IntoView {
    let roster = use_context::<RosterContext>().expect("RosterContext not found in context");
    let categories = roster.categories.get_value();

    view! {
        <PageFrame page_id=page_id_for(&EmployeeCategory::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <p class="page__description">"勤務形態の追加、削除が操作できます。"</p>
                </div>
            </div>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=100.0>"ID"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"勤務形態"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"優先度"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=60.0>"リスト"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=60.0>"設定"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=60.0>"削除"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {categories
                            .into_iter()
                            .map(|category| {
                                let id_list = category.id.clone();
                                let id_settings = category.id.clone();
                                let id_delete = category.id.clone();
                                let label = category.priority_label();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {category.id.as_string()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {category.name}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge
                                                    appearance=BadgeAppearance::Tint
                                                    color=priority_color(category.priority)
                                                >
                                                    {label}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="この勤務形態の従業員一覧を表示"
                                                    on:click=move |_| on_show_employees(&id_list)
                                                >
                                                    {icon("users")}
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="勤務形態の設定を編集"
                                                    on:click=move |_| on_edit_settings(&id_settings)
                                                >
                                                    {icon("settings")}
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="この勤務形態を削除"
                                                    on:click=move |_| on_delete(&id_delete)
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
