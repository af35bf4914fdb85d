pub mod state;

use self::state::create_state;
use crate::domain::a001_employee::ui::details::{EmployeeDetails, EmployeeDetailsViewModel};
use crate::shared::components::table::TableCellWage;
use crate::shared::data::RosterContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id_for, PAGE_CAT_LIST};
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a001_employee::filter::EmployeeFilter;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::enums::type_filter::TypeFilter;
use leptos::prelude::*;
use thaw::*;

/// Header label and minimum width per column; the empty-state row spans all of them.
const COLUMNS: [(&str, f64); 8] = [
    ("ID", 80.0),
    ("名前", 140.0),
    ("年齢", 60.0),
    ("時給", 90.0),
    ("勤務形態", 160.0),
    ("担当部署", 120.0),
    ("LINE ID", 120.0),
    ("", 80.0),
];

fn empty_row_span() -> String {
    COLUMNS.len().to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList(
    /// Category chosen in the sidebar
    #[prop(into)]
    selected_type: Signal<TypeFilter>,
) -> impl IntoView {
    let roster = use_context::<RosterContext>().expect("RosterContext not found in context");
    let state = create_state();
    let vm = EmployeeDetailsViewModel::new();

    let visible = Memo::new(move |_| {
        let filter = EmployeeFilter::new(selected_type.get(), state.search_query.get());
        roster.employees.with(|store| filter.apply(store.items()))
    });

    let handle_edit = move |employee: Employee| vm.open_edit(&employee);

    view! {
        <PageFrame page_id=page_id_for(&Employee::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <div style="width: 360px; display: flex; align-items: center; gap: 6px;">
                        {icon("search")}
                        <Input
                            value=state.search_query
                            placeholder="名前、勤務形態、担当部署を検索"
                        />
                    </div>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || visible.with(|rows| rows.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_add()>
                        {icon("user-plus")}
                        " 従業員を追加"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {COLUMNS
                                .iter()
                                .map(|(label, min_width)| {
                                    view! {
                                        <TableHeaderCell resizable=false min_width=*min_width>
                                            {*label}
                                        </TableHeaderCell>
                                    }
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=empty_row_span() attr:style="text-align: center;">
                                            <TableCellLayout>
                                                <span class="text-muted">"該当する従業員がいません"</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            rows.into_iter()
                                .map(|employee| {
                                    let for_edit = employee.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.id.as_string()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{employee.age}</TableCellLayout>
                                            </TableCell>
                                            <TableCellWage value=employee.wage />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.employment_type.display_name()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.department}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.line_id}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| handle_edit(for_edit.clone())
                                                    >
                                                        "編集"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <Show when=vm.is_open()>
                <EmployeeDetails vm=vm />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_match_row_cells() {
        // ID, name, age, wage, type, department, LINE ID, edit button
        assert_eq!(empty_row_span(), "8");
        assert_eq!(COLUMNS[3].0, "時給");
        assert_eq!(COLUMNS[7].0, "");
        assert!(COLUMNS.iter().all(|(_, w)| *w > 0.0));
    }
}
