use super::view_model::EmployeeDetailsViewModel;
use crate::shared::data::RosterContext;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_employee::aggregate::EmployeeDto;
use contracts::enums::employment_type::EmploymentType;
use leptos::prelude::*;
use thaw::*;

fn text_field(
    vm: EmployeeDetailsViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&EmployeeDto) -> &String,
    set: fn(&mut EmployeeDto, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                class="form__input"
                type=input_type
                id=id
                prop:value=move || vm.field(get)
                on:input=move |ev| vm.set_field(set, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn EmployeeDetails(vm: EmployeeDetailsViewModel) -> impl IntoView {
    let roster = use_context::<RosterContext>().expect("RosterContext not found in context");

    let on_close = Callback::new(move |_| vm.cancel());

    view! {
        <ModalFrame on_close=on_close modal_class="employee-modal".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{move || vm.title()}</h2>
                <button
                    class="button button--ghost button--small"
                    title="閉じる"
                    on:click=move |_| vm.cancel()
                >
                    {icon("x")}
                </button>
            </div>

            <div class="detail-form">
                {text_field(vm, "employee-name", "名前", "text", |d| &d.name, |d, v| d.name = v)}
                {text_field(vm, "employee-age", "年齢", "number", |d| &d.age, |d, v| d.age = v)}

                <div class="form__group">
                    <label class="form__label" for="employee-type">"勤務形態"</label>
                    <select
                        class="form__select"
                        id="employee-type"
                        on:change=move |ev| vm.set_type(&event_target_value(&ev))
                    >
                        {EmploymentType::all()
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option value=t.code() selected=move || vm.is_type_selected(t)>
                                        {t.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                {text_field(vm, "employee-wage", "時給", "number", |d| &d.wage, |d, v| d.wage = v)}
                {text_field(vm, "employee-department", "担当部署", "text", |d| &d.department, |d, v| d.department = v)}
                {text_field(vm, "employee-line-id", "LINE ID", "text", |d| &d.line_id, |d, v| d.line_id = v)}
            </div>

            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="modal-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel()>
                    "キャンセル"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(roster.employees)
                >
                    {move || vm.submit_label()}
                </Button>
            </div>
        </ModalFrame>
    }
}
