use contracts::enums::type_filter::TypeFilter;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Main view shown next to the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Employees,
    Categories,
}

impl ActiveView {
    pub fn code(&self) -> &'static str {
        match self {
            ActiveView::Employees => "employees",
            ActiveView::Categories => "categories",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "employees" => Some(ActiveView::Employees),
            "categories" => Some(ActiveView::Categories),
            _ => None,
        }
    }
}

/// Query string mirrored from the context: `?view=...&type=...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ViewQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_code: Option<String>,
}

fn parse_query(search: &str) -> (Option<ActiveView>, Option<TypeFilter>) {
    let query: ViewQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let view = query.view.as_deref().and_then(ActiveView::from_code);
    let type_filter = query
        .type_code
        .as_deref()
        .map(TypeFilter::from_code)
        .filter(|f| f.label().is_some());
    (view, type_filter)
}

fn to_query(view: ActiveView, type_filter: &TypeFilter) -> String {
    serde_qs::to_string(&ViewQuery {
        view: Some(view.code().to_string()),
        type_code: Some(type_filter.code().to_string()),
    })
    .unwrap_or_default()
}

/// View selector and category filter shared by the shell, the sidebar and
/// the employee list.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ActiveView>,
    pub selected_type: RwSignal<TypeFilter>,
}

impl AppGlobalContext {
    pub fn new(default_view: ActiveView, default_type: TypeFilter) -> Self {
        Self {
            active_view: RwSignal::new(default_view),
            selected_type: RwSignal::new(default_type),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let (view, type_filter) = parse_query(&search);
        if let Some(view) = view {
            self.show_view(view);
        }
        if let Some(type_filter) = type_filter {
            self.select_type(type_filter);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!(
                "?{}",
                to_query(this.active_view.get(), &this.selected_type.get())
            );

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn show_view(&self, view: ActiveView) {
        leptos::logging::log!("🔷 show_view: '{}'", view.code());
        self.active_view.set(view);
    }

    pub fn select_type(&self, type_filter: TypeFilter) {
        leptos::logging::log!("🔶 select_type: '{}'", type_filter.code());
        self.selected_type.set(type_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let (view, filter) = parse_query("?view=categories&type=university");
        assert_eq!(view, Some(ActiveView::Categories));
        assert_eq!(filter, Some(TypeFilter::from_code("university")));
    }

    #[test]
    fn test_parse_query_ignores_unknown_values() {
        assert_eq!(parse_query(""), (None, None));
        assert_eq!(parse_query("?view=payroll&type=interns"), (None, None));
        assert_eq!(
            parse_query("type=all"),
            (None, Some(TypeFilter::All))
        );
    }

    #[test]
    fn test_query_round_trip() {
        let query = to_query(ActiveView::Employees, &TypeFilter::from_code("part"));
        assert_eq!(query, "view=employees&type=part");
        assert_eq!(
            parse_query(&query),
            (Some(ActiveView::Employees), Some(TypeFilter::from_code("part")))
        );
    }
}
