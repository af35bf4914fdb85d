use super::model::EmployeeEditor;
use contracts::domain::a001_employee::aggregate::{Employee, EmployeeDto};
use contracts::domain::a001_employee::store::EmployeeStore;
use contracts::enums::employment_type::EmploymentType;
use leptos::logging::log;
use leptos::prelude::*;

/// ViewModel for the employee add/edit modal
///
/// - `editor` is `None` while the modal is closed
/// - fields are edited on the draft only; the store changes in `save_command`
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub editor: RwSignal<Option<EmployeeEditor>>,
    pub error: RwSignal<Option<String>>,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            editor: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn open_add(&self) {
        self.error.set(None);
        self.editor.set(Some(EmployeeEditor::for_add()));
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.error.set(None);
        self.editor.set(Some(EmployeeEditor::for_edit(employee)));
    }

    pub fn is_open(&self) -> impl Fn() -> bool + Send + Sync + 'static {
        let editor = self.editor;
        move || editor.with(|e| e.is_some())
    }

    pub fn title(&self) -> &'static str {
        self.editor
            .with(|e| e.as_ref().map(EmployeeEditor::title).unwrap_or_default())
    }

    pub fn submit_label(&self) -> &'static str {
        self.editor
            .with(|e| e.as_ref().map(EmployeeEditor::submit_label).unwrap_or_default())
    }

    /// Read one draft field; empty when the modal is closed.
    pub fn field(&self, get: fn(&EmployeeDto) -> &String) -> String {
        self.editor
            .with(|e| e.as_ref().map(|ed| get(ed.draft()).clone()).unwrap_or_default())
    }

    pub fn set_field(&self, set: fn(&mut EmployeeDto, String), value: String) {
        self.editor.update(|e| {
            if let Some(ed) = e.as_mut() {
                set(ed.draft_mut(), value);
            }
        });
    }

    /// Whether `option` is the draft's employment type; drives `<option selected>`.
    pub fn is_type_selected(&self, option: EmploymentType) -> bool {
        self.editor
            .with(|e| e.as_ref().is_some_and(|ed| ed.draft().employment_type == option))
    }

    pub fn set_type(&self, code: &str) {
        let Some(employment_type) = EmploymentType::from_code(code) else {
            log::warn!("unknown employment type code: {}", code);
            return;
        };
        self.editor.update(|e| {
            if let Some(ed) = e.as_mut() {
                ed.draft_mut().employment_type = employment_type;
            }
        });
    }

    /// Close without touching the store
    pub fn cancel(&self) {
        self.editor.set(None);
        self.error.set(None);
    }

    /// Commit the draft into `store` and close. Keeps the modal open on error.
    pub fn save_command(&self, store: RwSignal<EmployeeStore>) {
        let Some(editor) = self.editor.get_untracked() else {
            return;
        };

        let mut next = store.get_untracked();
        match editor.commit(&mut next) {
            Ok(id) => {
                log!("💾 Employee saved: {} ({:?})", id, editor.mode());
                store.set(next);
                self.cancel();
            }
            Err(e) => {
                log::warn!("employee form rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }
}

impl Default for EmployeeDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::aggregate::EmployeeId;

    fn employee(id: &str, name: &str, t: EmploymentType) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            name: name.into(),
            age: 25,
            employment_type: t,
            department: "キッチン".into(),
            wage: 1200,
            line_id: format!("@{id}"),
        }
    }

    fn seed_store() -> EmployeeStore {
        EmployeeStore::from_seed(vec![
            employee("1234", "田中 真弓", EmploymentType::Highschool),
            employee("1235", "山田 太郎", EmploymentType::University),
            employee("1236", "大澤 隼人", EmploymentType::Other),
        ])
        .unwrap()
    }

    fn selected_types(vm: &EmployeeDetailsViewModel) -> Vec<EmploymentType> {
        EmploymentType::all()
            .into_iter()
            .filter(|t| vm.is_type_selected(*t))
            .collect()
    }

    #[test]
    fn test_save_without_open_editor_is_noop() {
        Owner::new().with(|| {
            let store = RwSignal::new(seed_store());
            let vm = EmployeeDetailsViewModel::new();

            vm.save_command(store);

            assert_eq!(store.get_untracked(), seed_store());
            assert!(!vm.is_open()());
            assert_eq!(vm.error.get_untracked(), None);
        });
    }

    #[test]
    fn test_add_save_appends_and_closes() {
        Owner::new().with(|| {
            let store = RwSignal::new(seed_store());
            let vm = EmployeeDetailsViewModel::new();

            vm.open_add();
            assert!(vm.is_open()());
            assert_eq!(vm.title(), "従業員の追加");
            assert_eq!(vm.submit_label(), "追加");
            vm.set_field(|d, v| d.name = v, "佐藤 花子".into());
            vm.set_field(|d, v| d.wage = v, "1100".into());
            vm.set_type("university");

            vm.save_command(store);

            assert!(!vm.is_open()());
            assert_eq!(vm.editor.get_untracked(), None);
            assert_eq!(vm.error.get_untracked(), None);
            let items = store.get_untracked().items().to_vec();
            assert_eq!(items.len(), 4);
            assert_eq!(&items[..3], seed_store().items());
            assert_eq!(items[3].name, "佐藤 花子");
            assert_eq!(items[3].wage, 1100);
            assert_eq!(items[3].employment_type, EmploymentType::University);
        });
    }

    #[test]
    fn test_rejected_save_keeps_modal_open() {
        Owner::new().with(|| {
            let store = RwSignal::new(seed_store());
            let vm = EmployeeDetailsViewModel::new();

            vm.open_edit(&seed_store().items()[1]);
            vm.set_field(|d, v| d.age = v, "twenty".into());
            vm.save_command(store);

            assert!(vm.is_open()());
            assert_eq!(vm.field(|d| &d.age), "twenty");
            assert!(vm.error.get_untracked().is_some_and(|e| e.contains("twenty")));
            assert_eq!(store.get_untracked(), seed_store());

            vm.set_field(|d, v| d.age = v, "29".into());
            vm.save_command(store);

            assert!(!vm.is_open()());
            assert_eq!(vm.error.get_untracked(), None);
            assert_eq!(store.get_untracked().items()[1].age, 29);
        });
    }

    #[test]
    fn test_cancel_discards_draft() {
        Owner::new().with(|| {
            let store = RwSignal::new(seed_store());
            let vm = EmployeeDetailsViewModel::new();

            vm.open_edit(&seed_store().items()[0]);
            vm.set_field(|d, v| d.name = v, "changed".into());
            vm.set_type("other");
            vm.cancel();

            assert!(!vm.is_open()());
            assert_eq!(vm.field(|d| &d.name), "");
            assert_eq!(store.get_untracked(), seed_store());
        });
    }

    #[test]
    fn test_type_option_follows_draft() {
        Owner::new().with(|| {
            let vm = EmployeeDetailsViewModel::new();
            assert!(selected_types(&vm).is_empty());

            vm.open_add();
            assert_eq!(selected_types(&vm), vec![EmploymentType::Other]);

            vm.open_edit(&seed_store().items()[1]);
            assert_eq!(selected_types(&vm), vec![EmploymentType::University]);

            vm.set_type("highschool");
            assert_eq!(selected_types(&vm), vec![EmploymentType::Highschool]);

            vm.set_type("full");
            assert_eq!(selected_types(&vm), vec![EmploymentType::Highschool]);
        });
    }
}
