use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a002_employee_category::aggregate::EmployeeCategory;
use serde::Deserialize;

/// Records loaded into memory at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub employee_categories: Vec<EmployeeCategory>,
}

const DEFAULT_SEED: &str = r#"
[[employees]]
id = "1234"
name = "田中 真弓"
age = 23
type = "highschool"
department = "フロント"
wage = 1200
lineId = "@jenny"

[[employees]]
id = "1235"
name = "山田 太郎"
age = 28
type = "university"
department = "キッチン"
wage = 1200
lineId = "@taro"

[[employees]]
id = "1236"
name = "大澤 隼人"
age = 25
type = "other"
department = "キッチン"
wage = 1200
lineId = "@hayato"

[[employee_categories]]
id = "Arbeit_1"
name = "アルバイト(高校生)"
priority = "low"

[[employee_categories]]
id = "Arbeit_2"
name = "アルバイト(大学生)"
priority = "medium"

[[employee_categories]]
id = "Arbeit_3"
name = "アルバイト(その他)"
priority = "high"

[[employee_categories]]
id = "Part"
name = "パート"
priority = "medium"

[[employee_categories]]
id = "Staff"
name = "社員"
priority = "high"
"#;

/// Parse the embedded seed
pub fn load_seed() -> anyhow::Result<SeedData> {
    let seed: SeedData = toml::from_str(DEFAULT_SEED)?;
    log::info!(
        "Seed loaded: {} employees, {} categories",
        seed.employees.len(),
        seed.employee_categories.len()
    );
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_employee_category::aggregate::CategoryPriority;
    use contracts::enums::employment_type::EmploymentType;

    #[test]
    fn test_default_seed_loads() {
        let seed = load_seed().unwrap();
        assert_eq!(seed.employees.len(), 3);
        assert_eq!(seed.employee_categories.len(), 5);
    }

    #[test]
    fn test_seed_employee_fields() {
        let seed = load_seed().unwrap();
        let tanaka = &seed.employees[0];
        assert_eq!(tanaka.id.value(), "1234");
        assert_eq!(tanaka.name, "田中 真弓");
        assert_eq!(tanaka.age, 23);
        assert_eq!(tanaka.employment_type, EmploymentType::Highschool);
        assert_eq!(tanaka.department, "フロント");
        assert_eq!(tanaka.wage, 1200);
        assert_eq!(tanaka.line_id, "@jenny");

        let ids: Vec<&str> = seed.employees.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec!["1234", "1235", "1236"]);
    }

    #[test]
    fn test_seed_categories() {
        let seed = load_seed().unwrap();
        let rows: Vec<(&str, CategoryPriority)> = seed
            .employee_categories
            .iter()
            .map(|c| (c.id.value(), c.priority))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Arbeit_1", CategoryPriority::Low),
                ("Arbeit_2", CategoryPriority::Medium),
                ("Arbeit_3", CategoryPriority::High),
                ("Part", CategoryPriority::Medium),
                ("Staff", CategoryPriority::High),
            ]
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed: SeedData = toml::from_str("").unwrap();
        assert!(seed.employees.is_empty());
        assert!(seed.employee_categories.is_empty());
    }
}
