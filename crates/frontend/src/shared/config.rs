use crate::layout::global_context::ActiveView;
use contracts::enums::type_filter::TypeFilter;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app: AppSection,
    pub defaults: DefaultsSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppSection {
    pub brand: String,
    pub logo: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DefaultsSection {
    pub view: String,
    pub type_filter: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
brand = "DolphinShift"
logo = "/logo.svg"
log_level = "debug"

[defaults]
view = "employees"
type_filter = "all"
"#;

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                brand: "DolphinShift".to_string(),
                logo: "/logo.svg".to_string(),
                log_level: "debug".to_string(),
            },
            defaults: DefaultsSection {
                view: "employees".to_string(),
                type_filter: "all".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.app.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn default_view(&self) -> ActiveView {
        ActiveView::from_code(&self.defaults.view).unwrap_or_default()
    }

    pub fn default_type_filter(&self) -> TypeFilter {
        let filter = TypeFilter::from_code(&self.defaults.type_filter);
        if filter.label().is_some() {
            filter
        } else {
            TypeFilter::All
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app.brand, "DolphinShift");
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.default_view(), ActiveView::Employees);
        assert_eq!(config.default_type_filter(), TypeFilter::All);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut config = AppConfig::default();
        config.app.log_level = "loud".into();
        config.defaults.view = "payroll".into();
        config.defaults.type_filter = "interns".into();
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.default_view(), ActiveView::Employees);
        assert_eq!(config.default_type_filter(), TypeFilter::All);
    }

    #[test]
    fn test_custom_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            brand = "X"
            logo = "/x.svg"
            log_level = "WARN"

            [defaults]
            view = "categories"
            type_filter = "university"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.default_view(), ActiveView::Categories);
        assert_eq!(config.default_type_filter(), TypeFilter::from_code("university"));
    }
}
