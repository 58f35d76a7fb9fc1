use crate::core::termination::SeverancePolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
/// Upper bound for `severance.amount_per_year`.
pub const MAX_AMOUNT_PER_YEAR: u64 = 1_000_000_000;
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub severance: SeveranceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeveranceConfig {
    pub days_per_year: i64,
    pub amount_per_year: u64,
}

impl Default for SeveranceConfig {
    fn default() -> Self {
        let policy = SeverancePolicy::default();
        Self {
            days_per_year: policy.days_per_year,
            amount_per_year: policy.amount_per_year,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIND_ADDRESS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind_address", &self.server.bind_address)?;
        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        validation::validate_positive_number(
            "severance.days_per_year",
            self.severance.days_per_year,
            1,
        )?;
        validation::validate_range(
            "severance.amount_per_year",
            self.severance.amount_per_year,
            0,
            MAX_AMOUNT_PER_YEAR,
        )?;
        Ok(())
    }

    /// 命令列參數優先於設定檔
    pub fn with_overrides(mut self, bind_address: Option<String>, json_logs: bool) -> Self {
        if let Some(bind) = bind_address {
            self.server.bind_address = bind;
        }
        if json_logs {
            self.logging.format = "json".to_string();
        }
        self
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind_address
    }

    fn severance_policy(&self) -> SeverancePolicy {
        SeverancePolicy {
            days_per_year: self.severance.days_per_year,
            amount_per_year: self.severance.amount_per_year,
        }
    }

    fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind_address = "0.0.0.0:9000"

[logging]
format = "json"

[severance]
days_per_year = 360
amount_per_year = 1500
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert!(config.json_logs());
        assert_eq!(
            config.severance_policy(),
            SeverancePolicy {
                days_per_year: 360,
                amount_per_year: 1500,
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.bind_address(), DEFAULT_BIND_ADDRESS);
        assert!(!config.json_logs());
        assert_eq!(config.severance_policy(), SeverancePolicy::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("[severance]\namount_per_year = 500\n").unwrap();
        assert_eq!(config.severance_policy().days_per_year, 365);
        assert_eq!(config.severance_policy().amount_per_year, 500);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CEA_TEST_BIND_ADDRESS", "127.0.0.1:7070");

        let toml_content = r#"
[server]
bind_address = "${CEA_TEST_BIND_ADDRESS}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:7070");

        std::env::remove_var("CEA_TEST_BIND_ADDRESS");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[server]
bind_address = "${CEA_TEST_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.bind_address, "${CEA_TEST_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[logging]\nformat = \"pretty\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_days = TomlConfig::from_toml_str("[severance]\ndays_per_year = 0\n").unwrap();
        assert!(bad_days.validate().is_err());
    }

    #[test]
    fn test_oversized_amount_is_rejected() {
        let config = TomlConfig::from_toml_str(
            "[severance]\namount_per_year = 9223372036854775807\n",
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::InvalidConfigValueError { ref field, .. } if field == "severance.amount_per_year"
        ));

        let at_limit =
            TomlConfig::from_toml_str(&format!("[severance]\namount_per_year = {}\n", MAX_AMOUNT_PER_YEAR))
                .unwrap();
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server\nbind_address = 1").unwrap_err();
        assert!(matches!(err, DirectoryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = TomlConfig::default().with_overrides(Some("127.0.0.1:1".to_string()), true);
        assert_eq!(config.bind_address(), "127.0.0.1:1");
        assert!(config.json_logs());

        let untouched = TomlConfig::default().with_overrides(None, false);
        assert_eq!(untouched.bind_address(), DEFAULT_BIND_ADDRESS);
        assert!(!untouched.json_logs());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind_address = \"127.0.0.1:8181\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8181");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, DirectoryError::IoError(_)));
    }
}
