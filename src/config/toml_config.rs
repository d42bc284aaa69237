use crate::core::{ConfigProvider, RowPolicy};
use crate::utils::error::{GreeterError, Result};
use crate::utils::validation::{validate_host, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub transport: TransportConfig,
    pub parsing: Option<ParsingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    pub on_malformed_row: Option<RowPolicy>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GreeterError::ResourceNotFound {
                path: path.as_ref().display().to_string(),
            },
            _ => GreeterError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GreeterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GreeterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn smtp_host(&self) -> &str {
        &self.transport.host
    }

    fn smtp_port(&self) -> u16 {
        self.transport.port
    }

    fn row_policy(&self) -> RowPolicy {
        self.parsing
            .as_ref()
            .and_then(|p| p.on_malformed_row)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_host("transport.host", &self.transport.host)?;
        validate_range("transport.port", self.transport.port, 1, u16::MAX)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[input]
path = "data/employee_data.txt"

[transport]
host = "localhost"
port = 80

[parsing]
on_malformed_row = "skip"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/employee_data.txt");
        assert_eq!(config.smtp_host(), "localhost");
        assert_eq!(config.smtp_port(), 80);
        assert_eq!(config.row_policy(), RowPolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parsing_section_is_optional() {
        let toml_content = r#"
[input]
path = "staff.txt"

[transport]
host = "mail.example.com"
port = 25
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.row_policy(), RowPolicy::Fail);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BIRTHDAY_TEST_SMTP_HOST", "smtp.test.com");

        let toml_content = r#"
[input]
path = "staff.txt"

[transport]
host = "${BIRTHDAY_TEST_SMTP_HOST}"
port = 587
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.transport.host, "smtp.test.com");

        std::env::remove_var("BIRTHDAY_TEST_SMTP_HOST");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml_content = r#"
[input]
path = "staff.txt"

[transport]
host = "localhost"
port = 80

[parsing]
on_malformed_row = "retry"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(GreeterError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[input]
path = ""

[transport]
host = "localhost"
port = 80
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
path = "from-file.txt"

[transport]
host = "localhost"
port = 2525
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.path, "from-file.txt");
        assert_eq!(config.transport.port, 2525);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            TomlConfig::from_file("/no/such/greetings.toml"),
            Err(GreeterError::ResourceNotFound { .. })
        ));
    }
}
