use crate::config::GeneratorConfig;
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的 TOML 設定檔；所有欄位皆可省略，省略者沿用內建預設值。
///
/// ```toml
/// [files]
/// base_dir = "${SITE_DIR}"
/// data = "animals_data.json"
/// template = "animals_template.html"
/// output = "animals.html"
///
/// [template]
/// placeholder = "__REPLACE_ANIMALS_INFO__"
///
/// [selection]
/// skin_type = "Fur"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub files: Option<FilesConfig>,
    pub template: Option<TemplateConfig>,
    pub selection: Option<SelectionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub base_dir: Option<String>,
    pub data: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub skin_type: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EtlError::ConfigError {
            message: format!("Cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_generator_config(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();

        if let Some(files) = self.files {
            if let Some(base_dir) = files.base_dir {
                config.base_dir = base_dir;
            }
            if let Some(data) = files.data {
                config.data_file = data;
            }
            if let Some(template) = files.template {
                config.template_file = template;
            }
            if let Some(output) = files.output {
                config.output_file = output;
            }
        }
        if let Some(placeholder) = self.template.and_then(|t| t.placeholder) {
            config.placeholder = placeholder;
        }
        config.skin_type = self.selection.and_then(|s| s.skin_type);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DATA_FILE, PLACEHOLDER_TOKEN};

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap().into_generator_config();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let content = r#"
[files]
output = "public/index.html"

[selection]
skin_type = "Scales"
"#;

        let config = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_generator_config();

        assert_eq!(config.output_file, "public/index.html");
        assert_eq!(config.data_file, DEFAULT_DATA_FILE);
        assert_eq!(config.placeholder, PLACEHOLDER_TOKEN);
        assert_eq!(config.skin_type.as_deref(), Some("Scales"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ANIMALS_WEB_TEST_SITE_DIR", "/srv/zoo");
        let content = r#"
[files]
base_dir = "${ANIMALS_WEB_TEST_SITE_DIR}"
data = "${ANIMALS_WEB_TEST_UNSET_VAR}.json"
"#;

        let config = TomlConfig::from_toml_str(content)
            .unwrap()
            .into_generator_config();

        assert_eq!(config.base_dir, "/srv/zoo");
        assert_eq!(config.data_file, "${ANIMALS_WEB_TEST_UNSET_VAR}.json");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[files\noutput = ");
        assert!(matches!(result, Err(EtlError::ConfigError { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = TomlConfig::from_file("/definitely/not/here/animals.toml");
        assert!(matches!(result, Err(EtlError::ConfigError { .. })));
    }
}
