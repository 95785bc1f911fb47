pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_DATA_FILE: &str = "animals_data.json";
pub const DEFAULT_TEMPLATE_FILE: &str = "animals_template.html";
pub const DEFAULT_OUTPUT_FILE: &str = "animals.html";
pub const PLACEHOLDER_TOKEN: &str = "__REPLACE_ANIMALS_INFO__";

/// 已解析完成的執行設定，明確傳入各元件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub base_dir: String,
    pub data_file: String,
    pub template_file: String,
    pub output_file: String,
    pub placeholder: String,
    pub skin_type: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            placeholder: PLACEHOLDER_TOKEN.to_string(),
            skin_type: None,
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn template_file(&self) -> &str {
        &self.template_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        validate_path("data_file", &self.data_file)?;
        validate_path("template_file", &self.template_file)?;
        validate_path("output_file", &self.output_file)?;
        validate_non_empty_string("placeholder", &self.placeholder)?;
        if let Some(skin_type) = &self.skin_type {
            validate_non_empty_string("skin_type", skin_type)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "animals-web")]
#[command(about = "Generate an animals web page filtered by skin type")]
pub struct CliConfig {
    /// Directory the data, template and output paths are resolved against
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Animal data JSON file
    #[arg(long)]
    pub data_file: Option<String>,

    /// HTML template containing the placeholder token
    #[arg(long)]
    pub template_file: Option<String>,

    /// Generated HTML file (overwritten)
    #[arg(long)]
    pub output_file: Option<String>,

    /// Placeholder token to replace in the template
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Skip the prompt and filter by this skin type
    #[arg(long)]
    pub skin_type: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also print the selected animals as plain text
    #[arg(long)]
    pub print: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定：命令列 > TOML 檔 > 內建預設值。
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let base = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.into_generator_config(),
            None => GeneratorConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        let overrides = [
            (&self.base_dir, &mut config.base_dir),
            (&self.data_file, &mut config.data_file),
            (&self.template_file, &mut config.template_file),
            (&self.output_file, &mut config.output_file),
            (&self.placeholder, &mut config.placeholder),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        if self.skin_type.is_some() {
            config.skin_type = self.skin_type.clone();
        }
        config
    }
}
