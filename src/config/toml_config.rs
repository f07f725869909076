use crate::core::catalog::Catalog;
use crate::core::context::DEFAULT_FOREST_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogInfo,
    pub runtime: Option<RuntimeConfig>,
    pub demos: Option<DemoTuning>,
    pub inputs: Option<HashMap<String, Vec<String>>>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub seed: Option<u64>,
    pub simulate_latency: Option<bool>,
    pub latency_scale: Option<f64>,
    pub scratch_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoTuning {
    pub forest_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCRATCH_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;
        validate_range("runtime.latency_scale", self.latency_scale(), 0.0, 10.0)?;
        validate_path("runtime.scratch_dir", self.scratch_dir())?;
        validate_range("demos.forest_size", self.forest_size(), 1, 100_000)?;

        // [inputs] 的每個 key 都必須是已知的示範
        if let Some(inputs) = &self.inputs {
            let catalog = Catalog::builtin();
            for demo in inputs.keys() {
                if catalog.find(demo).is_none() {
                    return Err(CatalogError::InvalidConfigValueError {
                        field: "inputs".to_string(),
                        value: demo.clone(),
                        reason: "No demo with this name".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn runtime(&self) -> RuntimeConfig {
        self.runtime.clone().unwrap_or_default()
    }

    /// 是否啟用系統監控
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn seed(&self) -> Option<u64> {
        self.runtime().seed
    }

    fn simulate_latency(&self) -> bool {
        self.runtime().simulate_latency.unwrap_or(true)
    }

    fn latency_scale(&self) -> f64 {
        self.runtime().latency_scale.unwrap_or(1.0)
    }

    fn scratch_dir(&self) -> &str {
        self.runtime
            .as_ref()
            .and_then(|r| r.scratch_dir.as_deref())
            .unwrap_or(".")
    }

    fn forest_size(&self) -> usize {
        self.demos
            .as_ref()
            .and_then(|d| d.forest_size)
            .unwrap_or(DEFAULT_FOREST_SIZE)
    }

    fn scripted_input(&self, demo: &str) -> Vec<String> {
        self.inputs
            .as_ref()
            .and_then(|inputs| inputs.get(demo))
            .cloned()
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
