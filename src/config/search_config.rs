use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{
    validate_languages, validate_non_empty_string, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// 所有統計共用的固定設定表；建立後不再修改
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub languages: Vec<String>,
    pub period_days: u32,
    pub per_page: u32,
    pub city: String,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub api_url: String,
    /// 搜尋字串前綴，實際查詢為 "{role} {language}"
    pub role: String,
    pub area: u32,
    pub currency: String,
    /// 收錄門檻：回報總數必須大於此值
    pub min_found: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub api_url: String,
    pub catalogue: u32,
    pub town: u32,
    pub currency: String,
    pub min_found: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            languages: [
                "JavaScript",
                "Java",
                "Python",
                "Ruby",
                "PHP",
                "C++",
                "C#",
                "C",
                "Go",
                "Scala",
            ]
            .iter()
            .map(|language| language.to_string())
            .collect(),
            period_days: 30,
            per_page: 100,
            city: "Moscow".to_string(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.hh.ru/vacancies".to_string(),
            role: "Программист".to_string(),
            area: 1,
            currency: "RUR".to_string(),
            min_found: 100,
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            catalogue: 48,
            town: 4,
            currency: "rub".to_string(),
            min_found: 0,
        }
    }
}

impl SearchConfig {
    /// 從 TOML 檔案載入配置，未列出的欄位使用預設值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SurveyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurveyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HH_API_URL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurveyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 報表標題，例如 "HeadHunter Moscow"
    pub fn title_for(&self, source_name: &str) -> String {
        format!("{} {}", source_name, self.city)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validate_languages("languages", &self.languages)?;
        validate_range("period_days", self.period_days, 1, 365)?;
        validate_range("per_page", self.per_page, 1, 100)?;
        validate_non_empty_string("city", &self.city)?;

        validate_url("headhunter.api_url", &self.headhunter.api_url)?;
        validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;

        validate_url("superjob.api_url", &self.superjob.api_url)?;
        validate_non_empty_string("superjob.currency", &self.superjob.currency)?;

        Ok(())
    }
}
