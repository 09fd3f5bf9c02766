use crate::utils::error::{Result, SurveyError};
use std::env;
use std::fmt;

pub const SJ_SECRET_KEY_VAR: &str = "SJ_SECRET_KEY";

/// SuperJob 的 X-Api-App-Id；Debug 輸出不會洩漏內容
#[derive(Clone, PartialEq, Eq)]
pub struct SuperJobKey(String);

impl SuperJobKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 從環境變數讀取；呼叫前應已執行 `load_dotenv`
    pub fn from_env() -> Result<Self> {
        match env::var(SJ_SECRET_KEY_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => Err(SurveyError::MissingCredentialError {
                variable: SJ_SECRET_KEY_VAR.to_string(),
            }),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SuperJobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SuperJobKey(***)")
    }
}

/// 載入本地 .env；檔案不存在時忽略
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("⚠️ Ignoring unreadable .env file: {}", e),
    }
}
