// Adapters layer: concrete job-search API clients implementing `VacancySource`.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;

use crate::utils::error::{Result, SurveyError};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// 兩個來源共用的 HTTP client（HeadHunter 會拒絕沒有 User-Agent 的請求）
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// 非 2xx 一律視為致命錯誤
fn ensure_success(source_name: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(SurveyError::HttpStatusError {
        source_name: source_name.to_string(),
        status,
        url: response.url().to_string(),
    })
}

/// 讀取回應本文並解析；格式不符歸類為 `SerializationError`
pub(crate) async fn read_page<T: DeserializeOwned>(
    source_name: &str,
    response: Response,
) -> Result<T> {
    let response = ensure_success(source_name, response)?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
