use crate::domain::model::{FetchOutcome, SearchQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 一個職缺搜尋來源：負責分頁抓取與單筆薪資估算
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: Send;

    /// 顯示名稱，同時用於報表標題
    fn name(&self) -> &str;

    /// 收錄門檻：回報總數必須大於此值
    fn min_found(&self) -> u64;

    async fn fetch(&self, query: &SearchQuery) -> Result<FetchOutcome<Self::Vacancy>>;

    fn estimate(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}
