use crate::adapters::read_page;
use crate::config::HeadHunterConfig;
use crate::core::salary::predict_rub_salary_hh;
use crate::domain::model::{FetchOutcome, HhPage, HhVacancy, SearchQuery};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunterClient {
    pub fn new(client: Client, config: HeadHunterConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<HhPage> {
        let text = format!("{} {}", self.config.role, query.language);
        let params = [
            ("text", text),
            ("search_field", "name".to_string()),
            ("area", self.config.area.to_string()),
            ("period", query.period_days.to_string()),
            ("page", page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];

        tracing::debug!("📡 HeadHunter {}: requesting page {}", query.language, page);
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&params)
            .send()
            .await?;

        read_page::<HhPage>(self.name(), response).await
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Vacancy = HhVacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn min_found(&self) -> u64 {
        self.config.min_found
    }

    /// 逐頁抓取直到頁碼達到回報的總頁數
    async fn fetch(&self, query: &SearchQuery) -> Result<FetchOutcome<HhVacancy>> {
        let mut vacancies = Vec::new();
        let mut total = 0;
        let mut page = 0;
        let mut pages = 1;

        while page < pages {
            let response = self.fetch_page(query, page).await?;
            vacancies.extend(response.items);
            pages = response.pages;
            total = response.found;
            page += 1;
        }

        Ok(FetchOutcome { vacancies, total })
    }

    fn estimate(&self, vacancy: &HhVacancy) -> Option<f64> {
        predict_rub_salary_hh(vacancy, &self.config.currency)
    }
}
