use crate::adapters::read_page;
use crate::config::{SuperJobConfig, SuperJobKey};
use crate::core::salary::predict_rub_salary_sj;
use crate::domain::model::{FetchOutcome, SearchQuery, SjPage, SjVacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const APP_ID_HEADER: &str = "X-Api-App-Id";

pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
    api_key: SuperJobKey,
}

impl SuperJobClient {
    pub fn new(client: Client, config: SuperJobConfig, api_key: SuperJobKey) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<SjPage> {
        let params = [
            ("catalogues", self.config.catalogue.to_string()),
            ("keyword", query.language.clone()),
            ("town", self.config.town.to_string()),
            ("period", query.period_days.to_string()),
            ("page", page.to_string()),
            ("count", query.per_page.to_string()),
        ];

        tracing::debug!("📡 SuperJob {}: requesting page {}", query.language, page);
        let response = self
            .client
            .get(&self.config.api_url)
            .header(APP_ID_HEADER, self.api_key.expose())
            .query(&params)
            .send()
            .await?;

        read_page::<SjPage>(self.name(), response).await
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Vacancy = SjVacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    fn min_found(&self) -> u64 {
        self.config.min_found
    }

    /// 逐頁抓取直到回應的 `more` 為 false
    async fn fetch(&self, query: &SearchQuery) -> Result<FetchOutcome<SjVacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0;

        loop {
            let response = self.fetch_page(query, page).await?;
            vacancies.extend(response.objects);
            page += 1;

            if !response.more {
                return Ok(FetchOutcome {
                    vacancies,
                    total: response.total,
                });
            }
        }
    }

    fn estimate(&self, vacancy: &SjVacancy) -> Option<f64> {
        predict_rub_salary_sj(vacancy, &self.config.currency)
    }
}
