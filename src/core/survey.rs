use crate::adapters::{HeadHunterClient, SuperJobClient};
use crate::config::{SearchConfig, SuperJobKey};
use crate::core::aggregator::Aggregator;
use crate::core::report::render_table;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use reqwest::Client;

/// 依來源執行一次完整的統計並產出表格文字
pub struct SurveyEngine {
    client: Client,
    config: SearchConfig,
}

impl SurveyEngine {
    pub fn new(client: Client, config: SearchConfig) -> Self {
        Self { client, config }
    }

    pub async fn headhunter_table(&self) -> Result<String> {
        let source = HeadHunterClient::new(self.client.clone(), self.config.headhunter.clone());
        self.table_for(&source).await
    }

    pub async fn superjob_table(&self, api_key: SuperJobKey) -> Result<String> {
        let source =
            SuperJobClient::new(self.client.clone(), self.config.superjob.clone(), api_key);
        self.table_for(&source).await
    }

    pub async fn table_for<S: VacancySource>(&self, source: &S) -> Result<String> {
        let summaries = Aggregator::new(source, &self.config).run().await?;
        Ok(render_table(
            &self.config.title_for(source.name()),
            &summaries,
        ))
    }
}
