use crate::config::SearchConfig;
use crate::domain::model::{LanguageSummary, SearchQuery};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// 依序對每個語言抓取職缺、估算薪資並產生摘要
pub struct Aggregator<'a, S: VacancySource> {
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: VacancySource> Aggregator<'a, S> {
    pub fn new(source: &'a S, config: &'a SearchConfig) -> Self {
        Self { source, config }
    }

    /// 回傳順序與設定中的語言順序相同；未達門檻的語言不會出現
    pub async fn run(&self) -> Result<Vec<LanguageSummary>> {
        tracing::info!(
            "🚀 Collecting {} statistics for {} languages",
            self.source.name(),
            self.config.languages.len()
        );

        let mut summaries = Vec::new();

        for language in &self.config.languages {
            let query = SearchQuery {
                language: language.clone(),
                period_days: self.config.period_days,
                per_page: self.config.per_page,
            };

            let outcome = self.source.fetch(&query).await?;
            let estimates: Vec<f64> = outcome
                .vacancies
                .iter()
                .filter_map(|vacancy| self.source.estimate(vacancy))
                .collect();

            tracing::debug!(
                "{} {}: fetched {} of {} reported, {} with salary",
                self.source.name(),
                language,
                outcome.vacancies.len(),
                outcome.total,
                estimates.len()
            );

            match summarize(language, outcome.total, &estimates, self.source.min_found()) {
                Some(summary) => {
                    tracing::info!(
                        "✅ {} {}: {} found, {} processed, average {:?}",
                        self.source.name(),
                        language,
                        summary.vacancies_found,
                        summary.vacancies_processed,
                        summary.average_salary
                    );
                    summaries.push(summary);
                }
                None => {
                    tracing::info!(
                        "⏭️ {} {}: skipped ({} found, {} with salary)",
                        self.source.name(),
                        language,
                        outcome.total,
                        estimates.len()
                    );
                }
            }
        }

        Ok(summaries)
    }
}

/// 收錄規則：`found > min_found` 且至少一筆可用的薪資估算。
/// 平均值向下取整。估算筆數多於回報總數時只取前 `found` 筆，
/// 處理筆數與平均值永遠對應同一批資料。
pub fn summarize(
    language: &str,
    found: u64,
    estimates: &[f64],
    min_found: u64,
) -> Option<LanguageSummary> {
    if found <= min_found || estimates.is_empty() {
        return None;
    }

    let usable = estimates
        .len()
        .min(usize::try_from(found).unwrap_or(usize::MAX));
    let counted = &estimates[..usable];
    let average = counted.iter().sum::<f64>() / counted.len() as f64;

    Some(LanguageSummary {
        language: language.to_string(),
        vacancies_found: found,
        vacancies_processed: counted.len() as u64,
        average_salary: Some(average.floor() as u64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FetchOutcome;
    use crate::utils::error::SurveyError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[test]
    fn test_headhunter_threshold() {
        assert_eq!(summarize("Python", 50, &[100000.0], 100), None);
        assert_eq!(summarize("Python", 100, &[100000.0], 100), None);
        assert_eq!(summarize("Python", 150, &[], 100), None);

        let summary = summarize("Python", 150, &[100000.0, 100001.0], 100).unwrap();
        assert_eq!(summary.vacancies_found, 150);
        assert_eq!(summary.vacancies_processed, 2);
        assert_eq!(summary.average_salary, Some(100000));
    }

    #[test]
    fn test_superjob_threshold() {
        assert_eq!(summarize("Go", 0, &[], 0), None);
        assert_eq!(summarize("Go", 3, &[], 0), None);

        let summary = summarize("Go", 1, &[90000.0], 0).unwrap();
        assert_eq!(summary.vacancies_found, 1);
        assert_eq!(summary.vacancies_processed, 1);
        assert_eq!(summary.average_salary, Some(90000));
    }

    #[test]
    fn test_average_is_truncated() {
        let summary = summarize("Java", 500, &[64000.0, 120000.0, 150000.0], 100).unwrap();
        // 334000 / 3 = 111333.33...
        assert_eq!(summary.average_salary, Some(111333));

        let summary = summarize("Java", 500, &[99999.9], 100).unwrap();
        assert_eq!(summary.average_salary, Some(99999));
    }

    #[test]
    fn test_estimates_beyond_reported_total_are_not_counted() {
        let summary = summarize("Go", 1, &[100000.0, 300000.0], 0).unwrap();
        assert_eq!(summary.vacancies_found, 1);
        assert_eq!(summary.vacancies_processed, 1);
        assert_eq!(summary.average_salary, Some(100000));

        let summary = summarize("Go", 2, &[100000.0, 300000.0, 500000.0], 0).unwrap();
        assert_eq!(summary.vacancies_processed, 2);
        assert_eq!(summary.average_salary, Some(200000));
        assert!(summary.vacancies_processed <= summary.vacancies_found);
    }

    struct StubSource {
        responses: HashMap<String, (u64, Vec<Option<f64>>)>,
        min_found: u64,
        queries: Mutex<Vec<SearchQuery>>,
    }

    #[async_trait]
    impl VacancySource for StubSource {
        type Vacancy = Option<f64>;

        fn name(&self) -> &str {
            "Stub"
        }

        fn min_found(&self) -> u64 {
            self.min_found
        }

        async fn fetch(&self, query: &SearchQuery) -> Result<FetchOutcome<Option<f64>>> {
            self.queries.lock().unwrap().push(query.clone());
            let (total, vacancies) = self.responses.get(&query.language).cloned().ok_or_else(|| {
                SurveyError::ConfigError {
                    message: format!("no stub for {}", query.language),
                }
            })?;
            Ok(FetchOutcome { vacancies, total })
        }

        fn estimate(&self, vacancy: &Option<f64>) -> Option<f64> {
            *vacancy
        }
    }

    fn config_with(languages: &[&str]) -> SearchConfig {
        SearchConfig {
            languages: languages.iter().map(|l| l.to_string()).collect(),
            ..SearchConfig::default()
        }
    }

    #[tokio::test]
    async fn test_run_keeps_config_order_and_omits_excluded() {
        let mut responses = HashMap::new();
        responses.insert("Scala".to_string(), (150, vec![Some(200000.0), None]));
        responses.insert("Ruby".to_string(), (50, vec![Some(100000.0)]));
        responses.insert("Go".to_string(), (300, vec![Some(100000.0), Some(150000.0)]));

        let source = StubSource {
            responses,
            min_found: 100,
            queries: Mutex::new(Vec::new()),
        };
        let config = config_with(&["Scala", "Ruby", "Go"]);

        let summaries = Aggregator::new(&source, &config).run().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].language, "Scala");
        assert_eq!(summaries[0].vacancies_processed, 1);
        assert_eq!(summaries[0].average_salary, Some(200000));
        assert_eq!(summaries[1].language, "Go");
        assert_eq!(summaries[1].average_salary, Some(125000));

        let queries = source.queries.lock().unwrap();
        assert_eq!(queries.len(), 3);
        assert!(queries.iter().all(|q| q.period_days == 30 && q.per_page == 100));
    }

    #[tokio::test]
    async fn test_run_propagates_fetch_failure() {
        let source = StubSource {
            responses: HashMap::new(),
            min_found: 0,
            queries: Mutex::new(Vec::new()),
        };
        let config = config_with(&["Python"]);

        let result = Aggregator::new(&source, &config).run().await;
        assert!(result.is_err());
    }
}
