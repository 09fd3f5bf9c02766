use serde::Deserialize;

/// HeadHunter `/vacancies` 的單頁回應
#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    #[serde(default)]
    pub items: Vec<HhVacancy>,
    pub pages: u32,
    pub found: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhSalary {
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// SuperJob `/2.0/vacancies/` 的單頁回應
#[derive(Debug, Clone, Deserialize)]
pub struct SjPage {
    #[serde(default)]
    pub objects: Vec<SjVacancy>,
    pub more: bool,
    pub total: u64,
}

/// SuperJob 未填的薪資上下限會回傳 0
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// 單一語言的一次搜尋
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub language: String,
    pub period_days: u32,
    pub per_page: u32,
}

/// 分頁抓取的結果：所有頁面的職缺加上來源回報的總數
#[derive(Debug, Clone)]
pub struct FetchOutcome<V> {
    pub vacancies: Vec<V>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<u64>,
}
