use crate::domain::model::{HhVacancy, SjVacancy};

const FROM_ONLY_FACTOR: f64 = 1.2;
const TO_ONLY_FACTOR: f64 = 0.8;

/// 由薪資上下限推估月薪。上下限為 0 視同未填。
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    let salary_from = salary_from.filter(|value| *value != 0.0);
    let salary_to = salary_to.filter(|value| *value != 0.0);

    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * FROM_ONLY_FACTOR),
        (None, Some(to)) => Some(to * TO_ONLY_FACTOR),
        (None, None) => None,
    }
}

pub fn predict_rub_salary_hh(vacancy: &HhVacancy, currency: &str) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    if salary.currency.as_deref() != Some(currency) {
        return None;
    }
    predict_salary(salary.from, salary.to)
}

pub fn predict_rub_salary_sj(vacancy: &SjVacancy, currency: &str) -> Option<f64> {
    if vacancy.currency.as_deref() != Some(currency) {
        return None;
    }
    predict_salary(vacancy.payment_from, vacancy.payment_to)
}
