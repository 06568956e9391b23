//! Headline indicators.

use serde::Serialize;

use crate::counts::pct;
use crate::dashboard::DashboardRecord;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total: usize,
    /// Mean of the present ages.
    pub mean_age: Option<f64>,
    /// Share of respondents open to using the app.
    pub app_positive_pct: u32,
    /// Share of respondents willing to pay something.
    pub pay_positive_pct: u32,
}

fn app_positive(answer: &str) -> bool {
    let lowered = answer.to_lowercase();
    ["segur", "potser", "si,"]
        .iter()
        .any(|needle| lowered.contains(needle))
}

fn pay_positive(answer: &str) -> bool {
    !answer.is_empty() && !answer.to_lowercase().contains("no pagaria")
}

pub fn compute_kpis(records: &[DashboardRecord]) -> Kpis {
    let total = records.len();
    let ages: Vec<i32> = records.iter().filter_map(|record| record.age).collect();
    let mean_age = (!ages.is_empty())
        .then(|| ages.iter().map(|&age| f64::from(age)).sum::<f64>() / ages.len() as f64);
    let app = records
        .iter()
        .filter(|record| app_positive(&record.would_use_app))
        .count();
    let pay = records
        .iter()
        .filter(|record| pay_positive(&record.would_pay))
        .count();

    Kpis {
        total,
        mean_age,
        app_positive_pct: pct(app, total),
        pay_positive_pct: pct(pay, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::RawRecord;

    fn row(age: Option<i32>, app: &str, pay: &str) -> DashboardRecord {
        DashboardRecord::from_raw(&RawRecord {
            age,
            would_use_app: app.to_string(),
            would_pay: pay.to_string(),
            ..RawRecord::new(1)
        })
    }

    #[test]
    fn test_kpis() {
        let rows = vec![
            row(Some(20), "Sí segur", "No pagaria"),
            row(Some(30), "Potser", "Preu molt baix"),
            row(None, "No", ""),
            row(None, "Probablement no", "Sí, segurament"),
        ];
        let kpis = compute_kpis(&rows);
        assert_eq!(kpis.total, 4);
        assert_eq!(kpis.mean_age, Some(25.0));
        assert_eq!(kpis.app_positive_pct, 50);
        assert_eq!(kpis.pay_positive_pct, 50);
    }

    #[test]
    fn test_empty_input() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.mean_age, None);
        assert_eq!(kpis.app_positive_pct, 0);
    }
}
