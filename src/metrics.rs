//! Derived values shown in the report.
//!
//! Ratios with a zero denominator yield `None`; callers render that as `N/A`
//! with an empty bar instead of a non-finite number.

use crate::model::{Kpi, Report};
use serde::{Deserialize, Serialize};

/// `used / total * 100`, unrounded. Drives the budget bar width.
pub fn budget_ratio(used: i64, total: i64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(used as f64 / total as f64 * 100.0)
}

/// Integer budget execution percent, rounded half up. The overview card and the
/// budget section both go through this.
pub fn budget_percent(used: i64, total: i64) -> Option<i64> {
    budget_ratio(used, total).map(round_half_up)
}

/// `total - used`; `None` when the difference does not fit in an `i64`.
pub fn remaining_budget(used: i64, total: i64) -> Option<i64> {
    total.checked_sub(used)
}

pub fn kpi_achieved(kpi: &Kpi) -> bool {
    kpi.actual >= kpi.target
}

/// `min(actual / target * 100, 100)`. Over-achievement never widens the bar,
/// and a ratio that overflows to infinity still draws a full bar.
pub fn kpi_bar_width(kpi: &Kpi) -> Option<f64> {
    if kpi.target == 0.0 {
        return None;
    }
    let pct = kpi.actual / kpi.target * 100.0;
    if pct.is_nan() {
        return None;
    }
    // Negative ratios have no drawable width.
    Some(pct.min(100.0).max(0.0))
}

fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub budget: BudgetMetrics,
    pub kpis: Vec<KpiMetrics>,
    pub milestones_completed: usize,
    pub milestones_total: usize,
    pub open_issues: usize,
    pub anomalies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetMetrics {
    pub used: i64,
    pub total: i64,
    pub remaining: Option<i64>,
    pub percent: Option<i64>,
    pub bar_width: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiMetrics {
    pub name: String,
    pub target: f64,
    pub actual: f64,
    pub achieved: bool,
    pub bar_width: Option<f64>,
}

impl ReportMetrics {
    pub fn from_report(report: &Report) -> Self {
        let used = report.budget_used;
        let total = report.budget_total;

        let kpis = report
            .kpis
            .iter()
            .map(|k| KpiMetrics {
                name: k.name.clone(),
                target: k.target,
                actual: k.actual,
                achieved: kpi_achieved(k),
                bar_width: kpi_bar_width(k),
            })
            .collect();

        ReportMetrics {
            budget: BudgetMetrics {
                used,
                total,
                remaining: remaining_budget(used, total),
                percent: budget_percent(used, total),
                bar_width: budget_ratio(used, total),
            },
            kpis,
            milestones_completed: report
                .milestones
                .iter()
                .filter(|m| m.completion >= 100)
                .count(),
            milestones_total: report.milestones.len(),
            open_issues: report
                .issues
                .iter()
                .filter(|i| i.status == crate::model::IssueStatus::Open)
                .count(),
            anomalies: anomalies(report),
        }
    }
}

/// Data conditions that render but deserve a warning.
pub fn anomalies(report: &Report) -> Vec<String> {
    let mut out = Vec::new();
    if report.budget_total == 0 {
        out.push("budget_total is zero; budget percent shown as N/A".to_string());
    } else if remaining_budget(report.budget_used, report.budget_total).is_none() {
        out.push("budget figures out of range; remaining budget shown as N/A".to_string());
    } else if report.budget_used > report.budget_total {
        out.push(format!(
            "budget_used exceeds budget_total ({} > {})",
            report.budget_used, report.budget_total
        ));
    }
    for k in &report.kpis {
        if k.target == 0.0 {
            out.push(format!("kpi '{}' has zero target; bar shown as N/A", k.name));
        }
    }
    out
}
