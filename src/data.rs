use crate::model::Report;
use anyhow::{Context, Result};
use std::path::Path;

/// Loads a report record from a TOML data file and checks it.
pub fn load_report(path: &Path) -> Result<Report> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading report data: {}", path.display()))?;
    let report: Report = toml::from_str(&raw)
        .with_context(|| format!("parsing report data: {}", path.display()))?;
    validate(&report)?;
    Ok(report)
}

pub fn validate(report: &Report) -> Result<()> {
    for m in &report.milestones {
        if m.completion > 100 {
            anyhow::bail!(
                "milestone '{}' completion out of range: {}",
                m.name,
                m.completion
            );
        }
    }

    for k in &report.kpis {
        if !k.target.is_finite() || !k.actual.is_finite() {
            anyhow::bail!(
                "kpi '{}' has a non-finite value: target={} actual={}",
                k.name,
                k.target,
                k.actual
            );
        }
    }

    Ok(())
}

pub fn to_toml(report: &Report) -> Result<String> {
    toml::to_string(report).with_context(|| "serializing report data")
}
