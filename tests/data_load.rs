use migration_report::{
    data::{load_report, to_toml, validate},
    model::Report,
    seed::seed_report,
};

#[test]
fn seed_toml_loads_back() {
    let raw = to_toml(&seed_report()).expect("serialize");
    let parsed: Report = toml::from_str(&raw).expect("parse");
    assert_eq!(parsed, seed_report());
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "migration-report-data-{}.toml",
        std::process::id()
    ));
    let mut report = seed_report();
    report.report_month = "2024年12月".into();
    std::fs::write(&path, to_toml(&report).unwrap()).unwrap();

    let loaded = load_report(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.report_month, "2024年12月");
    assert_eq!(loaded.kpis.len(), 4);
}

#[test]
fn completion_over_100_is_rejected() {
    let mut report = seed_report();
    report.milestones[2].completion = 120;
    let err = validate(&report).unwrap_err();
    assert!(err.to_string().contains("資料遷移準備"));
}

#[test]
fn non_finite_kpi_values_are_rejected() {
    let mut report = seed_report();
    report.kpis[3].target = f64::INFINITY;
    let err = validate(&report).unwrap_err();
    assert!(err.to_string().contains("團隊滿意度"));

    let raw = to_toml(&seed_report()).unwrap();
    assert!(raw.contains("actual = 65.0"));
    let raw = raw.replacen("actual = 65.0", "actual = nan", 1);
    let path = std::env::temp_dir().join(format!(
        "migration-report-nan-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, raw).unwrap();
    let result = load_report(&path);
    let _ = std::fs::remove_file(&path);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("non-finite"));
}

#[test]
fn missing_file_is_an_error() {
    let err = load_report(std::path::Path::new("/nonexistent/report.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("reading report data"));
}
