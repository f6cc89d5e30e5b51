use migration_report::{
    cli::{resolve_log_path, resolve_out_dir, write_artifact},
    config::Config,
};
use std::path::{Path, PathBuf};

fn logging_to_file() -> Config {
    let mut cfg = Config::default();
    cfg.logging.write_to_file = true;
    cfg
}

#[test]
fn out_dir_flag_overrides_config() {
    let cfg = Config::default();
    assert_eq!(resolve_out_dir(&cfg, None), PathBuf::from("out"));
    assert_eq!(
        resolve_out_dir(&cfg, Some(Path::new("reports/2024-11"))),
        PathBuf::from("reports/2024-11")
    );
}

#[test]
fn log_file_follows_resolved_out_dir() {
    let cfg = logging_to_file();
    let out_dir = resolve_out_dir(&cfg, Some(Path::new("reports/2024-11")));
    assert_eq!(
        resolve_log_path(&cfg, &out_dir),
        Some(PathBuf::from("reports/2024-11/migration-report.log"))
    );
}

#[test]
fn explicit_log_path_and_disabled_logging() {
    let mut cfg = logging_to_file();
    cfg.logging.file_path = "logs/run.log".into();
    assert_eq!(
        resolve_log_path(&cfg, Path::new("out")),
        Some(PathBuf::from("logs/run.log"))
    );

    cfg.logging.write_to_file = false;
    assert_eq!(resolve_log_path(&cfg, Path::new("out")), None);
}

#[test]
fn failed_write_names_the_file() {
    let path = Path::new("/nonexistent-migration-report-dir/index.json");
    let err = write_artifact(path, "{}").unwrap_err();
    assert!(format!("{err:#}").contains("writing /nonexistent-migration-report-dir/index.json"));
}
