use crate::{
    config::Config,
    data,
    metrics::{ReportMetrics, anomalies},
    render::RenderOptions,
    seed::seed_report,
    util::{ensure_dir, now_rfc3339, sha256_hex},
    view::ReportView,
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const INDEX_FILENAME: &str = "index.json";

#[derive(Parser, Debug)]
#[command(name = "migration-report")]
#[command(about = "Printable monthly status report for the credit card system migration project")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./migration-report.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the report as a printable HTML page.
    Render {
        /// Report data TOML. Defaults to the embedded November 2024 report.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Executive summary text to prefill.
        #[arg(long, conflicts_with = "summary_file")]
        summary: Option<String>,
        /// Read the executive summary from a file, verbatim.
        #[arg(long)]
        summary_file: Option<PathBuf>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print derived budget and KPI figures as JSON.
    Metrics {
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the embedded report data as TOML.
    Seed {},
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = match resolve_config_path(args.config.as_deref())? {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    let out_override = match &args.cmd {
        Command::Render { out_dir, .. } => out_dir.as_deref(),
        _ => None,
    };
    let out_dir = resolve_out_dir(&cfg, out_override);
    let log_path = resolve_log_path(&cfg, &out_dir);
    let _guard = init_logging(&args, &cfg, log_path.as_deref())?;

    match &args.cmd {
        Command::Render {
            data,
            summary,
            summary_file,
            ..
        } => {
            let summary = match (summary, summary_file) {
                (Some(text), _) => Some(text.clone()),
                (None, Some(path)) => Some(
                    std::fs::read_to_string(path)
                        .with_context(|| format!("reading summary: {}", path.display()))?,
                ),
                (None, None) => None,
            };
            render(&cfg, data.as_deref(), summary, &out_dir)
        }
        Command::Metrics { data } => metrics(data.as_deref()),
        Command::Seed {} => {
            print!("{}", data::to_toml(&seed_report())?);
            Ok(())
        }
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(p) = user {
        if !p.exists() {
            return Err(anyhow!("config does not exist: {}", p.display()));
        }
        return Ok(Some(p.to_path_buf()));
    }
    let default = PathBuf::from("migration-report.toml");
    if default.exists() {
        Ok(Some(default))
    } else {
        Ok(None)
    }
}

fn init_logging(args: &Args, cfg: &Config, file_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries command output; logs go to stderr.
    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = file_path {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn load_view(data: Option<&Path>) -> Result<ReportView> {
    match data {
        Some(path) => {
            let report = data::load_report(path)?;
            info!("loaded report data from {}", path.display());
            Ok(ReportView::with_seed(report))
        }
        None => Ok(ReportView::new()),
    }
}

fn render(
    cfg: &Config,
    data: Option<&Path>,
    summary: Option<String>,
    out_dir: &Path,
) -> Result<()> {
    let started = now_rfc3339();
    let mut view = load_view(data)?;
    if let Some(text) = summary {
        view.edit_summary(text);
    }

    for note in anomalies(view.report()) {
        warn!("{note}");
    }

    ensure_dir(out_dir)?;

    let html = view.render(&RenderOptions::from_config(&cfg.render));
    let html_path = out_dir.join(&cfg.output.html_filename);
    write_artifact(&html_path, &html)?;
    info!("wrote {} ({} bytes)", html_path.display(), html.len());

    if cfg.output.write_report_json {
        let path = out_dir.join(&cfg.output.report_filename);
        write_artifact(&path, &serde_json::to_string_pretty(view.report())?)?;
        info!("wrote {}", path.display());
    }

    let digest = sha256_hex(html.as_bytes());
    if cfg.output.write_index_json {
        let index = serde_json::json!({
            "project": view.report().project_name,
            "month": view.report().report_month,
            "started": started,
            "finished": now_rfc3339(),
            "html": cfg.output.html_filename,
            "html_sha256": digest,
            "summary_edited": view.is_edited(),
        });
        write_artifact(&out_dir.join(INDEX_FILENAME), &serde_json::to_string_pretty(&index)?)?;
    }

    if cfg.global.print_summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "html": html_path,
                "html_sha256": digest,
                "status": "ok"
            }))?
        );
    }

    Ok(())
}

fn metrics(data: Option<&Path>) -> Result<()> {
    let view = load_view(data)?;
    let m = ReportMetrics::from_report(view.report());
    println!("{}", serde_json::to_string_pretty(&m)?);
    Ok(())
}

pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// `render --out-dir` wins over `output.out_dir`.
pub fn resolve_out_dir(cfg: &Config, user: Option<&Path>) -> PathBuf {
    user.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.output.out_dir))
}

pub fn resolve_log_path(cfg: &Config, out_dir: &Path) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }

    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }

    Some(out_dir.join("migration-report.log"))
}
