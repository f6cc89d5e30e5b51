//! HTML rendering of the monthly report.
//!
//! Produces one self-contained document with inline CSS. The only script is
//! the two action buttons, which hand off to the browser's print dialog and
//! page reload.

use crate::config;
use crate::metrics::{
    budget_percent, budget_ratio, kpi_achieved, kpi_bar_width, remaining_budget,
};
use crate::model::{Issue, Kpi, Milestone, Report, Risk};
use crate::status::{Badge, issue_badge, level_badge, milestone_badge, overall_badge};
use crate::util::{format_currency, format_number, html_escape};
use std::fmt::Write;

pub const SUMMARY_PLACEHOLDER: &str =
    "請輸入本月專案執行摘要，包含主要成果、重點進展及整體評估...";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub lang: String,
    pub currency_prefix: String,
    pub title_suffix: String,
    pub page_break_before_risks: bool,
    pub show_actions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&config::Render::default())
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &config::Render) -> Self {
        Self {
            lang: cfg.lang.clone(),
            currency_prefix: cfg.currency_prefix.clone(),
            title_suffix: cfg.title_suffix.clone(),
            page_break_before_risks: cfg.page_break_before_risks,
            show_actions: cfg.show_actions,
        }
    }
}

pub fn render_document(report: &Report, opts: &RenderOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {month} {suffix}</title>
    <style>{css}</style>
</head>
<body>
    <div class="report">
{header}
{overview}
{summary}
{milestones}
{completed}
{plans}
{risks}
{kpis}
{budget}
{actions}
{footer}
    </div>
</body>
</html>
"#,
        lang = html_escape(&opts.lang),
        title = html_escape(&report.project_name),
        month = html_escape(&report.report_month),
        suffix = html_escape(&opts.title_suffix),
        css = inline_css(),
        header = render_header(report, opts),
        overview = render_overview(report),
        summary = render_summary(report),
        milestones = render_milestones(&report.milestones),
        completed = render_completed(&report.completed_items),
        plans = render_plans(&report.next_month_plans),
        risks = render_risks_and_issues(&report.risks, &report.issues, opts),
        kpis = render_kpis(&report.kpis),
        budget = render_budget(report, opts),
        actions = render_actions(opts),
        footer = render_footer(report),
    )
}

/// Budget percent as display text; shared by the overview card and the
/// budget section so both always agree.
pub fn budget_percent_text(used: i64, total: i64) -> String {
    match budget_percent(used, total) {
        Some(p) => format!("{p}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// CSS width for a bar; missing ratios draw an empty bar.
fn bar_width(pct: Option<f64>) -> String {
    format!("{}%", pct.unwrap_or(0.0))
}

fn badge_span(badge: &Badge, extra_class: &str) -> String {
    format!(
        r#"<span class="{extra_class} {tone}">{label}</span>"#,
        tone = badge.tone.css_class(),
        label = html_escape(&badge.label),
    )
}

fn render_header(report: &Report, opts: &RenderOptions) -> String {
    format!(
        r#"        <header class="report-header">
            <h1>{name}</h1>
            <div class="header-meta">
                <span>{month} {suffix}</span>
                <span>報告日期: {date}</span>
            </div>
        </header>"#,
        name = html_escape(&report.project_name),
        month = html_escape(&report.report_month),
        suffix = html_escape(&opts.title_suffix),
        date = html_escape(&report.report_date),
    )
}

fn render_overview(report: &Report) -> String {
    let status = overall_badge(&report.overall_status);
    format!(
        r#"        <section class="section">
            <h2>專案狀態總覽</h2>
            <div class="grid grid-4">
                <div class="card card-blue"><div class="card-label">整體進度</div><div class="card-value tone-text-blue">{progress}%</div></div>
                <div class="card card-green"><div class="card-label">團隊人數</div><div class="card-value tone-text-green">{team}人</div></div>
                <div class="card card-purple"><div class="card-label">預算執行</div><div class="card-value tone-text-purple" id="overview-budget">{budget}</div></div>
                <div class="card card-yellow"><div class="card-label">專案狀態</div><div class="card-value card-value-sm tone-text-{status_tone}">{status}</div></div>
            </div>
        </section>"#,
        progress = report.progress_overall,
        team = report.team_members,
        budget = budget_percent_text(report.budget_used, report.budget_total),
        status_tone = tone_suffix(&status),
        status = html_escape(&status.label),
    )
}

fn tone_suffix(badge: &Badge) -> &'static str {
    badge.tone.css_class().trim_start_matches("tone-")
}

fn render_summary(report: &Report) -> String {
    // The newline after the start tag is swallowed by HTML parsers, so a
    // summary that itself begins with a newline keeps it.
    format!(
        r#"        <section class="section">
            <h2>執行摘要</h2>
            <div class="panel">
                <textarea class="summary" name="executive_summary" placeholder="{placeholder}">
{text}</textarea>
            </div>
        </section>"#,
        placeholder = html_escape(SUMMARY_PLACEHOLDER),
        text = html_escape(&report.executive_summary),
    )
}

fn render_milestones(milestones: &[Milestone]) -> String {
    let mut rows = String::new();
    for m in milestones {
        let badge = milestone_badge(&m.status);
        let _ = write!(
            rows,
            r#"
                <div class="milestone">
                    <div class="row">
                        <div class="row-left"><span class="strong">{name}</span>{badge}</div>
                        <span class="pct">{completion}%</span>
                    </div>
                    <div class="bar"><div class="bar-fill fill-blue" style="width: {completion}%"></div></div>
                </div>"#,
            name = html_escape(&m.name),
            badge = badge_span(&badge, "badge"),
            completion = m.completion,
        );
    }
    format!(
        r#"        <section class="section">
            <h2>里程碑進度</h2>
            <div class="stack">{rows}
            </div>
        </section>"#
    )
}

fn render_completed(items: &[String]) -> String {
    let mut list = String::new();
    for item in items {
        let _ = write!(
            list,
            r#"
                <li class="item item-green"><span class="check">&#10003;</span><span>{}</span></li>"#,
            html_escape(item)
        );
    }
    format!(
        r#"        <section class="section">
            <h2>本月完成事項</h2>
            <ul class="list">{list}
            </ul>
        </section>"#
    )
}

fn render_plans(plans: &[String]) -> String {
    let mut list = String::new();
    for (i, plan) in plans.iter().enumerate() {
        let _ = write!(
            list,
            r#"
                <li class="item item-blue"><span class="num">{n}</span><span>{text}</span></li>"#,
            n = i + 1,
            text = html_escape(plan),
        );
    }
    format!(
        r#"        <section class="section">
            <h2>下月工作計畫</h2>
            <ol class="list">{list}
            </ol>
        </section>"#
    )
}

fn render_risks_and_issues(risks: &[Risk], issues: &[Issue], opts: &RenderOptions) -> String {
    let mut risk_rows = String::new();
    for r in risks {
        let impact = level_badge(&r.impact);
        let probability = level_badge(&r.probability);
        let _ = write!(
            risk_rows,
            r#"
                <div class="risk">
                    <div class="row">
                        <span class="strong">{desc}</span>
                        <div class="tags"><span class="level tone-text-{it}">影響: {il}</span><span class="level tone-text-{pt}">機率: {pl}</span></div>
                    </div>
                    <div class="detail"><strong>因應措施:</strong> {mitigation}</div>
                </div>"#,
            desc = html_escape(&r.description),
            it = tone_suffix(&impact),
            il = html_escape(&impact.label),
            pt = tone_suffix(&probability),
            pl = html_escape(&probability.label),
            mitigation = html_escape(&r.mitigation),
        );
    }

    let mut issue_rows = String::new();
    for i in issues {
        let badge = issue_badge(&i.status);
        let _ = write!(
            issue_rows,
            r#"
                <div class="issue">
                    <div class="row">
                        <span class="strong">{desc}</span>
                        {badge}
                    </div>
                    <div class="grid grid-2 detail">
                        <div><strong>負責人:</strong> {owner}</div>
                        <div><strong>行動方案:</strong> {action}</div>
                    </div>
                </div>"#,
            desc = html_escape(&i.description),
            badge = badge_span(&badge, "badge"),
            owner = html_escape(&i.owner),
            action = html_escape(&i.action),
        );
    }

    let class = if opts.page_break_before_risks {
        "section page-break"
    } else {
        "section"
    };

    format!(
        r#"        <section class="{class}" id="risks">
            <h2>風險與議題管理</h2>
            <div class="subsection">
                <h3>主要風險</h3>{risk_rows}
            </div>
            <div class="subsection">
                <h3>待解決議題</h3>{issue_rows}
            </div>
        </section>"#
    )
}

fn render_kpis(kpis: &[Kpi]) -> String {
    let mut cards = String::new();
    for k in kpis {
        let fill = if kpi_achieved(k) {
            "fill-achieved"
        } else {
            "fill-below"
        };
        let _ = write!(
            cards,
            r#"
                <div class="kpi">
                    <div class="card-label">{name}</div>
                    <div class="row row-end">
                        <div><span class="kpi-actual">{actual}</span><span class="unit">{unit}</span></div>
                        <div class="muted">目標: {target}{unit}</div>
                    </div>
                    <div class="bar"><div class="bar-fill {fill}" style="width: {width}"></div></div>
                </div>"#,
            name = html_escape(&k.name),
            actual = format_number(k.actual),
            target = format_number(k.target),
            unit = html_escape(&k.unit),
            width = bar_width(kpi_bar_width(k)),
        );
    }
    format!(
        r#"        <section class="section">
            <h2>關鍵績效指標 (KPI)</h2>
            <div class="grid grid-2">{cards}
            </div>
        </section>"#
    )
}

fn render_budget(report: &Report, opts: &RenderOptions) -> String {
    let used = report.budget_used;
    let total = report.budget_total;
    format!(
        r#"        <section class="section">
            <h2>預算執行狀況</h2>
            <div class="panel panel-bordered">
                <div class="grid grid-3">
                    <div><div class="card-label">總預算</div><div class="money">{total}</div></div>
                    <div><div class="card-label">已使用</div><div class="money tone-text-blue">{used}</div></div>
                    <div><div class="card-label">剩餘預算</div><div class="money tone-text-green">{remaining}</div></div>
                </div>
                <div class="bar bar-thick"><div class="bar-fill fill-gradient" style="width: {width}"></div></div>
                <div class="muted right" id="budget-rate">執行率: {percent}</div>
            </div>
        </section>"#,
        total = html_escape(&format_currency(&opts.currency_prefix, total)),
        used = html_escape(&format_currency(&opts.currency_prefix, used)),
        remaining = match remaining_budget(used, total) {
            Some(left) => html_escape(&format_currency(&opts.currency_prefix, left)),
            None => NOT_AVAILABLE.to_string(),
        },
        width = bar_width(budget_ratio(used, total)),
        percent = budget_percent_text(used, total),
    )
}

fn render_actions(opts: &RenderOptions) -> String {
    if !opts.show_actions {
        return String::new();
    }
    r#"        <div class="actions no-print">
            <button type="button" class="btn btn-primary" onclick="window.print()">列印 / 匯出 PDF</button>
            <button type="button" class="btn btn-secondary" onclick="window.location.reload()">重置範本</button>
        </div>"#
        .to_string()
}

fn render_footer(report: &Report) -> String {
    let author = if report.project_manager.is_empty() {
        "專案經理".to_string()
    } else {
        format!("專案經理 {}", html_escape(&report.project_manager))
    };
    format!(
        r#"        <footer class="report-footer">
            <p>本報告由{author}製作 | 機密文件，僅供內部使用</p>
        </footer>"#
    )
}

fn inline_css() -> &'static str {
    r#"
        * { box-sizing: border-box; }
        body { margin: 0; background: #ffffff; color: #1f2937; font-family: "Noto Sans TC", "Microsoft JhengHei", system-ui, sans-serif; }
        .report { max-width: 64rem; margin: 0 auto; padding: 2rem; background: #ffffff; }
        .report-header { border-bottom: 4px solid #2563eb; padding-bottom: 1.5rem; margin-bottom: 2rem; }
        .report-header h1 { font-size: 1.875rem; font-weight: 700; margin: 0 0 0.5rem; }
        .header-meta { display: flex; justify-content: space-between; color: #4b5563; }
        .section { margin-bottom: 2rem; }
        .section h2 { font-size: 1.25rem; font-weight: 700; margin: 0 0 1rem; }
        .subsection { margin-bottom: 1.5rem; }
        .subsection h3 { font-weight: 600; color: #374151; margin: 0 0 0.75rem; }
        .grid { display: grid; gap: 1rem; }
        .grid-2 { grid-template-columns: repeat(2, 1fr); }
        .grid-3 { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 1rem; }
        .grid-4 { grid-template-columns: repeat(4, 1fr); }
        .card { padding: 1rem; border-radius: 0.5rem; }
        .card-blue { background: #eff6ff; }
        .card-green { background: #f0fdf4; }
        .card-purple { background: #faf5ff; }
        .card-yellow { background: #fefce8; }
        .card-label { color: #4b5563; font-size: 0.875rem; margin-bottom: 0.25rem; }
        .card-value { font-size: 1.5rem; font-weight: 700; }
        .card-value-sm { font-size: 1.125rem; }
        .panel { background: #f9fafb; padding: 1rem; border-radius: 0.5rem; }
        .panel-bordered { background: #ffffff; border: 1px solid #e5e7eb; padding: 1.5rem; }
        .summary { width: 100%; min-height: 8rem; padding: 0.75rem; border: 1px solid #e5e7eb; border-radius: 0.25rem; font: inherit; resize: vertical; }
        .summary:focus { outline: 2px solid #3b82f6; border-color: transparent; }
        .stack > * + * { margin-top: 0.75rem; }
        .milestone, .issue, .kpi { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1rem; }
        .risk { border: 1px solid #fef08a; background: #fefce8; border-radius: 0.5rem; padding: 1rem; margin-bottom: 0.75rem; }
        .issue { margin-bottom: 0.75rem; }
        .row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
        .row-end { align-items: flex-end; }
        .row-left { display: flex; align-items: center; gap: 0.75rem; }
        .tags { display: flex; gap: 0.5rem; }
        .strong { font-weight: 600; }
        .pct { font-size: 0.875rem; font-weight: 600; color: #4b5563; }
        .badge { padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; }
        .level { font-size: 0.75rem; font-weight: 500; }
        .tone-green { background: #dcfce7; color: #166534; }
        .tone-blue { background: #dbeafe; color: #1e40af; }
        .tone-gray { background: #f3f4f6; color: #1f2937; }
        .tone-red { background: #fee2e2; color: #991b1b; }
        .tone-yellow { background: #fef9c3; color: #854d0e; }
        .tone-orange { background: #ffedd5; color: #9a3412; }
        .tone-text-green { color: #16a34a; }
        .tone-text-blue { color: #2563eb; }
        .tone-text-gray { color: #4b5563; }
        .tone-text-red { color: #dc2626; }
        .tone-text-yellow { color: #ca8a04; }
        .tone-text-orange { color: #ea580c; }
        .tone-text-purple { color: #9333ea; }
        .bar { width: 100%; height: 0.5rem; background: #e5e7eb; border-radius: 9999px; overflow: hidden; }
        .kpi .bar { margin-top: 0.5rem; }
        .bar-thick { height: 0.75rem; }
        .bar-fill { height: 100%; border-radius: 9999px; }
        .fill-blue { background: #2563eb; }
        .fill-achieved { background: #16a34a; }
        .fill-below { background: #ca8a04; }
        .fill-gradient { background: linear-gradient(to right, #3b82f6, #2563eb); }
        .list { list-style: none; margin: 0; padding: 0; }
        .item { display: flex; align-items: flex-start; gap: 0.75rem; padding: 0.75rem; border-radius: 0.25rem; margin-bottom: 0.5rem; color: #374151; }
        .item-green { background: #f0fdf4; }
        .item-blue { background: #eff6ff; }
        .check { color: #16a34a; font-weight: 700; flex-shrink: 0; }
        .num { width: 1.5rem; height: 1.5rem; border-radius: 9999px; background: #2563eb; color: #ffffff; display: flex; align-items: center; justify-content: center; font-size: 0.875rem; font-weight: 700; flex-shrink: 0; }
        .detail { font-size: 0.875rem; color: #4b5563; }
        .kpi-actual { font-size: 1.5rem; font-weight: 700; }
        .unit { color: #6b7280; margin-left: 0.25rem; }
        .money { font-size: 1.25rem; font-weight: 700; }
        .muted { font-size: 0.875rem; color: #6b7280; }
        .right { text-align: right; margin-top: 0.5rem; }
        .actions { display: flex; gap: 1rem; margin-top: 2rem; }
        .btn { padding: 0.75rem 1.5rem; border: none; border-radius: 0.5rem; font: inherit; font-weight: 500; cursor: pointer; }
        .btn-primary { background: #2563eb; color: #ffffff; }
        .btn-primary:hover { background: #1d4ed8; }
        .btn-secondary { background: #e5e7eb; color: #374151; }
        .btn-secondary:hover { background: #d1d5db; }
        .report-footer { margin-top: 3rem; padding-top: 1.5rem; border-top: 1px solid #e5e7eb; text-align: center; font-size: 0.875rem; color: #6b7280; }
        @media print {
            .no-print { display: none; }
            .page-break { page-break-before: always; break-before: page; }
        }
    "#
}
