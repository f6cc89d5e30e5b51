use migration_report::{
    ReportView,
    model::MilestoneStatus,
    render::{RenderOptions, SUMMARY_PLACEHOLDER, render_document},
    seed::seed_report,
};

fn render_seed() -> String {
    ReportView::new().render(&RenderOptions::default())
}

#[test]
fn renders_every_section_in_order() {
    let html = render_seed();
    let headings = [
        "信用卡系統轉置專案",
        "專案狀態總覽",
        "執行摘要",
        "里程碑進度",
        "本月完成事項",
        "下月工作計畫",
        "風險與議題管理",
        "關鍵績效指標 (KPI)",
        "預算執行狀況",
        "列印 / 匯出 PDF",
        "機密文件，僅供內部使用",
    ];
    let mut last = 0;
    for h in headings {
        let pos = html[last..]
            .find(h)
            .map(|p| p + last)
            .unwrap_or_else(|| panic!("missing or out of order: {h}"));
        last = pos;
    }
}

#[test]
fn seed_figures_appear() {
    let html = render_seed();
    assert!(html.contains(r#"id="overview-budget">58%<"#));
    assert!(html.contains("執行率: 58%"));
    assert!(html.contains("NT$ 6,000,000"));
    assert!(html.contains("NT$ 3,500,000"));
    assert!(html.contains("NT$ 2,500,000"));
    assert!(html.contains("65%"));
    assert!(html.contains("12人"));
    assert!(html.contains("正常進行"));
    assert!(html.contains("報告日期: 2024-11-21"));
    assert!(html.contains("目標: 70%"));
    assert!(html.contains(r#"fill-gradient" style="width: 58.333333333333336%""#));
}

#[test]
fn milestones_render_bars_and_badges() {
    let html = render_seed();
    assert_eq!(html.matches(r#"class="milestone""#).count(), 6);
    assert!(html.contains(r#"style="width: 75%""#));
    assert!(html.contains(r#"style="width: 0%""#));
    assert_eq!(html.matches("已完成").count(), 2);
    assert_eq!(html.matches("進行中").count(), 2);
    assert_eq!(html.matches("待開始").count(), 2);
}

#[test]
fn plans_are_numbered_from_one() {
    let html = render_seed();
    assert!(html.contains(r#"<span class="num">1</span>"#));
    assert!(html.contains(r#"<span class="num">3</span>"#));
    assert!(!html.contains(r#"<span class="num">0</span>"#));
}

#[test]
fn kpi_bars_use_two_tones() {
    let html = render_seed();
    assert_eq!(html.matches("bar-fill fill-achieved").count(), 1);
    assert_eq!(html.matches("bar-fill fill-below").count(), 3);
    assert!(html.contains(r#"fill-below" style="width: 92.85714285714286%""#));
    assert!(html.contains(r#"fill-achieved" style="width: 100%""#));
}

#[test]
fn non_finite_kpi_values_never_reach_the_page() {
    let mut report = seed_report();
    report.kpis[0].actual = f64::NAN;
    report.kpis[1].target = 1e-308;
    report.kpis[1].actual = 1e10;
    report.budget_used = i64::MIN;
    report.budget_total = i64::MAX;
    let html = render_document(&report, &RenderOptions::default());
    assert!(!html.contains("NaN"));
    assert!(!html.contains("inf"));
    assert!(html.contains(r#"<span class="kpi-actual">N/A</span>"#));
    assert!(html.contains(r#"fill-achieved" style="width: 100%""#));
}

#[test]
fn print_rules_and_actions() {
    let html = render_seed();
    assert!(html.contains("@media print"));
    assert!(html.contains(r#"class="actions no-print""#));
    assert!(html.contains(r#"class="section page-break" id="risks""#));
    assert!(html.contains("window.print()"));
    assert!(html.contains("window.location.reload()"));
}

#[test]
fn options_can_drop_actions_and_page_break() {
    let opts = RenderOptions {
        page_break_before_risks: false,
        show_actions: false,
        ..RenderOptions::default()
    };
    let html = ReportView::new().render(&opts);
    assert!(!html.contains("window.print()"));
    assert!(html.contains(r#"class="section" id="risks""#));
}

#[test]
fn empty_summary_shows_placeholder() {
    let html = render_seed();
    assert!(html.contains(&format!(r#"placeholder="{SUMMARY_PLACEHOLDER}">"#)));
    assert!(html.contains(&format!("placeholder=\"{SUMMARY_PLACEHOLDER}\">\n</textarea>")));
}

#[test]
fn edited_summary_renders_verbatim_and_escaped() {
    let mut view = ReportView::new();
    view.edit_summary("進度 <良好> & 穩定\n第二行");
    let html = view.render(&RenderOptions::default());
    assert!(html.contains(">\n進度 &lt;良好&gt; &amp; 穩定\n第二行</textarea>"));

    view.reset();
    let html = view.render(&RenderOptions::default());
    assert!(!html.contains("進度"));
}

#[test]
fn zero_budget_renders_not_available() {
    let mut report = seed_report();
    report.budget_total = 0;
    report.kpis[0].target = 0.0;
    let html = render_document(&report, &RenderOptions::default());
    assert!(html.contains(r#"id="overview-budget">N/A<"#));
    assert!(html.contains("執行率: N/A"));
    assert!(!html.contains("NaN"));
    assert!(!html.contains("inf"));
}

#[test]
fn unknown_milestone_status_renders_raw_tag() {
    let mut report = seed_report();
    report.milestones[0].status = MilestoneStatus::Other("on-hold".into());
    let html = render_document(&report, &RenderOptions::default());
    assert!(html.contains(r#"<span class="badge tone-gray">on-hold</span>"#));
}
