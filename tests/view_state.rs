use migration_report::{ReportView, seed::seed_report};

#[test]
fn starts_from_seed() {
    let view = ReportView::new();
    assert_eq!(view.report(), &seed_report());
    assert!(view.report().executive_summary.is_empty());
    assert!(!view.is_edited());
}

#[test]
fn edit_summary_is_verbatim() {
    let mut view = ReportView::new();
    let text = "  本月完成資料清理 \n\n第二段：SIT 準備中。\t ";
    view.edit_summary(text);
    assert_eq!(view.report().executive_summary, text);
    assert!(view.is_edited());

    // Only the summary moves.
    let mut expected = seed_report();
    expected.executive_summary = text.to_string();
    assert_eq!(view.report(), &expected);
}

#[test]
fn reset_restores_every_field() {
    let mut view = ReportView::new();
    view.edit_summary("draft");
    view.edit_summary("second draft");
    view.reset();
    assert_eq!(view.report(), &seed_report());
    assert_eq!(view.report().executive_summary, "");
    assert!(!view.is_edited());
}

#[test]
fn reset_goes_back_to_custom_seed() {
    let mut seed = seed_report();
    seed.executive_summary = "baseline".into();
    seed.budget_used = 1_000;

    let mut view = ReportView::with_seed(seed.clone());
    view.edit_summary("");
    assert!(view.is_edited());
    view.reset();
    assert_eq!(view.report(), &seed);
    assert_eq!(view.seed(), &seed);
}
