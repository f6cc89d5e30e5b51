use crate::model::{
    Issue, IssueStatus, Kpi, Level, Milestone, MilestoneStatus, OverallStatus, Report, Risk,
};

/// The embedded November 2024 report the view starts from and resets to.
pub fn seed_report() -> Report {
    Report {
        project_name: "信用卡系統轉置專案".into(),
        report_month: "2024年11月".into(),
        report_date: "2024-11-21".into(),
        project_manager: String::new(),
        overall_status: OverallStatus::OnTrack,
        executive_summary: String::new(),
        progress_overall: 65,
        milestones: vec![
            milestone("需求分析與規劃", MilestoneStatus::Completed, 100),
            milestone("系統設計與架構", MilestoneStatus::Completed, 100),
            milestone("資料遷移準備", MilestoneStatus::InProgress, 75),
            milestone("系統開發與整合", MilestoneStatus::InProgress, 60),
            milestone("測試與驗證", MilestoneStatus::Pending, 20),
            milestone("上線準備與執行", MilestoneStatus::Pending, 0),
        ],
        completed_items: vec![
            "完成資料庫架構設計與審查".into(),
            "建立測試環境並完成基礎配置".into(),
            "完成第一階段資料清理作業".into(),
        ],
        next_month_plans: vec![
            "執行資料遷移測試（測試環境）".into(),
            "完成核心交易模組開發".into(),
            "進行系統整合測試（SIT）第一輪".into(),
        ],
        risks: vec![Risk {
            description: "舊系統資料品質問題影響遷移時程".into(),
            impact: Level::High,
            probability: Level::Medium,
            mitigation: "增派資料分析人員，建立資料清理SOP".into(),
        }],
        issues: vec![Issue {
            description: "第三方支付介面API文件不完整".into(),
            status: IssueStatus::Open,
            owner: "技術團隊".into(),
            action: "已發函要求廠商提供完整文件".into(),
        }],
        team_members: 12,
        budget_used: 3_500_000,
        budget_total: 6_000_000,
        kpis: vec![
            kpi("專案進度達成率", 70.0, 65.0, "%"),
            kpi("預算執行率", 60.0, 58.0, "%"),
            kpi("重大風險數量", 2.0, 1.0, "件"),
            kpi("團隊滿意度", 80.0, 85.0, "分"),
        ],
    }
}

fn milestone(name: &str, status: MilestoneStatus, completion: u8) -> Milestone {
    Milestone {
        name: name.into(),
        status,
        completion,
    }
}

fn kpi(name: &str, target: f64, actual: f64, unit: &str) -> Kpi {
    Kpi {
        name: name.into(),
        target,
        actual,
        unit: unit.into(),
    }
}
