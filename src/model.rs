use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub project_name: String,
    pub report_month: String,
    pub report_date: String,
    #[serde(default)]
    pub project_manager: String,
    pub overall_status: OverallStatus,
    #[serde(default)]
    pub executive_summary: String,
    pub progress_overall: u32,
    pub team_members: u32,
    pub budget_used: i64,
    pub budget_total: i64,
    #[serde(default)]
    pub completed_items: Vec<String>,
    #[serde(default)]
    pub next_month_plans: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub status: MilestoneStatus,
    pub completion: u8, // percent, 0..=100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub description: String,
    pub impact: Level,
    pub probability: Level,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub description: String,
    pub status: IssueStatus,
    pub owner: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub name: String,
    pub target: f64,
    pub actual: f64,
    pub unit: String,
}

/// Declares a string-tagged enum whose unknown tags are kept in `Other`.
macro_rules! tagged {
    ($name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($tag => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tagged!(OverallStatus {
    OnTrack => "on-track",
    AtRisk => "at-risk",
    OffTrack => "off-track",
});

tagged!(MilestoneStatus {
    Completed => "completed",
    InProgress => "in-progress",
    Pending => "pending",
    Delayed => "delayed",
});

tagged!(Level {
    High => "high",
    Medium => "medium",
    Low => "low",
});

tagged!(IssueStatus {
    Open => "open",
    Closed => "closed",
});
