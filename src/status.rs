use crate::model::{IssueStatus, Level, MilestoneStatus, OverallStatus};
use serde::{Deserialize, Serialize};

/// Color family used by badges, level tags and cards. Maps 1:1 to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Blue,
    Gray,
    Red,
    Yellow,
    Orange,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Green => "tone-green",
            Tone::Blue => "tone-blue",
            Tone::Gray => "tone-gray",
            Tone::Red => "tone-red",
            Tone::Yellow => "tone-yellow",
            Tone::Orange => "tone-orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn new(label: &str, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

pub fn milestone_badge(status: &MilestoneStatus) -> Badge {
    match status {
        MilestoneStatus::Completed => Badge::new("已完成", Tone::Green),
        MilestoneStatus::InProgress => Badge::new("進行中", Tone::Blue),
        MilestoneStatus::Pending => Badge::new("待開始", Tone::Gray),
        MilestoneStatus::Delayed => Badge::new("延遲", Tone::Red),
        MilestoneStatus::Other(raw) => Badge::new(raw, Tone::Gray),
    }
}

pub fn level_badge(level: &Level) -> Badge {
    match level {
        Level::High => Badge::new("高", Tone::Red),
        Level::Medium => Badge::new("中", Tone::Yellow),
        Level::Low => Badge::new("低", Tone::Green),
        Level::Other(raw) => Badge::new(raw, Tone::Gray),
    }
}

pub fn issue_badge(status: &IssueStatus) -> Badge {
    match status {
        IssueStatus::Open => Badge::new("處理中", Tone::Orange),
        IssueStatus::Closed => Badge::new("已結案", Tone::Orange),
        IssueStatus::Other(raw) => Badge::new(raw, Tone::Gray),
    }
}

pub fn overall_badge(status: &OverallStatus) -> Badge {
    match status {
        OverallStatus::OnTrack => Badge::new("正常進行", Tone::Green),
        OverallStatus::AtRisk => Badge::new("需要關注", Tone::Yellow),
        OverallStatus::OffTrack => Badge::new("進度落後", Tone::Red),
        OverallStatus::Other(raw) => Badge::new(raw, Tone::Gray),
    }
}
