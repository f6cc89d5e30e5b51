use crate::{model::Report, render, seed::seed_report};
use tracing::debug;

pub use crate::render::RenderOptions;

/// Owns the report record for one page view.
///
/// The seed is kept alongside the working copy so that `reset` can discard
/// every edit at once, the same way reloading the page would.
#[derive(Debug, Clone)]
pub struct ReportView {
    seed: Report,
    current: Report,
}

impl Default for ReportView {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportView {
    pub fn new() -> Self {
        Self::with_seed(seed_report())
    }

    pub fn with_seed(seed: Report) -> Self {
        Self {
            current: seed.clone(),
            seed,
        }
    }

    pub fn report(&self) -> &Report {
        &self.current
    }

    pub fn seed(&self) -> &Report {
        &self.seed
    }

    pub fn is_edited(&self) -> bool {
        self.current != self.seed
    }

    /// Replaces the executive summary verbatim.
    pub fn edit_summary(&mut self, text: impl Into<String>) {
        self.current.executive_summary = text.into();
        debug!(
            chars = self.current.executive_summary.chars().count(),
            "executive summary edited"
        );
    }

    /// Throws away the working copy and starts again from the seed.
    pub fn reset(&mut self) {
        self.current = self.seed.clone();
        debug!("report view reset to seed");
    }

    pub fn render(&self, opts: &RenderOptions) -> String {
        render::render_document(&self.current, opts)
    }
}
