pub mod cli;
pub mod config;
pub mod data;
pub mod metrics;
pub mod model;
pub mod render;
pub mod seed;
pub mod status;
pub mod util;
pub mod view;

pub use model::Report;
pub use view::ReportView;
