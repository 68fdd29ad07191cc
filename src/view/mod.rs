//! Views
//!
//! - [`render`]: pure snapshot → view description functions
//! - [`terminal`]: text, JSON and CSV presentation of rendered views

pub mod format;
pub mod render;
pub mod terminal;

pub use render::{
    render, render_stats, Action, CategorySelector, Control, DashboardView, SelectOption,
    StatsRow, StatsView, TransactionRow, TransactionTable, CATEGORY_PLACEHOLDER, DELETE_LABEL,
    MISSING_CATEGORY,
};
pub use terminal::{present_dashboard, present_profile, present_stats, OutputFormat, PresentError};
