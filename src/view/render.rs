//! Dashboard Rendering
//!
//! Pure functions from fetched state to a view description. Presentation
//! layers consume the description and replace whatever they showed before.

use serde::Serialize;

use super::format::money;
use crate::api::{CategoryStats, DashboardSnapshot, Transaction, TransactionId};

/// Category cell for transactions without a category
pub const MISSING_CATEGORY: &str = "–";

/// Label of the neutral first option of the category selector
pub const CATEGORY_PLACEHOLDER: &str = "Select a category";

/// Label of each row's delete control
pub const DELETE_LABEL: &str = "Delete";

/// Everything the dashboard shows, derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub balance: String,
    pub transactions: TransactionTable,
    pub categories: CategorySelector,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TransactionTable {
    pub rows: Vec<TransactionRow>,
}

/// One rendered transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    /// Lookup key used to resolve row-scoped actions
    pub key: TransactionId,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub delete: Control,
}

impl TransactionRow {
    /// Text cells in column order, without the control
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.date,
            &self.kind,
            &self.category,
            &self.description,
            &self.amount,
        ]
    }
}

/// An interactive element and the action it is bound to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub label: String,
    pub action: Action,
}

/// Actions a rendered control can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum Action {
    DeleteTransaction(TransactionId),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategorySelector {
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Render a full dashboard view from a snapshot
pub fn render(snapshot: &DashboardSnapshot) -> DashboardView {
    DashboardView {
        balance: money(snapshot.balance),
        transactions: render_transactions(&snapshot.transactions),
        categories: render_categories(snapshot),
    }
}

fn render_transactions(transactions: &[Transaction]) -> TransactionTable {
    let rows = transactions
        .iter()
        .map(|t| TransactionRow {
            key: t.id,
            date: t.date.clone(),
            kind: t.kind.label().to_string(),
            category: t
                .category
                .clone()
                .unwrap_or_else(|| MISSING_CATEGORY.to_string()),
            description: t.description.clone().unwrap_or_default(),
            amount: money(t.amount),
            delete: Control {
                label: DELETE_LABEL.to_string(),
                action: Action::DeleteTransaction(t.id),
            },
        })
        .collect();

    TransactionTable { rows }
}

fn render_categories(snapshot: &DashboardSnapshot) -> CategorySelector {
    let placeholder = SelectOption {
        value: String::new(),
        label: CATEGORY_PLACEHOLDER.to_string(),
    };

    let options = std::iter::once(placeholder)
        .chain(snapshot.categories.iter().map(|c| SelectOption {
            value: c.id.to_string(),
            label: c.name.clone(),
        }))
        .collect();

    CategorySelector { options }
}

/// Per-category totals table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub rows: Vec<StatsRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    pub category: String,
    pub income: String,
    pub expense: String,
    pub net: String,
}

/// Render category statistics; a missing value in a short series counts as zero
pub fn render_stats(stats: &CategoryStats) -> StatsView {
    let rows = stats
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let income = stats.income.get(i).copied().unwrap_or(0.0);
            let expense = stats.expense.get(i).copied().unwrap_or(0.0);
            StatsRow {
                category: label.clone(),
                income: money(income),
                expense: money(expense),
                net: money(income - expense),
            }
        })
        .collect();

    StatsView { rows }
}
