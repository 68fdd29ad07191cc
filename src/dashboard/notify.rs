//! User-visible notices

use std::fmt;

/// A failure the user is told about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoadFailed,
    AddTransactionFailed,
    EditTransactionFailed,
    AddCategoryFailed,
    DeleteTransactionFailed,
    DeleteCategoryFailed,
    StatsLoadFailed,
    ProfileLoadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::LoadFailed => "Data load error",
            Notice::AddTransactionFailed => "Error adding transaction",
            Notice::EditTransactionFailed => "Error editing transaction",
            Notice::AddCategoryFailed => "Error adding category",
            Notice::DeleteTransactionFailed => "Error deleting transaction",
            Notice::DeleteCategoryFailed => "Error deleting category",
            Notice::StatsLoadFailed => "Statistics load error",
            Notice::ProfileLoadFailed => "Profile load error",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Surface that shows notices to the user
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Prints notices to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    shown: usize,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notices shown so far
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        self.shown += 1;
        tracing::warn!(%notice, "notice shown");
        eprintln!("{}", notice);
    }
}

/// Keeps notices in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Notice::LoadFailed.to_string(), "Data load error");
        assert_eq!(Notice::AddTransactionFailed.to_string(), "Error adding transaction");
        assert_eq!(Notice::AddCategoryFailed.to_string(), "Error adding category");
        assert_eq!(Notice::EditTransactionFailed.to_string(), "Error editing transaction");
        assert_eq!(Notice::ProfileLoadFailed.to_string(), "Profile load error");
    }

    #[test]
    fn test_recording_notifier() {
        let mut notifier = RecordingNotifier::default();
        notifier.notify(Notice::DeleteTransactionFailed);
        assert_eq!(notifier.notices, vec![Notice::DeleteTransactionFailed]);
    }
}
