//! Report selection
//!
//! Which optional report the dashboard currently shows.

use serde::{Deserialize, Serialize};

/// A report that can be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Weekly,
    Macros,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Weekly => "weekly",
            ReportKind::Macros => "macros",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "weekly_trends" => Some(ReportKind::Weekly),
            "macros" | "macro_distribution" => Some(ReportKind::Macros),
            _ => None,
        }
    }
}

/// The active report, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportView {
    #[default]
    None,
    Weekly,
    Macros,
}

impl ReportView {
    /// Select `kind`, or clear the view when `kind` is already shown
    pub fn toggle(self, kind: ReportKind) -> Self {
        if self.kind() == Some(kind) {
            ReportView::None
        } else {
            kind.into()
        }
    }

    pub fn kind(&self) -> Option<ReportKind> {
        match self {
            ReportView::None => None,
            ReportView::Weekly => Some(ReportKind::Weekly),
            ReportView::Macros => Some(ReportKind::Macros),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportView::None => "none",
            ReportView::Weekly => "weekly",
            ReportView::Macros => "macros",
        }
    }
}

impl From<ReportKind> for ReportView {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Weekly => ReportView::Weekly,
            ReportKind::Macros => ReportView::Macros,
        }
    }
}
