use crate::sort::SortSpec;
use crate::trend::TrendWindow;

/// Resolved presentation settings consumed by the app layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Initial table order.
    pub sort: SortSpec,
    pub trend_window: TrendWindow,
    /// Compliance template preselected for assessments and snapshots.
    pub template: Option<String>,
    /// Rows rendered before the table is truncated.
    pub max_rows: usize,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            sort: SortSpec::default(),
            trend_window: TrendWindow::default(),
            template: None,
            max_rows: 500,
        }
    }
}
