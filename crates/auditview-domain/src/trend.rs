//! Trend windows and direction classification.

use auditview_types::TrendSummary;
use serde::Serialize;

/// Day window for trend analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum TrendWindow {
    Week,
    #[default]
    Month,
    Quarter,
    HalfYear,
    Year,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported trend window: {0} days (expected one of 7, 30, 90, 180, 365)")]
pub struct TrendWindowError(pub u32);

impl TrendWindow {
    pub const ALL: [TrendWindow; 5] = [
        TrendWindow::Week,
        TrendWindow::Month,
        TrendWindow::Quarter,
        TrendWindow::HalfYear,
        TrendWindow::Year,
    ];

    pub fn days(self) -> u32 {
        match self {
            TrendWindow::Week => 7,
            TrendWindow::Month => 30,
            TrendWindow::Quarter => 90,
            TrendWindow::HalfYear => 180,
            TrendWindow::Year => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendWindow::Week => "Last 7 days",
            TrendWindow::Month => "Last 30 days",
            TrendWindow::Quarter => "Last 90 days",
            TrendWindow::HalfYear => "Last 180 days",
            TrendWindow::Year => "Last 365 days",
        }
    }
}

impl TryFrom<u32> for TrendWindow {
    type Error = TrendWindowError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        TrendWindow::ALL
            .into_iter()
            .find(|w| w.days() == days)
            .ok_or(TrendWindowError(days))
    }
}

impl From<TrendWindow> for u32 {
    fn from(value: TrendWindow) -> Self {
        value.days()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    #[default]
    Stable,
}

impl TrendDirection {
    /// Case-insensitive; anything unrecognized is `Stable`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "improving" => TrendDirection::Improving,
            "declining" => TrendDirection::Declining,
            _ => TrendDirection::Stable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TrendDirection::Improving => "trend-indicator trend-improving",
            TrendDirection::Declining => "trend-indicator trend-declining",
            TrendDirection::Stable => "trend-indicator trend-stable",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Improving => "↑",
            TrendDirection::Declining => "↓",
            TrendDirection::Stable => "→",
        }
    }
}

/// Render-ready trend data.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendView {
    pub window: TrendWindow,
    pub current_score: f64,
    pub average_score: f64,
    pub highest_score: f64,
    pub snapshot_count: u32,
    pub direction: TrendDirection,
    pub score_trend: f64,
    /// Signed change, e.g. `+5`, `-3.5`, `0`.
    pub score_trend_label: String,
    pub scores: Vec<f64>,
}

pub fn summarize_trend(raw: &TrendSummary, window: TrendWindow) -> TrendView {
    let score_trend = raw.score_trend.unwrap_or(0.0);
    TrendView {
        window,
        current_score: raw.current_score.unwrap_or(0.0),
        average_score: raw.average_score.unwrap_or(0.0),
        highest_score: raw.highest_score.unwrap_or(0.0),
        snapshot_count: raw.snapshot_count.unwrap_or(0),
        direction: raw
            .trend_direction
            .as_deref()
            .map(TrendDirection::parse)
            .unwrap_or_default(),
        score_trend,
        score_trend_label: signed_label(score_trend),
        scores: raw
            .data_points
            .iter()
            .map(|p| p.health_score.unwrap_or(0.0))
            .collect(),
    }
}

fn signed_label(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else if value < 0.0 {
        format!("{value}")
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditview_types::TrendPoint;

    #[test]
    fn window_accepts_only_known_day_counts() {
        assert_eq!(TrendWindow::try_from(7), Ok(TrendWindow::Week));
        assert_eq!(TrendWindow::try_from(365), Ok(TrendWindow::Year));
        assert_eq!(TrendWindow::try_from(14), Err(TrendWindowError(14)));
        assert_eq!(TrendWindow::default().days(), 30);
    }

    #[test]
    fn direction_parse_is_lenient() {
        assert_eq!(TrendDirection::parse("Improving"), TrendDirection::Improving);
        assert_eq!(TrendDirection::parse("declining"), TrendDirection::Declining);
        assert_eq!(TrendDirection::parse("sideways"), TrendDirection::Stable);
    }

    #[test]
    fn summarize_applies_defaults_and_labels() {
        let raw = TrendSummary {
            current_score: Some(82.0),
            score_trend: Some(5.0),
            trend_direction: Some("improving".to_string()),
            data_points: vec![
                TrendPoint {
                    health_score: Some(77.0),
                    ..TrendPoint::default()
                },
                TrendPoint::default(),
            ],
            ..TrendSummary::default()
        };
        let view = summarize_trend(&raw, TrendWindow::Quarter);
        assert_eq!(view.current_score, 82.0);
        assert_eq!(view.average_score, 0.0);
        assert_eq!(view.direction, TrendDirection::Improving);
        assert_eq!(view.score_trend_label, "+5");
        assert_eq!(view.scores, [77.0, 0.0]);
        assert_eq!(view.window.days(), 90);
    }

    #[test]
    fn signed_label_handles_all_signs() {
        assert_eq!(signed_label(-3.5), "-3.5");
        assert_eq!(signed_label(0.0), "0");
        assert_eq!(signed_label(2.25), "+2.25");
    }
}
