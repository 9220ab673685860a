//! Score gauge geometry and color bands.

use serde::Serialize;

/// Length of the semicircular gauge arc (`M 20 100 A 80 80 0 0 1 180 100`).
pub const GAUGE_ARC_LENGTH: f64 = 251.33;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Success,
    Warning,
    Critical,
}

impl ScoreBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Success => "success",
            ScoreBand::Warning => "warning",
            ScoreBand::Critical => "critical",
        }
    }

    pub fn gauge_class(self) -> &'static str {
        match self {
            ScoreBand::Success => "gauge-stroke gauge-stroke-success",
            ScoreBand::Warning => "gauge-stroke gauge-stroke-warning",
            ScoreBand::Critical => "gauge-stroke gauge-stroke-critical",
        }
    }

    pub fn score_text_class(self) -> &'static str {
        match self {
            ScoreBand::Success => "gauge-score-value score-success",
            ScoreBand::Warning => "gauge-score-value score-warning",
            ScoreBand::Critical => "gauge-score-value score-critical",
        }
    }
}

/// Clamp to 0..=100; NaN counts as 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

pub fn score_band(score: f64) -> ScoreBand {
    let score = clamp_score(score);
    if score >= 80.0 {
        ScoreBand::Success
    } else if score >= 50.0 {
        ScoreBand::Warning
    } else {
        ScoreBand::Critical
    }
}

pub fn gauge_dash_array() -> String {
    format!("{GAUGE_ARC_LENGTH} {GAUGE_ARC_LENGTH}")
}

/// Stroke offset that leaves `score`% of the arc visible.
pub fn gauge_dash_offset(score: f64) -> f64 {
    GAUGE_ARC_LENGTH * (1.0 - clamp_score(score) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(score_band(100.0), ScoreBand::Success);
        assert_eq!(score_band(80.0), ScoreBand::Success);
        assert_eq!(score_band(79.9), ScoreBand::Warning);
        assert_eq!(score_band(50.0), ScoreBand::Warning);
        assert_eq!(score_band(49.0), ScoreBand::Critical);
        assert_eq!(score_band(f64::NAN), ScoreBand::Critical);
    }

    #[test]
    fn dash_offset_spans_the_arc() {
        assert_eq!(gauge_dash_offset(100.0), 0.0);
        assert_eq!(gauge_dash_offset(0.0), GAUGE_ARC_LENGTH);
        assert_eq!(gauge_dash_offset(150.0), 0.0);
        assert_eq!(gauge_dash_offset(-10.0), GAUGE_ARC_LENGTH);
        assert!((gauge_dash_offset(50.0) - GAUGE_ARC_LENGTH / 2.0).abs() < 1e-9);
    }

    #[test]
    fn dash_array_repeats_arc_length() {
        assert_eq!(gauge_dash_array(), "251.33 251.33");
    }

    #[test]
    fn classes_embed_band_name() {
        for band in [ScoreBand::Success, ScoreBand::Warning, ScoreBand::Critical] {
            assert!(band.gauge_class().ends_with(band.as_str()));
            assert!(band.score_text_class().ends_with(band.as_str()));
        }
    }
}
