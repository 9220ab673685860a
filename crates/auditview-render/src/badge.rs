use auditview_types::Severity;

/// CSS class for the impact badge cell type. SKIPPED and INFO share a style.
pub fn impact_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "impact-badge impact-critical",
        Severity::Warning => "impact-badge impact-warning",
        Severity::Pass => "impact-badge impact-pass",
        Severity::Skipped | Severity::Info => "impact-badge impact-info",
        Severity::Unknown => "impact-badge",
    }
}

/// Two-segment SVG badge showing the audit score, colored by band.
pub fn score_badge_svg(score: f64, band: &str) -> String {
    let label = "security";
    let value = format!("{score}");
    let color = match band {
        "success" => "#2e844a",
        "warning" => "#dd7a01",
        "critical" => "#ba0517",
        _ => "#706e6b",
    };
    let label_width = (label.len() as i32 * 7 + 20).max(60);
    let value_width = (value.len() as i32 * 7 + 20).max(40);
    let width = label_width + value_width;
    let label_x = label_width / 2;
    let value_x = label_width + value_width / 2;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"20\" role=\"img\" aria-label=\"{label}: {value}\"><rect width=\"{label_width}\" height=\"20\" fill=\"#555\"/><rect x=\"{label_width}\" width=\"{value_width}\" height=\"20\" fill=\"{color}\"/><text x=\"{label_x}\" y=\"14\" fill=\"#fff\" font-family=\"Verdana\" font-size=\"11\" text-anchor=\"middle\">{label}</text><text x=\"{value_x}\" y=\"14\" fill=\"#fff\" font-family=\"Verdana\" font-size=\"11\" text-anchor=\"middle\">{value}</text></svg>"
    )
}
