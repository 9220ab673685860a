use crate::{RenderableRow, RenderableTrendPoint};

const RESULTS_HEADER: [&str; 5] = [
    "Test Name",
    "Impact",
    "Message",
    "Remediation Steps",
    "Setup Link",
];
const TREND_HEADER: [&str; 4] = ["Snapshot Date", "Health Score", "Critical", "Warning"];

/// RFC 4180 CSV of the results table, CRLF line endings.
pub fn render_results_csv(rows: &[RenderableRow]) -> csv::Result<String> {
    let mut wtr = writer();
    wtr.write_record(RESULTS_HEADER)?;
    for r in rows {
        wtr.write_record([
            r.test_name.as_str(),
            r.status_label.as_str(),
            r.message.as_str(),
            r.remediation_steps.as_str(),
            r.setup_url.as_deref().unwrap_or(""),
        ])?;
    }
    finish(wtr)
}

pub fn render_trend_csv(points: &[RenderableTrendPoint]) -> csv::Result<String> {
    let mut wtr = writer();
    wtr.write_record(TREND_HEADER)?;
    for p in points {
        wtr.write_record([
            p.snapshot_date.clone(),
            p.health_score.to_string(),
            p.critical_count.to_string(),
            p.warning_count.to_string(),
        ])?;
    }
    finish(wtr)
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> csv::Result<String> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::other(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditview_types::Severity;

    #[test]
    fn header_only_for_empty_rows() {
        assert_eq!(
            render_results_csv(&[]).unwrap(),
            "Test Name,Impact,Message,Remediation Steps,Setup Link\r\n"
        );
    }

    #[test]
    fn quotes_fields_with_separators() {
        let rows = vec![RenderableRow {
            test_name: "Password, expiry".to_string(),
            severity: Severity::Warning,
            status_label: "WARNING".to_string(),
            message: "say \"hi\"".to_string(),
            remediation_steps: "-".to_string(),
            setup_url: Some("/lightning/setup/SecurityPolicies/home".to_string()),
        }];
        let csv = render_results_csv(&rows).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "\"Password, expiry\",WARNING,\"say \"\"hi\"\"\",-,/lightning/setup/SecurityPolicies/home"
        );
    }

    #[test]
    fn quotes_embedded_line_breaks() {
        let rows = vec![RenderableRow {
            test_name: "Multi".to_string(),
            severity: Severity::Info,
            status_label: "INFO".to_string(),
            message: "line one\nline two".to_string(),
            remediation_steps: "-".to_string(),
            setup_url: None,
        }];
        let csv = render_results_csv(&rows).unwrap();
        assert!(csv.ends_with("Multi,INFO,\"line one\nline two\",-,\r\n"));
    }

    #[test]
    fn trend_csv_lists_points() {
        let csv = render_trend_csv(&[RenderableTrendPoint {
            snapshot_date: "2026-10-01".to_string(),
            health_score: 81.5,
            critical_count: 0,
            warning_count: 4,
        }])
        .unwrap();
        assert_eq!(
            csv,
            "Snapshot Date,Health Score,Critical,Warning\r\n2026-10-01,81.5,0,4\r\n"
        );
    }
}
