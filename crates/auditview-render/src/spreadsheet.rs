use crate::RenderableRow;

/// SpreadsheetML 2003 workbook (one worksheet, header row plus one row per result).
///
/// Opens in Excel and LibreOffice without a zip container.
pub fn render_spreadsheet_xml(rows: &[RenderableRow]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
    out.push_str(
        "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n",
    );
    out.push_str(" <Worksheet ss:Name=\"Audit Results\">\n  <Table>\n");

    push_row(
        &mut out,
        &[
            "Test Name",
            "Impact",
            "Message",
            "Remediation Steps",
            "Setup Link",
        ],
    );
    for r in rows {
        push_row(
            &mut out,
            &[
                r.test_name.as_str(),
                r.status_label.as_str(),
                r.message.as_str(),
                r.remediation_steps.as_str(),
                r.setup_url.as_deref().unwrap_or(""),
            ],
        );
    }

    out.push_str("  </Table>\n </Worksheet>\n</Workbook>\n");
    out
}

fn push_row(out: &mut String, cells: &[&str]) {
    out.push_str("   <Row>");
    for c in cells {
        out.push_str(&format!(
            "<Cell><Data ss:Type=\"String\">{}</Data></Cell>",
            xml_escape(c)
        ));
    }
    out.push_str("</Row>\n");
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
