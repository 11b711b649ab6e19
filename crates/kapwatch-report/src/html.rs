//! HTML rendering of the daily report table.

use std::fmt::Write as _;

use chrono::NaiveDate;
use kapwatch_core::types::ReportRow;

const COLUMNS: [&str; 7] = [
    "#",
    "Tarih",
    "Kod",
    "Şirket",
    "Konu",
    "Özet Bilgi",
    "İlgili Şirketler",
];

/// Renders the full email body for the report.
///
/// All cell text is HTML-escaped; when a row carries a detail link the
/// subject cell becomes an anchor. An empty row set still renders the header
/// row and a zero total.
#[must_use]
pub fn render_report(
    index_name: &str,
    from: NaiveDate,
    to: NaiveDate,
    rows: &[ReportRow],
) -> String {
    let mut body = String::new();
    body.push_str(
        "<html>\n<head>\n<meta charset=\"utf-8\" />\n<style>\n\
         table { border-collapse: collapse; font-family: Arial; font-size: 12px; }\n\
         th, td { border: 1px solid #ddd; padding: 6px; text-align: center; }\n\
         th { background-color: #f2f2f2; }\n\
         </style>\n</head>\n<body>\n",
    );
    let _ = writeln!(
        body,
        "<h2>📌 {} KAP Bildirimleri ({from} - {to})</h2>",
        escape(index_name)
    );
    let _ = writeln!(body, "<p>Toplam: {}</p>", rows.len());

    body.push_str("<table>\n<thead>\n<tr>");
    for column in COLUMNS {
        let _ = write!(body, "<th>{column}</th>");
    }
    body.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        let subject = match &row.link {
            Some(link) => format!(
                "<a href=\"{}\">{}</a>",
                escape(link),
                escape(&row.subject)
            ),
            None => escape(&row.subject),
        };
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.seq,
            escape(&row.date),
            escape(&row.stock_code),
            escape(&row.company),
            subject,
            escape(&row.summary),
            escape(&row.related),
        );
    }

    body.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    body
}

/// Minimal HTML entity escaping for text nodes and attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
