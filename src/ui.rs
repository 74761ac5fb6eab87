use crate::models::{FootfallQuery, FootfallSummary};
use crate::stats::format_count;

pub fn render_summary(query: &FootfallQuery, summary: &FootfallSummary) -> String {
    let mut html = SUMMARY_HTML
        .replace("{{DATE}}", &query.to_string())
        .replace("{{TOTAL}}", &format_count(summary.total()));
    if let Some(peak) = summary.busiest_hour() {
        let hour = peak.hour.unwrap_or_default();
        html.push_str(
            &PEAK_HTML
                .replace("{{HOUR}}", &format!("{hour:02}:00"))
                .replace("{{COUNT}}", &format_count(peak.count)),
        );
    }
    html
}

pub fn render_error(query: &FootfallQuery, message: &str) -> String {
    ERROR_HTML
        .replace("{{DATE}}", &query.to_string())
        .replace("{{MESSAGE}}", &escape_html(message))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const SUMMARY_HTML: &str = "<h2>{{DATE}} footfall</h2><p>Total footfall: {{TOTAL}}</p>";

const PEAK_HTML: &str = "<p>Busiest hour: {{HOUR}} ({{COUNT}})</p>";

const ERROR_HTML: &str = "<h2>{{DATE}} footfall</h2><p>{{MESSAGE}}</p>";
