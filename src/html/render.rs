use chrono::Local;

use super::chart;
use crate::matches::FileMatches;
use crate::severity::SeverityBand;
use crate::summary::SummaryStats;

/// Escape text interpolated into HTML. File names come from an external
/// stage and can contain anything.
pub(super) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full report page.
pub fn render_page(
    source: &str,
    threshold: u8,
    stats: &SummaryStats,
    index: &[FileMatches],
    counts: &[usize; 5],
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Similarity Report</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {summary}
        {matches}
        {distribution}
        {footer}
    </div>
</body>
</html>"#,
        css = inline_css(),
        header = render_header(source, threshold),
        summary = render_summary(stats),
        matches = render_matches(index, threshold),
        distribution = render_distribution(counts),
        footer = render_footer(),
    )
}

fn render_header(source: &str, threshold: u8) -> String {
    format!(
        r#"<header>
    <h1>Similarity Report</h1>
    <p class="meta">Source: <code>{}</code> &middot; threshold {}%</p>
</header>"#,
        escape_html(source),
        threshold
    )
}

fn render_summary(stats: &SummaryStats) -> String {
    let highest = match stats.max_similarity {
        Some(max) => format!("{max:.1}%"),
        None => "-".to_string(),
    };

    format!(
        r#"<section class="summary">
    <div class="summary-card"><h3>Files Compared</h3><div class="value">{}</div></div>
    <div class="summary-card"><h3>Pairs Compared</h3><div class="value">{}</div></div>
    <div class="summary-card"><h3>Highest Similarity</h3><div class="value">{}</div></div>
    <div class="summary-card"><h3>High Pairs (&ge; 80%)</h3><div class="value">{}</div></div>
</section>"#,
        stats.total_files, stats.total_pairs, highest, stats.high_pairs
    )
}

/// One block per file in index order, each match rendered as a badge
/// colored by its severity band.
fn render_matches(index: &[FileMatches], threshold: u8) -> String {
    if index.is_empty() {
        return format!(
            r#"<section class="section">
    <h2>Matches</h2>
    <p class="empty">No pairs at or above {threshold}% similarity.</p>
</section>"#
        );
    }

    let mut blocks = String::new();
    for entry in index {
        let badges: String = entry
            .matches
            .iter()
            .map(|m| {
                format!(
                    r#"<span class="badge badge-{}">{} ({:.1}%)</span>"#,
                    SeverityBand::from_score(m.similarity).as_str(),
                    escape_html(&m.file),
                    m.similarity
                )
            })
            .collect();

        blocks.push_str(&format!(
            r#"    <div class="file-block">
        <h3>{}</h3>
        <div class="badges">{badges}</div>
    </div>
"#,
            escape_html(&entry.file)
        ));
    }

    format!(
        r#"<section class="section">
    <h2>Matches</h2>
{blocks}</section>"#
    )
}

fn render_distribution(counts: &[usize; 5]) -> String {
    format!(
        r#"<section class="section">
    <h2>Score Distribution</h2>
    {}
</section>"#,
        chart::render_pie(counts)
    )
}

fn render_footer() -> String {
    format!(
        r#"<footer>Generated by simrep at {}</footer>"#,
        Local::now().format("%Y-%m-%d %H:%M")
    )
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.container { max-width: 1100px; margin: 0 auto; padding: 2rem; }

header { margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 2px solid #e5e7eb; }
header h1 { font-size: 2rem; font-weight: 700; margin-bottom: 0.5rem; }
header .meta { color: #6b7280; font-size: 0.875rem; }

.summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 1rem;
    margin-bottom: 2rem;
}

.summary-card {
    background: #f9fafb;
    padding: 1rem;
    border-radius: 0.5rem;
    border-left: 4px solid #3b82f6;
}

.summary-card h3 { font-size: 0.875rem; font-weight: 600; color: #6b7280; margin-bottom: 0.5rem; }
.summary-card .value { font-size: 1.5rem; font-weight: 700; }

.section { margin-bottom: 2rem; }
.section h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.section .empty { color: #6b7280; }

.file-block { margin-bottom: 1rem; padding: 0.75rem 1rem; background: #f9fafb; border-radius: 0.5rem; }
.file-block h3 { font-size: 1rem; font-weight: 600; margin-bottom: 0.5rem; }

.badge {
    display: inline-block;
    margin: 0 0.5rem 0.25rem 0;
    padding: 0.2rem 0.6rem;
    border-radius: 0.375rem;
    color: #ffffff;
    font-size: 0.8125rem;
    font-weight: 600;
}

.badge-high { background: #dc2626; }
.badge-medium { background: #d97706; }
.badge-low { background: #059669; }

footer { color: #6b7280; font-size: 0.8125rem; padding-top: 1rem; border-top: 1px solid #e5e7eb; }
"#
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
