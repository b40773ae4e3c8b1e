//! SVG pie chart for the score distribution.

use std::f64::consts::PI;

use crate::ranges::SimilarityRange;

/// One fill color per bucket, ascending score order.
const RANGE_COLORS: [&str; 5] = ["#059669", "#84cc16", "#eab308", "#d97706", "#dc2626"];

const WIDTH: u32 = 480;
const HEIGHT: u32 = 280;
const CX: f64 = 140.0;
const CY: f64 = 140.0;
const RADIUS: f64 = 115.0;

/// Render the distribution as a pie with a `label (count)` legend.
///
/// Slices start at twelve o'clock and sweep clockwise in bucket order.
/// A bucket holding every pair is drawn as a full circle (an arc command
/// cannot span 360 degrees); an empty table yields a placeholder instead
/// of a chart. Zero-count buckets get no slice but stay in the legend.
pub fn render_pie(counts: &[usize; 5]) -> String {
    let total: usize = counts.iter().sum();

    if total == 0 {
        return format!(
            r##"<svg width="{WIDTH}" height="80" role="img" aria-label="Score distribution">
  <text x="10" y="45" font-size="14" fill="#6b7280">No similarity pairs to chart.</text>
</svg>"##
        );
    }

    let mut slices = String::new();
    let mut angle = -PI / 2.0;
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if count == total {
            slices.push_str(&format!(
                r##"  <circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{}"/>
"##,
                RANGE_COLORS[i]
            ));
            break;
        }

        let sweep = count as f64 / total as f64 * 2.0 * PI;
        let end = angle + sweep;
        let (x1, y1) = (CX + RADIUS * angle.cos(), CY + RADIUS * angle.sin());
        let (x2, y2) = (CX + RADIUS * end.cos(), CY + RADIUS * end.sin());
        let large = if sweep > PI { 1 } else { 0 };

        slices.push_str(&format!(
            r##"  <path d="M{CX:.1},{CY:.1} L{x1:.1},{y1:.1} A{RADIUS:.1},{RADIUS:.1} 0 {large},1 {x2:.1},{y2:.1} Z" fill="{}" stroke="#fff" stroke-width="1"/>
"##,
            RANGE_COLORS[i]
        ));
        angle = end;
    }

    let mut legend = String::new();
    for (i, (range, &count)) in SimilarityRange::ALL.iter().zip(counts).enumerate() {
        let y = 60 + i as u32 * 26;
        legend.push_str(&format!(
            r##"  <rect x="300" y="{}" width="14" height="14" fill="{}"/>
  <text x="322" y="{}" font-size="13" fill="#374151">{} ({count})</text>
"##,
            y,
            RANGE_COLORS[i],
            y + 12,
            range.label()
        ));
    }

    format!(
        r##"<svg width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="Score distribution">
{slices}{legend}</svg>"##
    )
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod tests;
