//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Per-file match lists: threshold filter, symmetric index, severity bands.
pub const MATCHES: &str = "\
Show per-file similarity matches at or above a threshold.

Pairs with similarity >= the threshold are kept and indexed under both of
their files, so each file's block lists every counterpart it matched.
Match lists are sorted by similarity, highest first.

Severity bands (fixed, independent of --threshold):
  >= 80   high    -- rendered red in HTML reports
  50-79   medium  -- rendered amber
  <  50   low     -- rendered green

Files with no match at or above the threshold are omitted entirely.

Examples:
  sr matches                            # threshold 80, default CSV
  sr matches results.csv --threshold 50
  sr matches --file main.py             # one file's block
  sr matches --export filtered.csv      # save the filtered pairs";

/// Distribution buckets: fixed 20-point ranges over the full table.
pub const DIST: &str = "\
Count pairs per similarity range over the full results table.

Ranges are fixed 20-point buckets with the lowest bound inclusive:
  [0,20]  (20,40]  (40,60]  (60,80]  (80,100]

so a score of 20 falls in 0-20% and a score of 80 in 61-80%. All five
ranges are always shown, including empty ones. The distribution ignores
any threshold: it always covers the whole table.";

/// Best match per file: symmetric expansion, first-seen tie break.
pub const BEST: &str = "\
Show each file's single highest match.

Every pair counts for both of its files. For each file the counterpart
with the highest similarity is kept (ties keep the pair seen first) and
the table is sorted by similarity, highest first.";

/// HTML report: badge blocks plus distribution pie chart, offline-ready.
pub const HTML: &str = "\
Write a self-contained HTML report (inline CSS and SVG, works offline).

The report contains summary cards, one block per file listing its matches
at or above the threshold as color-coded badges, and a pie chart of the
score distribution over the full table (the chart ignores the threshold).

Examples:
  sr html                               # writes similarity_report.html
  sr html results.csv --threshold 50 --out report.html";
