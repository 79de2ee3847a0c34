//! Reconstruct tables from layout-preserving page text.
//!
//! `pdftotext -layout` keeps column alignment using spaces, so a table shows
//! up as consecutive lines whose cells are separated by wide gaps that line
//! up vertically.

use crate::model::{Cell, Table};

/// Narrowest run of blank columns that separates two cells.
const MIN_GAP: usize = 2;

/// Fewest consecutive row-like lines that count as a table.
const MIN_ROWS: usize = 2;

/// Cells with more words than this read as running text.
const MAX_CELL_WORDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion {
    pub start_line: usize,
    /// Exclusive.
    pub end_line: usize,
}

/// Detect if a line looks like a table row: two or more cells separated by
/// wide gaps.
pub fn is_table_row(line: &str) -> bool {
    line.split("  ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .nth(1)
        .is_some()
}

/// Find runs of row-like lines. Blank lines and prose end a region.
pub fn find_table_regions(lines: &[&str]) -> Vec<TableRegion> {
    let mut regions = Vec::new();
    let mut start: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        match (is_table_row(line), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= MIN_ROWS {
                    regions.push(TableRegion {
                        start_line: s,
                        end_line: i,
                    });
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if lines.len() - s >= MIN_ROWS {
            regions.push(TableRegion {
                start_line: s,
                end_line: lines.len(),
            });
        }
    }

    regions
}

/// Character-column spans `[start, end)` that hold text in at least one row.
/// Gaps narrower than `MIN_GAP` are treated as spaces inside a cell.
fn column_spans(rows: &[Vec<char>]) -> Vec<(usize, usize)> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let occupied: Vec<bool> = (0..width)
        .map(|c| {
            rows.iter()
                .any(|r| r.get(c).is_some_and(|ch| !ch.is_whitespace()))
        })
        .collect();

    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut c = 0;
    while c < width {
        if !occupied[c] {
            c += 1;
            continue;
        }
        let start = c;
        while c < width && occupied[c] {
            c += 1;
        }
        match spans.last_mut() {
            Some(last) if start - last.1 < MIN_GAP => last.1 = c,
            _ => spans.push((start, c)),
        }
    }

    spans
}

fn cell(row: &[char], (start, end): (usize, usize)) -> Cell {
    let end = end.min(row.len());
    if start >= end {
        return None;
    }
    let text: String = row[start..end].iter().collect();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Multi-column page layouts also align on a gutter. Treat the region as
/// prose when most of its filled cells are sentence-length.
fn is_prose(table: &Table) -> bool {
    let (filled, wordy) = table
        .iter()
        .flatten()
        .flatten()
        .fold((0, 0), |(filled, wordy), text| {
            let long = text.split_whitespace().count() > MAX_CELL_WORDS;
            (filled + 1, wordy + usize::from(long))
        });
    wordy * 2 > filled
}

/// Turn one region into a grid. Returns `None` when the region does not
/// resolve to at least two columns, or reads as prose.
fn region_to_table(lines: &[&str], region: &TableRegion) -> Option<Table> {
    let rows: Vec<Vec<char>> = lines[region.start_line..region.end_line]
        .iter()
        .map(|l| l.chars().collect())
        .collect();

    let spans = column_spans(&rows);
    if spans.len() < 2 {
        return None;
    }

    let table: Table = rows
        .iter()
        .map(|row| spans.iter().map(|&span| cell(row, span)).collect())
        .collect();

    if is_prose(&table) {
        return None;
    }
    Some(table)
}

/// Detect every table in a page of layout text, top to bottom.
pub fn detect_tables(text: &str) -> Vec<Table> {
    let lines: Vec<&str> = text.lines().collect();
    find_table_regions(&lines)
        .iter()
        .filter_map(|region| region_to_table(&lines, region))
        .collect()
}
