//! External collaborator contracts (§6.1 of the spec) plus reference implementations:
//! reading an integer list from a file, and writing the byte-exact report of §6.4.
//!
//! Full terminal rendering, CSV summarization, plotting, and sweep harnesses are left to
//! downstream consumers; this module carries only enough of the external surface to drive
//! the core end-to-end from [`crate::bin::hashbench`].

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

use regex::Regex;

use crate::config::{HashMethod, Strategy};
use crate::metrics::Metrics;
use crate::table::HashTable;

/// Reads a sequence of integers from some source.
pub trait IntegerReader {
    fn read(&self, path: &Path) -> io::Result<Vec<i64>>;
}

/// Reads one integer per non-blank line, skipping and warning on lines that don't parse.
/// Never fails solely because a line is malformed — only on an underlying I/O failure (file
/// not found, permission denied, ...).
pub struct FileIntegerReader {
    integer_pattern: Regex,
}

impl FileIntegerReader {
    pub fn new() -> Self {
        FileIntegerReader {
            // Optional sign followed by one or more digits, the whole line (after trimming).
            integer_pattern: Regex::new(r"^-?\d+$").expect("static pattern is valid"),
        }
    }
}

impl Default for FileIntegerReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerReader for FileIntegerReader {
    fn read(&self, path: &Path) -> io::Result<Vec<i64>> {
        let file = std::fs::File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut values = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !self.integer_pattern.is_match(trimmed) {
                tracing::warn!(line = line_no + 1, text = trimmed, "skipping malformed line");
                continue;
            }
            match trimmed.parse::<i64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    // Matched the digit pattern but overflowed i64 (longer than any i32).
                    tracing::warn!(line = line_no + 1, text = trimmed, "integer out of range, skipping");
                }
            }
        }

        Ok(values)
    }
}

/// Everything the output formatter needs to render one run's report.
pub struct Report<'a> {
    pub scheme_label: String,
    pub hash_method: HashMethod,
    pub modulus: Option<i64>,
    pub bucket_size: usize,
    pub table_size: i64,
    pub strategy: Strategy,
    pub input: &'a [i64],
    pub cells: Vec<String>,
    pub metrics: &'a Metrics,
}

impl<'a> Report<'a> {
    /// Builds a report from a finished table run. `scheme_label` is `"manual"` for Mode B
    /// configurations and the scheme's numeral for Mode A.
    pub fn new(table: &'a HashTable, input: &'a [i64], scheme_label: impl Into<String>) -> Self {
        let config = table.config();
        Report {
            scheme_label: scheme_label.into(),
            hash_method: config.hash_method(),
            modulus: config.modulus(),
            bucket_size: config.bucket_size(),
            table_size: config.table_size(),
            strategy: config.strategy(),
            input,
            cells: table.cells(),
            metrics: table.metrics(),
        }
    }
}

/// Writes a [`Report`] to a sink.
pub trait ReportFormatter {
    fn write_report(&self, sink: &mut dyn Write, report: &Report) -> io::Result<()>;
}

/// Produces the byte layout specified in §6.4 of the spec.
pub struct TextReportFormatter;

impl ReportFormatter for TextReportFormatter {
    fn write_report(&self, sink: &mut dyn Write, report: &Report) -> io::Result<()> {
        write_echoed_input(sink, report.input)?;
        write_config_line(sink, report)?;
        write_stats_block(sink, report)?;
        write_table_body(sink, report)?;
        write_trailer(sink, report)?;
        Ok(())
    }
}

fn write_echoed_input(sink: &mut dyn Write, input: &[i64]) -> io::Result<()> {
    for chunk in input.chunks(5) {
        let line: Vec<String> = chunk.iter().map(|v| v.to_string()).collect();
        writeln!(sink, "{}", line.join(", "))?;
    }
    Ok(())
}

fn write_config_line(sink: &mut dyn Write, report: &Report) -> io::Result<()> {
    let modulo = match report.modulus {
        Some(m) => m.to_string(),
        None => "N/A".to_string(),
    };
    writeln!(
        sink,
        "scheme {} ({}) - modulo: {}, bucket size: {}, {}",
        report.scheme_label, report.hash_method, modulo, report.bucket_size, report.strategy
    )
}

fn write_stats_block(sink: &mut dyn Write, report: &Report) -> io::Result<()> {
    let m = report.metrics;
    if report.strategy.is_chaining() {
        writeln!(sink, "# of collisions: {}", m.total_collisions())?;
    } else {
        writeln!(
            sink,
            "# of primary collisions: {}, secondary collisions: {}, total collisions: {}",
            m.primary_collisions(),
            m.secondary_collisions(),
            m.total_collisions()
        )?;
    }
    writeln!(
        sink,
        "# of comparisons: {}, records inserted: {}, load factor: {:.4}",
        m.comparisons(),
        m.insertions(),
        m.load_factor()
    )
}

fn write_table_body(sink: &mut dyn Write, report: &Report) -> io::Result<()> {
    let columns = if report.strategy.is_chaining() {
        1
    } else {
        report.bucket_size
    };
    for row in report.cells.chunks(columns) {
        let rendered: Vec<String> = row.iter().map(|cell| format!("{:<8}", cell)).collect();
        writeln!(sink, "{}", rendered.join(""))?;
    }
    Ok(())
}

fn write_trailer(sink: &mut dyn Write, report: &Report) -> io::Result<()> {
    let secs = report.metrics.elapsed_ns().unwrap_or(0) as f64 / 1_000_000_000.0;
    let bytes = report.metrics.mem_bytes().unwrap_or(0);
    writeln!(sink, "Execution Time: {:.6} seconds", secs)?;
    writeln!(sink, "Memory Usage: {} bytes", bytes)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        TextReportFormatter
            .write_report(&mut buf, self)
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
