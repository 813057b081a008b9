use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;

use crate::compare::ComparisonReport;
use crate::error::{CannyRefError, Result};
use crate::pipeline::config::CannyConfig;
use crate::pipeline::PipelineOutput;

/// Write the final edge map in the testbench text format: a commented
/// header, a blank line, then one row per line of 3-wide decimal
/// values.
pub fn write_edge_map(path: &Path, edges: &Array2<u8>, config: &CannyConfig) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "// Canny Edge Detection Reference Model Output")?;
    writeln!(out, "// Resolution: {}x{}", config.width, config.height)?;
    writeln!(
        out,
        "// Thresholds: High={}, Low={}",
        config.thresholds.high, config.thresholds.low
    )?;
    writeln!(out)?;
    write_grid_rows(&mut out, edges)?;
    Ok(())
}

/// Parse an edge-map dump. `//` comment lines and blank lines are
/// skipped, so the header never shifts row indexing. Rows and columns
/// beyond the requested shape are ignored; uncovered pixels stay zero.
pub fn parse_edge_map(text: &str, width: usize, height: usize) -> Result<Array2<u8>> {
    let mut grid = Array2::<u8>::zeros((height, width));
    let mut row = 0;

    for (index, line) in text.lines().enumerate() {
        if line.starts_with("//") || line.trim().is_empty() {
            continue;
        }
        if row >= height {
            break;
        }
        for (col, token) in line.split_whitespace().enumerate() {
            if col >= width {
                break;
            }
            grid[[row, col]] = token
                .parse::<u8>()
                .map_err(|_| CannyRefError::MalformedInput {
                    line: index + 1,
                    reason: format!("expected 8-bit value, got {token:?}"),
                })?;
        }
        row += 1;
    }

    Ok(grid)
}

/// Read an edge-map dump from disk.
pub fn read_edge_map(path: &Path, width: usize, height: usize) -> Result<Array2<u8>> {
    let text = fs::read_to_string(path)?;
    parse_edge_map(&text, width, height)
}

/// Write every intermediate grid of a run to one dump file, section by
/// section, for diffing against a simulation trace.
pub fn write_stage_dump(path: &Path, output: &PipelineOutput) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "=== Grayscale Output ===")?;
    write_grid_rows(&mut out, &output.gray)?;

    writeln!(out)?;
    writeln!(out, "=== Gaussian Blur Output ===")?;
    write_grid_rows(&mut out, &output.blurred)?;

    writeln!(out)?;
    writeln!(out, "=== Sobel Magnitude Output ===")?;
    write_grid_rows(&mut out, &output.magnitude)?;

    writeln!(out)?;
    writeln!(out, "=== Sobel Direction Output ===")?;
    for dir_row in output.direction.rows() {
        for dir in dir_row {
            let label = dir.to_string();
            write!(out, "{label:>4} ")?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "=== Non-Maximum Suppression Output ===")?;
    write_grid_rows(&mut out, &output.suppressed)?;

    writeln!(out)?;
    writeln!(out, "=== Strong Edges Output ===")?;
    write_grid_rows(&mut out, &output.strong)?;

    writeln!(out)?;
    writeln!(out, "=== Weak Edges Output ===")?;
    write_grid_rows(&mut out, &output.weak)?;

    writeln!(out)?;
    writeln!(out, "=== Final Edges Output ===")?;
    write_grid_rows(&mut out, &output.edges)?;

    Ok(())
}

/// Write the comparison summary in the report format the verification
/// scripts parse.
pub fn write_comparison_report(path: &Path, report: &ComparisonReport) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "=== Canny Edge Detection Implementation Comparison ===")?;
    writeln!(out)?;
    writeln!(
        out,
        "Pixel match: {}/{} ({:.2}%)",
        report.matching_pixels,
        report.total_pixels,
        report.match_percentage()
    )?;
    writeln!(
        out,
        "Hardware edges: {} pixels ({:.2}%)",
        report.candidate_edges,
        report.candidate_edge_percentage()
    )?;
    writeln!(
        out,
        "Reference edges: {} pixels ({:.2}%)",
        report.reference_edges,
        report.reference_edge_percentage()
    )?;
    writeln!(
        out,
        "False positives: {} pixels ({:.2}%)",
        report.false_positives,
        report.false_positive_percentage()
    )?;
    writeln!(
        out,
        "False negatives: {} pixels ({:.2}%)",
        report.false_negatives,
        report.false_negative_percentage()
    )?;
    Ok(())
}

fn write_grid_rows<W: Write>(out: &mut W, grid: &Array2<u8>) -> Result<()> {
    for row in grid.rows() {
        for value in row {
            write!(out, "{value:3} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
