use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cannyref_core::compare::{compare_edge_maps, ComparisonReport};
use cannyref_core::error::CannyRefError;
use cannyref_core::io::text::{read_edge_map, write_comparison_report};
use clap::Args;
use rayon::prelude::*;

use crate::summary;

#[derive(Args)]
pub struct CompareArgs {
    /// Reference edge map (text)
    pub reference: PathBuf,

    /// Hardware or simulation edge maps to score
    #[arg(required = true)]
    pub candidates: Vec<PathBuf>,

    /// Grid width in pixels
    #[arg(long, default_value = "50")]
    pub width: usize,

    /// Grid height in pixels
    #[arg(long, default_value = "50")]
    pub height: usize,

    /// Write the first candidate's report to a file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let reference = read_edge_map(&args.reference, args.width, args.height)
        .with_context(|| format!("Failed to read reference {}", args.reference.display()))?;

    // Candidates are independent, so batches score in parallel.
    let results: Vec<(&PathBuf, Result<ComparisonReport, CannyRefError>)> = args
        .candidates
        .par_iter()
        .map(|path| {
            let result = read_edge_map(path, args.width, args.height)
                .and_then(|candidate| compare_edge_maps(&reference, &candidate));
            (path, result)
        })
        .collect();

    let mut failures = 0;
    for (path, result) in &results {
        match result {
            Ok(report) => summary::print_comparison(path, report),
            Err(err) => {
                failures += 1;
                summary::print_comparison_failure(path, err);
            }
        }
    }

    if let Some(ref report_path) = args.report {
        if let Some((_, Ok(report))) = results.first() {
            write_comparison_report(report_path, report)
                .with_context(|| format!("Failed to write report {}", report_path.display()))?;
            println!("\nComparison report saved to {}", report_path.display());
        }
    }

    if failures > 0 {
        bail!("{failures} candidate(s) could not be scored");
    }

    Ok(())
}
