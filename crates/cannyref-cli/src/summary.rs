use std::path::Path;

use cannyref_core::compare::ComparisonReport;
use cannyref_core::error::CannyRefError;
use cannyref_core::pipeline::config::CannyConfig;
use cannyref_core::pipeline::EdgeStats;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    pass: Style,
    fail: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            pass: Style::new().green().bold(),
            fail: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(input: &Path, output: &Path, config: &CannyConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Canny Reference Model"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(format!("{}x{}", config.width, config.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Thresholds"),
        s.value.apply_to(format!(
            "high={}, low={}",
            config.thresholds.high, config.thresholds.low
        ))
    );
    println!();
}

pub fn print_edge_stats(stats: &EdgeStats) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Edge Detection Statistics"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Strong"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            stats.strong_pixels,
            stats.strong_percentage()
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Weak"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            stats.weak_pixels,
            stats.weak_percentage()
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Final"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            stats.edge_pixels,
            stats.edge_percentage()
        ))
    );
}

pub fn print_comparison(candidate: &Path, report: &ComparisonReport) {
    let s = Styles::new();

    let verdict = if report.is_exact() {
        s.pass.apply_to("BIT-EXACT")
    } else {
        s.fail.apply_to("MISMATCH")
    };

    println!();
    println!("  {}  [{}]", s.header.apply_to(candidate.display()), verdict);
    println!(
        "    {:<18}{}",
        s.label.apply_to("Pixel match"),
        s.value.apply_to(format!(
            "{}/{} ({:.2}%)",
            report.matching_pixels,
            report.total_pixels,
            report.match_percentage()
        ))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Candidate edges"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            report.candidate_edges,
            report.candidate_edge_percentage()
        ))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Reference edges"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            report.reference_edges,
            report.reference_edge_percentage()
        ))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("False positives"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            report.false_positives,
            report.false_positive_percentage()
        ))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("False negatives"),
        s.value.apply_to(format!(
            "{} pixels ({:.2}%)",
            report.false_negatives,
            report.false_negative_percentage()
        ))
    );
}

pub fn print_comparison_failure(candidate: &Path, err: &CannyRefError) {
    let s = Styles::new();

    println!();
    println!(
        "  {}  [{}]",
        s.header.apply_to(candidate.display()),
        s.fail.apply_to("ERROR")
    );
    println!("    {}", s.fail.apply_to(err));
}
