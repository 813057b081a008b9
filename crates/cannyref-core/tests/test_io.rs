use ndarray::{array, Array2};

use cannyref_core::compare::compare_edge_maps;
use cannyref_core::error::CannyRefError;
use cannyref_core::grid::RgbGrid;
use cannyref_core::io::hex::{parse_pixel_grid, read_pixel_grid};
use cannyref_core::io::png::{load_grid_png, save_grid_png};
use cannyref_core::io::text::{
    parse_edge_map, read_edge_map, write_comparison_report, write_edge_map, write_stage_dump,
};
use cannyref_core::pipeline::config::{CannyConfig, ThresholdConfig};
use cannyref_core::pipeline::run_pipeline;

// ---------------------------------------------------------------------------
// Hex pixel dumps
// ---------------------------------------------------------------------------

#[test]
fn test_parse_pixel_grid_basic() {
    let text = "FF0000 00FF00\n0000FF FFFFFF\n";
    let grid = parse_pixel_grid(text, 2, 2).unwrap();

    assert_eq!(grid.red[[0, 0]], 255);
    assert_eq!(grid.green[[0, 0]], 0);
    assert_eq!(grid.blue[[0, 0]], 0);

    assert_eq!(grid.green[[0, 1]], 255);
    assert_eq!(grid.blue[[1, 0]], 255);

    assert_eq!(grid.red[[1, 1]], 255);
    assert_eq!(grid.green[[1, 1]], 255);
    assert_eq!(grid.blue[[1, 1]], 255);
}

#[test]
fn test_parse_pixel_grid_lowercase_hex() {
    let grid = parse_pixel_grid("ff80a0\n", 1, 1).unwrap();
    assert_eq!(grid.red[[0, 0]], 0xFF);
    assert_eq!(grid.green[[0, 0]], 0x80);
    assert_eq!(grid.blue[[0, 0]], 0xA0);
}

#[test]
fn test_parse_pixel_grid_short_file_leaves_black() {
    // One row for a 3x3 request: the two missing rows stay zero.
    let grid = parse_pixel_grid("202020 202020 202020\n", 3, 3).unwrap();

    assert_eq!(grid.red[[0, 2]], 0x20);
    assert!(grid.red.row(1).iter().all(|&v| v == 0));
    assert!(grid.red.row(2).iter().all(|&v| v == 0));
}

#[test]
fn test_parse_pixel_grid_ignores_excess() {
    // Extra columns and rows beyond the requested shape are dropped.
    let text = "112233 445566 778899\nAABBCC DDEEFF 001122\n330000 440000 550000\n";
    let grid = parse_pixel_grid(text, 2, 2).unwrap();

    assert_eq!((grid.height(), grid.width()), (2, 2));
    assert_eq!(grid.red[[1, 1]], 0xDD);
}

#[test]
fn test_parse_pixel_grid_rejects_short_token() {
    let err = parse_pixel_grid("FF00\n", 2, 2).unwrap_err();
    assert!(matches!(
        err,
        CannyRefError::MalformedInput { line: 1, .. }
    ));
}

#[test]
fn test_parse_pixel_grid_rejects_non_hex() {
    let err = parse_pixel_grid("FFFFFF\nGG0000\n", 1, 2).unwrap_err();
    assert!(matches!(
        err,
        CannyRefError::MalformedInput { line: 2, .. }
    ));
}

#[test]
fn test_parse_pixel_grid_rejects_non_ascii() {
    let err = parse_pixel_grid("\u{20ac}12345\n", 1, 1).unwrap_err();
    assert!(matches!(err, CannyRefError::MalformedInput { .. }));
}

#[test]
fn test_read_pixel_grid_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pixels.txt");
    std::fs::write(&path, "FFFFFF 000000\n000000 FFFFFF\n").unwrap();

    let grid = read_pixel_grid(&path, 2, 2).unwrap();
    assert_eq!(grid.red[[0, 0]], 255);
    assert_eq!(grid.red[[0, 1]], 0);
    assert_eq!(grid.red[[1, 1]], 255);
}

// ---------------------------------------------------------------------------
// Edge map text format
// ---------------------------------------------------------------------------

#[test]
fn test_edge_map_roundtrip() {
    let edges = array![[0u8, 255, 0], [255, 0, 255], [0, 255, 0]];
    let config = CannyConfig {
        width: 3,
        height: 3,
        thresholds: ThresholdConfig { high: 100, low: 50 },
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.txt");

    write_edge_map(&path, &edges, &config).unwrap();
    let loaded = read_edge_map(&path, 3, 3).unwrap();

    assert_eq!(loaded, edges);
}

#[test]
fn test_edge_map_header_contents() {
    let edges = Array2::<u8>::zeros((3, 3));
    let config = CannyConfig {
        width: 3,
        height: 3,
        thresholds: ThresholdConfig { high: 120, low: 60 },
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.txt");
    write_edge_map(&path, &edges, &config).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("// Canny Edge Detection Reference Model Output"));
    assert!(text.contains("// Resolution: 3x3"));
    assert!(text.contains("// Thresholds: High=120, Low=60"));
}

#[test]
fn test_parse_edge_map_skips_comments_and_blanks() {
    let text = "// header\n// more header\n\n  0 255\n255   0\n";
    let grid = parse_edge_map(text, 2, 2).unwrap();

    assert_eq!(grid, array![[0u8, 255], [255, 0]]);
}

#[test]
fn test_parse_edge_map_rejects_wide_values() {
    let err = parse_edge_map("256 0\n", 2, 1).unwrap_err();
    assert!(matches!(err, CannyRefError::MalformedInput { .. }));
}

#[test]
fn test_parse_edge_map_reports_file_line_numbers() {
    let text = "// header\n\n0 0\n0 oops\n";
    let err = parse_edge_map(text, 2, 2).unwrap_err();

    // Line numbers count every file line, comments included.
    assert!(matches!(
        err,
        CannyRefError::MalformedInput { line: 4, .. }
    ));
}

// ---------------------------------------------------------------------------
// Stage dumps and reports
// ---------------------------------------------------------------------------

#[test]
fn test_stage_dump_sections() {
    let mut rgb = RgbGrid::zeros(5, 5);
    for row in 1..4 {
        for col in 1..4 {
            rgb.red[[row, col]] = 255;
            rgb.green[[row, col]] = 255;
            rgb.blue[[row, col]] = 255;
        }
    }
    let config = CannyConfig {
        width: 5,
        height: 5,
        thresholds: ThresholdConfig { high: 100, low: 50 },
    };
    let output = run_pipeline(&rgb, &config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stages.txt");
    write_stage_dump(&path, &output).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    for section in [
        "=== Grayscale Output ===",
        "=== Gaussian Blur Output ===",
        "=== Sobel Magnitude Output ===",
        "=== Sobel Direction Output ===",
        "=== Non-Maximum Suppression Output ===",
        "=== Strong Edges Output ===",
        "=== Weak Edges Output ===",
        "=== Final Edges Output ===",
    ] {
        assert!(text.contains(section), "missing section {section}");
    }
    // Directions render as degree strings.
    assert!(text.contains("45\u{b0}"));
}

#[test]
fn test_comparison_report_file() {
    let reference = array![[255u8, 0], [0, 255]];
    let candidate = array![[255u8, 255], [0, 0]];
    let report = compare_edge_maps(&reference, &candidate).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    write_comparison_report(&path, &report).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("=== Canny Edge Detection Implementation Comparison ==="));
    assert!(text.contains("Pixel match: 2/4 (50.00%)"));
    assert!(text.contains("False positives: 1 pixels (25.00%)"));
    assert!(text.contains("False negatives: 1 pixels (25.00%)"));
}

// ---------------------------------------------------------------------------
// PNG export
// ---------------------------------------------------------------------------

#[test]
fn test_png_roundtrip() {
    let grid = array![[0u8, 128, 255], [255, 128, 0], [64, 64, 64]];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.png");

    save_grid_png(&grid, &path).unwrap();
    let loaded = load_grid_png(&path).unwrap();

    assert_eq!(loaded, grid);
}
