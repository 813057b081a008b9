use ndarray::Array2;

use cannyref_core::compare::compare_edge_maps;
use cannyref_core::error::CannyRefError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn edge_map(h: usize, w: usize, edges: &[(usize, usize)]) -> Array2<u8> {
    let mut grid = Array2::<u8>::zeros((h, w));
    for &(row, col) in edges {
        grid[[row, col]] = 255;
    }
    grid
}

// ---------------------------------------------------------------------------
// Exact match
// ---------------------------------------------------------------------------

#[test]
fn test_compare_identical_maps() {
    let reference = edge_map(4, 4, &[(0, 0), (1, 2), (3, 3)]);
    let report = compare_edge_maps(&reference, &reference.clone()).unwrap();

    assert!(report.is_exact());
    assert_eq!(report.total_pixels, 16);
    assert_eq!(report.matching_pixels, 16);
    assert_eq!(report.reference_edges, 3);
    assert_eq!(report.candidate_edges, 3);
    assert_eq!(report.false_positives, 0);
    assert_eq!(report.false_negatives, 0);
    assert_eq!(report.match_percentage(), 100.0);
}

#[test]
fn test_compare_empty_maps_match() {
    let reference = Array2::<u8>::zeros((3, 3));
    let candidate = Array2::<u8>::zeros((3, 3));
    let report = compare_edge_maps(&reference, &candidate).unwrap();

    assert!(report.is_exact());
    assert_eq!(report.reference_edges, 0);
    assert_eq!(report.candidate_edges, 0);
}

// ---------------------------------------------------------------------------
// Disagreements
// ---------------------------------------------------------------------------

#[test]
fn test_compare_counts_false_positives_and_negatives() {
    let reference = edge_map(4, 4, &[(0, 0), (1, 1), (2, 2)]);
    let candidate = edge_map(4, 4, &[(0, 0), (1, 1), (3, 3), (0, 3)]);

    let report = compare_edge_maps(&reference, &candidate).unwrap();

    // (2,2) missed, (3,3) and (0,3) invented, 13 of 16 agree.
    assert_eq!(report.matching_pixels, 13);
    assert_eq!(report.reference_edges, 3);
    assert_eq!(report.candidate_edges, 4);
    assert_eq!(report.false_positives, 2);
    assert_eq!(report.false_negatives, 1);
    assert!(!report.is_exact());
    // 13/16 is exactly representable.
    assert_eq!(report.match_percentage(), 81.25);
}

#[test]
fn test_compare_mismatches_are_fp_plus_fn_for_binary_maps() {
    let reference = edge_map(5, 5, &[(1, 1), (2, 2), (3, 3)]);
    let candidate = edge_map(5, 5, &[(1, 1), (1, 2), (3, 3), (4, 0)]);

    let report = compare_edge_maps(&reference, &candidate).unwrap();

    assert_eq!(
        report.total_pixels - report.matching_pixels,
        report.false_positives + report.false_negatives
    );
}

#[test]
fn test_compare_treats_any_nonzero_as_edge() {
    // Hardware dumps sometimes carry 128s; edge counting is on > 0,
    // while matching stays value-exact.
    let mut reference = Array2::<u8>::zeros((2, 2));
    reference[[0, 0]] = 255;
    let mut candidate = Array2::<u8>::zeros((2, 2));
    candidate[[0, 0]] = 128;

    let report = compare_edge_maps(&reference, &candidate).unwrap();

    assert_eq!(report.reference_edges, 1);
    assert_eq!(report.candidate_edges, 1);
    // 255 vs 128 is not a pixel match, but neither an FP nor an FN.
    assert_eq!(report.matching_pixels, 3);
    assert_eq!(report.false_positives, 0);
    assert_eq!(report.false_negatives, 0);
}

// ---------------------------------------------------------------------------
// Shape checks
// ---------------------------------------------------------------------------

#[test]
fn test_compare_rejects_mismatched_shapes() {
    let reference = Array2::<u8>::zeros((4, 4));
    let candidate = Array2::<u8>::zeros((4, 5));

    let err = compare_edge_maps(&reference, &candidate).unwrap_err();
    assert!(matches!(
        err,
        CannyRefError::ShapeMismatch {
            expected_width: 4,
            expected_height: 4,
            width: 5,
            height: 4
        }
    ));
}
