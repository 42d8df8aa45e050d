use basin_core::raster::Raster;
use basin_core::segment::agglomerative::{build_grid_edges, segment};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn rgb_raster(width: usize, height: usize, pixels: &[(u8, u8, u8)]) -> Raster {
    assert_eq!(pixels.len(), width * height);
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for &(r, g, b) in pixels {
        bytes.extend_from_slice(&[r, g, b]);
    }
    Raster::from_bytes(width, height, 3, bytes).unwrap()
}

fn distinct_labels(labels: &[u32]) -> usize {
    let set: std::collections::BTreeSet<u32> = labels.iter().copied().collect();
    set.len()
}

// ---------------------------------------------------------------------------
// Edge construction
// ---------------------------------------------------------------------------

#[test]
fn test_grid_edges_count_and_bounds() {
    // A w x h grid has h*(w-1) horizontal and w*(h-1) vertical edges.
    let raster = Raster::new(4, 3, 3).unwrap();
    let edges = build_grid_edges(&raster);
    assert_eq!(edges.len(), 3 * 3 + 4 * 2);
    for e in &edges {
        assert_ne!(e.a, e.b);
        assert!((e.a as usize) < 12 && (e.b as usize) < 12);
        assert!(e.weight >= 0.0);
    }
}

#[test]
fn test_grid_edges_have_no_duplicate_pairs() {
    let raster = Raster::new(5, 5, 1).unwrap();
    let edges = build_grid_edges(&raster);
    let mut seen = std::collections::BTreeSet::new();
    for e in &edges {
        let key = (e.a.min(e.b), e.a.max(e.b));
        assert!(seen.insert(key), "duplicate edge {key:?}");
    }
}

#[test]
fn test_edge_weight_is_channel_distance() {
    let raster = rgb_raster(2, 1, &[(0, 0, 0), (3, 4, 0)]);
    let edges = build_grid_edges(&raster);
    assert_eq!(edges.len(), 1);
    assert!((edges[0].weight - 5.0).abs() < 1e-6); // 3-4-5 triangle
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_two_contrasting_rows_split_at_small_k() {
    // Black top row, white bottom row: the zero-weight horizontal edges merge
    // within rows, the 255-per-channel vertical edges stay above threshold.
    let raster = rgb_raster(
        2,
        2,
        &[(0, 0, 0), (0, 0, 0), (255, 255, 255), (255, 255, 255)],
    );
    let labels = segment(&raster, 1.0).unwrap();
    assert_eq!(labels[0], labels[1], "top row must be one segment");
    assert_eq!(labels[2], labels[3], "bottom row must be one segment");
    assert_ne!(labels[0], labels[2], "rows must not merge");
    assert_eq!(distinct_labels(&labels), 2);
}

#[test]
fn test_uniform_image_is_one_segment_even_at_tiny_k() {
    // All edge weights are zero, so any positive k admits every edge.
    let raster = rgb_raster(2, 2, &[(10, 10, 10); 4]);
    let labels = segment(&raster, 0.001).unwrap();
    assert_eq!(distinct_labels(&labels), 1);
}

#[test]
fn test_gradient_strip_merges_at_large_k() {
    let raster = rgb_raster(
        3,
        1,
        &[(0, 0, 0), (128, 128, 128), (255, 255, 255)],
    );
    let labels = segment(&raster, 10_000.0).unwrap();
    assert_eq!(distinct_labels(&labels), 1);
}

#[test]
fn test_uniform_image_is_one_segment_for_various_k() {
    let raster = rgb_raster(4, 4, &[(77, 77, 77); 16]);
    for k in [0.5, 1.0, 100.0, 1e6] {
        let labels = segment(&raster, k).unwrap();
        assert_eq!(distinct_labels(&labels), 1, "k = {k}");
    }
}

#[test]
fn test_two_color_blocks_stay_separate() {
    // Left 2 columns red, right 2 columns blue, k small enough to keep the
    // color boundary.
    let mut pixels = Vec::new();
    for _row in 0..4 {
        pixels.extend_from_slice(&[(200, 0, 0), (200, 0, 0), (0, 0, 200), (0, 0, 200)]);
    }
    let raster = rgb_raster(4, 4, &pixels);
    let labels = segment(&raster, 10.0).unwrap();
    assert_eq!(distinct_labels(&labels), 2);
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[2], labels[3]);
    assert_ne!(labels[1], labels[2]);
}

// ---------------------------------------------------------------------------
// Boundaries and failure modes
// ---------------------------------------------------------------------------

#[test]
fn test_single_pixel_image_is_one_segment() {
    let raster = rgb_raster(1, 1, &[(42, 42, 42)]);
    let labels = segment(&raster, 500.0).unwrap();
    assert_eq!(labels, vec![0]);
}

#[test]
fn test_empty_image_yields_empty_labels() {
    let raster = Raster::new(0, 4, 3).unwrap();
    let labels = segment(&raster, 500.0).unwrap();
    assert!(labels.is_empty());
}

#[test]
fn test_rejects_nonpositive_and_nonfinite_k() {
    let raster = rgb_raster(2, 2, &[(0, 0, 0); 4]);
    assert!(segment(&raster, -1.0).is_err());
    assert!(segment(&raster, 0.0).is_err());
    assert!(segment(&raster, f32::NAN).is_err());
    assert!(segment(&raster, f32::INFINITY).is_err());
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn test_repeated_runs_are_label_identical() {
    // A checkerboard maximizes equal-weight ties; the stable sort must keep
    // the outcome fixed across runs.
    let mut pixels = Vec::new();
    for row in 0..6 {
        for col in 0..6 {
            let v = if (row + col) % 2 == 0 { 40 } else { 200 };
            pixels.push((v, v, v));
        }
    }
    let raster = rgb_raster(6, 6, &pixels);
    let first = segment(&raster, 300.0).unwrap();
    let second = segment(&raster, 300.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_labels_are_canonical_roots() {
    // Every label must itself be a member of the segment it names.
    let raster = rgb_raster(
        3,
        3,
        &[
            (0, 0, 0),
            (0, 0, 0),
            (250, 250, 250),
            (0, 0, 0),
            (5, 5, 5),
            (250, 250, 250),
            (0, 0, 0),
            (0, 0, 0),
            (250, 250, 250),
        ],
    );
    let labels = segment(&raster, 50.0).unwrap();
    for (i, &label) in labels.iter().enumerate() {
        assert_eq!(
            labels[label as usize], label,
            "label of pixel {i} must point at a segment representative"
        );
    }
}
