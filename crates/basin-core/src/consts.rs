/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Horizontal Sobel kernel. The vertical kernel is its transpose.
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Per-ordinal RGB multipliers for the deterministic label palette.
pub const PALETTE_MULTIPLIERS: (u32, u32, u32) = (67, 179, 241);

/// Default blur sigma applied before agglomerative segmentation.
pub const DEFAULT_BLUR_SIGMA: f32 = 0.8;

/// Default scale parameter for agglomerative segmentation.
/// Higher values produce fewer, larger segments.
pub const DEFAULT_SCALE_K: f32 = 500.0;

/// Relative (x, y) positions of the fallback seed pattern, labeled 1..=10.
pub const SEED_PATTERN: [(f32, f32); 10] = [
    (0.1, 0.1),
    (0.2, 0.8),
    (0.4, 0.3),
    (0.6, 0.7),
    (0.8, 0.2),
    (0.9, 0.9),
    (0.3, 0.6),
    (0.7, 0.4),
    (0.5, 0.5),
    (0.85, 0.75),
];
