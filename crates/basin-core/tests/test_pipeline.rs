use std::path::PathBuf;

use basin_core::io::image_io::{load_raster, save_raster};
use basin_core::pipeline::config::{MethodConfig, SegmentationConfig};
use basin_core::pipeline::{pattern_seeds, run_config};
use basin_core::raster::Raster;
use basin_core::segment::Connectivity;
use basin_core::visualize::ColorStrategy;

fn two_tone_raster() -> Raster {
    // Left half dark, right half bright.
    let mut bytes = Vec::new();
    for _row in 0..8 {
        for col in 0..8 {
            let v = if col < 4 { 20 } else { 230 };
            bytes.extend_from_slice(&[v, v, v]);
        }
    }
    Raster::from_bytes(8, 8, 3, bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Config serialization
// ---------------------------------------------------------------------------

#[test]
fn test_config_toml_roundtrip() {
    let config = SegmentationConfig {
        input: PathBuf::from("in.png"),
        output: PathBuf::from("out.png"),
        method: MethodConfig::Competitive {
            connectivity: Connectivity::Eight,
            seeds: vec![(1, 2, 3), (4, 5, 6)],
            skip_gradient: true,
        },
        colors: ColorStrategy::Hashed,
    };

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: SegmentationConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed.input, config.input);
    assert_eq!(parsed.output, config.output);
    assert_eq!(parsed.colors, ColorStrategy::Hashed);
    match parsed.method {
        MethodConfig::Competitive {
            connectivity,
            seeds,
            skip_gradient,
        } => {
            assert_eq!(connectivity, Connectivity::Eight);
            assert_eq!(seeds, vec![(1, 2, 3), (4, 5, 6)]);
            assert!(skip_gradient);
        }
        other => panic!("wrong method after roundtrip: {other:?}"),
    }
}

#[test]
fn test_default_method_parses_from_minimal_toml() {
    let text = "input = \"a.png\"\noutput = \"b.png\"\n";
    let parsed: SegmentationConfig = toml::from_str(text).unwrap();
    match parsed.method {
        MethodConfig::Agglomerative { k, blur_sigma } => {
            assert!(k > 0.0);
            assert!(blur_sigma.is_some());
        }
        other => panic!("default method should be agglomerative, got {other:?}"),
    }
    assert_eq!(parsed.colors, ColorStrategy::Hashed);
}

// ---------------------------------------------------------------------------
// Seed pattern
// ---------------------------------------------------------------------------

#[test]
fn test_pattern_seeds_places_ten_labels() {
    let raster = Raster::new(100, 100, 1).unwrap();
    let seeds = pattern_seeds(&raster);
    assert_eq!(seeds.len(), 10);
    let labels: Vec<u32> = seeds.values().copied().collect();
    let mut sorted = labels.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=10).collect::<Vec<u32>>());
    assert!(seeds.keys().all(|&pos| pos < 100 * 100));
}

#[test]
fn test_pattern_seeds_collapse_on_single_pixel() {
    // Every relative position maps to pixel 0; the last write wins.
    let raster = Raster::new(1, 1, 1).unwrap();
    let seeds = pattern_seeds(&raster);
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds.get(&0), Some(&10));
}

#[test]
fn test_pattern_seeds_empty_raster() {
    let raster = Raster::new(0, 0, 1).unwrap();
    assert!(pattern_seeds(&raster).is_empty());
}

// ---------------------------------------------------------------------------
// End-to-end runs
// ---------------------------------------------------------------------------

#[test]
fn test_run_config_agglomerative_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("out").join("segmented.png");
    save_raster(&two_tone_raster(), &input).unwrap();

    let config = SegmentationConfig {
        input: input.clone(),
        output: output.clone(),
        method: MethodConfig::Agglomerative {
            k: 100.0,
            blur_sigma: None,
        },
        colors: ColorStrategy::Hashed,
    };
    run_config(&config).unwrap();

    let result = load_raster(&output).unwrap();
    assert_eq!(result.width(), 8);
    assert_eq!(result.height(), 8);
    assert_eq!(result.channels(), 3);
    // Two tones, k well below the 210-per-channel boundary: the halves get
    // different colors.
    assert_ne!(
        result.channel_slice(0).to_vec(),
        result.channel_slice(7).to_vec()
    );
}

#[test]
fn test_run_config_competitive_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("labeled.png");
    save_raster(&two_tone_raster(), &input).unwrap();

    let config = SegmentationConfig {
        input,
        output: output.clone(),
        method: MethodConfig::Competitive {
            connectivity: Connectivity::Eight,
            seeds: vec![(1, 4, 1), (6, 4, 2)],
            skip_gradient: false,
        },
        colors: ColorStrategy::Hashed,
    };
    run_config(&config).unwrap();

    let result = load_raster(&output).unwrap();
    assert_eq!(result.width(), 8);
    assert_eq!(result.height(), 8);
    assert_eq!(result.channels(), 3);
}

#[test]
fn test_run_config_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = SegmentationConfig {
        input: dir.path().join("absent.png"),
        output: dir.path().join("out.png"),
        method: MethodConfig::default(),
        colors: ColorStrategy::Hashed,
    };
    assert!(run_config(&config).is_err());
}
