//! End-to-end pipeline tests against real PNG files on disk.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use texture_autocorr::{
    build_profile_dataset, project_to_plane, AnalysisError, GrayscaleImage, LabeledDirectory,
    SyntheticPattern,
};

fn write_png(dir: &Path, name: &str, pattern: SyntheticPattern, size: usize) {
    GrayscaleImage::synthetic(pattern, size)
        .save(dir.join(name))
        .unwrap();
}

#[test]
fn mixed_sizes_truncate_to_minimum_profile_length() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("mixed");
    fs::create_dir(&dir).unwrap();
    // 8x8 grid -> profile length 6; 12x12 grid -> profile length 9
    write_png(&dir, "small.png", SyntheticPattern::CentredDisc, 8);
    write_png(&dir, "large.png", SyntheticPattern::CentredDisc, 12);

    let dataset =
        build_profile_dataset(&[LabeledDirectory::new("mixed", &dir)]).unwrap();
    assert_eq!(dataset.matrix.rows, 2);
    assert_eq!(dataset.matrix.cols, 6);
}

#[test]
fn three_labelled_groups_project_to_separated_clusters() {
    let root = TempDir::new().unwrap();
    let dirs = ["flat", "checker", "disc"].map(|name| {
        let dir = root.path().join(name);
        fs::create_dir(&dir).unwrap();
        dir
    });
    write_png(&dirs[0], "a.png", SyntheticPattern::Uniform(0.29), 8);
    write_png(&dirs[0], "b.png", SyntheticPattern::Uniform(0.31), 8);
    write_png(&dirs[1], "a.png", SyntheticPattern::Checkerboard, 8);
    write_png(&dirs[1], "b.png", SyntheticPattern::Checkerboard, 8);
    write_png(&dirs[2], "a.png", SyntheticPattern::CentredDisc, 8);
    write_png(&dirs[2], "b.png", SyntheticPattern::CentredDisc, 8);

    let groups = [
        LabeledDirectory::new("flat", &dirs[0]),
        LabeledDirectory::new("checker", &dirs[1]),
        LabeledDirectory::new("disc", &dirs[2]),
    ];
    let dataset = build_profile_dataset(&groups).unwrap();

    // 6 images, each an 8x8 grid whose radial profile has length 6
    assert_eq!(dataset.matrix.rows, 6);
    assert_eq!(dataset.matrix.cols, 6);
    assert_eq!(
        dataset.labels,
        vec!["flat", "flat", "checker", "checker", "disc", "disc"]
    );

    let projection = project_to_plane(&dataset.matrix).unwrap();
    assert_eq!(projection.points.len(), 6);
    assert!(projection.explained_variance_ratio[0] >= projection.explained_variance_ratio[1]);

    // The checkerboard and flat groups have the most different profiles;
    // their first components must separate by value. Axis signs are
    // implementation-defined, so only the distance between group means is
    // asserted.
    let mean_pc1 = |label: &str| {
        let (sum, count) = projection
            .points
            .iter()
            .zip(dataset.labels.iter())
            .filter(|(_, l)| l.as_str() == label)
            .fold((0.0, 0usize), |(s, c), (p, _)| (s + p[0], c + 1));
        sum / count as f64
    };
    assert!((mean_pc1("checker") - mean_pc1("flat")).abs() > 1.0);
}

#[test]
fn row_order_is_label_major_then_sorted_file_name() {
    let root = TempDir::new().unwrap();
    let dir_b = root.path().join("b_group");
    let dir_a = root.path().join("a_group");
    fs::create_dir(&dir_b).unwrap();
    fs::create_dir(&dir_a).unwrap();
    write_png(&dir_b, "z.png", SyntheticPattern::CentredDisc, 8);
    write_png(&dir_b, "a.png", SyntheticPattern::CentredDisc, 8);
    write_png(&dir_a, "only.png", SyntheticPattern::CentredDisc, 8);

    // Caller order wins over label name order
    let groups = [
        LabeledDirectory::new("second", &dir_b),
        LabeledDirectory::new("first", &dir_a),
    ];
    let dataset = build_profile_dataset(&groups).unwrap();
    assert_eq!(dataset.labels, vec!["second", "second", "first"]);
    let names: Vec<_> = dataset
        .files
        .iter()
        .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.png", "z.png", "only.png"]);
}

#[test]
fn undecodable_file_aborts_the_whole_build() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("imgs");
    fs::create_dir(&dir).unwrap();
    write_png(&dir, "a.png", SyntheticPattern::CentredDisc, 8);
    fs::write(dir.join("broken.png"), b"this is not a png").unwrap();

    let err = build_profile_dataset(&[LabeledDirectory::new("imgs", &dir)]).unwrap_err();
    match err {
        AnalysisError::UnreadableImage { path, .. } => {
            assert!(path.ends_with("broken.png"));
        }
        other => panic!("expected UnreadableImage, got {other}"),
    }
}

#[test]
fn extension_allow_list_filters_the_directory() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("imgs");
    fs::create_dir(&dir).unwrap();
    write_png(&dir, "kept.png", SyntheticPattern::CentredDisc, 8);
    write_png(&dir, "KEPT_TOO.PNG", SyntheticPattern::CentredDisc, 8);
    fs::write(dir.join("notes.txt"), "not an image").unwrap();

    let dataset = build_profile_dataset(&[LabeledDirectory::new("imgs", &dir)]).unwrap();
    assert_eq!(dataset.matrix.rows, 2);
}

#[test]
fn directories_with_no_images_fail_as_an_empty_batch() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("empty");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("readme.txt"), "nothing to see").unwrap();

    let err = build_profile_dataset(&[LabeledDirectory::new("empty", &dir)]).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyBatch));
}

#[test]
fn truncation_keeps_the_low_radius_region() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("imgs");
    fs::create_dir(&dir).unwrap();
    write_png(&dir, "a_small.png", SyntheticPattern::Uniform(0.5), 8);
    write_png(&dir, "b_large.png", SyntheticPattern::Uniform(0.5), 16);

    let dataset = build_profile_dataset(&[LabeledDirectory::new("imgs", &dir)]).unwrap();
    assert_eq!(dataset.matrix.cols, 6);

    // A uniform image's profile is flat at c²·H·W; after truncation the
    // larger image's row must still hold its own low-radius values, not a
    // padded or re-sampled variant.
    let luma = (0.5f64 * 255.0).round() / 255.0;
    let expected_small = luma * luma * 64.0;
    let expected_large = luma * luma * 256.0;
    for &v in dataset.matrix.row(0) {
        assert!((v - expected_small).abs() < 1e-9);
    }
    for &v in dataset.matrix.row(1) {
        assert!((v - expected_large).abs() < 1e-9);
    }
}
