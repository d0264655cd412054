// Batch pipeline: discover images, overlay their DOTA labels, emit
// `checked_` copies for visual inspection.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub mod colors;
pub mod drawing;
pub mod labels;

/// Extensions accepted by discovery, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif"];

/// Prefix for annotated output filenames.
pub const OUTPUT_PREFIX: &str = "checked_";

/// Counts reported after a batch run.
pub struct BatchSummary {
    /// Images written to the output directory.
    pub written: usize,
    /// Images that failed to decode and were skipped.
    pub skipped: usize,
}

/// List the image files directly inside `dir`, sorted by name. A missing or
/// unreadable directory is fatal; there is nothing useful to do without it.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading image directory {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)));
        if matches {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Run the full verification pass: every image in `images_dir` is loaded,
/// overlaid with the annotations from its sibling label file in
/// `labels_dir` (if one exists), and saved into `output_dir` under a
/// `checked_` name. Images that fail to decode are skipped; a label file
/// that cannot be read leaves its image unannotated.
pub fn verify_dataset(images_dir: &Path, labels_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
    let images = list_images(images_dir)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let font = drawing::label_font()?;

    println!("Verifying {} images for ALL classes...", images.len());
    let progress = ProgressBar::new(images.len() as u64);

    let mut summary = BatchSummary {
        written: 0,
        skipped: 0,
    };

    for path in &images {
        let mut img = match image::open(path) {
            Ok(img) => img.into_rgb8(),
            Err(err) => {
                eprintln!("skipping {}: {err}", path.display());
                summary.skipped += 1;
                progress.inc(1);
                continue;
            }
        };

        // Same base name, .txt extension, in the label directory.
        let file_name = path.file_name().unwrap_or_default();
        let label_path = labels_dir.join(Path::new(file_name).with_extension("txt"));

        if label_path.is_file() {
            let annotations = match labels::read_label_file(&label_path) {
                Ok(annotations) => annotations,
                Err(err) => {
                    eprintln!("ignoring labels for {}: {err}", path.display());
                    Vec::new()
                }
            };
            for annotation in &annotations {
                drawing::draw_annotation(&mut img, annotation, &font);
            }
        }

        let mut out_name = std::ffi::OsString::from(OUTPUT_PREFIX);
        out_name.push(file_name);
        let out_path = output_dir.join(out_name);
        img.save(&out_path)
            .with_context(|| format!("writing {}", out_path.display()))?;

        summary.written += 1;
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}
