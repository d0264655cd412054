use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dotacheck::verify_dataset;

/// Overlay DOTA polygon labels on their source images for visual QA
#[derive(Parser, Debug)]
#[command(name = "dotacheck")]
#[command(about = "Render oriented bounding box labels onto images for manual verification", long_about = None)]
struct Args {
    /// Directory containing the source images
    #[arg(short, long, default_value = "sample_images")]
    images: PathBuf,

    /// Directory containing the DOTA label files
    #[arg(short, long, default_value = "sample_labels")]
    labels: PathBuf,

    /// Directory for the annotated copies
    #[arg(short, long, default_value = "debug_verification")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let summary = verify_dataset(&args.images, &args.labels, &args.output)?;

    if summary.skipped > 0 {
        println!("{} image(s) could not be decoded and were skipped.", summary.skipped);
    }
    println!("Done. Check {} for visual validation.", args.output.display());
    Ok(())
}
