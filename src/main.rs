use clap::Parser;
use letterbox::config::{Background, JobConfig};
use letterbox::{output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "letterbox")]
#[command(about = "Resize images in a folder")]
#[command(long_about = "\
Resize images in a folder

Every top-level *.jpg and *.png in SOURCE_FOLDER is scaled to fit a
WIDTH x HEIGHT canvas without distortion, centered, and padded with a solid
background. Results are written to TARGET_FOLDER as <name>_resized.<ext>.

  source/                      target/
  ├── a.jpg   (800x600)   →    ├── a_resized.jpg  (400x300, no bars)
  ├── b.png   (400x400)   →    └── b_resized.png  (400x300, 50px side bars)
  ├── c.png   (400x300)        (already 400x300: skipped)
  └── notes.txt                (ignored)

Set RUST_LOG=debug to see the geometry chosen for each file.")]
#[command(version = env!("LETTERBOX_VERSION"))]
struct Cli {
    /// Path to the folder containing images
    source_folder: PathBuf,

    /// Path to the folder to save resized images
    target_folder: PathBuf,

    /// Desired width of the resized images
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Desired height of the resized images
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Fill the background with black instead of white
    #[arg(long)]
    blackback: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = JobConfig::new(
        cli.source_folder,
        cli.target_folder,
        cli.width,
        cli.height,
        Background::from_black_flag(cli.blackback),
    )?;

    process::run(&config, output::print_process_event)?;

    Ok(())
}
