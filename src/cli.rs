use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-webp")]
#[command(
    author,
    version,
    about = "Convert every PNG/JPEG under a directory tree to WebP, in place"
)]
pub struct Cli {
    /// Directory to scan (default: src/assets/gallery)
    pub root: Option<PathBuf>,

    /// WebP quality, 0-100 (default: 80)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=100))]
    pub quality: Option<u16>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
