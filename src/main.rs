mod cli;

use gallery_webp::{
    codec::WebpCodec,
    config::{self, Quality},
    converter::{Converter, FileOutcome},
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| default_log_filter(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_target(false)
        .init();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;

    // CLI arguments override the config file
    if let Some(root) = cli.root {
        config.root = root;
    }
    if let Some(quality) = cli.quality {
        config.quality = Quality::new(quality)?;
    }

    let converter = Converter::new(config, WebpCodec::new()).with_dry_run(cli.dry_run);
    let report = converter.run()?;

    if cli.dry_run {
        for file in &report.files {
            if let FileOutcome::Planned { output } = &file.outcome {
                println!("{} -> {}", file.source.display(), output.display());
            }
        }
    } else if report.failed() == 0 {
        println!("\nDone! All images are now WebP.");
    } else {
        println!(
            "\nDone. {} image(s) could not be converted, see the log above.",
            report.failed()
        );
    }

    Ok(())
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "gallery_webp=debug,gallery_webp_common=debug"
    } else {
        "gallery_webp=info,gallery_webp_common=info"
    }
}
