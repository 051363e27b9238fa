//! glquad preview - renders either quad variant to a PNG without a browser.
//!
//! Output matches what the WebGL client draws for the same configuration:
//! the grayscale variant samples `--input`, the gradient variant needs no
//! input at all.

use anyhow::Context;
use clap::Parser;
use glquad_common::{RenderConfig, Variant};
use std::path::PathBuf;

mod preview;

// ── CLI Arguments ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Clone)]
#[command(name = "glquad-preview", about = "Render a glquad variant to a PNG")]
pub struct Args {
    /// Debug mode
    #[arg(long)]
    pub debug: bool,

    /// YAML render config; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Per-pixel transform (grayscale | gradient)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Source image for the grayscale variant
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output width in pixels; defaults to the input width, or 300
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels; defaults to the input height, or 150
    #[arg(long)]
    pub height: Option<u32>,

    /// Where to write the PNG
    #[arg(long, short, default_value = "quad.png")]
    pub output: PathBuf,
}

// ── Main ───────────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {:?}", path))?;
            RenderConfig::from_yaml(&text)
                .with_context(|| format!("failed to parse config {:?}", path))?
        }
        None => RenderConfig::default(),
    };
    let config = preview::merge(config, &args);
    log::debug!("config: {:?}", config);

    let (width, height) = preview::write(&config, &args)?;
    log::info!(
        "wrote {} {}x{} to {:?}",
        config.variant,
        width,
        height,
        args.output
    );
    Ok(())
}
