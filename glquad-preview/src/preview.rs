use crate::Args;
use anyhow::{bail, Context, Result};
use glquad_common::{raster, RenderConfig, Variant};
use image::RgbaImage;

const DEFAULT_SIZE: (u32, u32) = (300, 150);

/// Apply command-line overrides on top of a loaded config.
pub fn merge(mut config: RenderConfig, args: &Args) -> RenderConfig {
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    config
}

fn load_input(config: &RenderConfig, args: &Args) -> Result<Option<RgbaImage>> {
    if config.variant != Variant::Grayscale {
        if args.input.is_some() {
            log::warn!("--input is ignored by the {} variant", config.variant);
        }
        return Ok(None);
    }
    let Some(path) = &args.input else {
        bail!("the grayscale variant needs --input");
    };
    let img = image::open(path)
        .with_context(|| format!("failed to open image {:?}", path))?
        .to_rgba8();
    log::debug!("loaded {:?} ({}x{})", path, img.width(), img.height());
    Ok(Some(img))
}

/// Rasterize `config` and save the PNG. Returns the output size.
pub fn write(config: &RenderConfig, args: &Args) -> Result<(u32, u32)> {
    let input = load_input(config, args)?;
    let (width, height) = match &input {
        Some(img) => (
            args.width.unwrap_or(img.width()),
            args.height.unwrap_or(img.height()),
        ),
        None => (
            args.width.unwrap_or(DEFAULT_SIZE.0),
            args.height.unwrap_or(DEFAULT_SIZE.1),
        ),
    };

    let out = raster::render(config.variant, input.as_ref(), width, height)?;
    out.save_with_format(&args.output, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {:?}", args.output))?;
    Ok((width, height))
}
