//! CPU evaluation of the quad's fragment stage.
//!
//! Produces the picture the GPU would, sampling at pixel centers with the
//! same unpack and sampler state: flip-Y, clamp-to-edge, bilinear.

use crate::core::{clip_to_uv, Color, SetupError, Variant};
use image::RgbaImage;

/// Render `variant` into a `width` x `height` image, row 0 at the top.
///
/// `source` is required for [`Variant::Grayscale`] and ignored otherwise.
pub fn render(
    variant: Variant,
    source: Option<&RgbaImage>,
    width: u32,
    height: u32,
) -> Result<RgbaImage, SetupError> {
    if width == 0 || height == 0 {
        return Err(SetupError::Resource("zero-sized target"));
    }
    let source = match variant {
        Variant::Grayscale => Some(
            source
                .filter(|img| img.width() > 0 && img.height() > 0)
                .ok_or_else(|| SetupError::MissingImage("source".to_string()))?,
        ),
        Variant::Gradient => None,
    };

    let mut out = RgbaImage::new(width, height);
    for (px, py, pixel) in out.enumerate_pixels_mut() {
        // Window space has its origin at the bottom-left.
        let x = (px as f32 + 0.5) / width as f32 * 2. - 1.;
        let y = 1. - (py as f32 + 0.5) / height as f32 * 2.;
        let (u, v) = clip_to_uv(x, y);

        let color = match source {
            Some(img) => sample(img, u, v).grayscale(),
            None => Color::gradient(u),
        };
        pixel.0 = color.to_rgba8();
    }
    Ok(out)
}

/// Bilinear sample of a texture uploaded with flip-Y, so `v = 1` is row 0.
pub fn sample(img: &RgbaImage, u: f32, v: f32) -> Color {
    let x = u * img.width() as f32 - 0.5;
    let y = (1. - v) * img.height() as f32 - 0.5;

    let x0 = x.floor();
    let y0 = y.floor();
    let tx = x - x0;
    let ty = y - y0;

    let texel = |ix: f32, iy: f32| {
        let cx = (ix.max(0.) as u32).min(img.width() - 1);
        let cy = (iy.max(0.) as u32).min(img.height() - 1);
        let [r, g, b, a] = img.get_pixel(cx, cy).0;
        Color::from_rgba(r, g, b, a)
    };

    let top = texel(x0, y0).lerp(texel(x0 + 1., y0), tx);
    let bottom = texel(x0, y0 + 1.).lerp(texel(x0 + 1., y0 + 1.), tx);
    top.lerp(bottom, ty)
}
