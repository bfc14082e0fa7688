use crate::foundation::core::{Affine, BezPath, IconSize};
use crate::foundation::error::{IkonaError, IkonaResult};
use crate::markup::document::{FillRule, IconDocument};
use crate::markup::path_data::interpret_path_data;
use crate::style::weight::DEFAULT_STROKE_WIDTH;

/// Upper bound on either output dimension. Icon targets are typically tiny;
/// anything near this is a caller bug, not a workload.
const MAX_DIM: u32 = 16_384;

const MITER_LIMIT: f64 = 4.0;

/// Rendered icon pixels: row-major premultiplied RGBA8 in device RGB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconBitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha. Always true for pipeline
    /// output; carried explicitly so consumers never have to guess.
    pub premultiplied: bool,
}

impl IconBitmap {
    /// Convert to straight (non-premultiplied) RGBA8, e.g. for PNG export.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 || a == 255 {
                continue;
            }
            px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
        }
        out
    }
}

/// Rasterize a styled document into a fixed-size bitmap.
///
/// The viewport is mapped onto the target with a uniform scale
/// (`min(target_w / vw, target_h / vh)`) and centered on both axes, so
/// content is never stretched anisotropically. Paths draw in document order:
/// fill first (when a non-`none` fill is present), then stroke (round caps
/// and joins, miter limit 4). Every non-`none` color token paints with
/// `foreground`, a straight-alpha RGBA8 color.
///
/// A document that produces no visible pixels is a valid blank result. The
/// only failure is an unallocatable target size.
pub fn rasterize(
    doc: &IconDocument,
    size: IconSize,
    foreground: [u8; 4],
) -> IkonaResult<IconBitmap> {
    let (width, height) = (size.width, size.height);
    if width == 0 || height == 0 {
        return Err(IkonaError::allocation(format!(
            "target size {width}x{height} has a zero dimension"
        )));
    }
    if width > MAX_DIM || height > MAX_DIM {
        return Err(IkonaError::allocation(format!(
            "target size {width}x{height} exceeds {MAX_DIM}x{MAX_DIM}"
        )));
    }
    let w16: u16 = width
        .try_into()
        .map_err(|_| IkonaError::allocation("target width exceeds u16"))?;
    let h16: u16 = height
        .try_into()
        .map_err(|_| IkonaError::allocation("target height exceeds u16"))?;

    let vp = doc.viewport;
    let scale = (f64::from(width) / vp.width).min(f64::from(height) / vp.height);
    let offset_x = (f64::from(width) - vp.width * scale) / 2.0;
    let offset_y = (f64::from(height) - vp.height * scale) / 2.0;

    // Viewport space and the pixmap are both y-down with a top-left origin,
    // so the mapping is centering + scale + origin shift, no axis flip.
    let transform = Affine::translate((offset_x, offset_y))
        * Affine::scale(scale)
        * Affine::translate((-vp.x, -vp.y));

    let paint = vello_cpu::peniko::Color::from_rgba8(
        foreground[0],
        foreground[1],
        foreground[2],
        foreground[3],
    );

    let mut ctx = vello_cpu::RenderContext::new(w16, h16);

    for path in &doc.paths {
        let geometry = interpret_path_data(&path.data);
        if geometry.elements().is_empty() {
            // Blank sub-path: contributes nothing, not an error.
            continue;
        }
        let cpu_path = bezpath_to_cpu(&geometry);
        ctx.set_transform(affine_to_cpu(transform));

        let opacity = path.opacity.unwrap_or(1.0).clamp(0.0, 1.0) as f32;
        if opacity < 1.0 {
            ctx.push_opacity_layer(opacity);
        }

        if matches!(&path.fill, Some(token) if !token.is_none()) {
            ctx.set_fill_rule(match path.fill_rule {
                Some(FillRule::EvenOdd) => vello_cpu::peniko::Fill::EvenOdd,
                Some(FillRule::NonZero) | None => vello_cpu::peniko::Fill::NonZero,
            });
            ctx.set_paint(paint);
            ctx.fill_path(&cpu_path);
        }

        if matches!(&path.stroke, Some(token) if !token.is_none()) {
            let sw = path.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(sw)
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round)
                    .with_miter_limit(MITER_LIMIT),
            );
            ctx.set_paint(paint);
            ctx.stroke_path(&cpu_path);
        }

        if opacity < 1.0 {
            ctx.pop_layer();
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(IconBitmap {
        width,
        height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
