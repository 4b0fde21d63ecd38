// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of `chart_core::Canvas`, with RGBA and PNG output.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chart_core::{Canvas, Chart, FuncGraph, Point, Rect, Rgba};
use rand::Rng;
use skia_safe as skia;
use tracing::debug;

/// Raster surface a chart draws into. Starts fully transparent.
pub struct SkiaCanvas {
    surface: skia::Surface,
    width: u32,
    height: u32,
}

impl SkiaCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let dims = (i32::try_from(width)?, i32::try_from(height)?);
        let mut surface = skia::surfaces::raster_n32_premul(dims)
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        Ok(Self { surface, width, height })
    }

    /// Canvas sized for `chart`.
    pub fn for_chart(chart: &Chart) -> Result<Self> {
        let size = chart.canvas_size();
        Self::new(size.width, size.height)
    }

    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("reading back surface pixels failed"));
        }
        Ok(pixels)
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let pixels = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(self.width, self.height, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", self.width, self.height))?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode PNG")?;
        Ok(out)
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

/// Lay out and draw `chart` onto a fresh canvas of its own size.
pub fn render<R>(chart: &Chart, rng: &mut R) -> Result<SkiaCanvas>
where
    R: Rng + ?Sized,
{
    let mut canvas = SkiaCanvas::for_chart(chart)?;
    chart.draw(&mut canvas, rng)?;
    Ok(canvas)
}

/// Draw a function graph onto a fresh canvas of its own size.
pub fn render_function<F, R>(graph: &FuncGraph<F>, rng: &mut R) -> Result<SkiaCanvas>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let size = graph.canvas_size();
    let mut canvas = SkiaCanvas::new(size.width, size.height)?;
    graph.draw(&mut canvas, rng);
    Ok(canvas)
}

impl Canvas for SkiaCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn new_layer(&self) -> Option<Self> {
        Self::new(self.width, self.height).ok()
    }

    fn draw_polyline(&mut self, points: &[Point], color: Rgba, width: f64, joined_curve: bool) {
        let Some(path) = open_path(points) else {
            return;
        };
        let mut paint = paint(color);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width as f32);
        if joined_curve {
            paint.set_stroke_join(skia::paint::Join::Round);
            paint.set_stroke_cap(skia::paint::Cap::Round);
        }
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn draw_polygon(&mut self, points: &[Point], fill: Rgba) {
        let Some(mut path) = open_path(points) else {
            return;
        };
        path.close();
        self.surface.canvas().draw_path(&path, &paint(fill));
    }

    fn draw_ellipse(&mut self, bounds: Rect, fill: Rgba) {
        self.surface.canvas().draw_oval(to_skia_rect(bounds), &paint(fill));
    }

    fn draw_pie_slice(&mut self, bounds: Rect, start_angle: f64, end_angle: f64, fill: Rgba) {
        let sweep = (end_angle - start_angle) as f32;
        let paint = paint(fill);
        // a full turn is a plain disc
        if sweep >= 360.0 {
            self.surface.canvas().draw_oval(to_skia_rect(bounds), &paint);
        } else {
            self.surface
                .canvas()
                .draw_arc(to_skia_rect(bounds), start_angle as f32, sweep, true, &paint);
        }
    }

    fn composite(&mut self, mut layer: Self, offset: (i32, i32)) {
        let image = layer.surface.image_snapshot();
        let origin = (offset.0 as f32, offset.1 as f32);
        self.surface.canvas().draw_image(&image, origin, None);
    }
}

// ---- helpers ----------------------------------------------------------------

/// Fill paint that overwrites the destination, alpha included.
fn paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_blend_mode(skia::BlendMode::Src);
    paint.set_color(skia::Color::from_argb(color.a, color.r, color.g, color.b));
    paint
}

fn open_path(points: &[Point]) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first.x as f32, first.y as f32));
    for p in rest {
        path.line_to((p.x as f32, p.y as f32));
    }
    Some(path)
}

fn to_skia_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}
