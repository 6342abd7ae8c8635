//! Visualization: render the population pie breakdown to **SVG** or **PNG**.
//!
//! - Fixed 11-color palette cycled by slice index
//! - Named slices with percentage labels
//! - Backend chosen by output file extension

use crate::stats::PieSlice;
use anyhow::{Result, anyhow, bail};
use plotters::element::Pie;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// Blue ramp used for the population breakdown, cycled by slice index.
const PIE_PALETTE: [RGBColor; 11] = [
    RGBColor(37, 99, 235),   // #2563eb
    RGBColor(59, 130, 246),  // #3b82f6
    RGBColor(96, 165, 250),  // #60a5fa
    RGBColor(147, 197, 253), // #93c5fd
    RGBColor(191, 219, 254), // #bfdbfe
    RGBColor(29, 78, 216),   // #1d4ed8
    RGBColor(37, 99, 235),   // #2563eb
    RGBColor(59, 130, 246),  // #3b82f6
    RGBColor(96, 165, 250),  // #60a5fa
    RGBColor(147, 197, 253), // #93c5fd
    RGBColor(219, 234, 254), // #dbeafe
];

/// Get a color from the palette.
#[inline]
pub fn palette_color(idx: usize) -> RGBColor {
    PIE_PALETTE[idx % PIE_PALETTE.len()]
}

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render the top-10-plus-Others slices as a pie chart.
///
/// The backend is chosen by the output extension: `.svg` renders a vector
/// file, anything else goes through the bitmap backend (PNG for `.png`).
pub fn plot_population_pie<P: AsRef<Path>>(
    slices: &[PieSlice],
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
) -> Result<()> {
    ensure_fonts_registered();

    if slices.is_empty() {
        bail!("no slices to plot");
    }
    if slices.iter().all(|s| s.value == 0) {
        bail!("no population data to plot");
    }

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().to_string();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_pie(root, slices, title)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_pie(root, slices, title)?;
    }
    Ok(())
}

fn draw_pie<DB>(root: DrawingArea<DB, plotters::coord::Shift>, slices: &[PieSlice], title: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let root = root
        .titled(title, ("sans-serif", 24))
        .map_err(|e| anyhow!("{:?}", e))?;

    let (w, h) = root.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    // Leave room for the labels that sit outside the circle.
    let radius = (w.min(h) as f64) * 0.32;

    let sizes: Vec<f64> = slices.iter().map(|s| s.value as f64).collect();
    let colors: Vec<RGBColor> = (0..slices.len()).map(palette_color).collect();
    let labels: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 12).into_font().color(&BLACK));

    root.draw(&pie).map_err(|e| anyhow!("{:?}", e))?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
