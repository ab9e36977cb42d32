use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{JungleError, JungleResult};

// Guards against pathological allocations from a hand-edited snapshot size.
const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG document into straight (non-premultiplied) RGBA8.
#[tracing::instrument(skip(svg))]
pub fn rasterize_svg(svg: &str) -> JungleResult<image::RgbaImage> {
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg snapshot")?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| JungleError::render("failed to allocate snapshot pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| JungleError::render("snapshot buffer size mismatch"))
}

/// Write an RGBA image as PNG, creating parent directories as needed.
pub fn write_png(path: &Path, img: &image::RgbaImage) -> JungleResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn to_px(v: f32) -> JungleResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(JungleError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(JungleError::render(format!(
            "snapshot size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
