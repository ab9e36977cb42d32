//! Headless SVG snapshot of a [`Scene`] under a [`Viewport`].

use std::fmt::Write as _;

use crate::{
    foundation::core::Hsl,
    layout::bonds::NODE_CENTER,
    view::scene::{DetailPanel, Scene, SceneNode},
    view::viewport::Viewport,
};

const NODE_RADIUS: f64 = 28.0;
const MUTED: Hsl = Hsl::new(170.0, 20.0, 50.0);

/// Output surface settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    pub background: Hsl,
    /// Draw the selected atom's detail panel in the bottom-right corner.
    pub detail_panel: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            background: Hsl::new(180.0, 15.0, 4.0),
            detail_panel: true,
        }
    }
}

/// Render `scene` as a standalone SVG document with the viewport applied to the content layer.
#[tracing::instrument(skip(scene, viewport))]
pub fn render_svg(scene: &Scene, viewport: &Viewport, opts: &SvgOptions) -> String {
    let mut out = String::new();
    let (w, h) = (opts.width, opts.height);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="monospace">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        opts.background.css(None)
    );

    let [a, b, c, d, e, f] = viewport.transform().as_coeffs();
    let _ = writeln!(
        out,
        r#"<g class="content" transform="matrix({} {} {} {} {} {})">"#,
        num(a),
        num(b),
        num(c),
        num(d),
        num(e),
        num(f)
    );

    out.push_str("<g class=\"bonds\">\n");
    for bond in &scene.bonds {
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1" stroke-opacity="0.2" stroke-dasharray="4 4"/>"#,
            num(bond.from.x),
            num(bond.from.y),
            num(bond.to.x),
            num(bond.to.y),
            bond.tier.color().css(None)
        );
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"labels\">\n");
    for label in &scene.labels {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10" fill="{}">{}</text>"#,
            num(label.anchor.x),
            num(label.anchor.y),
            MUTED.css(None),
            escape_xml(label.text)
        );
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"nodes\">\n");
    for node in &scene.nodes {
        write_node(&mut out, node);
    }
    out.push_str("</g>\n</g>\n");

    let _ = writeln!(
        out,
        r#"<text class="zoom" x="{}" y="24" font-size="9" text-anchor="end" fill="{}">{}%</text>"#,
        w.saturating_sub(16),
        MUTED.css(None),
        viewport.zoom_percent()
    );

    if opts.detail_panel
        && let Some(detail) = &scene.detail
    {
        write_detail(&mut out, detail, w, h);
    }

    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &SceneNode) {
    let color = node.tier.color();
    let (cx, cy) = (NODE_CENTER.x, NODE_CENTER.y);
    let _ = writeln!(
        out,
        r#"<g class="atom" data-id="{}" transform="translate({} {})">"#,
        node.id,
        num(node.position.x),
        num(node.position.y)
    );

    for i in 0..node.orbit_rings {
        let r = 35.0 + f64::from(i) * 10.0;
        let _ = writeln!(
            out,
            r#"<circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{}"/>"#,
            num(r),
            color.css(Some(0.15))
        );
    }

    if node.selected {
        let _ = writeln!(
            out,
            r#"<circle class="selected" cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            num(NODE_RADIUS + 6.0),
            color.css(None)
        );
    }

    let _ = writeln!(
        out,
        r#"<circle cx="{cx}" cy="{cy}" r="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        num(NODE_RADIUS),
        color.css(Some(0.1)),
        color.css(None)
    );
    let _ = writeln!(
        out,
        r#"<text x="{cx}" y="{}" font-size="12" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
        num(cy + 2.0),
        color.css(None),
        escape_xml(&node.symbol)
    );
    let _ = writeln!(
        out,
        r#"<text x="{cx}" y="{}" font-size="8" text-anchor="middle" fill="{}">{}</text>"#,
        num(cy + 13.0),
        MUTED.css(None),
        node.id
    );
    let _ = writeln!(
        out,
        r#"<text x="{cx}" y="{}" font-size="9" text-anchor="middle" fill="{}">{}</text>"#,
        num(NODE_RADIUS * 2.0 + 14.0),
        MUTED.css(None),
        escape_xml(&node.name)
    );
    out.push_str("</g>\n");
}

fn write_detail(out: &mut String, detail: &DetailPanel, w: u32, h: u32) {
    const PANEL_W: f64 = 320.0;
    const LINE_H: f64 = 14.0;

    let color = detail.tier.color();
    let mut lines = vec![
        (format!("{} {}", detail.symbol, detail.name), color),
        (detail.subtitle(), MUTED),
        (detail.art.clone(), color),
        (format!("Function: {}", detail.meaning), MUTED),
        (format!("Valence: {}", detail.valence), MUTED),
    ];
    if let Some(cost) = &detail.cost_formula {
        lines.push((format!("Cost: {cost}"), color));
    }
    lines.push((format!("Bonds with: {}", detail.bonds.join(" ")), MUTED));
    if let Some(th) = &detail.thermodynamics {
        lines.push((format!("E = {}", th.energy), MUTED));
        lines.push((format!("S = {}", th.entropy), MUTED));
        lines.push((format!("F = {}", th.free_compute), MUTED));
    }

    let panel_h = 16.0 + LINE_H * lines.len() as f64;
    let x = (f64::from(w) - PANEL_W - 16.0).max(0.0);
    let y = (f64::from(h) - panel_h - 16.0).max(0.0);
    let _ = writeln!(
        out,
        r#"<g class="detail" transform="translate({} {})">"#,
        num(x),
        num(y)
    );
    let _ = writeln!(
        out,
        r#"<rect width="{}" height="{}" rx="8" fill="{}" stroke="{}"/>"#,
        num(PANEL_W),
        num(panel_h),
        Hsl::new(180.0, 10.0, 8.0).css(Some(0.9)),
        color.css(Some(0.4))
    );
    for (i, (text, fill)) in lines.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<text x="12" y="{}" font-size="10" fill="{}">{}</text>"#,
            num(18.0 + LINE_H * i as f64),
            fill.css(None),
            escape_xml(text)
        );
    }
    out.push_str("</g>\n");
}

fn num(v: f64) -> String {
    // Normalizes -0 and trims float noise.
    let r = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{r}")
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
