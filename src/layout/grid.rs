use std::collections::BTreeMap;

use crate::{
    catalog::model::Atom,
    catalog::tier::Tier,
    foundation::core::{AtomId, Point},
};

/// Grid metrics for the tiered layout, in content units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Upper bound on grid columns per tier.
    pub max_columns: usize,
    /// Horizontal distance between adjacent cells.
    pub column_pitch: f64,
    /// Vertical distance between adjacent rows.
    pub row_pitch: f64,
    /// Grid origin x.
    pub margin_left: f64,
    /// Initial y-cursor before the first tier.
    pub top_margin: f64,
    /// Extra vertical space after each tier block.
    pub tier_gap: f64,
    /// X of the tier label.
    pub label_x: f64,
    /// Distance of the tier label above the tier's first row.
    pub label_offset: f64,
    /// Width of the content layer.
    pub content_width: f64,
    /// Extra height below the last tier when sizing the content layer.
    pub bottom_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_columns: 8,
            column_pitch: 110.0,
            row_pitch: 100.0,
            margin_left: 80.0,
            top_margin: 80.0,
            tier_gap: 80.0,
            label_x: 20.0,
            label_offset: 30.0,
            content_width: 1200.0,
            bottom_padding: 200.0,
        }
    }
}

/// Grid block occupied by one non-empty tier.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TierBlock {
    pub tier: Tier,
    /// Y of the block's first row.
    pub top: f64,
    pub columns: usize,
    pub rows: usize,
    pub members: usize,
}

/// Content-space positions for one filtered view.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layout {
    /// Top-left of each atom's node.
    pub positions: BTreeMap<AtomId, Point>,
    /// Final y-cursor after the last tier.
    pub total_height: f64,
    /// Non-empty tiers in canonical order.
    pub tiers: Vec<TierBlock>,
    #[serde(skip)]
    label_x: f64,
    #[serde(skip)]
    label_offset: f64,
    #[serde(skip)]
    content_width: f64,
    #[serde(skip)]
    bottom_padding: f64,
}

impl Layout {
    pub fn position(&self, id: AtomId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn block(&self, tier: Tier) -> Option<&TierBlock> {
        self.tiers.iter().find(|b| b.tier == tier)
    }

    /// Where the tier's label is drawn, or `None` when the tier has no members in this view.
    pub fn tier_label_anchor(&self, tier: Tier) -> Option<Point> {
        self.block(tier)
            .map(|b| Point::new(self.label_x, b.top - self.label_offset))
    }

    /// `(width, height)` of the content layer that holds this layout.
    pub fn content_size(&self) -> (f64, f64) {
        (self.content_width, self.total_height + self.bottom_padding)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lay out atoms in per-tier grids stacked top to bottom in canonical tier order.
///
/// Input order is preserved within each tier. Tiers with no members take no space.
pub fn layout_atoms<'a, I>(atoms: I, cfg: &LayoutConfig) -> Layout
where
    I: IntoIterator<Item = &'a Atom>,
{
    let mut grouped: [Vec<AtomId>; 4] = Default::default();
    for atom in atoms {
        grouped[atom.tier.index()].push(atom.id);
    }

    let max_columns = cfg.max_columns.max(1);
    let mut positions = BTreeMap::new();
    let mut tiers = Vec::new();
    let mut y = cfg.top_margin;

    for tier in Tier::ALL {
        let group = &grouped[tier.index()];
        if group.is_empty() {
            continue;
        }

        let cols = group.len().min(max_columns);
        for (i, id) in group.iter().enumerate() {
            let row = i / cols;
            let col = i % cols;
            positions.insert(
                *id,
                Point::new(
                    cfg.margin_left + (col as f64) * cfg.column_pitch,
                    y + (row as f64) * cfg.row_pitch,
                ),
            );
        }

        let rows = group.len().div_ceil(cols);
        tiers.push(TierBlock {
            tier,
            top: y,
            columns: cols,
            rows,
            members: group.len(),
        });
        y += (rows as f64) * cfg.row_pitch + cfg.tier_gap;
    }

    Layout {
        positions,
        total_height: y,
        tiers,
        label_x: cfg.label_x,
        label_offset: cfg.label_offset,
        content_width: cfg.content_width,
        bottom_padding: cfg.bottom_padding,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
