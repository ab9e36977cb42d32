use crate::{
    catalog::model::{Atom, Catalog, Thermodynamics},
    catalog::tier::Tier,
    foundation::core::{AtomId, Point},
    layout::bonds::{BondSegment, resolve_bonds},
    layout::grid::{Layout, LayoutConfig, layout_atoms},
};

/// Orbit rings are capped regardless of valence.
pub const MAX_ORBIT_RINGS: u8 = 3;

/// One positioned atom with its derived display properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneNode {
    pub id: AtomId,
    pub symbol: String,
    pub name: String,
    pub tier: Tier,
    /// Top-left of the node in content space.
    pub position: Point,
    pub orbit_rings: u8,
    pub selected: bool,
}

/// Tier heading placed above a tier's grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TierLabel {
    pub tier: Tier,
    pub text: &'static str,
    pub anchor: Point,
}

/// Everything the detail panel shows for the selected atom.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DetailPanel {
    pub id: AtomId,
    pub symbol: String,
    pub name: String,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub art: String,
    pub meaning: String,
    pub valence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_formula: Option<String>,
    pub bonds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermodynamics: Option<Thermodynamics>,
}

impl DetailPanel {
    pub fn for_atom(atom: &Atom, catalog: &Catalog) -> Self {
        Self {
            id: atom.id,
            symbol: atom.symbol.clone(),
            name: atom.name.clone(),
            tier: atom.tier,
            tier_label: atom.tier.short_label(),
            art: atom.art.clone(),
            meaning: atom.meaning.clone(),
            valence: atom.valence,
            cost_formula: atom.cost_formula.clone(),
            bonds: atom.bonds.clone(),
            thermodynamics: catalog.thermodynamics.clone(),
        }
    }

    /// `#id · Tier Label` subtitle line.
    pub fn subtitle(&self) -> String {
        format!("#{} · {}", self.id, self.tier_label)
    }
}

/// Derived, render-ready view of the catalog under the current filter and selection.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub active_tier: Option<Tier>,
    pub nodes: Vec<SceneNode>,
    pub layout: Layout,
    pub bonds: Vec<BondSegment>,
    pub labels: Vec<TierLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailPanel>,
}

impl Scene {
    /// Recompute the scene from scratch for a filter and selection.
    #[tracing::instrument(skip(catalog, cfg))]
    pub fn build(
        catalog: &Catalog,
        active_tier: Option<Tier>,
        selected: Option<AtomId>,
        cfg: &LayoutConfig,
    ) -> Self {
        let atoms = catalog.filtered(active_tier);
        let layout = layout_atoms(atoms.iter().copied(), cfg);
        let bonds = resolve_bonds(&atoms, &layout);

        let nodes = atoms
            .iter()
            .filter_map(|a| {
                let position = layout.position(a.id)?;
                Some(SceneNode {
                    id: a.id,
                    symbol: a.symbol.clone(),
                    name: a.name.clone(),
                    tier: a.tier,
                    position,
                    orbit_rings: a.valence.min(MAX_ORBIT_RINGS),
                    selected: selected == Some(a.id),
                })
            })
            .collect();

        let labels = Tier::ALL
            .into_iter()
            .filter_map(|tier| {
                layout.tier_label_anchor(tier).map(|anchor| TierLabel {
                    tier,
                    text: tier.label(),
                    anchor,
                })
            })
            .collect();

        let detail = selected
            .and_then(|id| atoms.iter().find(|a| a.id == id))
            .map(|a| DetailPanel::for_atom(a, catalog));

        tracing::debug!(
            nodes = atoms.len(),
            bonds = bonds.len(),
            height = layout.total_height,
            "scene built"
        );

        Self {
            active_tier,
            nodes,
            layout,
            bonds,
            labels,
            detail,
        }
    }

    pub fn node(&self, id: AtomId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: AtomId) -> bool {
        self.layout.positions.contains_key(&id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/scene.rs"]
mod tests;
