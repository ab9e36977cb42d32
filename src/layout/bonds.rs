use std::collections::{HashMap, HashSet};

use crate::{
    catalog::model::Atom,
    catalog::tier::Tier,
    foundation::core::{AtomId, Point, Vec2},
    layout::grid::Layout,
};

/// Offset from a node's top-left position to its visual center.
pub const NODE_CENTER: Vec2 = Vec2::new(28.0, 28.0);

/// Line segment between two bonded atoms in content space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BondSegment {
    /// Lower id of the pair (the declaring side).
    pub from_id: AtomId,
    pub to_id: AtomId,
    pub from: Point,
    pub to: Point,
    /// Tier of the declaring atom, used for coloring.
    pub tier: Tier,
}

/// Resolve declared bonds among the atoms of one filtered view.
///
/// A segment is emitted when the lower-id atom declares the higher-id atom's symbol, at most
/// once per pair even if the symbol is listed repeatedly. Symbols naming atoms outside `atoms`,
/// and atoms without a layout position, are skipped.
pub fn resolve_bonds(atoms: &[&Atom], layout: &Layout) -> Vec<BondSegment> {
    let by_symbol: HashMap<&str, &Atom> = atoms.iter().map(|a| (a.symbol.as_str(), *a)).collect();

    let mut seen: HashSet<(AtomId, AtomId)> = HashSet::new();
    let mut out = Vec::new();
    for atom in atoms {
        let Some(pos) = layout.position(atom.id) else {
            continue;
        };
        for symbol in &atom.bonds {
            let Some(target) = by_symbol.get(symbol.as_str()) else {
                continue;
            };
            if atom.id >= target.id || !seen.insert((atom.id, target.id)) {
                continue;
            }
            let Some(target_pos) = layout.position(target.id) else {
                continue;
            };
            out.push(BondSegment {
                from_id: atom.id,
                to_id: target.id,
                from: pos + NODE_CENTER,
                to: target_pos + NODE_CENTER,
                tier: atom.tier,
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bonds.rs"]
mod tests;
