use super::*;
use crate::layout::grid::{LayoutConfig, layout_atoms};

fn atom(id: u32, symbol: &str, tier: Tier, bonds: &[&str]) -> Atom {
    Atom {
        id: AtomId(id),
        symbol: symbol.to_string(),
        name: String::new(),
        tier,
        valence: 1,
        meaning: String::new(),
        bonds: bonds.iter().map(|s| s.to_string()).collect(),
        cost_formula: None,
        art: String::new(),
    }
}

fn bonds_for(atoms: &[&Atom]) -> Vec<BondSegment> {
    let layout = layout_atoms(atoms.iter().copied(), &LayoutConfig::default());
    resolve_bonds(atoms, &layout)
}

#[test]
fn mutual_declaration_emits_one_segment() {
    let a = atom(1, "A", Tier::Gpu, &["B"]);
    let b = atom(2, "B", Tier::Gpu, &["A"]);
    let segs = bonds_for(&[&a, &b]);
    assert_eq!(segs.len(), 1);
    assert_eq!((segs[0].from_id, segs[0].to_id), (AtomId(1), AtomId(2)));
}

#[test]
fn segment_endpoints_use_node_center() {
    let a = atom(1, "A", Tier::Gpu, &["B"]);
    let b = atom(2, "B", Tier::Gpu, &[]);
    let segs = bonds_for(&[&a, &b]);
    assert_eq!(segs[0].from, Point::new(108.0, 108.0));
    assert_eq!(segs[0].to, Point::new(218.0, 108.0));
    assert_eq!(segs[0].tier, Tier::Gpu);
}

#[test]
fn repeated_symbol_emits_one_segment() {
    let a = atom(1, "A", Tier::Gpu, &["B", "B"]);
    let b = atom(2, "B", Tier::Gpu, &["A", "A"]);
    let segs = bonds_for(&[&a, &b]);
    assert_eq!(segs.len(), 1);
    assert_eq!((segs[0].from_id, segs[0].to_id), (AtomId(1), AtomId(2)));
}

#[test]
fn declaration_only_on_higher_id_is_not_drawn() {
    let a = atom(1, "A", Tier::Gpu, &[]);
    let b = atom(2, "B", Tier::Gpu, &["A"]);
    assert!(bonds_for(&[&a, &b]).is_empty());
}

#[test]
fn filtered_out_targets_produce_no_bond() {
    let a = atom(1, "A", Tier::Gpu, &["B", "C"]);
    let c = atom(3, "C", Tier::Cpu, &[]);
    let segs = bonds_for(&[&a]);
    assert!(segs.is_empty());
    let segs = bonds_for(&[&a, &c]);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].to_id, AtomId(3));
    assert_eq!(segs[0].tier, Tier::Gpu);
}

#[test]
fn unknown_symbols_are_ignored() {
    let a = atom(1, "A", Tier::Meta, &["Nope", "A"]);
    assert!(bonds_for(&[&a]).is_empty());
}

#[test]
fn builtin_catalog_pairs_are_unique() {
    let catalog = crate::Catalog::builtin().unwrap();
    for filter in [None, Some(Tier::Gpu), Some(Tier::Cpu)] {
        let atoms = catalog.filtered(filter);
        let segs = bonds_for(&atoms);
        let mut pairs: Vec<(AtomId, AtomId)> = segs.iter().map(|s| (s.from_id, s.to_id)).collect();
        assert!(pairs.iter().all(|(a, b)| a < b));
        let n = pairs.len();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), n);
        for s in &segs {
            assert!(atoms.iter().any(|a| a.id == s.to_id));
        }
    }
}

#[test]
fn builtin_gpu_view_has_expected_bond_count() {
    let catalog = crate::Catalog::builtin().unwrap();
    assert_eq!(bonds_for(&catalog.filtered(Some(Tier::Gpu))).len(), 12);
    assert!(bonds_for(&catalog.filtered(Some(Tier::Quantum))).is_empty());
}
