use super::*;

fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

#[test]
fn full_scene_has_four_labels() {
    let c = builtin();
    let scene = Scene::build(&c, None, None, &LayoutConfig::default());
    assert_eq!(scene.nodes.len(), 50);
    assert_eq!(scene.labels.len(), 4);
    assert_eq!(scene.labels[0].text, "⟨ Quantum Tier ⟩");
    assert_eq!(scene.labels[0].anchor, Point::new(20.0, 50.0));
    assert!(scene.detail.is_none());
}

#[test]
fn filtered_scene_contains_only_that_tier() {
    let c = builtin();
    let scene = Scene::build(&c, Some(Tier::Meta), None, &LayoutConfig::default());
    assert_eq!(scene.nodes.len(), 10);
    assert!(scene.nodes.iter().all(|n| n.tier == Tier::Meta));
    assert_eq!(scene.labels.len(), 1);
    // 10 members: 8 columns, 2 rows
    assert_eq!(scene.layout.total_height, 80.0 + 200.0 + 80.0);
}

#[test]
fn orbit_rings_are_capped() {
    let c = builtin();
    let scene = Scene::build(&c, None, None, &LayoutConfig::default());
    // Fe has valence 4
    let fe = c.by_symbol("Fe").unwrap();
    assert_eq!(scene.node(fe.id).unwrap().orbit_rings, 3);
    let rn = c.by_symbol("Rn").unwrap();
    assert_eq!(scene.node(rn.id).unwrap().orbit_rings, 1);
}

#[test]
fn selection_produces_detail_panel() {
    let c = builtin();
    let scene = Scene::build(&c, None, Some(AtomId(5)), &LayoutConfig::default());
    let detail = scene.detail.as_ref().unwrap();
    assert_eq!(detail.symbol, "Cu");
    assert_eq!(detail.subtitle(), "#5 · GPU Exp-Field");
    assert_eq!(detail.cost_formula.as_deref(), Some("C_Cu = d_in · d_out"));
    assert!(detail.thermodynamics.is_some());
    assert!(scene.node(AtomId(5)).unwrap().selected);
    assert_eq!(scene.nodes.iter().filter(|n| n.selected).count(), 1);
}

#[test]
fn selection_outside_filter_has_no_detail() {
    let c = builtin();
    let scene = Scene::build(&c, Some(Tier::Cpu), Some(AtomId(5)), &LayoutConfig::default());
    assert!(scene.detail.is_none());
    assert!(!scene.contains(AtomId(5)));
}
