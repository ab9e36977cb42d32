use super::*;
use crate::{Point, Vec2};

fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

#[test]
fn selecting_active_tier_toggles_it_off() {
    let c = builtin();
    let s = update(ViewState::default(), &c, Action::SelectTier(Tier::Gpu));
    assert_eq!(s.active_tier, Some(Tier::Gpu));
    let s = update(s, &c, Action::SelectTier(Tier::Cpu));
    assert_eq!(s.active_tier, Some(Tier::Cpu));
    let s = update(s, &c, Action::SelectTier(Tier::Cpu));
    assert_eq!(s.active_tier, None);
}

#[test]
fn tier_change_clears_selection_and_rebuilds_scene() {
    let c = builtin();
    let s = update(ViewState::default(), &c, Action::ClickAtom(AtomId(1)));
    assert_eq!(s.selected, Some(AtomId(1)));

    let s = update(s, &c, Action::SelectTier(Tier::Quantum));
    assert_eq!(s.selected, None);

    let scene = s.scene(&c, &LayoutConfig::default());
    let ids: Vec<u32> = scene.nodes.iter().map(|n| n.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn show_all_clears_filter_and_selection() {
    let c = builtin();
    let s = replay(
        ViewState::default(),
        &c,
        [
            Action::SelectTier(Tier::Meta),
            Action::ClickAtom(AtomId(41)),
            Action::ShowAll,
        ],
    );
    assert_eq!(s.active_tier, None);
    assert_eq!(s.selected, None);
}

#[test]
fn clicking_selected_atom_deselects() {
    let c = builtin();
    let s = update(ViewState::default(), &c, Action::ClickAtom(AtomId(6)));
    let s = update(s, &c, Action::ClickAtom(AtomId(6)));
    assert_eq!(s.selected, None);
    let s = update(s, &c, Action::ClickAtom(AtomId(6)));
    let s = update(s, &c, Action::CloseDetail);
    assert_eq!(s.selected, None);
}

#[test]
fn clicks_outside_view_are_ignored() {
    let c = builtin();
    let s = update(ViewState::default(), &c, Action::SelectTier(Tier::Cpu));
    let s = update(s, &c, Action::ClickAtom(AtomId(5)));
    assert_eq!(s.selected, None);
    let s = update(s, &c, Action::ClickAtom(AtomId(999)));
    assert_eq!(s.selected, None);
}

#[test]
fn input_only_touches_viewport() {
    let c = builtin();
    let before = update(ViewState::default(), &c, Action::ClickAtom(AtomId(3)));
    let after = replay(
        before,
        &c,
        [
            Action::Input(InputEvent::PointerDown(Point::new(100.0, 100.0))),
            Action::Input(InputEvent::PointerMove(Point::new(120.0, 130.0))),
            Action::Input(InputEvent::PointerUp),
        ],
    );
    assert_eq!(after.viewport.viewport.pan, Vec2::new(20.0, 30.0));
    assert_eq!(after.selected, before.selected);
    assert_eq!(after.active_tier, before.active_tier);
}

#[test]
fn sidebar_toggles() {
    let c = builtin();
    let s = update(ViewState::default(), &c, Action::ToggleSidebar);
    assert!(s.sidebar_collapsed);
    assert!(!update(s, &c, Action::ToggleSidebar).sidebar_collapsed);
}

#[test]
fn new_uses_configured_zoom_bounds() {
    let cfg: JungleConfig =
        serde_json::from_str(r#"{ "viewport": { "max_zoom": 4.0 } }"#).unwrap();
    let c = builtin();
    let s = update(
        ViewState::new(&cfg),
        &c,
        Action::Input(InputEvent::Wheel { delta_y: -1.0e9 }),
    );
    assert_eq!(s.viewport.viewport.zoom, 4.0);
    assert_eq!(cfg.layout, LayoutConfig::default());
}

#[test]
fn actions_deserialize_from_json() {
    let actions: Vec<Action> = serde_json::from_str(
        r#"[ { "select_tier": "gpu" }, { "click_atom": 5 }, { "input": { "key": "arrow_up" } }, "close_detail" ]"#,
    )
    .unwrap();
    assert_eq!(actions[0], Action::SelectTier(Tier::Gpu));
    assert_eq!(actions[1], Action::ClickAtom(AtomId(5)));
    assert_eq!(
        actions[2],
        Action::Input(InputEvent::Key(crate::Key::ArrowUp))
    );
    assert_eq!(actions[3], Action::CloseDetail);
}
