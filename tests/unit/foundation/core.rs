use super::*;

#[test]
fn atom_id_orders_numerically() {
    let mut ids = vec![AtomId(12), AtomId(3), AtomId(40)];
    ids.sort();
    assert_eq!(ids, vec![AtomId(3), AtomId(12), AtomId(40)]);
    assert_eq!(AtomId(7).to_string(), "7");
}

#[test]
fn atom_id_serializes_as_plain_integer() {
    assert_eq!(serde_json::to_string(&AtomId(5)).unwrap(), "5");
    let id: AtomId = serde_json::from_str("41").unwrap();
    assert_eq!(id, AtomId(41));
}

#[test]
fn hsl_css_notation() {
    let c = Hsl::new(175.0, 80.0, 45.0);
    assert_eq!(c.css(None), "hsl(175, 80%, 45%)");
    assert_eq!(c.css(Some(0.2)), "hsla(175, 80%, 45%, 0.2)");
}
