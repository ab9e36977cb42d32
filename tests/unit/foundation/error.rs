use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        JungleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        JungleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(JungleError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = JungleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: JungleError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, JungleError::Serde(_)));
}
