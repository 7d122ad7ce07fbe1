use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AuroraError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        AuroraError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AuroraError::lifecycle("x")
            .to_string()
            .contains("lifecycle error:")
    );
    assert!(AuroraError::render("x").to_string().contains("render error:"));
    assert!(AuroraError::config("x").to_string().contains("config error:"));
    assert!(
        AuroraError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AuroraError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
