use super::*;

#[test]
fn canonical_names_resolve_to_themselves() {
    let r = ThemeRegistry::builtin();
    for id in ThemeId::ALL {
        assert_eq!(r.resolve(id.id()), Some(id));
    }
}

#[test]
fn aliases_resolve_into_the_same_variant_space() {
    let r = ThemeRegistry::builtin();
    assert_eq!(r.resolve("normal"), Some(ThemeId::NeonDark));
    assert_eq!(r.resolve("warning"), Some(ThemeId::Sunset));
    assert_eq!(r.resolve("default"), Some(ThemeId::Calm));
    assert_eq!(r.preset(ThemeId::Calm), &ThemeId::Calm.builtin_preset());
}

#[test]
fn unknown_names_are_rejected_silently() {
    let r = ThemeRegistry::builtin();
    assert_eq!(r.resolve("not_a_theme"), None);
    assert_eq!(r.resolve(""), None);
    assert_eq!(r.resolve("Calm"), None);
}

#[test]
fn aliases_are_listed_per_theme() {
    let r = ThemeRegistry::builtin();
    assert_eq!(r.aliases_of(ThemeId::Calm), vec!["default"]);
    assert!(r.aliases_of(ThemeId::Ocean).is_empty());
}

#[test]
fn overrides_replace_builtin_presets() {
    let mut preset = ThemeId::Critical.builtin_preset();
    preset.blob_count = 12;
    let overrides = BTreeMap::from([(ThemeId::Critical, preset)]);
    let r = ThemeRegistry::with_overrides(&overrides).unwrap();
    assert_eq!(r.preset(ThemeId::Critical).blob_count, 12);
    assert_eq!(r.preset(ThemeId::Calm).blob_count, 6);
}

#[test]
fn invalid_override_fails_construction() {
    let mut preset = ThemeId::Calm.builtin_preset();
    preset.blob_opacity = 1.5;
    let overrides = BTreeMap::from([(ThemeId::Calm, preset)]);
    let err = ThemeRegistry::with_overrides(&overrides).unwrap_err();
    assert!(err.to_string().contains("calm"));
}

#[test]
fn json_listing_contains_every_theme() {
    let v = ThemeRegistry::builtin().to_json();
    let themes = v["themes"].as_array().unwrap();
    assert_eq!(themes.len(), ThemeId::ALL.len());
    assert_eq!(themes[0]["id"], "calm");
    assert_eq!(themes[0]["preset"]["background"][0], "#0f172a");
    assert_eq!(themes[1]["aliases"][0], "normal");
}
