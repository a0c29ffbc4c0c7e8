use loom::styling::error::DefinitionError;
use loom::styling::scale::Scale;

#[test]
fn test_lookup() {
    let scale = Scale::define("fontSizes", &[("16", "1rem"), ("18", "1.125rem")]).unwrap();
    assert_eq!(scale.get("16").unwrap(), "1rem");
    assert_eq!(scale.get("18").unwrap(), "1.125rem");
    assert_eq!(scale.len(), 2);
}

#[test]
fn test_unknown_key_is_a_definition_error() {
    let scale = Scale::define("spaces", &[("0", "0px"), ("16", "16px")]).unwrap();
    assert_eq!(
        scale.get("24"),
        Err(DefinitionError::UnknownScaleKey {
            scale: "spaces".to_string(),
            key: "24".to_string(),
        })
    );
}

#[test]
fn test_duplicate_key_rejected() {
    let result = Scale::define("radii", &[("1", "2px"), ("1", "4px")]);
    assert_eq!(
        result,
        Err(DefinitionError::DuplicateScaleKey {
            scale: "radii".to_string(),
            key: "1".to_string(),
        })
    );
}

#[test]
fn test_order_preserved() {
    let scale = Scale::define("spaces", &[("0", "0px"), ("8", "8px"), ("4", "4px")]).unwrap();
    let keys: Vec<&str> = scale.keys().collect();
    assert_eq!(keys, vec!["0", "8", "4"]);
}
