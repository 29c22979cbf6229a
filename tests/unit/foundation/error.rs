use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FieldError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        FieldError::resource_load("x")
            .to_string()
            .contains("resource load error:")
    );
    assert!(
        FieldError::numeric_domain("x")
            .to_string()
            .contains("numeric domain error:")
    );
    assert!(
        FieldError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
