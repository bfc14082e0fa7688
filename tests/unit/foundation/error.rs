use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IkonaError::markup("x")
            .to_string()
            .contains("markup error:")
    );
    assert!(
        IkonaError::allocation("x")
            .to_string()
            .contains("allocation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IkonaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
