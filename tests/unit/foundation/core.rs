use super::*;

#[test]
fn default_viewport_is_256_square() {
    let vp = Viewport::default();
    assert_eq!(vp, Viewport::DEFAULT);
    assert_eq!((vp.x, vp.y, vp.width, vp.height), (0.0, 0.0, 256.0, 256.0));
}

#[test]
fn weight_names_round_trip() {
    for weight in Weight::ALL {
        assert_eq!(weight.as_str().parse::<Weight>().unwrap(), weight);
    }
}

#[test]
fn unknown_weight_name_is_rejected() {
    assert!("extra-bold".parse::<Weight>().is_err());
}

#[test]
fn square_size_helper() {
    let size = IconSize::square(48);
    assert_eq!(size.width, 48);
    assert_eq!(size.height, 48);
}
