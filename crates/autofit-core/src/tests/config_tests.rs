use super::*;

#[test]
fn defaults_match_the_widget_defaults() {
    let config = AutoFitConfig::default();
    assert_eq!(config.min_text_size, Sp(10.0));
    assert_eq!(config.max_text_size, Sp(96.0));
    assert_eq!(config.precision, 0.5);
    assert_eq!(config.constraint, FitConstraint::Width);
    assert_eq!(config.max_lines, None);
    assert!(config.validate().is_ok());
}

#[test]
fn text_sizes_scale_with_density() {
    let config = AutoFitConfig::default()
        .with_text_size_range(Sp(12.0), Sp(40.0))
        .with_density(Density::new(2.0, 1.5));

    assert_eq!(config.min_text_size_px(), 36.0);
    assert_eq!(config.max_text_size_px(), 120.0);

    let request = config.request("Hi", Size::new(10.0, 10.0)).unwrap();
    assert_eq!(request.min_size(), 36.0);
    assert_eq!(request.max_size(), 120.0);
}

#[test]
fn request_carries_constraint_and_line_limit() {
    let config = AutoFitConfig::default()
        .with_constraint(FitConstraint::Both)
        .with_max_lines(Some(3))
        .with_precision(0.25);
    let request = config.request("text", Size::new(1.0, 2.0)).unwrap();

    assert_eq!(request.constraint(), FitConstraint::Both);
    assert_eq!(request.max_lines(), Some(3));
    assert_eq!(request.precision(), 0.25);
}

#[test]
fn inverted_range_fails_validation() {
    let config = AutoFitConfig::default().with_text_size_range(Sp(30.0), Sp(20.0));
    assert_eq!(
        config.validate(),
        Err(ConfigurationError::MinExceedsMax { min: 30.0, max: 20.0 })
    );
}

#[test]
fn zero_density_fails_validation() {
    let config = AutoFitConfig::default().with_density(Density::new(0.0, 1.0));
    assert!(matches!(
        config.validate(),
        Err(ConfigurationError::NonPositiveSize { .. })
    ));
}
