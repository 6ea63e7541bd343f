use super::*;

#[test]
fn monospaced_width_scales_with_font_size() {
    let measurer = MonospacedTextMeasurer::new(0.5, 1.5);
    let small = measurer.measure("Hello", 10.0).unwrap();
    let large = measurer.measure("Hello", 20.0).unwrap();

    assert_eq!(small.width, 25.0);
    assert_eq!(large.width, 50.0);
    assert_eq!(small.line_count, 1);
    assert_eq!(large.height, 30.0);
}

#[test]
fn monospaced_counts_hard_line_breaks() {
    let measurer = MonospacedTextMeasurer::new(0.5, 1.0);
    let metrics = measurer.measure("ab\nabcd\n", 10.0).unwrap();

    assert_eq!(metrics.line_count, 3);
    assert_eq!(metrics.width, 20.0);
    assert_eq!(metrics.height, 30.0);
    assert_eq!(metrics.line_height, 10.0);
}

#[test]
fn empty_text_still_occupies_one_line() {
    let metrics = MonospacedTextMeasurer::default()
        .measure("", 10.0)
        .unwrap();
    assert_eq!(metrics.width, 0.0);
    assert_eq!(metrics.line_count, 1);
}

#[test]
fn non_positive_font_size_is_rejected() {
    let measurer = MonospacedTextMeasurer::default();
    assert_eq!(
        measurer.measure("Hi", 0.0),
        Err(MeasurementError::InvalidFontSize(0.0))
    );
    assert_eq!(
        measurer.measure("Hi", -3.0),
        Err(MeasurementError::InvalidFontSize(-3.0))
    );
    assert!(measurer.measure("Hi", f32::NAN).is_err());
}

#[test]
fn wrapped_measurement_breaks_at_wrap_width() {
    let measurer = MonospacedTextMeasurer::new(1.0, 1.0);
    // "aaa bbb" is 7 wide at size 1; a wrap width of 5 forces two lines.
    let metrics = measurer.measure_wrapped("aaa bbb", 1.0, 5.0).unwrap();

    assert_eq!(metrics.line_count, 2);
    assert_eq!(metrics.width, 3.0);
    assert_eq!(metrics.height, 2.0);
}

#[test]
fn wrapped_measurement_rejects_invalid_size_for_empty_text() {
    let measurer = MonospacedTextMeasurer::default();
    assert!(measurer.measure_wrapped("", 0.0, 100.0).is_err());
}

#[test]
fn smart_pointers_forward_to_inner_measurer() {
    let measurer = Rc::new(MonospacedTextMeasurer::default());
    let shared: Rc<dyn TextMeasurer> = measurer.clone();
    assert_eq!(
        shared.measure("abc", 10.0).unwrap(),
        measurer.measure("abc", 10.0).unwrap()
    );

    let boxed: Box<dyn TextMeasurer> = Box::new(MonospacedTextMeasurer::new(0.5, 1.0));
    assert_eq!(boxed.measure("abc", 10.0).unwrap().width, 15.0);
}
