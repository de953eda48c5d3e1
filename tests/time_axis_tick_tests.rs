use approx::assert_relative_eq;
use axis_plan::TickFormatError;
use axis_plan::api::{AxisOrientation, AxisSpec, ScaleKind, ScaleSpec, resolve_axis};
use axis_plan::core::{AxisDimension, DomainValue};
use chrono::{DateTime, TimeZone, Utc};

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid time")
}

fn week_scale() -> ScaleSpec {
    ScaleSpec::time(
        AxisDimension::X,
        (
            DomainValue::Time(utc(2024, 1, 1, 0)),
            DomainValue::Time(utc(2024, 1, 8, 0)),
        ),
        (0.0, 700.0),
    )
}

#[test]
fn day_ticks_align_to_midnight() {
    let axis = AxisSpec::new(AxisOrientation::Bottom).with_tick_total(7);
    let resolved = resolve_axis(&axis, &week_scale()).expect("resolve");

    assert_eq!(resolved.labels(), vec!["Jan 02", "Jan 04", "Jan 06", "Jan 08"]);
    let pixels = resolved.pixel_positions();
    for (pixel, expected) in pixels.iter().zip([100.0, 300.0, 500.0, 700.0]) {
        assert_relative_eq!(*pixel, expected, epsilon = 1e-6);
    }
}

#[test]
fn hour_ticks_use_clock_labels() {
    let scale = ScaleSpec::time(
        AxisDimension::X,
        (
            DomainValue::Time(utc(2024, 1, 1, 0)),
            DomainValue::Time(utc(2024, 1, 1, 12)),
        ),
        (0.0, 480.0),
    );
    let axis = AxisSpec::new(AxisOrientation::Bottom).with_tick_total(5);
    let resolved = resolve_axis(&axis, &scale).expect("resolve");

    assert_eq!(
        resolved.labels(),
        vec!["00:00", "03:00", "06:00", "09:00", "12:00"]
    );
}

#[test]
fn injected_date_formatter_replaces_default_labels() {
    let axis = AxisSpec::new(AxisOrientation::Bottom)
        .with_tick_total(7)
        .with_tick_label_angle(-30.0)
        .with_tick_format(|value| match value {
            DomainValue::Time(time) => Ok(time.format("%m/%d/%Y").to_string()),
            other => Err(TickFormatError::new(format!("not a date: {other}"))),
        });
    let resolved = resolve_axis(&axis, &week_scale()).expect("resolve");

    assert_eq!(resolved.labels()[0], "01/02/2024");
    assert_eq!(resolved.label_placement.angle_degrees, -30.0);
}

#[test]
fn numeric_epoch_millis_work_as_time_domain() {
    let start = utc(2024, 1, 1, 0).timestamp_millis() as f64;
    let end = utc(2024, 1, 8, 0).timestamp_millis() as f64;
    let numeric = ScaleSpec::new(
        ScaleKind::Time,
        AxisDimension::X,
        vec![DomainValue::Number(start), DomainValue::Number(end)],
        (0.0, 700.0),
    );
    let axis = AxisSpec::new(AxisOrientation::Bottom).with_tick_total(7);

    let from_numbers = resolve_axis(&axis, &numeric).expect("numbers");
    let from_times = resolve_axis(&axis, &week_scale()).expect("times");
    assert_eq!(from_numbers, from_times);
}

#[test]
fn fitted_time_scale_spans_earliest_to_latest() {
    let samples = [utc(2024, 6, 1, 0), utc(2023, 1, 1, 0), utc(2024, 12, 31, 0)];
    let scale = ScaleSpec::time_from_values(AxisDimension::X, &samples, (0.0, 600.0));
    assert_eq!(scale.domain.first(), Some(&DomainValue::Time(utc(2023, 1, 1, 0))));

    let axis = AxisSpec::new(AxisOrientation::Bottom).with_tick_total(4);
    let resolved = resolve_axis(&axis, &scale).expect("resolve");
    assert!(!resolved.ticks.is_empty());
    assert!(resolved.ticks.len() <= 4);
}

#[test]
fn category_in_time_domain_is_invalid() {
    let scale = ScaleSpec::new(
        ScaleKind::Time,
        AxisDimension::X,
        vec![DomainValue::from("monday")],
        (0.0, 100.0),
    );
    assert!(resolve_axis(&AxisSpec::default(), &scale).is_err());
}

#[test]
fn empty_time_sample_set_is_invalid() {
    let scale = ScaleSpec::time_from_values(AxisDimension::X, &[], (0.0, 100.0));
    assert!(resolve_axis(&AxisSpec::default(), &scale).is_err());
}
