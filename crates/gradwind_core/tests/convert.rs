//! End-to-end conversion tests through the public API

use gradwind_core::{
    bucket_direction, convert, generate_class_string, generate_css_text, parse, split_arguments,
    to_class_string, ClassEmitter, ColorMapper, ConverterConfig, Direction, Family, GradientError,
    GradientKind, RadialShape, SAMPLE_GRADIENTS,
};
use pretty_assertions::assert_eq;

#[test]
fn test_splitter_keeps_nested_commas() {
    assert_eq!(split_arguments("a(b,c), d, e"), vec!["a(b,c)", "d", "e"]);
}

#[test]
fn test_bucket_direction_is_periodic() {
    for step in 0..72 {
        let angle = step as f32 * 5.0 + 1.0;
        for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
            assert_eq!(
                bucket_direction(angle),
                bucket_direction(angle + 360.0 * k),
                "angle {angle}, k {k}"
            );
        }
    }
}

#[test]
fn test_bucket_boundaries_belong_to_higher_range() {
    let boundaries = [22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5, 337.5];
    let expected = [
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
        Direction::Top,
    ];
    for (angle, direction) in boundaries.into_iter().zip(expected) {
        assert_eq!(bucket_direction(angle), direction, "{angle}");
    }
    assert_eq!(bucket_direction(22.5).class_suffix(), "to-tr");
}

#[test]
fn test_linear_two_stops() {
    let gradient = parse("linear-gradient(45deg, #ff6b6b, #4ecdc4)").unwrap();
    assert_eq!(gradient.kind, GradientKind::Linear);
    assert_eq!(gradient.angle, Some(45.0));
    let colors: Vec<&str> = gradient.stops.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["#ff6b6b", "#4ecdc4"]);

    let classes = to_class_string(&gradient);
    assert!(classes.starts_with("bg-gradient-to-tr from-"), "{classes}");
    assert!(classes.contains(" to-"));
    assert!(!classes.contains("via-"));
}

#[test]
fn test_radial_is_approximated() {
    let gradient = parse("radial-gradient(circle, #667eea, #764ba2)").unwrap();
    assert_eq!(gradient.kind, GradientKind::Radial);
    assert_eq!(gradient.shape, Some(RadialShape::Circle));

    let classes = to_class_string(&gradient);
    assert!(classes.contains("Radial gradient converted to linear"));
    assert!(classes.contains("from-blue-400"));
    assert!(classes.contains("to-purple-600"));
}

#[test]
fn test_unknown_function_is_rejected() {
    assert!(matches!(
        parse("not-a-gradient(1,2,3)"),
        Err(GradientError::InvalidGradientKind(_))
    ));
}

#[test]
fn test_true_grays_stay_neutral() {
    let mapper = ColorMapper::default();
    for v in 0..=255u8 {
        let hex = format!("#{v:02x}{v:02x}{v:02x}");
        let mapped = mapper.map_text(&hex);
        assert!(
            matches!(mapped.family, Family::Gray | Family::White),
            "{hex} mapped to {mapped}"
        );
    }
}

#[test]
fn test_css_text_with_half_opacity() {
    let css = generate_css_text(&["#ff0000", "#00ff00"], 90.0, 50.0);
    assert!(css.contains("rgba(255, 0, 0, 0.50)"), "{css}");
    assert!(css.contains("rgba(0, 255, 0, 0.50)"), "{css}");
    assert!(css.contains("90deg"), "{css}");
}

#[test]
fn test_extra_stops_are_truncated_to_three_slots() {
    let classes = to_class_string(
        &parse("linear-gradient(90deg, red, orange, yellow, green, blue)").unwrap(),
    );
    assert_eq!(classes, "bg-gradient-to-r from-red-500 via-orange-500 to-blue-500");
}

#[test]
fn test_both_directions_agree() {
    let colors = ["#0ea5e9", "#f43f5e", "#84cc16"];
    for angle in [0.0, 45.0, 100.0, 200.0, 300.0] {
        let css = format!("linear-gradient({angle}deg, {})", colors.join(", "));
        assert_eq!(
            to_class_string(&parse(&css).unwrap()),
            generate_class_string(&colors, angle),
            "{css}"
        );
    }
}

#[test]
fn test_sample_gradients_convert() {
    let expected = [
        "bg-gradient-to-tr from-red-400 to-teal-400",
        "bg-gradient-to-br from-blue-400 via-purple-600 to-orange-400",
        "bg-gradient-to-r from-red-400 via-teal-400 to-sky-400",
        "bg-gradient-to-br from-blue-400 to-purple-600",
        "bg-gradient-to-r from-red-500/80 to-teal-400/80",
    ];
    for ((label, css), classes) in SAMPLE_GRADIENTS.iter().zip(expected) {
        let conversion = convert(css).unwrap();
        assert!(conversion.classes.starts_with(classes), "{label}: {}", conversion.classes);
        assert_eq!(
            conversion.warning.is_some(),
            conversion.gradient.kind != GradientKind::Linear,
            "{label}"
        );
    }
}

#[test]
fn test_conversion_serializes_to_json() {
    let conversion = convert("radial-gradient(ellipse at 25% 75%, rgba(0,0,0,.5) 10%, #fff)").unwrap();
    let json = serde_json::to_value(&conversion).unwrap();

    assert_eq!(json["gradient"]["kind"], "radial");
    assert_eq!(json["gradient"]["shape"], "ellipse");
    assert_eq!(json["gradient"]["position"], "25% 75%");
    assert_eq!(json["gradient"]["stops"][0]["color"]["notation"], "rgb");
    assert_eq!(json["gradient"]["stops"][0]["position"]["unit"], "%");
    assert!(json["gradient"].get("angle").is_none());
    assert!(json["warning"].is_string());
}

#[test]
fn test_custom_config_from_toml() {
    let config = ConverterConfig::from_toml_str(
        r#"
        [weights]
        floor = 900
        tiers = [{ above = 0, weight = 100 }]
        "#,
    )
    .unwrap();
    let emitter = ClassEmitter::new(config);
    assert_eq!(
        emitter.generate(&["#ff0000", "#0000ff"], 90.0),
        "bg-gradient-to-r from-red-100 to-blue-100"
    );
}
