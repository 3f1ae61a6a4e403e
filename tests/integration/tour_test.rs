use type_tour::TourConfig;

use crate::utils::tour_lines;

#[test]
fn test_tour_output_in_order() {
    let lines = tour_lines(&TourConfig::default()).unwrap();
    assert_eq!(
        lines,
        vec![
            "James is now registered as an employee",
            "15",
            "name: Jack",
            "age: 32",
            "undefined",
            "18",
        ]
    );
}

#[test]
fn test_key_lines_can_be_disabled() {
    let config = TourConfig {
        print_keys: false,
        ..TourConfig::default()
    };
    let lines = tour_lines(&config).unwrap();
    assert!(!lines.iter().any(|line| line.starts_with("name: ")));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_configured_default_age_is_printed() {
    let config = TourConfig {
        default_age: 21,
        ..TourConfig::default()
    };
    let lines = tour_lines(&config).unwrap();
    assert_eq!(lines.last().map(String::as_str), Some("21"));
}
