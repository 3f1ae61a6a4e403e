use type_tour::navigation::{Address, Street};
use type_tour::with_default;

#[test]
fn test_absent_street_yields_none() {
    let address: Address = serde_json::from_str(r#"{ "age": 40 }"#).unwrap();
    assert!(address.street.is_none());
    assert_eq!(address.street_name(), None);
}

#[test]
fn test_nested_street_is_read() {
    let address = Address {
        street: Some(Street {
            name: "Elm".to_string(),
            number: 12,
        }),
        age: Some(0),
    };
    assert_eq!(address.street_name(), Some("Elm"));
    assert_eq!(address.street_number(), Some(12));
}

#[test]
fn test_age_defaults_only_when_absent() {
    assert_eq!(Address::default().age_or(18), 18);

    let newborn = Address {
        street: None,
        age: Some(0),
    };
    assert_eq!(newborn.age_or(18), 0);
}

#[test]
fn test_with_default_keeps_falsy_values() {
    assert_eq!(with_default(None::<u32>, 18), 18);
    assert_eq!(with_default(Some(0), 18), 0);
    assert!(!with_default(Some(false), true));
    assert_eq!(with_default(Some(""), "fallback"), "");
}
