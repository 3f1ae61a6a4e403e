use type_tour::shapes::{
    self, PartialUser, ReadonlyUser, ReadonlyUser4, RequiredUser, User2, User2Key, User4,
    UserWithoutId, Username,
};
use type_tour::{FieldValue, KeyOf, TourError, get_property};

fn sample() -> User2 {
    User2::new(1, "John", "Doe", Some(30))
}

#[test]
fn test_pick_keeps_listed_fields() {
    let username = Username::from(&sample());
    assert_eq!(
        username,
        Username {
            name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    );
}

#[test]
fn test_omit_drops_listed_fields() {
    let without_id = UserWithoutId::from(&sample());
    assert_eq!(
        without_id,
        UserWithoutId {
            name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: Some(30),
        }
    );
}

#[test]
fn test_partial_allows_any_subset() {
    let empty = PartialUser::default();
    assert!(empty.is_empty());

    let only_name = PartialUser {
        name: Some("Jane".to_string()),
        ..PartialUser::default()
    };
    assert!(!only_name.is_empty());

    let merged = PartialUser::from(&sample()).merge(only_name);
    assert_eq!(merged.name.as_deref(), Some("Jane"));
    assert_eq!(merged.id, Some(1));
    assert_eq!(merged.age, Some(30));
}

#[test]
fn test_required_needs_every_field() {
    let required = RequiredUser::try_from(&sample()).unwrap();
    assert_eq!(required.age, 30);

    let without_age = User2::new(2, "Jane", "Roe", None);
    let err = RequiredUser::try_from(&without_age).unwrap_err();
    assert!(matches!(
        err,
        TourError::MissingField {
            shape: "RequiredUser",
            field: "age"
        }
    ));
}

#[test]
fn test_required_from_partial() {
    let partial = PartialUser {
        id: Some(3),
        name: Some("Ada".to_string()),
        last_name: None,
        age: Some(36),
    };
    let err = RequiredUser::try_from(partial.clone()).unwrap_err();
    assert_eq!(err.to_string(), "Missing field `last_name` while building RequiredUser");

    let complete = partial.merge(PartialUser {
        last_name: Some("Lovelace".to_string()),
        ..PartialUser::default()
    });
    let required = RequiredUser::try_from(complete).unwrap();
    assert_eq!(User2::from(required), User2::new(3, "Ada", "Lovelace", Some(36)));
}

#[test]
fn test_readonly_exposes_accessors() {
    let readonly = ReadonlyUser::from(sample());
    assert_eq!(*readonly.id(), 1);
    assert_eq!(readonly.name(), "John");
    assert_eq!(readonly.age(), &Some(30));

    let user4 = ReadonlyUser4::from(User4 {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    });
    assert_eq!(user4.first_name(), "John");
    assert_eq!(user4, ReadonlyUser4::new("John".to_string(), "Doe".to_string()));
}

#[test]
fn test_key_lookup_over_all_keys() {
    let user = sample();
    let lines: Vec<String> = shapes::entries(&user)
        .into_iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    assert_eq!(lines, vec!["id: 1", "name: John", "lastName: Doe", "age: 30"]);
    assert_eq!(User2::keys().len(), 4);
}

#[test]
fn test_key_lookup_of_absent_field() {
    let user = User2::new(2, "Jane", "Roe", None);
    let age = get_property(&user, User2Key::Age);
    assert!(age.is_absent());
    assert_eq!(age, FieldValue::Absent);
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = "email".parse::<User2Key>().unwrap_err();
    assert!(matches!(err, TourError::UnknownKey { shape: "User2", .. }));
}

#[test]
fn test_serde_uses_record_spelling() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["lastName"], "Doe");
}
