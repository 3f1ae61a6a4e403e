use type_tour::{Employee, Identified, Person, Register};

#[test]
fn test_person_register_message() {
    let person = Person::new(1, "Jack");
    assert_eq!(person.register(), "Jack is now registered");
}

#[test]
fn test_employee_register_message() {
    let employee1 = Employee::new(1, "James", "Developer");
    assert_eq!(employee1.register(), "James is now registered as an employee");
}

#[test]
fn test_employee_message_replaces_person_message() {
    let employee = Employee::new(2, "John", "Designer");
    let person = employee.as_person();

    let employee_message = employee.register();
    let person_message = person.register();

    assert_ne!(employee_message, person_message);
    assert!(employee_message.contains("employee"));
    // Replaced, not appended to
    assert_eq!(employee_message.matches("is now registered").count(), 1);
}

#[test]
fn test_register_through_the_contract() {
    let registrants: Vec<Box<dyn Register>> = vec![
        Box::new(Person::new(1, "Jack")),
        Box::new(Employee::new(3, "James", "Developer")),
    ];

    let messages: Vec<String> = registrants.iter().map(|r| r.register()).collect();
    assert_eq!(
        messages,
        vec![
            "Jack is now registered".to_string(),
            "James is now registered as an employee".to_string(),
        ]
    );

    let ids: Vec<u32> = registrants.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_employee_keeps_identity_fields() {
    let employee = Employee::new(7, "Ada", "Engineer");
    assert_eq!(Identified::id(&employee), 7);
    assert_eq!(Identified::name(&employee), "Ada");
    assert_eq!(employee.position, "Engineer");
}
