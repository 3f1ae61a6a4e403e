use type_tour::functions::{
    ADD_PARAMS, AddParams, MULTIPLY, MathFunction, Parameters, ReturnType, UserReturnType,
    get_user, user_return_type, write_log,
};
use type_tour::{User, add, add2, apply, multiply, subtract};

use crate::utils::random_pairs;

#[test]
fn test_arithmetic_matches_native_operators() {
    for (a, b) in random_pairs(100) {
        assert_eq!(add(a, b), a + b);
        assert_eq!(subtract(a, b), a - b);
        assert_eq!(multiply(a, b), a * b);
        assert_eq!(add2(a, b), a + b);
    }
}

#[test]
fn test_math_function_contract() {
    let operations: [MathFunction; 3] = [add, subtract, MULTIPLY];
    let results: Vec<f64> = operations.iter().map(|op| op(6.0, 3.0)).collect();
    assert_eq!(results, vec![9.0, 3.0, 18.0]);
}

#[test]
fn test_add2_spread_from_stored_params() {
    let add_params: AddParams = ADD_PARAMS;
    assert_eq!(add_params, (5.0, 10.0));
    assert_eq!(apply(add2 as fn(f64, f64) -> f64, add_params), 15.0);
}

#[test]
fn test_extracted_types() {
    let params: Parameters<fn(u32, String) -> bool> = (1, "a".to_string());
    assert_eq!(params.0, 1);

    let flag: ReturnType<fn(u32, String) -> bool> = true;
    assert!(flag);

    let user: UserReturnType = get_user();
    assert_eq!(user, User::new("Jane", 28));
    assert_eq!(user_return_type(), User::new("Bob", 25));
}

#[test]
fn test_log_lines_accept_text_and_numbers() {
    let mut out = Vec::new();
    write_log(&mut out, "message").unwrap();
    write_log(&mut out, 32).unwrap();
    write_log(&mut out, 1.5).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "message\n32\n1.5\n");
}
