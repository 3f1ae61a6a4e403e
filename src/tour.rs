//! The tour itself
//!
//! Walks every section in order. Declarations that print nothing are logged
//! at debug level; the lines a reader would see on the console are written to
//! `out`.

use std::io::Write;

use itertools::Itertools;
use log::{debug, info};

use crate::config::TourConfig;
use crate::enums::{Color, Color2, Color3, ThemeSwitch};
use crate::error::Result;
use crate::functions::{self, ADD_PARAMS, MULTIPLY, apply, write_log};
use crate::generics::get_id;
use crate::models::user::{self, UserInterface};
use crate::models::{Employee, Fruit, FruitInterface, Person, Register};
use crate::navigation::Address;
use crate::shapes::{
    self, FieldValue, KeyOf, PartialUser, ReadonlyUser, ReadonlyUser4, RequiredUser, User2,
    User4, UserWithoutId, Username,
};
use crate::values::{self, BasicValues};

/// Run every section of the tour, writing console lines to `out`
pub fn run<W: Write>(config: &TourConfig, out: &mut W) -> Result<()> {
    info!("Starting the tour");

    basic_values();
    objects();
    arithmetic();
    classes(out)?;
    generics();
    enumerations();
    shape_utilities(out)?;
    key_lookup(config, out)?;
    navigation(config, out)?;

    info!("Tour finished");
    Ok(())
}

fn basic_values() {
    let basics = BasicValues::default();
    debug!(
        "number={} string={} boolean={} any={}",
        basics.number, basics.string, basics.boolean, basics.any
    );
    debug!(
        "arrays: [{}] [{}] {:?} {:?}",
        basics.array_of_numbers.iter().join(", "),
        basics.array_of_strings.iter().join(", "),
        basics.array_of_any,
        basics.array_of_objects
    );
    debug!("tuple={:?} tuple_array={:?}", basics.tuple, basics.tuple_array);
    debug!("union={}", basics.union);

    let customer_id = serde_json::json!("123");
    match values::assert_number(&customer_id) {
        Ok(number) => debug!("customer id as number: {number}"),
        Err(err) => debug!("customer id is not a number: {err}"),
    }
}

fn objects() {
    let user = user::user();
    let users = user::users();
    debug!("user={user:?}");
    debug!("users: {}", users.iter().map(|u| &u.name).join(", "));

    let mut user1 = UserInterface::new(1, "John");
    user1.age = Some(47);
    debug!("user1 id={} age={:?}", user1.id(), user1.age);
}

fn arithmetic() {
    debug!(
        "add={} subtract={} multiply={}",
        functions::add(1.0, 2.0),
        functions::subtract(5.0, 3.0),
        MULTIPLY(2.0, 3.0)
    );
}

fn classes<W: Write>(out: &mut W) -> Result<()> {
    let person1 = Person::new(1, "Jack");
    let person2 = Person::new(2, "John");
    debug!("{} / {}", person1.register(), person2.register());

    let employee1 = Employee::new(1, "James", "Developer");
    write_log(out, employee1.register())?;

    let banana = Fruit::new("banana", false);
    let mango = Fruit::new("mango", true);
    debug!("{} / {}", banana.favorite(), mango.favorite());
    Ok(())
}

fn generics() {
    let number_id = get_id::<u32>(1);
    let string_id = get_id::<&str>("1");
    debug!("number_id={number_id} string_id={string_id}");
}

fn enumerations() {
    let color = Color::Blue;
    debug!("color={color} name={:?}", Color::name_of(color.value()));
    debug!("color2={} color3={}", Color2::Blue, Color3::Blue);
    debug!("theme={}", ThemeSwitch::default());
}

fn shape_utilities<W: Write>(out: &mut W) -> Result<()> {
    debug!("products={:?}", shapes::products());

    let user_return_type = functions::user_return_type();
    debug!("get_user={:?} return type value={user_return_type:?}", functions::get_user());

    let sum = apply(functions::add2 as fn(f64, f64) -> f64, ADD_PARAMS);
    write_log(out, sum)?;

    let user2 = User2::new(1, "John", "Doe", Some(30));
    let username = Username::from(&user2);
    let without_id = UserWithoutId::from(&user2);
    let partial = PartialUser::from(&user2);
    let required = RequiredUser::try_from(&user2)?;
    let readonly = ReadonlyUser::from(user2);
    debug!("pick={username:?} omit={without_id:?}");
    debug!("partial={partial:?} required={required:?} readonly={readonly:?}");

    let user4 = ReadonlyUser4::from(User4 {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    });
    debug!("user4={} {}", user4.first_name(), user4.last_name());
    Ok(())
}

fn key_lookup<W: Write>(config: &TourConfig, out: &mut W) -> Result<()> {
    if !config.print_keys {
        debug!("Key lookup output disabled");
        return Ok(());
    }

    let user = user::user();
    for (key, value) in shapes::entries(&user) {
        writeln!(out, "{key}: {value}")?;
    }
    debug!("{} keys printed", <user::User as KeyOf>::keys().len());
    Ok(())
}

fn navigation<W: Write>(config: &TourConfig, out: &mut W) -> Result<()> {
    let address = Address::default();
    writeln!(out, "{}", FieldValue::from(address.street_name()))?;
    writeln!(out, "{}", address.age_or(config.default_age))?;
    Ok(())
}
