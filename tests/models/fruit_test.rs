use type_tour::{Fruit, FruitInterface};

#[test]
fn test_favorite_fruit_message() {
    let mango = Fruit::new("mango", true);
    assert_eq!(mango.favorite(), "mango is my favorite fruit");
}

#[test]
fn test_not_favorite_fruit_message() {
    let banana = Fruit::new("banana", false);
    assert_eq!(banana.favorite(), "banana is my NOT favorite fruit");
}

#[test]
fn test_message_follows_flag_only() {
    for is_favorite in [true, false] {
        let fruit = Fruit::new("kiwi", is_favorite);
        let message = fruit.favorite();
        assert_eq!(message.contains("NOT"), !fruit.is_favorite());
        assert!(message.starts_with(FruitInterface::name(&fruit)));
    }
}
