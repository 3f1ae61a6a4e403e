//! Fruit record

use serde::{Deserialize, Serialize};

use crate::models::traits::FruitInterface;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    pub name: String,
    pub is_favorite: bool,
}

impl Fruit {
    #[must_use]
    pub fn new(name: impl Into<String>, is_favorite: bool) -> Self {
        Self {
            name: name.into(),
            is_favorite,
        }
    }
}

impl FruitInterface for Fruit {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn favorite(&self) -> String {
        if self.is_favorite {
            format!("{} is my favorite fruit", self.name)
        } else {
            format!("{} is my NOT favorite fruit", self.name)
        }
    }
}
