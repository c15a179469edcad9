use core::fmt;

use serde::{Deserialize, Serialize};

/// Что стоит за дверью.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Prize {
    Car,
    Goat,
}

impl Prize {
    pub fn is_car(self) -> bool {
        matches!(self, Prize::Car)
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Car => write!(f, "CAR!"),
            Prize::Goat => write!(f, "Goat"),
        }
    }
}
