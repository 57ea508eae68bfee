//! Truthiness convention shared by every guard.
//!
//! A guard predicate produces any [`Truthy`] value, which is reduced to a
//! [`Truth`]. Only `Truth::True` passes; `False` and `Absent` both fail.
//!
//! | value                         | truth    |
//! |-------------------------------|----------|
//! | `true` / `false`              | True / False |
//! | `None`                        | Absent   |
//! | `Some(x)`                     | truth of `x` |
//! | `Err(_)` / `Ok(x)`            | False / truth of `x` |
//! | JSON `null`                   | Absent   |
//! | JSON `false`                  | False    |
//! | any other JSON (`0`, `""`, `[]`, `{}` included) | True |

use serde::{Deserialize, Serialize};

/// Tri-state outcome of evaluating a guard predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truth {
    True,
    False,
    /// Nothing to evaluate; treated as false
    Absent,
}

impl Truth {
    /// Whether this truth lets a `when_truthy` guard pass
    pub fn holds(self) -> bool {
        matches!(self, Truth::True)
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value { Truth::True } else { Truth::False }
    }
}

/// Values a guard predicate may return.
pub trait Truthy {
    fn truth(&self) -> Truth;

    fn is_truthy(&self) -> bool {
        self.truth().holds()
    }
}

impl Truthy for Truth {
    fn truth(&self) -> Truth {
        *self
    }
}

impl Truthy for bool {
    fn truth(&self) -> Truth {
        Truth::from(*self)
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn truth(&self) -> Truth {
        match self {
            Some(inner) => inner.truth(),
            None => Truth::Absent,
        }
    }
}

impl<T: Truthy, E> Truthy for Result<T, E> {
    fn truth(&self) -> Truth {
        match self {
            Ok(inner) => inner.truth(),
            Err(_) => Truth::False,
        }
    }
}

impl Truthy for serde_json::Value {
    fn truth(&self) -> Truth {
        match self {
            serde_json::Value::Null => Truth::Absent,
            serde_json::Value::Bool(false) => Truth::False,
            _ => Truth::True,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truth(&self) -> Truth {
        (**self).truth()
    }
}
