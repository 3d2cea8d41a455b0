use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome of validating one form field.
///
/// Serializes as `true` when valid and as the bare message otherwise, which is the shape form
/// components expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(&'static str),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match *self {
            Validation::Valid => None,
            Validation::Invalid(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<(), &'static str> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid(message) => Err(message),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid => f.write_str("true"),
            Validation::Invalid(message) => f.write_str(message),
        }
    }
}

impl Serialize for Validation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Validation::Valid => serializer.serialize_bool(true),
            Validation::Invalid(message) => serializer.serialize_str(message),
        }
    }
}
