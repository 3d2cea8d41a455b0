//! Form field validators.
//!
//! Each validator takes the raw field value (absent when the field was never filled in) and
//! returns a [`Validation`]: either success or the message to show next to the field.

pub mod fields;
pub mod messages;
pub mod validation;

pub use fields::{is_email, validate_empty_and_email, validate_empty_or_length3, MIN_LENGTH};
pub use validation::Validation;
