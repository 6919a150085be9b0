//! The immutable phone-number value produced by parsing, and the staged
//! builder it is constructed through.

mod builder;
mod phone_number;

pub use builder::{IncompleteNumberError, PhoneNumberBuilder};
pub use phone_number::{CountryCodeSource, PhoneNumber};
