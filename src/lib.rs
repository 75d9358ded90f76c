pub mod error;
pub mod item;
pub mod parser;
pub mod validation;

pub use crate::error::CartError;
pub use crate::item::{Cart, CartItem};
pub use crate::parser::{calc_total, parse_line, CartParser, ContentSource, FsSource};
pub use crate::validation::{create_error, validate, ErrorType, ValidationError, SCHEMA};

use std::path::Path;

/// Parses the cart CSV at `path` from the local filesystem.
pub fn parse_cart(path: impl AsRef<Path>) -> Result<Cart, CartError> {
    CartParser::new().parse(path.as_ref())
}
