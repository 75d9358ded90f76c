use crate::error::CartError;
use crate::item::{Cart, CartItem};
use crate::validation::{read_rows, validate, ValidationError};

use rust_decimal::Decimal;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Provides the raw text of a cart file.
pub trait ContentSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads cart files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> ContentSource for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

pub struct CartParser<S = FsSource> {
    source: S,
}

impl CartParser {
    pub fn new() -> Self {
        Self { source: FsSource }
    }
}

impl Default for CartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ContentSource> CartParser<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Reads the file at `path` and checks it without parsing.
    pub fn validate_file(&self, path: &Path) -> Result<Vec<ValidationError>, CartError> {
        let content = self.read(path)?;
        Ok(validate(&content))
    }

    /// Reads, validates and parses the cart at `path`.
    ///
    /// Any validation problem aborts the parse with
    /// [`CartError::Validation`] carrying every error found.
    pub fn parse(&self, path: &Path) -> Result<Cart, CartError> {
        let content = self.read(path)?;

        let errors = validate(&content);
        if !errors.is_empty() {
            for error in &errors {
                warn!(path = %path.display(), "{}", error);
            }
            return Err(CartError::Validation(errors));
        }

        let rows = read_rows(&content).map_err(|e| CartError::Parse {
            message: e.to_string(),
        })?;

        // First row is the header
        let items = rows
            .iter()
            .skip(1)
            .map(|row| CartItem::try_from(&row.cells()[..]))
            .collect::<Result<Vec<_>, _>>()?;

        let total = calc_total(&items)?;
        debug!(path = %path.display(), items = items.len(), %total, "Parsed cart");

        Ok(Cart { items, total })
    }

    fn read(&self, path: &Path) -> Result<String, CartError> {
        self.source
            .read_to_string(path)
            .map_err(|source| CartError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Parses one data line, e.g. `Condimentum aliquet,13.90,1`.
///
/// Expects a line that already passed [`validate`].
pub fn parse_line(line: &str) -> Result<CartItem, CartError> {
    let fields: Vec<&str> = line.split(',').collect();
    CartItem::try_from(&fields[..])
}

pub fn calc_total(items: &[CartItem]) -> Result<Decimal, CartError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        item.subtotal()
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or(CartError::TotalOverflow)
    })
}
