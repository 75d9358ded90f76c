use crate::error::CartError;
use crate::validation::SCHEMA;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// One purchasable line of a cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Parsed cart: every item in file order plus the aggregated total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Price times quantity, `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

impl TryFrom<&[&str]> for CartItem {
    type Error = CartError;

    fn try_from(fields: &[&str]) -> Result<Self, Self::Error> {
        let [name, price, quantity] = fields else {
            return Err(CartError::Parse {
                message: format!(
                    "Expected row to have {} cells but received {}",
                    SCHEMA.len(),
                    fields.len()
                ),
            });
        };

        let to_parse_error = |message| CartError::Parse { message };

        Ok(CartItem::new(
            parse_name(name).map_err(to_parse_error)?,
            parse_price(price).map_err(to_parse_error)?,
            parse_quantity(quantity).map_err(to_parse_error)?,
        ))
    }
}

// Cell parsers are shared by validation and parsing so both agree on what a
// valid cell is. Errors carry the message reported to the user.

pub(crate) fn parse_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Expected cell to be a nonempty string".to_string());
    }

    Ok(name.to_string())
}

pub(crate) fn parse_price(raw: &str) -> Result<Decimal, String> {
    match parse_number(raw) {
        Some(price) if price > Decimal::ZERO => Ok(price),
        _ => Err(format!(
            "Expected cell to be a positive number but received \"{}\"",
            raw
        )),
    }
}

pub(crate) fn parse_quantity(raw: &str) -> Result<u32, String> {
    let quantity = parse_number(raw)
        .filter(|q| *q > Decimal::ZERO && q.fract().is_zero())
        .and_then(|q| q.to_u32());

    quantity.ok_or_else(|| {
        format!(
            "Expected cell to be a positive integer but received \"{}\"",
            raw
        )
    })
}

fn parse_number(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    // Decimal parsing skips `_` separators
    if raw.contains('_') {
        return None;
    }

    Decimal::from_str_exact(raw).ok()
}
