use crate::item::{parse_name, parse_price, parse_quantity};

use csv::{ReaderBuilder, Terminator};
use serde::Serialize;
use std::fmt;

/// Expected header columns, in order.
pub const SCHEMA: [&str; 3] = ["Product name", "Price", "Quantity"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Header,
    Row,
    Cell,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorType::Header => "header",
            ErrorType::Row => "row",
            ErrorType::Cell => "cell",
        };
        f.write_str(name)
    }
}

/// A problem found in cart content.
///
/// `row` is the 0-based line index within the content (the header is row 0).
/// `column` is the 0-based cell index, `None` for row-level problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub row: usize,
    pub column: Option<usize>,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(
                f,
                "row {}, column {}: [{}] {}",
                self.row, column, self.kind, self.message
            ),
            None => write!(f, "row {}: [{}] {}", self.row, self.kind, self.message),
        }
    }
}

pub fn create_error(
    kind: ErrorType,
    row: usize,
    column: Option<usize>,
    message: impl Into<String>,
) -> ValidationError {
    ValidationError {
        kind,
        row,
        column,
        message: message.into(),
    }
}

/// A non-empty line of content split on commas.
#[derive(Debug)]
pub(crate) struct Row {
    pub index: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn cells(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

/// Splits content into rows on `\n`, dropping the `\r` of a CRLF ending.
/// Quoting is disabled so every comma separates cells, and blank lines are
/// skipped.
pub(crate) fn read_rows(content: &str) -> Result<Vec<Row>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let index = record
            .position()
            .map_or(rows.len(), |pos| pos.line().saturating_sub(1) as usize);

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if let Some(last) = fields.last_mut() {
            if last.ends_with('\r') {
                last.pop();
            }
        }

        rows.push(Row { index, fields });
    }

    Ok(rows)
}

/// Checks cart content and returns every problem found, header first and then
/// rows in line order. Empty when the content can be parsed.
pub fn validate(content: &str) -> Vec<ValidationError> {
    let rows = match read_rows(content) {
        Ok(rows) => rows,
        Err(e) => {
            let row = e.position().map_or(0, |pos| pos.line().saturating_sub(1) as usize);
            return vec![create_error(ErrorType::Row, row, None, e.to_string())];
        }
    };

    let mut errors = Vec::new();
    let mut rows = rows.iter();

    match rows.next() {
        Some(header) => {
            errors.extend(validate_header(header));
        }
        None => {
            errors.push(create_error(
                ErrorType::Header,
                0,
                Some(0),
                format!("Expected header \"{}\" but content is empty", SCHEMA.join(",")),
            ));
        }
    }

    for row in rows {
        validate_row(row, &mut errors);
    }

    errors
}

fn validate_header(header: &Row) -> Option<ValidationError> {
    let width = header.fields.len().max(SCHEMA.len());

    (0..width).find_map(|column| {
        let expected = SCHEMA.get(column).copied();
        let actual = header.fields.get(column).map(String::as_str);

        let message = match (expected, actual) {
            (Some(expected), Some(actual)) if expected == actual => return None,
            (Some(expected), Some(actual)) => format!(
                "Expected header to be named \"{}\" but received \"{}\"",
                expected, actual
            ),
            (Some(expected), None) => format!("Missing header column \"{}\"", expected),
            (None, Some(actual)) => format!("Unexpected header column \"{}\"", actual),
            (None, None) => return None,
        };

        Some(create_error(
            ErrorType::Header,
            header.index,
            Some(column),
            message,
        ))
    })
}

fn validate_row(row: &Row, errors: &mut Vec<ValidationError>) {
    if row.fields.len() != SCHEMA.len() {
        errors.push(create_error(
            ErrorType::Row,
            row.index,
            None,
            format!(
                "Expected row to have {} cells but received {}",
                SCHEMA.len(),
                row.fields.len()
            ),
        ));
        return;
    }

    let checks = [
        parse_name(&row.fields[0]).err(),
        parse_price(&row.fields[1]).err(),
        parse_quantity(&row.fields[2]).err(),
    ];

    for (column, message) in checks.into_iter().enumerate() {
        if let Some(message) = message {
            errors.push(create_error(ErrorType::Cell, row.index, Some(column), message));
        }
    }
}
