//! Stateless text helpers shared by the reference types.

use std::sync::LazyLock;

use regex::Regex;

use crate::column::{ColumnId, try_column_name_to_number};
use crate::spec::{AddressError, AddressResult, EnumRefType};

static RE_COORDINATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<col_abs>\$)?(?P<col>[A-Za-z]*)(?P<row_abs>\$)?(?P<row>[0-9]*)$")
        .expect("valid coordinate regex")
});

////////////////////////////////////////////////////////////////////////////////
// #region SheetQualifier

/// Drop empty sheet names so `Some("")` and `None` mean the same thing.
pub fn normalize_sheet_name(sheet: Option<String>) -> Option<String> {
    sheet.filter(|name| !name.is_empty())
}

/// Single-quote a sheet name, doubling embedded apostrophes.
pub fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// `'Sheet'!` prefix, or empty text when there is no sheet.
pub fn format_sheet_prefix(sheet: Option<&str>) -> String {
    match sheet {
        Some(name) if !name.is_empty() => format!("{}!", quote_sheet_name(name)),
        _ => String::new(),
    }
}

/// Split `'Sheet'!A1` / `Sheet!A1` into the unquoted sheet name and the
/// coordinate text.
pub fn split_sheet_qualifier(text: &str) -> AddressResult<(Option<String>, &str)> {
    if let Some(rest) = text.strip_prefix('\'') {
        let mut sheet_name = String::new();
        let mut iter_chars = rest.char_indices().peekable();
        while let Some((n_idx, chr)) = iter_chars.next() {
            if chr != '\'' {
                sheet_name.push(chr);
                continue;
            }
            if matches!(iter_chars.peek(), Some((_, '\''))) {
                sheet_name.push('\'');
                iter_chars.next();
                continue;
            }
            let Some(coords) = rest[n_idx + 1..].strip_prefix('!') else {
                return Err(AddressError::Malformed(text.to_string()));
            };
            if sheet_name.is_empty() {
                return Err(AddressError::Malformed(text.to_string()));
            }
            return Ok((Some(sheet_name), coords));
        }
        // Unterminated quote.
        return Err(AddressError::Malformed(text.to_string()));
    }

    match text.split_once('!') {
        Some((sheet_name, coords)) => {
            if sheet_name.is_empty() || sheet_name.contains('\'') {
                return Err(AddressError::Malformed(text.to_string()));
            }
            Ok((Some(sheet_name.to_string()), coords))
        }
        None => Ok((None, text)),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Coordinates

/// Column/row pair read from `A1`, `$A1`, `A$1` or `$A$1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCoordinates {
    /// Parsed column.
    pub column: ColumnId,
    /// Parsed 1-based row.
    pub row: u32,
    /// Whether the column carried a `$`.
    pub column_ref: EnumRefType,
    /// Whether the row carried a `$`.
    pub row_ref: EnumRefType,
}

/// Render a column/row pair with independent `$` markers.
pub fn format_coordinates(
    column: &ColumnId,
    row: u32,
    rule_column: EnumRefType,
    rule_row: EnumRefType,
) -> String {
    format!(
        "{}{}{}{}",
        rule_column.marker(),
        column.to_name(),
        rule_row.marker(),
        row
    )
}

/// Parse the coordinate part of a reference (no sheet qualifier).
///
/// `source` is the full user input and is only used for error text.
pub fn parse_coordinates(coords: &str, source: &str) -> AddressResult<SpecCoordinates> {
    let Some(caps) = RE_COORDINATES.captures(coords) else {
        return Err(AddressError::Malformed(source.to_string()));
    };

    let txt_col = caps.name("col").map_or("", |m| m.as_str());
    let txt_row = caps.name("row").map_or("", |m| m.as_str());
    if txt_col.is_empty() {
        return Err(AddressError::MissingColumn(source.to_string()));
    }
    if txt_row.is_empty() {
        return Err(AddressError::MissingRow(source.to_string()));
    }

    let n_col = try_column_name_to_number(txt_col)
        .map_err(|_| AddressError::ColumnOverflow(source.to_string()))?;
    let n_row = txt_row
        .parse::<u32>()
        .map_err(|_| AddressError::RowOverflow(source.to_string()))?;

    Ok(SpecCoordinates {
        column: ColumnId::from_number(n_col),
        row: n_row,
        column_ref: derive_ref_type(caps.name("col_abs").is_some()),
        row_ref: derive_ref_type(caps.name("row_abs").is_some()),
    })
}

fn derive_ref_type(if_absolute: bool) -> EnumRefType {
    if if_absolute {
        EnumRefType::Absolute
    } else {
        EnumRefType::Relative
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
