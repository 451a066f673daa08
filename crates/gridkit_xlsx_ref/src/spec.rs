//! Shared address models: reference markers, render options and errors.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region ReferenceMarkers

/// Coordinate reference type used when rendering into formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumRefType {
    /// `$`-prefixed coordinate; does not shift when the formula is copied.
    Absolute,
    /// Plain coordinate; shifts when the formula is copied.
    #[default]
    Relative,
}

impl EnumRefType {
    /// Marker text placed before the coordinate.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Absolute => "$",
            Self::Relative => "",
        }
    }
}

/// Render options for a single cell reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecCellRender {
    /// Column marker.
    pub column: EnumRefType,
    /// Row marker.
    pub row: EnumRefType,
    /// Prefix the reference with its sheet qualifier, if it has one.
    pub if_with_sheet: bool,
}

impl SpecCellRender {
    /// `$A$1` style.
    pub fn absolute() -> Self {
        Self {
            column: EnumRefType::Absolute,
            row: EnumRefType::Absolute,
            if_with_sheet: true,
        }
    }

    /// `A1` style.
    pub fn relative() -> Self {
        Self {
            column: EnumRefType::Relative,
            row: EnumRefType::Relative,
            if_with_sheet: true,
        }
    }
}

impl Default for SpecCellRender {
    fn default() -> Self {
        Self::relative()
    }
}

/// Render options for a range; start and end rows are marked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecRangeRender {
    /// Marker applied to both column coordinates.
    pub column: EnumRefType,
    /// Marker for the first row.
    pub start_row: EnumRefType,
    /// Marker for the last row.
    pub end_row: EnumRefType,
    /// Prefix the range with its sheet qualifier, if it has one.
    pub if_with_sheet: bool,
}

impl SpecRangeRender {
    /// `$C$1:$C$10` style.
    pub fn absolute() -> Self {
        Self {
            column: EnumRefType::Absolute,
            start_row: EnumRefType::Absolute,
            end_row: EnumRefType::Absolute,
            if_with_sheet: true,
        }
    }

    /// `C1:C10` style.
    pub fn relative() -> Self {
        Self {
            column: EnumRefType::Relative,
            start_row: EnumRefType::Relative,
            end_row: EnumRefType::Relative,
            if_with_sheet: true,
        }
    }
}

impl Default for SpecRangeRender {
    fn default() -> Self {
        Self::absolute()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failure to read or convert a textual/numeric spreadsheet address.
///
/// The empty column (`0` / `""`) is a valid value and never produces one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input was empty or whitespace only.
    #[error("empty reference")]
    Empty,
    /// No column letters before the row digits.
    #[error("missing column in reference: {0:?}")]
    MissingColumn(String),
    /// No row digits after the column letters.
    #[error("missing row in reference: {0:?}")]
    MissingRow(String),
    /// Text does not follow the reference grammar.
    #[error("malformed reference: {0:?}")]
    Malformed(String),
    /// Row digits do not fit in a `u32`.
    #[error("row number overflow in reference: {0:?}")]
    RowOverflow(String),
    /// Column letters do not fit in a `u32`.
    #[error("column name overflow: {0:?}")]
    ColumnOverflow(String),
    /// Coordinate outside the range a `rust_xlsxwriter` worksheet accepts.
    #[error("{what} {value} is outside 1..={max}")]
    OutOfBounds {
        /// Coordinate kind (`row` or `column`).
        what: &'static str,
        /// Offending 1-based value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },
}

/// Result alias for address operations.
pub type AddressResult<T> = Result<T, AddressError>;

/// Misuse of a [`crate::region::SheetRegion`] cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Header width can be fixed only once per region.
    #[error("header width is already set for sheet {sheet:?}")]
    WidthAlreadySet {
        /// Sheet the region belongs to.
        sheet: String,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_type_markers() {
        assert_eq!(EnumRefType::Absolute.marker(), "$");
        assert_eq!(EnumRefType::Relative.marker(), "");
        assert_eq!(EnumRefType::default(), EnumRefType::Relative);
    }

    #[test]
    fn error_messages_name_the_input() {
        assert_eq!(
            AddressError::MissingRow("ABC".to_string()).to_string(),
            "missing row in reference: \"ABC\""
        );
        assert_eq!(
            AddressError::OutOfBounds {
                what: "row",
                value: 0,
                max: 1_048_576
            }
            .to_string(),
            "row 0 is outside 1..=1048576"
        );
    }
}
