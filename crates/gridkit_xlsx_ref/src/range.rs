//! One column restricted to a row interval, as used in validation and
//! conditional-formatting formulas.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::area::CellArea;
use crate::cell::CellRef;
use crate::column::ColumnId;
use crate::conf::{N_NROWS_EXCEL_MAX, N_ROW_MIN, derive_default_range_render};
use crate::spec::{AddressError, AddressResult, SpecRangeRender};
use crate::util::{format_coordinates, format_sheet_prefix, normalize_sheet_name};

/// Column `column` from `start_row` to `end_row` (inclusive).
///
/// Rows default to the whole sheet height. `Display` renders the absolute
/// form `'Sheet'!$C$1:$C$1048576`. Ordered top-to-bottom, then
/// left-to-right: by start row, column, end row and finally sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRange {
    column: ColumnId,
    start_row: u32,
    end_row: u32,
    sheet: Option<String>,
}

impl ColumnRange {
    /// Whole-height range over `column`.
    pub fn new(column: ColumnId) -> Self {
        Self {
            column,
            start_row: N_ROW_MIN,
            end_row: N_NROWS_EXCEL_MAX,
            sheet: None,
        }
    }

    pub fn with_rows(mut self, start_row: u32, end_row: u32) -> Self {
        self.start_row = start_row;
        self.end_row = end_row;
        self
    }

    /// From `start_row` to the bottom of the sheet.
    pub fn with_start_row(mut self, start_row: u32) -> Self {
        self.start_row = start_row;
        self
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = normalize_sheet_name(sheet);
        self
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    pub fn render(&self, render: &SpecRangeRender) -> String {
        let prefix = if render.if_with_sheet {
            format_sheet_prefix(self.sheet())
        } else {
            String::new()
        };
        format!(
            "{prefix}{}:{}",
            format_coordinates(&self.column, self.start_row, render.column, render.start_row),
            format_coordinates(&self.column, self.end_row, render.column, render.end_row),
        )
    }

    /// `$C$1:$C$10`, for references from locked cells.
    pub fn to_absolute(&self) -> String {
        self.render(&SpecRangeRender::absolute())
    }

    /// `C1:C10`, for inline references.
    pub fn to_relative(&self) -> String {
        self.render(&SpecRangeRender::relative())
    }

    /// First cell of the range.
    pub fn first_cell(&self) -> CellRef {
        self.column.to_cell_ref(self.start_row, self.sheet.clone())
    }

    pub fn to_area(&self) -> CellArea {
        CellArea::new(
            self.first_cell(),
            self.column.to_cell_ref(self.end_row, self.sheet.clone()),
        )
    }

    /// Parse `C1:C10`, `'Data'!$C$2:$C$12`. Both ends must be in the same
    /// column.
    pub fn parse(text: &str) -> AddressResult<Self> {
        derive_column_range(text).inspect_err(|err| {
            tracing::debug!(input = text, error = %err, "failed to parse column range");
        })
    }
}

fn derive_column_range(text: &str) -> AddressResult<ColumnRange> {
    let area = CellArea::parse(text)?;
    if area.start_column() != area.end_column() {
        return Err(AddressError::Malformed(text.trim().to_string()));
    }
    Ok(ColumnRange::new(area.start_column().clone())
        .with_rows(area.start_row(), area.end_row())
        .with_sheet(area.sheet().map(str::to_string)))
}

impl PartialOrd for ColumnRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColumnRange {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start_row, &self.column, self.end_row, &self.sheet).cmp(&(
            other.start_row,
            &other.column,
            other.end_row,
            &other.sheet,
        ))
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&derive_default_range_render()))
    }
}

impl FromStr for ColumnRange {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
