//! Writer-side cursor over the block of cells filled on one sheet.
//!
//! A region starts at a fixed cell, grows downwards one row at a time and is
//! as wide as its header row. It hands out the references a writer needs:
//! the next cell to fill, the filled area, and the current table block.

use crate::area::CellArea;
use crate::cell::CellRef;
use crate::column::ColumnId;
use crate::conf::N_LEN_EXCEL_SHEET_NAME_MAX;
use crate::spec::RegionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRegion {
    name: String,
    sheet_name: String,
    start_column: ColumnId,
    start_row: u32,
    row_end: u32,
    width: Option<u32>,
    table_start: u32,
    table_end: u32,
}

impl SheetRegion {
    /// Empty region whose first row will be `start_row`.
    ///
    /// `name` is kept as given; the qualifier used in references is cut to
    /// the Excel sheet name limit.
    pub fn new(name: impl Into<String>, start_column: ColumnId, start_row: u32) -> Self {
        let name = name.into();
        let sheet_name: String = name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect();
        if sheet_name.len() < name.len() {
            tracing::debug!(name = %name, sheet = %sheet_name, "sheet name truncated");
        }
        let row_end = start_row.saturating_sub(1);
        Self {
            name,
            sheet_name,
            start_column,
            start_row,
            row_end,
            width: None,
            table_start: row_end,
            table_end: row_end,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn start_column(&self) -> &ColumnId {
        &self.start_column
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// Last row written so far; `start_row - 1` before the first row.
    pub fn row_end(&self) -> u32 {
        self.row_end
    }

    pub fn width(&self) -> u32 {
        self.width.unwrap_or(0)
    }

    /// Fix the header width. Only allowed once.
    pub fn set_width(&mut self, n_columns: u32) -> Result<(), RegionError> {
        if self.width.is_some() {
            tracing::debug!(sheet = %self.sheet_name, "header width set twice");
            return Err(RegionError::WidthAlreadySet {
                sheet: self.sheet_name.clone(),
            });
        }
        self.width = Some(n_columns);
        Ok(())
    }

    /// Rightmost column; the start column while no width is set.
    pub fn end_column(&self) -> ColumnId {
        match self.width {
            Some(n_width) if n_width > 0 => self.start_column.add_columns(i64::from(n_width) - 1),
            _ => self.start_column.clone(),
        }
    }

    /// Move to the next row and return its number.
    pub fn advance_row(&mut self) -> u32 {
        self.row_end = self.row_end.saturating_add(1);
        self.row_end
    }

    /// Mark the current row as the first row of a table (its header).
    pub fn begin_table(&mut self) -> u32 {
        self.table_start = self.row_end;
        self.table_start
    }

    /// Mark the current row as the last row of the table.
    pub fn end_table(&mut self) -> u32 {
        self.table_end = self.row_end;
        self.table_end
    }

    /// Cell on the current row, `column_offset` columns right of the start.
    pub fn current_cell(&self, column_offset: u32) -> CellRef {
        self.start_column
            .add_columns(i64::from(column_offset))
            .to_cell_ref(self.row_end, Some(self.sheet_name.clone()))
    }

    /// Lower-right cell written so far.
    pub fn end_cell(&self) -> CellRef {
        self.end_column()
            .to_cell_ref(self.row_end, Some(self.sheet_name.clone()))
    }

    /// Everything written so far, unqualified (for sheet-local references
    /// such as an auto-filter).
    pub fn area(&self) -> CellArea {
        CellArea::from_bounds(
            self.start_column.clone(),
            self.start_row,
            self.end_column(),
            self.row_end,
        )
    }

    /// Rows from `begin_table` to `end_table`, unqualified.
    pub fn table_area(&self) -> CellArea {
        CellArea::from_bounds(
            self.start_column.clone(),
            self.table_start,
            self.end_column(),
            self.table_end,
        )
    }
}
