//! XLSX address limits and default render presets.

use crate::spec::{SpecCellRender, SpecRangeRender};

/// Excel worksheet maximum row number (1-based).
pub const N_NROWS_EXCEL_MAX: u32 = 1_048_576;
/// Smallest valid row number.
pub const N_ROW_MIN: u32 = 1;
/// Excel worksheet maximum column number (1-based, `XFD`).
pub const N_NCOLS_EXCEL_MAX: u32 = 16_384;
/// Smallest valid column number (`A`).
pub const N_COL_MIN: u32 = 1;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Radix of the column letter encoding.
pub const N_COLUMN_RADIX: u32 = 26;

/// Default rendering for [`crate::range::ColumnRange`]: every coordinate
/// absolute, sheet qualifier included.
pub fn derive_default_range_render() -> SpecRangeRender {
    SpecRangeRender::absolute()
}

/// Default rendering for [`crate::cell::CellRef`]: relative coordinates,
/// sheet qualifier included.
pub fn derive_default_cell_render() -> SpecCellRender {
    SpecCellRender::relative()
}
