//! `gridkit_xlsx_ref` v1:
//! Typed XLSX address algebra.
//!
//! Modules:
//! - `conf`    : format limits and default render presets
//! - `spec`    : reference markers, render options and errors
//! - `util`    : sheet quoting and coordinate text helpers
//! - `column`  : column identity and letter codec
//! - `cell`    : single cell references
//! - `area`    : rectangular areas
//! - `range`   : single-column row ranges for formulas
//! - `header`  : header labels bound to columns
//! - `region`  : writer-side region cursor
//! - `interop` : `rust_xlsxwriter` zero-based coordinates
pub mod area;
pub mod cell;
pub mod column;
pub mod conf;
pub mod header;
pub mod interop;
pub mod range;
pub mod region;
pub mod spec;
pub mod util;

pub use area::CellArea;
pub use cell::CellRef;
pub use column::{
    ColumnId, column_name_to_number, column_number_to_name, try_column_name_to_number,
};
pub use conf::{
    N_COL_MIN, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_ROW_MIN,
};
pub use header::{HeaderId, derive_header_key, find_header};
pub use interop::{TypeXlsxBounds, from_xlsx_coords, to_xlsx_col, to_xlsx_row};
pub use range::ColumnRange;
pub use region::SheetRegion;
pub use spec::{
    AddressError, AddressResult, EnumRefType, RegionError, SpecCellRender, SpecRangeRender,
};
