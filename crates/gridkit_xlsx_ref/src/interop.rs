//! Conversion between 1-based addresses and `rust_xlsxwriter` zero-based
//! worksheet coordinates.
//!
//! The address types themselves accept any number; only here are rows and
//! columns checked against the worksheet limits, because `rust_xlsxwriter`
//! rejects anything outside them.

use rust_xlsxwriter::{ColNum, RowNum};

use crate::area::CellArea;
use crate::cell::CellRef;
use crate::column::ColumnId;
use crate::conf::{N_COL_MIN, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_ROW_MIN};
use crate::range::ColumnRange;
use crate::spec::{AddressError, AddressResult};

/// `(first_row, first_col, last_row, last_col)`, all zero-based.
pub type TypeXlsxBounds = (RowNum, ColNum, RowNum, ColNum);

/// 1-based row number to zero-based `RowNum`.
pub fn to_xlsx_row(row: u32) -> AddressResult<RowNum> {
    if !(N_ROW_MIN..=N_NROWS_EXCEL_MAX).contains(&row) {
        return Err(AddressError::OutOfBounds {
            what: "row",
            value: u64::from(row),
            max: u64::from(N_NROWS_EXCEL_MAX),
        });
    }
    Ok(row - 1)
}

/// Column to zero-based `ColNum`. The empty column is out of bounds.
pub fn to_xlsx_col(column: &ColumnId) -> AddressResult<ColNum> {
    let n_col = column.to_number();
    let err_bounds = || AddressError::OutOfBounds {
        what: "column",
        value: u64::from(n_col),
        max: u64::from(N_NCOLS_EXCEL_MAX),
    };
    if !(N_COL_MIN..=N_NCOLS_EXCEL_MAX).contains(&n_col) {
        return Err(err_bounds());
    }
    ColNum::try_from(n_col - 1).map_err(|_| err_bounds())
}

/// Zero-based worksheet coordinates to a cell reference.
pub fn from_xlsx_coords(row: RowNum, col: ColNum) -> CellRef {
    CellRef::new(ColumnId::from_index(u32::from(col)), row.saturating_add(1))
}

impl CellRef {
    /// `(row, col)` for `rust_xlsxwriter` worksheet calls.
    pub fn to_xlsx_coords(&self) -> AddressResult<(RowNum, ColNum)> {
        Ok((to_xlsx_row(self.row())?, to_xlsx_col(self.column())?))
    }
}

impl CellArea {
    /// Bounds for calls such as `Worksheet::merge_range` or `autofilter`.
    pub fn to_xlsx_bounds(&self) -> AddressResult<TypeXlsxBounds> {
        let (n_row_first, n_col_first) = self.start().to_xlsx_coords()?;
        let (n_row_last, n_col_last) = self.end().to_xlsx_coords()?;
        Ok((n_row_first, n_col_first, n_row_last, n_col_last))
    }
}

impl ColumnRange {
    pub fn to_xlsx_bounds(&self) -> AddressResult<TypeXlsxBounds> {
        self.to_area().to_xlsx_bounds()
    }
}

#[cfg(test)]
mod tests {
    use rust_xlsxwriter::utility::{cell_range, column_number_to_name, row_col_to_cell};
    use rust_xlsxwriter::{Format, Worksheet};

    use super::*;

    #[test]
    fn codec_agrees_with_rust_xlsxwriter() {
        for n_col in 0..N_NCOLS_EXCEL_MAX as ColNum {
            let column = ColumnId::from_index(u32::from(n_col));
            assert_eq!(column.to_name(), column_number_to_name(n_col));
            assert_eq!(to_xlsx_col(&column), Ok(n_col));
        }
    }

    #[test]
    fn cell_and_area_coordinates() {
        let c7 = CellRef::parse("'Data'!C7").unwrap();
        assert_eq!(c7.to_xlsx_coords(), Ok((6, 2)));
        assert_eq!(row_col_to_cell(6, 2), c7.without_sheet().to_string());
        assert_eq!(from_xlsx_coords(6, 2), c7.without_sheet());

        let b2_d10 = CellArea::parse("B2:D10").unwrap();
        let (n_row_first, n_col_first, n_row_last, n_col_last) = b2_d10.to_xlsx_bounds().unwrap();
        assert_eq!((n_row_first, n_col_first, n_row_last, n_col_last), (1, 1, 9, 3));
        assert_eq!(
            cell_range(n_row_first, n_col_first, n_row_last, n_col_last),
            b2_d10.to_string()
        );
    }

    #[test]
    fn column_range_bounds_cover_full_height() {
        let col_c = ColumnRange::new(ColumnId::from_name("C"));
        assert_eq!(col_c.to_xlsx_bounds(), Ok((0, 2, 1_048_575, 2)));
    }

    #[test]
    fn out_of_bounds_coordinates() {
        assert_eq!(
            to_xlsx_row(0),
            Err(AddressError::OutOfBounds {
                what: "row",
                value: 0,
                max: 1_048_576
            })
        );
        assert!(to_xlsx_row(1_048_577).is_err());
        assert!(to_xlsx_col(&ColumnId::empty()).is_err());
        assert!(to_xlsx_col(&ColumnId::max_value().next()).is_err());
        assert!(CellRef::parse("XFE1").unwrap().to_xlsx_coords().is_err());
    }

    #[test]
    fn area_bounds_drive_worksheet_calls() {
        let mut worksheet = Worksheet::new();
        let header = CellArea::parse("A1:C1").unwrap();
        let (n_row_first, n_col_first, n_row_last, n_col_last) = header.to_xlsx_bounds().unwrap();
        worksheet
            .merge_range(
                n_row_first,
                n_col_first,
                n_row_last,
                n_col_last,
                "Header",
                &Format::new(),
            )
            .expect("merge range");
    }
}
