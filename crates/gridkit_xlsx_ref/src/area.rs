//! Rectangular cell area between two corners.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cell::CellRef;
use crate::column::ColumnId;
use crate::spec::{AddressError, AddressResult, SpecRangeRender};
use crate::util::{
    format_coordinates, format_sheet_prefix, parse_coordinates, split_sheet_qualifier,
};

/// Area from `start` (upper-left) to `end` (lower-right), both inclusive.
///
/// Corner order is not validated: an inverted area keeps its corners as
/// given and reports non-positive totals. Single-cell areas are fine.
///
/// Ordered top-to-bottom, then left-to-right: by start corner, then end
/// corner, both compared row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellArea {
    start: CellRef,
    end: CellRef,
}

impl CellArea {
    pub fn new(start: CellRef, end: CellRef) -> Self {
        Self { start, end }
    }

    /// Area from corner coordinates, without a sheet qualifier.
    pub fn from_bounds(
        start_column: ColumnId,
        start_row: u32,
        end_column: ColumnId,
        end_row: u32,
    ) -> Self {
        Self {
            start: CellRef::new(start_column, start_row),
            end: CellRef::new(end_column, end_row),
        }
    }

    pub fn start(&self) -> &CellRef {
        &self.start
    }

    pub fn end(&self) -> &CellRef {
        &self.end
    }

    pub fn start_column(&self) -> &ColumnId {
        self.start.column()
    }

    pub fn start_row(&self) -> u32 {
        self.start.row()
    }

    pub fn end_column(&self) -> &ColumnId {
        self.end.column()
    }

    pub fn end_row(&self) -> u32 {
        self.end.row()
    }

    /// Sheet of the start corner.
    pub fn sheet(&self) -> Option<&str> {
        self.start.sheet()
    }

    /// `end_column - start_column + 1`; zero or negative for inverted areas.
    pub fn total_columns(&self) -> i64 {
        i64::from(self.end_column().to_number()) - i64::from(self.start_column().to_number()) + 1
    }

    /// `end_row - start_row + 1`; zero or negative for inverted areas.
    pub fn total_rows(&self) -> i64 {
        i64::from(self.end_row()) - i64::from(self.start_row()) + 1
    }

    /// True when the area spans more than its first row, i.e. a header row
    /// followed by at least one body row.
    pub fn has_rows(&self) -> bool {
        self.start_row() < self.end_row()
    }

    /// Start is at or above and at or left of end.
    pub fn is_normalized(&self) -> bool {
        self.start_row() <= self.end_row() && self.start_column() <= self.end_column()
    }

    /// Same area with corners reordered to upper-left / lower-right.
    pub fn normalized(&self) -> Self {
        let sheet = self.start.sheet().map(str::to_string);
        let (n_row_min, n_row_max) = derive_min_max(self.start_row(), self.end_row());
        let (col_min, col_max) = if self.start_column() <= self.end_column() {
            (self.start_column().clone(), self.end_column().clone())
        } else {
            (self.end_column().clone(), self.start_column().clone())
        };
        Self {
            start: CellRef::new(col_min, n_row_min).with_sheet(sheet.clone()),
            end: CellRef::new(col_max, n_row_max).with_sheet(sheet),
        }
    }

    pub fn upper_left(&self) -> CellRef {
        CellRef::new(self.start_column().clone(), self.start_row())
    }

    pub fn upper_right(&self) -> CellRef {
        CellRef::new(self.end_column().clone(), self.start_row())
    }

    pub fn lower_left(&self) -> CellRef {
        CellRef::new(self.start_column().clone(), self.end_row())
    }

    pub fn lower_right(&self) -> CellRef {
        CellRef::new(self.end_column().clone(), self.end_row())
    }

    /// Whether `cell` lies inside the area. Sheets are ignored.
    pub fn contains(&self, cell: &CellRef) -> bool {
        (self.start_row()..=self.end_row()).contains(&cell.row())
            && (self.start_column()..=self.end_column()).contains(&cell.column())
    }

    /// Cells of the area in row-major order, carrying the start corner's
    /// sheet. Empty for inverted areas.
    pub fn iter_cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        let n_col_start = self.start_column().to_number();
        let n_col_end = self.end_column().to_number();
        (self.start_row()..=self.end_row()).flat_map(move |n_row| {
            (n_col_start..=n_col_end).map(move |n_col| {
                CellRef::new(ColumnId::from_number(n_col), n_row)
                    .with_sheet(self.sheet().map(str::to_string))
            })
        })
    }

    /// Render with `$` markers and, if requested, the start corner's sheet.
    pub fn render(&self, render: &SpecRangeRender) -> String {
        let prefix = if render.if_with_sheet {
            format_sheet_prefix(self.sheet())
        } else {
            String::new()
        };
        format!(
            "{prefix}{}:{}",
            format_coordinates(
                self.start_column(),
                self.start_row(),
                render.column,
                render.start_row
            ),
            format_coordinates(
                self.end_column(),
                self.end_row(),
                render.column,
                render.end_row
            ),
        )
    }

    /// Parse `B2:D10`, `'Data'!$B$2:$D$10` or a single cell `B2`.
    ///
    /// A qualifier on the second corner must name the same sheet as the
    /// first.
    pub fn parse(text: &str) -> AddressResult<Self> {
        derive_cell_area(text).inspect_err(|err| {
            tracing::debug!(input = text, error = %err, "failed to parse cell area");
        })
    }

    /// Non-failing form of [`CellArea::parse`].
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

fn derive_min_max(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn derive_cell_area(text: &str) -> AddressResult<CellArea> {
    let txt = text.trim();
    if txt.is_empty() {
        return Err(AddressError::Empty);
    }
    let (sheet, coords) = split_sheet_qualifier(txt)?;

    let (txt_start, txt_end) = match coords.split_once(':') {
        Some((txt_start, txt_end)) => (txt_start, txt_end),
        None => (coords, coords),
    };

    let (sheet_end, txt_end) = split_sheet_qualifier(txt_end)?;
    if sheet_end.is_some() && sheet_end != sheet {
        return Err(AddressError::Malformed(txt.to_string()));
    }

    let start = parse_coordinates(txt_start, txt)?;
    let end = parse_coordinates(txt_end, txt)?;
    Ok(CellArea::new(
        CellRef::new(start.column, start.row).with_sheet(sheet.clone()),
        CellRef::new(end.column, end.row).with_sheet(sheet),
    ))
}

impl PartialOrd for CellArea {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellArea {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.start, &self.end).cmp(&(&other.start, &other.end))
    }
}

impl fmt::Display for CellArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&SpecRangeRender {
            if_with_sheet: false,
            ..SpecRangeRender::relative()
        }))
    }
}

impl FromStr for CellArea {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
