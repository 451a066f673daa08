//! Single cell reference, optionally qualified by a sheet.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::column::ColumnId;
use crate::conf::derive_default_cell_render;
use crate::spec::{AddressError, AddressResult, SpecCellRender};
use crate::util::{
    format_coordinates, format_sheet_prefix, normalize_sheet_name, parse_coordinates,
    split_sheet_qualifier,
};

/// Address of one cell: column, 1-based row and optional sheet name.
///
/// Ordered row-major: by row, then column. The sheet name only breaks ties
/// so that ordering agrees with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRef {
    column: ColumnId,
    row: u32,
    sheet: Option<String>,
}

impl CellRef {
    pub fn new(column: ColumnId, row: u32) -> Self {
        Self {
            column,
            row,
            sheet: None,
        }
    }

    /// Attach (or clear, with `None` / `Some("")`) the sheet qualifier.
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = normalize_sheet_name(sheet);
        self
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    /// Same row and sheet, another column.
    pub fn for_column(&self, column: ColumnId) -> Self {
        Self {
            column,
            row: self.row,
            sheet: self.sheet.clone(),
        }
    }

    /// Same column and sheet, another row.
    pub fn for_row(&self, row: u32) -> Self {
        Self {
            column: self.column.clone(),
            row,
            sheet: self.sheet.clone(),
        }
    }

    /// Same coordinates on another sheet.
    pub fn for_sheet(&self, sheet: impl Into<String>) -> Self {
        self.clone().with_sheet(Some(sheet.into()))
    }

    /// Same coordinates without a sheet qualifier.
    pub fn without_sheet(&self) -> Self {
        self.clone().with_sheet(None)
    }

    /// Render with explicit `$` markers, e.g. `$C$7` or `'Data'!C$7`.
    pub fn render(&self, render: &SpecCellRender) -> String {
        let prefix = if render.if_with_sheet {
            format_sheet_prefix(self.sheet())
        } else {
            String::new()
        };
        format!(
            "{prefix}{}",
            format_coordinates(&self.column, self.row, render.column, render.row)
        )
    }

    /// `$C$7` form, keeping the sheet qualifier.
    pub fn to_absolute(&self) -> String {
        self.render(&SpecCellRender::absolute())
    }

    /// Parse `C7`, `$C$7`, `'Data'!C7` or `Data!C7`.
    ///
    /// `$` markers are accepted and dropped.
    pub fn parse(text: &str) -> AddressResult<Self> {
        derive_cell_ref(text).inspect_err(|err| {
            tracing::debug!(input = text, error = %err, "failed to parse cell reference");
        })
    }

    /// Non-failing form of [`CellRef::parse`]: `None` for empty or malformed
    /// input.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

fn derive_cell_ref(text: &str) -> AddressResult<CellRef> {
    let txt = text.trim();
    if txt.is_empty() {
        return Err(AddressError::Empty);
    }
    let (sheet, coords) = split_sheet_qualifier(txt)?;
    let parsed = parse_coordinates(coords, txt)?;
    Ok(CellRef::new(parsed.column, parsed.row).with_sheet(sheet))
}

impl PartialOrd for CellRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellRef {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, &self.column, &self.sheet).cmp(&(other.row, &other.column, &other.sheet))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&derive_default_cell_render()))
    }
}

impl FromStr for CellRef {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::spec::EnumRefType;

    fn cell(txt: &str) -> CellRef {
        CellRef::parse(txt).expect("valid cell reference")
    }

    #[test]
    fn display_with_and_without_sheet() {
        let c7 = CellRef::new(ColumnId::from_name("C"), 7);
        assert_eq!(c7.to_string(), "C7");
        assert_eq!(c7.for_sheet("Data").to_string(), "'Data'!C7");
        assert_eq!(c7.for_sheet("").to_string(), "C7");
        assert_eq!(c7.for_sheet("Bob's").to_string(), "'Bob''s'!C7");
    }

    #[test]
    fn render_markers_independently() {
        let c7 = cell("'Data'!C7");
        assert_eq!(c7.to_absolute(), "'Data'!$C$7");
        assert_eq!(
            c7.render(&SpecCellRender {
                column: EnumRefType::Absolute,
                row: EnumRefType::Relative,
                if_with_sheet: false,
            }),
            "$C7"
        );
    }

    #[test]
    fn parse_accepts_qualifiers_and_markers() {
        let parsed = cell("AB123");
        assert_eq!(parsed.column().to_name(), "AB");
        assert_eq!(parsed.row(), 123);
        assert_eq!(parsed.sheet(), None);

        let parsed = cell("'Sheet Name'!$ab$123");
        assert_eq!(parsed.column().to_name(), "AB");
        assert_eq!(parsed.row(), 123);
        assert_eq!(parsed.sheet(), Some("Sheet Name"));

        assert_eq!(cell("Data!C7"), cell("'Data'!C7"));
        assert_eq!(cell("  c7 "), CellRef::new(ColumnId::from_number(3), 7));
    }

    #[test]
    fn parse_failures_are_distinguishable() {
        assert_eq!(
            CellRef::parse("123"),
            Err(AddressError::MissingColumn("123".to_string()))
        );
        assert_eq!(
            CellRef::parse("ABC"),
            Err(AddressError::MissingRow("ABC".to_string()))
        );
        assert_eq!(CellRef::parse(""), Err(AddressError::Empty));
        assert_eq!(CellRef::parse("   "), Err(AddressError::Empty));
        assert!(matches!(
            CellRef::parse("A1:B2"),
            Err(AddressError::Malformed(_))
        ));
        assert!(CellRef::try_parse("ABC").is_none());
        assert!(CellRef::try_parse("A1").is_some());
        assert!("123".parse::<CellRef>().is_err());
    }

    #[test]
    fn derived_refs_do_not_mutate() {
        let base = cell("'Data'!B2");
        let moved = base.for_column(ColumnId::from_name("D")).for_row(9);
        assert_eq!(base.to_string(), "'Data'!B2");
        assert_eq!(moved.to_string(), "'Data'!D9");
        assert_eq!(moved.without_sheet().to_string(), "D9");
    }

    #[test]
    fn ordering_is_row_major() {
        let a1 = cell("A1");
        let a2 = cell("A2");
        let b1 = cell("B1");

        assert!(a1 < a2);
        assert!(a1 < b1);
        assert!(b1 < a2);
        assert!(!(a2 < b1));
        assert!(a1 <= a1.clone());
        assert!(a2 >= b1);

        let mut l_cells = vec![a2.clone(), b1.clone(), a1.clone()];
        l_cells.sort();
        assert_eq!(l_cells, vec![a1, b1, a2]);
    }

    #[test]
    fn equality_includes_sheet() {
        assert_ne!(cell("A1"), cell("'Data'!A1"));
        assert_ne!(
            cell("A1").cmp(&cell("'Data'!A1")),
            std::cmp::Ordering::Equal
        );
    }

    proptest! {
        #[test]
        fn display_parse_round_trip(
            col in 1u32..=16_384,
            row in 1u32..=1_048_576,
            if_sheet in any::<bool>(),
        ) {
            let sheet = if_sheet.then(|| "Q1 'Plan'".to_string());
            let original = CellRef::new(ColumnId::from_number(col), row).with_sheet(sheet);
            prop_assert_eq!(CellRef::parse(&original.to_string()), Ok(original.clone()));
            prop_assert_eq!(CellRef::parse(&original.to_absolute()), Ok(original));
        }

        #[test]
        fn order_matches_row_column_tuple(
            r1 in 1u32..50,
            c1 in 1u32..50,
            r2 in 1u32..50,
            c2 in 1u32..50,
        ) {
            let left = CellRef::new(ColumnId::from_number(c1), r1);
            let right = CellRef::new(ColumnId::from_number(c2), r2);
            prop_assert_eq!(left.cmp(&right), (r1, c1).cmp(&(r2, c2)));
        }
    }
}
