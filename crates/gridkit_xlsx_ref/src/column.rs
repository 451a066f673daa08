//! Column identity and the column number <-> letter codec.
//!
//! Column letters are a bijective base-26 numeral: `A..Z` stand for `1..26`
//! and there is no zero digit, so `Z` is followed by `AA`. Number `0` is the
//! empty column and encodes to `""`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::cell::CellRef;
use crate::conf::{N_COL_MIN, N_COLUMN_RADIX, N_NCOLS_EXCEL_MAX};
use crate::spec::{AddressError, AddressResult};

////////////////////////////////////////////////////////////////////////////////
// #region Codec

/// Encode a 1-based column number as letters (`1 -> "A"`, `27 -> "AA"`).
///
/// `0` yields the empty string. Numbers above the sheet limit still encode.
pub fn column_number_to_name(no: u32) -> String {
    let mut n_rest = no;
    let mut l_digits = Vec::new();
    while n_rest > 0 {
        n_rest -= 1;
        l_digits.push(b'A' + (n_rest % N_COLUMN_RADIX) as u8);
        n_rest /= N_COLUMN_RADIX;
    }
    l_digits.iter().rev().map(|&b| b as char).collect()
}

/// Decode column letters (case-insensitive) into a 1-based column number.
///
/// Empty input is the empty column `0`. Input is not validated; use
/// [`try_column_name_to_number`] when non-letters must be rejected.
pub fn column_name_to_number(name: &str) -> u32 {
    name.chars().fold(0u32, |n_acc, chr| {
        let n_digit = (chr.to_ascii_uppercase() as u32).wrapping_sub('A' as u32 - 1);
        n_acc.wrapping_mul(N_COLUMN_RADIX).wrapping_add(n_digit)
    })
}

/// Strict form of [`column_name_to_number`].
pub fn try_column_name_to_number(name: &str) -> AddressResult<u32> {
    let mut n_acc = 0u32;
    for chr in name.chars() {
        if !chr.is_ascii_alphabetic() {
            return Err(AddressError::Malformed(name.to_string()));
        }
        let n_digit = u32::from(chr.to_ascii_uppercase() as u8 - b'A') + 1;
        n_acc = n_acc
            .checked_mul(N_COLUMN_RADIX)
            .and_then(|n| n.checked_add(n_digit))
            .ok_or_else(|| AddressError::ColumnOverflow(name.to_string()))?;
    }
    Ok(n_acc)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnId

/// A spreadsheet column.
///
/// Compared, hashed and ordered by number only. Number `0` is the empty
/// column; valid worksheet columns are `1..=16384`, but larger numbers are
/// carried through unchanged.
#[derive(Debug, Clone)]
pub struct ColumnId {
    no: u32,
    name: String,
}

impl ColumnId {
    /// Column from its 1-based number.
    pub fn from_number(no: u32) -> Self {
        Self {
            no,
            name: column_number_to_name(no),
        }
    }

    /// Column from its letters. Lowercase is accepted; the stored name is
    /// always the canonical uppercase form.
    pub fn from_name(name: &str) -> Self {
        Self::from_number(column_name_to_number(name))
    }

    /// Column from its 0-based index.
    pub fn from_index(index: u32) -> Self {
        Self::from_number(index.saturating_add(1))
    }

    /// The empty column.
    pub fn empty() -> Self {
        Self::from_number(0)
    }

    /// First worksheet column, `A`.
    pub fn min_value() -> Self {
        Self::from_number(N_COL_MIN)
    }

    /// Last worksheet column, `XFD`.
    pub fn max_value() -> Self {
        Self::from_number(N_NCOLS_EXCEL_MAX)
    }

    pub fn to_number(&self) -> u32 {
        self.no
    }

    pub fn to_name(&self) -> &str {
        &self.name
    }

    /// 0-based index; `-1` for the empty column.
    pub fn index(&self) -> i64 {
        i64::from(self.no) - 1
    }

    pub fn is_empty(&self) -> bool {
        self.no == 0
    }

    /// Column to the right.
    pub fn next(&self) -> Self {
        Self::from_number(self.no.saturating_add(1))
    }

    /// Column to the left; stays at the empty column.
    pub fn previous(&self) -> Self {
        Self::from_number(self.no.saturating_sub(1))
    }

    /// Shift by `n` columns, saturating at `0` and `u32::MAX`.
    pub fn add_columns(&self, n: i64) -> Self {
        let n_shifted = i64::from(self.no)
            .saturating_add(n)
            .clamp(0, i64::from(u32::MAX));
        Self::from_number(n_shifted as u32)
    }

    /// Cell in this column.
    pub fn to_cell_ref(&self, row: u32, sheet: Option<String>) -> CellRef {
        CellRef::new(self.clone(), row).with_sheet(sheet)
    }
}

impl Default for ColumnId {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ColumnId {
    fn eq(&self, other: &Self) -> bool {
        self.no == other.no
    }
}

impl Eq for ColumnId {}

impl Hash for ColumnId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.no.hash(state);
    }
}

impl PartialOrd for ColumnId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColumnId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.no.cmp(&other.no)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for ColumnId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_column_name_to_number(s.trim()).map(Self::from_number)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn column_number_name_round_trip_full_sheet() {
        for no in 0..=N_NCOLS_EXCEL_MAX {
            let col_from = ColumnId::from_number(no);
            let col_to = ColumnId::from_name(col_from.to_name());
            assert_eq!(col_to.to_number(), no, "round trip failed for {no}");
            assert_eq!(col_to.to_name(), col_from.to_name());
        }
    }

    #[test]
    fn column_names_at_radix_boundaries() {
        assert_eq!(column_number_to_name(1), "A");
        assert_eq!(column_number_to_name(26), "Z");
        assert_eq!(column_number_to_name(27), "AA");
        assert_eq!(column_number_to_name(52), "AZ");
        assert_eq!(column_number_to_name(53), "BA");
        assert_eq!(column_number_to_name(702), "ZZ");
        assert_eq!(column_number_to_name(703), "AAA");
        assert_eq!(column_number_to_name(16_384), "XFD");
    }

    #[test]
    fn empty_column_sentinel() {
        assert_eq!(column_number_to_name(0), "");
        assert_eq!(column_name_to_number(""), 0);
        assert_eq!(try_column_name_to_number(""), Ok(0));

        let col = ColumnId::empty();
        assert!(col.is_empty());
        assert_eq!(col.index(), -1);
        assert_eq!(col.to_string(), "");
        assert_eq!(col.previous(), ColumnId::empty());
        assert!(col < ColumnId::min_value());
    }

    #[test]
    fn column_names_are_case_insensitive() {
        assert_eq!(column_name_to_number("ab"), column_name_to_number("AB"));
        assert_eq!(column_name_to_number("xfd"), 16_384);
        assert_eq!(ColumnId::from_name("ab").to_name(), "AB");
        assert_eq!(ColumnId::from_name("ab"), ColumnId::from_name("AB"));
    }

    #[test]
    fn strict_decode_rejects_non_letters() {
        assert_eq!(
            try_column_name_to_number("A1"),
            Err(AddressError::Malformed("A1".to_string()))
        );
        assert!(matches!(
            try_column_name_to_number(&"Z".repeat(12)),
            Err(AddressError::ColumnOverflow(_))
        ));
        assert_eq!("c".parse::<ColumnId>().unwrap().to_number(), 3);
        assert!("C-".parse::<ColumnId>().is_err());
    }

    #[test]
    fn index_and_number_views() {
        let col = ColumnId::from_index(0);
        assert_eq!(col.to_number(), 1);
        assert_eq!(col.to_name(), "A");
        assert_eq!(col.index(), 0);
        assert_eq!(ColumnId::from_index(26).to_name(), "AA");
        assert_eq!(ColumnId::max_value().index(), 16_383);
    }

    #[test]
    fn arithmetic_shifts_number() {
        let col = ColumnId::from_name("Z");
        assert_eq!(col.next().to_name(), "AA");
        assert_eq!(col.previous().to_name(), "Y");
        assert_eq!(col.add_columns(2).to_name(), "AB");
        assert_eq!(col.add_columns(-26), ColumnId::empty());
        assert_eq!(col.add_columns(-100), ColumnId::empty());
        // No clamp at the worksheet edge.
        assert_eq!(ColumnId::max_value().next().to_number(), 16_385);
    }

    #[test]
    fn arithmetic_saturates_on_extreme_offsets() {
        let col = ColumnId::from_name("C");
        assert_eq!(col.add_columns(i64::MAX).to_number(), u32::MAX);
        assert_eq!(col.add_columns(i64::MIN), ColumnId::empty());
        assert_eq!(
            ColumnId::from_number(u32::MAX).add_columns(1).to_number(),
            u32::MAX
        );
    }

    #[test]
    fn ordering_is_by_number() {
        let mut l_cols: Vec<ColumnId> = ["AA", "B", "Z", "A"]
            .iter()
            .map(|name| ColumnId::from_name(name))
            .collect();
        l_cols.sort();
        let l_names: Vec<&str> = l_cols.iter().map(ColumnId::to_name).collect();
        assert_eq!(l_names, ["A", "B", "Z", "AA"]);
    }

    #[test]
    fn to_cell_ref_keeps_sheet() {
        let cell = ColumnId::from_name("C").to_cell_ref(7, Some("Data".to_string()));
        assert_eq!(cell.to_string(), "'Data'!C7");
    }

    proptest! {
        #[test]
        fn encoded_names_are_uppercase_letters(no in 1u32..=N_NCOLS_EXCEL_MAX) {
            let name = column_number_to_name(no);
            prop_assert!(!name.is_empty());
            prop_assert!(name.bytes().all(|b| b.is_ascii_uppercase()));
            prop_assert!(name.len() <= 3);
        }

        #[test]
        fn decode_inverts_encode_beyond_sheet(no in 0u32..10_000_000) {
            prop_assert_eq!(column_name_to_number(&column_number_to_name(no)), no);
        }

        #[test]
        fn name_order_agrees_with_number_order(
            a in 1u32..=N_NCOLS_EXCEL_MAX,
            b in 1u32..=N_NCOLS_EXCEL_MAX,
        ) {
            let name_a = column_number_to_name(a);
            let name_b = column_number_to_name(b);
            let ord_names = name_a.len().cmp(&name_b.len()).then_with(|| name_a.cmp(&name_b));
            prop_assert_eq!(ord_names, a.cmp(&b));
        }
    }
}
