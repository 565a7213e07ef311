//! Cell address and range types

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "B3")
///
/// Addresses combine a single column letter (`A`-`Z`) with a 1-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("C10").unwrap();
    /// assert_eq!(addr.row, 9);
    /// assert_eq!(addr.col, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let digits_at = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());

        if digits_at == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letter in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..digits_at])?;

        let row_str = &s[digits_at..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in notation, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z)
    ///
    /// Indices past `Z` continue as `AA`, `AB`, ... so that any address can be
    /// displayed, even though such columns can never be parsed back.
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32 + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert uppercase column letters to index (A = 0, Z = 25)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_uppercase() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col
                .saturating_mul(26)
                .saturating_add(c as u32 - 'A' as u32 + 1);
        }

        let col = col - 1;

        if col >= MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(
                col.min(u16::MAX as u32) as u16,
                MAX_COLS - 1,
            ));
        }

        Ok(col as u16)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A vertical range of cells (e.g., "A1:A10")
///
/// Only the start column is read; the range covers rows `start.row..=end.row`
/// in that column. Start and end are kept exactly as written, so a range whose
/// start row lies below its end row is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address
    pub start: CellAddress,
    /// End address
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Parse a range from A1:A10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidRange(format!("missing ':' in '{}'", s)))?;

        let start = CellAddress::parse(start)?;
        let end = CellAddress::parse(end)?;
        Ok(Self::new(start, end))
    }

    /// Whether both ends sit in the same column
    pub fn is_single_column(&self) -> bool {
        self.start.col == self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        if self.start.row > self.end.row {
            0
        } else {
            self.end.row - self.start.row + 1
        }
    }

    /// Iterate over all cell addresses in the range, top to bottom
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            col: self.start.col,
            current_row: self.start.row,
            remaining: self.row_count(),
        }
    }

    /// Format as A1:A10 string
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    col: u16,
    current_row: u32,
    remaining: u32,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.col);
        self.remaining -= 1;
        self.current_row = self.current_row.saturating_add(1);

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(1), "B");
        assert_eq!(CellAddress::column_to_letters(4), "E");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 0);
        assert_eq!(CellAddress::letters_to_column("B").unwrap(), 1);
        assert_eq!(CellAddress::letters_to_column("Z").unwrap(), 25);

        // Uppercase only
        assert!(CellAddress::letters_to_column("c").is_err());

        // Nothing past Z
        assert!(CellAddress::letters_to_column("AA").is_err());
        assert!(CellAddress::letters_to_column("ZZZZZZZZ").is_err());
        assert!(CellAddress::letters_to_column("").is_err());
    }

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr, CellAddress::new(0, 0));

        let addr = CellAddress::parse("B3").unwrap();
        assert_eq!(addr, CellAddress::new(2, 1));

        let addr = CellAddress::parse("E10").unwrap();
        assert_eq!(addr, CellAddress::new(9, 4));
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err()); // Row 0 is invalid
        assert!(CellAddress::parse("A-1").is_err());
        assert!(CellAddress::parse("A1B").is_err());
        assert!(CellAddress::parse("AA1").is_err()); // Past Z
        assert!(CellAddress::parse("a1").is_err()); // Lowercase
        assert!(CellAddress::parse("A99999999999").is_err()); // Row overflows u32
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(2, 1).to_string(), "B3");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("A1:A3").unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(2, 0));
        assert!(range.is_single_column());

        let range = CellRange::parse("A1:C3").unwrap();
        assert!(!range.is_single_column());

        assert!(CellRange::parse("A1").is_err());
        assert!(CellRange::parse("A1:").is_err());
    }

    #[test]
    fn test_cell_range_is_not_normalized() {
        let range = CellRange::parse("A3:A1").unwrap();
        assert_eq!(range.start, CellAddress::new(2, 0));
        assert_eq!(range.end, CellAddress::new(0, 0));
        assert_eq!(range.row_count(), 0);
        assert_eq!(range.cells().count(), 0);
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("B1:B3").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(
            cells,
            vec![
                CellAddress::new(0, 1),
                CellAddress::new(1, 1),
                CellAddress::new(2, 1),
            ]
        );
        assert_eq!(range.cells().len(), 3);
    }

    #[test]
    fn test_cell_range_display() {
        assert_eq!(CellRange::parse(" A1:A3 ").unwrap().to_string(), "A1:A3");
    }
}
