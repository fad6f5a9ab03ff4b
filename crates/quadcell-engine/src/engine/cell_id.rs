//! Cell identifiers.
//!
//! The sheet has a fixed alphabet of four cells, `A` through `D`. A formula
//! references cells by these letters, one letter per reference.
//!
//! # Examples
//!
//! ```
//! use quadcell_engine::engine::CellId;
//!
//! let id: CellId = "C".parse().unwrap();
//! assert_eq!(id, CellId::C);
//! assert_eq!(id.to_string(), "C");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed cells of the sheet.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CellId {
    A,
    B,
    C,
    D,
}

impl CellId {
    /// Every cell, in display order.
    pub const ALL: [CellId; 4] = [CellId::A, CellId::B, CellId::C, CellId::D];

    /// Map a formula letter to its cell. Only uppercase letters of the
    /// alphabet are accepted.
    pub fn from_char(c: char) -> Option<CellId> {
        match c {
            'A' => Some(CellId::A),
            'B' => Some(CellId::B),
            'C' => Some(CellId::C),
            'D' => Some(CellId::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CellId::A => 'A',
            CellId::B => 'B',
            CellId::C => 'C',
            CellId::D => 'D',
        }
    }

    /// Position of the cell in [`CellId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The alphabet as a string, e.g. for building character classes.
    pub fn alphabet() -> String {
        CellId::ALL.iter().map(|id| id.as_char()).collect()
    }
}

impl std::str::FromStr for CellId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => CellId::from_char(c),
            _ => None,
        }
        .ok_or_else(|| format!("Invalid cell id: {}", s))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::CellId;

    #[test]
    fn test_from_str_rejects_lowercase_and_multi_letter() {
        assert!("a".parse::<CellId>().is_err());
        assert!("AB".parse::<CellId>().is_err());
        assert!("E".parse::<CellId>().is_err());
        assert!("".parse::<CellId>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in CellId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
        assert_eq!(CellId::alphabet(), "ABCD");
    }
}
