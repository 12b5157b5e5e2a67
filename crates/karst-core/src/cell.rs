//! The two-state cell alphabet for terrain lattices.

use std::fmt;

/// State of a single terrain cell.
///
/// Terrain descriptions write solid rock as `*` and void as `.`. There is
/// no third state: erosion turns [`Solid`](Cell::Solid) into
/// [`Void`](Cell::Void) and nothing ever turns void back into solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Intact rock. Erodes once orthogonally exposed to void.
    Solid,
    /// Empty space, either present from the start or left behind by erosion.
    Void,
}

impl Cell {
    /// Glyph for solid cells in terrain descriptions.
    pub const SOLID_GLYPH: char = '*';

    /// Glyph for void cells in terrain descriptions.
    pub const VOID_GLYPH: char = '.';

    /// Parse a terrain glyph.
    ///
    /// Returns `None` for any character other than `*` or `.`.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            Self::SOLID_GLYPH => Some(Self::Solid),
            Self::VOID_GLYPH => Some(Self::Void),
            _ => None,
        }
    }

    /// The glyph for this cell state.
    pub fn glyph(self) -> char {
        match self {
            Self::Solid => Self::SOLID_GLYPH,
            Self::Void => Self::VOID_GLYPH,
        }
    }

    /// `true` for [`Cell::Solid`].
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }

    /// `true` for [`Cell::Void`].
    pub fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn glyphs_round_trip() {
        assert_eq!(Cell::from_glyph('*'), Some(Cell::Solid));
        assert_eq!(Cell::from_glyph('.'), Some(Cell::Void));
        assert_eq!(Cell::Solid.glyph(), '*');
        assert_eq!(Cell::Void.glyph(), '.');
    }

    #[test]
    fn predicates_disjoint() {
        assert!(Cell::Solid.is_solid());
        assert!(!Cell::Solid.is_void());
        assert!(Cell::Void.is_void());
        assert!(!Cell::Void.is_solid());
    }

    #[test]
    fn display_matches_glyph() {
        assert_eq!(Cell::Solid.to_string(), "*");
        assert_eq!(Cell::Void.to_string(), ".");
    }

    proptest! {
        #[test]
        fn only_the_two_glyphs_parse(ch in any::<char>()) {
            match Cell::from_glyph(ch) {
                Some(cell) => prop_assert_eq!(cell.glyph(), ch),
                None => prop_assert!(ch != '*' && ch != '.'),
            }
        }
    }
}
