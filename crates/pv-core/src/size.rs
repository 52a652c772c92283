//! Width/height pairs measured in graph nodes.

use core::fmt;
use core::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Extent of a laid-out graph: `width` is the widest rank, `height` the
/// number of ranks. Also used for display budgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const EMPTY: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// A display budget; both dimensions must be non-zero.
    pub fn budget(width: usize, height: usize) -> CoreResult<Self> {
        if width == 0 {
            return Err(CoreError::InvalidArg {
                what: "budget width must be non-zero",
            });
        }
        if height == 0 {
            return Err(CoreError::InvalidArg {
                what: "budget height must be non-zero",
            });
        }
        Ok(Self { width, height })
    }

    /// True if `self` fits inside `limit` in both dimensions.
    pub fn fits_within(&self, limit: Size) -> bool {
        self.width <= limit.width && self.height <= limit.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width = {}, Height = {}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = CoreError;

    /// Parse a `<width>x<height>` budget such as `12x8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidSize {
            input: s.to_string(),
        };
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Size::budget(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_rejects_zero() {
        assert!(Size::budget(0, 3).is_err());
        assert!(Size::budget(3, 0).is_err());
        assert_eq!(Size::budget(3, 4).unwrap(), Size::new(3, 4));
    }

    #[test]
    fn fits_within_checks_both_dimensions() {
        let limit = Size::new(4, 4);
        assert!(Size::new(4, 4).fits_within(limit));
        assert!(!Size::new(5, 1).fits_within(limit));
        assert!(!Size::new(1, 5).fits_within(limit));
    }

    #[test]
    fn parse_budget() {
        assert_eq!("12x8".parse::<Size>().unwrap(), Size::new(12, 8));
        assert_eq!(" 3 X 2 ".parse::<Size>().unwrap(), Size::new(3, 2));
        assert!(matches!(
            "12".parse::<Size>(),
            Err(CoreError::InvalidSize { .. })
        ));
        assert!("0x8".parse::<Size>().is_err());
    }

    #[test]
    fn display_matches_log_format() {
        assert_eq!(Size::new(2, 3).to_string(), "Width = 2, Height = 3");
    }
}

