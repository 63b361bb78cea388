// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CsiSequence, NumericConversions, RowIndex, TermCol};
use std::{fmt::{Display, Formatter},
          num::NonZeroU16,
          ops::Add};

/// 1-based row coordinate for terminal ANSI sequences.
///
/// Uses [`NonZeroU16`] as mandated by the VT-100 specification, which defines terminal
/// coordinates as 16-bit unsigned integers with valid values ranging from 1 to 65,535.
///
/// # Construction
///
/// This type uses private fields and explicit constructors. Use these methods to create
/// `TermRow` values:
/// - [`from_raw_non_zero_value()`] - Wrap external `NonZeroU16` data (ANSI parameters)
/// - [`from_zero_based()`] - Convert from 0-based [`RowIndex`] to 1-based terminal
///   coordinate
/// - [`term_row()`] - Convenience helper (primarily for tests)
///
/// # Coordinate System
///
/// `TermRow` represents **1-based terminal coordinates** used in ANSI escape sequences.
/// This is distinct from:
/// - [`RowIndex`] - 0-based buffer/array positions
///
/// # Example
///
/// ```rust
/// use r3bl_tui::{TermRow, RowIndex, term_row};
/// use std::num::NonZeroU16;
///
/// // Create from ANSI parameter
/// let from_ansi = TermRow::from_raw_non_zero_value(NonZeroU16::new(5).unwrap());
///
/// // Convert from buffer index (0-based → 1-based)
/// let from_buffer = TermRow::from_zero_based(RowIndex::from(4));
/// assert_eq!(from_ansi, from_buffer); // Both represent row 5
///
/// // Convert to buffer index (1-based → 0-based)
/// let buffer_idx = from_ansi.to_zero_based();
/// assert_eq!(buffer_idx, RowIndex::from(4));
/// ```
///
/// [`from_raw_non_zero_value()`]: Self::from_raw_non_zero_value
/// [`from_zero_based()`]: Self::from_zero_based
/// [`term_row()`]: term_row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRow(NonZeroU16);

// Implementation is provided by the macro in the parent module, but we define
// the helper function here for convenience.

impl NumericConversions for TermRow {
    fn as_usize(&self) -> usize { self.0.get() as usize }
    fn as_u16(&self) -> u16 { self.0.get() }
}

impl Display for TermRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.get())
    }
}

impl TermRow {
    /// Create a 1-based terminal coordinate from a raw [`NonZeroU16`] value.
    ///
    /// Use this constructor when wrapping external [`NonZeroU16`] data, such as
    /// values parsed from ANSI escape sequence parameters.
    #[must_use]
    pub const fn from_raw_non_zero_value(value: NonZeroU16) -> Self { Self(value) }

    /// Get the inner [`NonZeroU16`] value.
    ///
    /// This provides access to the raw 1-based terminal coordinate value.
    /// Use this when you need the [`NonZeroU16`] representation, for example
    /// when serializing or passing to external APIs.
    #[must_use]
    pub const fn value(self) -> NonZeroU16 { self.0 }

    /// Get the raw 1-based value as a [`u16`].
    ///
    /// This is a convenience method that extracts the underlying [`u16`] from
    /// the [`NonZeroU16`] wrapper. Most code should use [`as_usize()`] for
    /// general numeric operations or [`value()`] for accessing the
    /// [`NonZeroU16`].
    ///
    /// [`as_usize()`]: Self::as_usize
    /// [`value()`]: Self::value
    #[must_use]
    pub const fn as_u16(self) -> u16 { self.0.get() }

    /// Convert from 0-based `RowIndex` to 1-based terminal coordinate.
    #[must_use]
    pub fn from_zero_based(index: RowIndex) -> Self {
        let nz_value = index.as_u16() + 1;
        // SAFETY: 0-based `RowIndex` + 1 is always >= 1
        debug_assert!(nz_value >= 1);
        Self::from_raw_non_zero_value(unsafe { NonZeroU16::new_unchecked(nz_value) })
    }

    /// Convert to 0-based `RowIndex` for buffer operations.
    #[must_use]
    pub fn to_zero_based(&self) -> RowIndex {
        RowIndex::from(self.as_u16().saturating_sub(1))
    }
}

impl From<RowIndex> for TermRow {
    /// Convert from 0-based [`RowIndex`] to 1-based [`TermRow`].
    ///
    /// This is always safe because the conversion adds 1, guaranteeing a non-zero
    /// value.
    fn from(value: RowIndex) -> Self { Self::from_zero_based(value) }
}

/// Add [`TermCol`] to [`TermRow`] to create a cursor position.
///
/// # Example
///
/// ```rust
/// use r3bl_tui::{TermRow, TermCol, term_row, term_col, CsiSequence};
/// use std::num::NonZeroU16;
///
/// let row = term_row(NonZeroU16::new(10).unwrap());
/// let col = term_col(NonZeroU16::new(20).unwrap());
/// let cursor_pos = row + col;
/// ```
///
/// [`TermCol`]: crate::TermCol
impl Add<TermCol> for TermRow {
    type Output = CsiSequence;

    fn add(self, rhs: TermCol) -> Self::Output {
        CsiSequence::CursorPosition {
            row: self,
            col: rhs,
        }
    }
}

/// Create a [`TermRow`] from a [`NonZeroU16`] value.
#[must_use]
pub const fn term_row(value: NonZeroU16) -> TermRow {
    TermRow::from_raw_non_zero_value(value)
}
