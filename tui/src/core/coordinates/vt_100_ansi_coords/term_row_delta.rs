// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Relative vertical cursor movement for VT-100 ANSI sequences.
//!
//! [`TermRowDelta`] represents **how many rows** to move the cursor, as opposed to
//! [`TermRow`] which represents **which row** the cursor is on.
//!
//! # Make Illegal States Unrepresentable
//!
//! This type wraps [`NonZeroU16`] internally, making it **impossible** to create a
//! zero-valued delta. This prevents the CSI zero bug at the type level.
//!
//! ANSI cursor movement commands (CUU, CUD) interpret parameter 0 as 1:
//! - `CSI 0 A` (`CursorUp` with n=0) moves the cursor **1 row up**, not 0
//! - `CSI 0 B` (`CursorDown` with n=0) moves the cursor **1 row down**, not 0
//!
//! By making zero deltas unrepresentable, we eliminate this class of bugs entirely.
//!
//! # Example
//!
//! ```rust
//! use r3bl_tui::{TermRowDelta, CsiSequence};
//!
//! let position: u16 = 240;
//! let term_width: u16 = 80;
//!
//! let rows_down = position / term_width; // 3 rows
//!
//! // Fallible construction - must handle the None case
//! if let Some(delta) = TermRowDelta::new(rows_down) {
//!     let _ = CsiSequence::CursorDown(delta);
//! }
//! // For rows_down=0, new() returns None, so no sequence is emitted
//! ```
//!
//! [`TermRow`]: super::TermRow
//! [`NonZeroU16`]: std::num::NonZeroU16

use crate::NumericConversions;
use std::{fmt::{Display, Formatter}, num::NonZeroU16};

/// Relative vertical cursor movement (row delta).
///
/// Represents how many rows to move up or down. Used with [`CsiSequence::CursorUp`]
/// and [`CsiSequence::CursorDown`].
///
/// # Make Illegal States Unrepresentable
///
/// This type wraps [`NonZeroU16`] internally. A zero-valued delta **cannot exist**,
/// preventing the CSI zero bug at compile time:
///
/// ```rust
/// use r3bl_tui::{TermRowDelta, CsiSequence};
///
/// // Fallible construction - returns None for zero
/// assert!(TermRowDelta::new(0).is_none());
/// assert!(TermRowDelta::new(5).is_some());
///
/// // If you have a TermRowDelta, it's guaranteed non-zero
/// if let Some(delta) = TermRowDelta::new(3) {
///     // Safe to emit - delta is guaranteed non-zero
///     let seq = CsiSequence::CursorDown(delta);
/// }
/// ```
///
/// [`NonZeroU16`]: std::num::NonZeroU16
/// [`CsiSequence::CursorUp`]: crate::CsiSequence::CursorUp
/// [`CsiSequence::CursorDown`]: crate::CsiSequence::CursorDown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRowDelta(NonZeroU16);

impl NumericConversions for TermRowDelta {
    fn as_usize(&self) -> usize { self.0.get() as usize }
    fn as_u16(&self) -> u16 { self.0.get() }
}

impl Display for TermRowDelta {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermRowDelta({})", self.0)
    }
}

impl TermRowDelta {
    /// A delta of 1 row - the most common cursor movement amount.
    ///
    /// Use this constant instead of `TermRowDelta::new(1).unwrap()` to avoid
    /// panic documentation requirements and make intent clear.
    pub const ONE: Self = Self(NonZeroU16::new(1).unwrap());

    /// Create a new row delta from a raw value.
    ///
    /// Returns `None` if the value is zero, since zero-valued deltas are not
    /// representable (they would cause the CSI zero bug).
    ///
    /// # Example
    ///
    /// ```rust
    /// use r3bl_tui::TermRowDelta;
    ///
    /// assert!(TermRowDelta::new(0).is_none());  // Zero not allowed
    /// assert!(TermRowDelta::new(5).is_some());  // Non-zero OK
    /// ```
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        match NonZeroU16::new(value) {
            Some(nz) => Some(Self(nz)),
            None => None,
        }
    }

    /// Create a row delta from a [`NonZeroU16`] value.
    ///
    /// This is an infallible constructor since [`NonZeroU16`] is already guaranteed
    /// to be non-zero.
    #[must_use]
    pub const fn from_non_zero(value: NonZeroU16) -> Self { Self(value) }

    /// Get the inner [`NonZeroU16`] value.
    #[must_use]
    pub const fn value(self) -> NonZeroU16 { self.0 }

    /// Get the raw `u16` value (guaranteed to be >= 1).
    #[must_use]
    pub const fn get(self) -> u16 { self.0.get() }
}

impl From<NonZeroU16> for TermRowDelta {
    fn from(value: NonZeroU16) -> Self { Self::from_non_zero(value) }
}

/// Create a [`TermRowDelta`] from a raw value.
///
/// Returns `None` if the value is zero.
///
/// # Example
///
/// ```rust
/// use r3bl_tui::term_row_delta;
///
/// assert!(term_row_delta(0).is_none());
/// assert_eq!(term_row_delta(3).map(|d| d.get()), Some(3));
/// ```
#[must_use]
pub const fn term_row_delta(value: u16) -> Option<TermRowDelta> { TermRowDelta::new(value) }
