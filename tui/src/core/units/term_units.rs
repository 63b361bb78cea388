// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type-safe 1-based terminal coordinates for ANSI escape sequences.
//!
//! This module provides the [`TermRow`] and [`TermCol`] types for terminal coordinates.
//! See type documentation for detailed usage and examples.
//! The [`vt_100_ansi_parser`] is the primary consumer of these types, along with
//! the [`offscreen_buffer`] module which uses them for VT 100 related operations.
//!
//! [`vt_100_ansi_parser`]: crate::core::pty_mux::vt_100_ansi_parser
//! [`offscreen_buffer`]: crate::tui::terminal_lib_backends::offscreen_buffer

use crate::{ColIndex, NumericConversions, RowIndex,
            vt_100_ansi_parser::protocols::csi_codes::CsiSequence};
use std::{num::NonZeroU16, ops::Add};

/// Internal macro to implement all necessary traits and methods for terminal coordinate
/// types.
///
/// This macro generates:
/// - [`NumericConversions`] trait implementation for reading values
/// - [`From<NonZeroU16>`] for construction
/// - [`Display`] trait for formatting
/// - [`new()`] constructor for creating instances
/// - [`as_u16()`] for extracting the raw 1-based value
/// - [`from_zero_based()`] for converting from 0-based buffer indices
/// - [`to_zero_based()`] for converting to 0-based buffer indices
///
/// [`NumericConversions`]: crate::core::units::NumericConversions
/// [`From<NonZeroU16>`]: std::convert::From
/// [`Display`]: std::fmt::Display
/// [`new()`]: Self::new
/// [`as_u16()`]: Self::as_u16
/// [`from_zero_based()`]: Self::from_zero_based
/// [`to_zero_based()`]: Self::to_zero_based
macro_rules! generate_impl_term_unit {
    ($term_index_type:ty, $index_type:ty) => {
        impl NumericConversions for $term_index_type {
            fn as_usize(&self) -> usize { self.0.get() as usize }
            fn as_u16(&self) -> u16 { self.0.get() }
        }

        impl ::std::fmt::Display for $term_index_type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0.get())
            }
        }

        impl $term_index_type {
            /// Create a new 1-based terminal coordinate.
            #[must_use]
            pub const fn new(value: NonZeroU16) -> Self { Self(value) }

            /// Get the raw 1-based value.
            #[must_use]
            pub const fn as_u16(self) -> u16 { self.0.get() }

            /// Convert from 0-based index_type to 1-based terminal coordinate.
            #[must_use]
            pub fn from_zero_based(index: $index_type) -> Self {
                let nz_value = index.as_u16() + 1;
                // SAFETY: 0-based index_type + 1 is always >= 1
                debug_assert!(nz_value >= 1);
                Self::new(unsafe { NonZeroU16::new_unchecked(nz_value) })
            }

            /// Convert to 0-based index_type for buffer operations.
            #[must_use]
            pub fn to_zero_based(&self) -> $index_type {
                <$index_type>::from(self.as_u16().saturating_sub(1))
            }
        }
    };
}

/// # Core Concept: Two Coordinate Systems
///
/// Terminal operations use two distinct coordinate systems that must never be mixed:
///
/// ```text
/// Terminal Coordinates (1-based)    Buffer Coordinates (0-based)
/// ┌─────────────────────────┐      ┌─────────────────────────┐
/// │ (1,1) (1,2) (1,3) ...   │      │ (0,0) (0,1) (0,2) ...   │
/// │ (2,1) (2,2) (2,3) ...   │      │ (1,0) (1,1) (1,2) ...   │
/// │ (3,1) (3,2) (3,3) ...   │      │ (2,0) (2,1) (2,2) ...   │
/// │ ...                     │      │ ...                     │
/// └─────────────────────────┘      └─────────────────────────┘
///   ANSI sequences                   Arrays/buffers/vectors
///   ESC[row;colH                     vec[row_idx][col_idx]
/// ```
///
/// **Why This Matters**: ANSI escape sequences like `ESC[5;10H` use 1-based indexing
/// where `(1,1)` is the top-left corner. Internal data structures use 0-based indexing
/// where `(0,0)` is the top-left. Mixing these systems causes off-by-one errors.
///
/// # Usage Example
///
/// ```rust
/// use r3bl_tui::{term_col, term_row, RowIndex, TermRow};
/// use std::num::NonZeroU16;
///
/// // Create terminal coordinates for ANSI sequences
/// let term_pos = (
///     term_row(NonZeroU16::new(5).unwrap()),
///     term_col(NonZeroU16::new(10).unwrap())
/// );
/// // Generates: ESC[5;10H (row 5, col 10 in terminal)
///
/// // Convert to buffer coordinates for array access
/// let buffer_row = term_pos.0.to_zero_based(); // RowIndex(4)
/// let buffer_col = term_pos.1.to_zero_based(); // ColIndex(9)
/// // Now safe to use: buffer[buffer_row.as_usize()][buffer_col.as_usize()]
///
/// // Convert from buffer back to terminal
/// let buffer_idx = RowIndex::new(4);
/// let term_row = TermRow::from_zero_based(buffer_idx); // TermRow(5)
/// ```
///
/// # Common Pitfalls
///
/// - **Off-by-one errors**: Always convert explicitly, never manually add/subtract 1
/// - **Type confusion**: Use [`TermRow`]/[`TermCol`] for ANSI, [`RowIndex`]/[`ColIndex`]
///   for buffers
/// - **Missing conversion**: Converting to buffer coords is infallible (always safe), but
///   forgetting to convert leads to accessing wrong cells

/// Create a [`TermRow`] from a [`NonZeroU16`] value.
#[must_use]
pub const fn term_row(value: NonZeroU16) -> TermRow { TermRow::new(value) }

/// 1-based row coordinate for terminal ANSI sequences.
///
/// Uses [`NonZeroU16`] as mandated by the VT-100 specification, which defines terminal
/// coordinates as 16-bit unsigned integers with valid values ranging from 1 to 65,535.
///
/// See [self module documentation] for primary consumers of these types.
/// See [module documentation] for coordinate system details and usage examples.
///
/// [self module documentation]: mod@self
/// [module documentation]: mod@super
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRow(pub NonZeroU16);
generate_impl_term_unit!(TermRow, RowIndex);

/// Create a [`TermCol`] from a [`NonZeroU16`] value.
#[must_use]
pub const fn term_col(value: NonZeroU16) -> TermCol { TermCol::new(value) }

/// 1-based column coordinate for terminal ANSI sequences.
///
/// Uses [`NonZeroU16`] as mandated by the VT-100 specification, which defines terminal
/// coordinates as 16-bit unsigned integers with valid values ranging from 1 to 65,535.
///
/// See [self module documentation] for primary consumers of these types.
/// See [module documentation] for coordinate system details and usage examples.
///
/// [self module documentation]: mod@self
/// [module documentation]: mod@super
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermCol(pub NonZeroU16);
generate_impl_term_unit!(TermCol, ColIndex);

/// Safe conversions from buffer coordinates (0-based) to terminal coordinates (1-based).
mod from_buffer_coords {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<RowIndex> for TermRow {
        /// Convert from 0-based [`RowIndex`] to 1-based [`TermRow`].
        ///
        /// This is always safe because the conversion adds 1, guaranteeing a non-zero
        /// value.
        fn from(value: RowIndex) -> Self { Self::from_zero_based(value) }
    }

    impl From<ColIndex> for TermCol {
        /// Convert from 0-based [`ColIndex`] to 1-based [`TermCol`].
        ///
        /// This is always safe because the conversion adds 1, guaranteeing a non-zero
        /// value.
        fn from(value: ColIndex) -> Self { Self::from_zero_based(value) }
    }
}

mod add_ops_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Add [`TermCol`] to [`TermRow`] to create a cursor position.
    ///
    /// # Examples
    /// ```rust
    /// use r3bl_tui::{term_col, term_row};
    /// use std::num::NonZeroU16;
    ///
    /// let position = term_row(NonZeroU16::new(5).unwrap()) + term_col(NonZeroU16::new(10).unwrap());
    /// // This creates a CsiSequence::CursorPosition { row: TermRow(5), col: TermCol(10) }
    /// ```
    impl Add<TermCol> for TermRow {
        type Output = CsiSequence;

        fn add(self, rhs: TermCol) -> Self::Output {
            CsiSequence::CursorPosition {
                row: self,
                col: rhs,
            }
        }
    }

    /// Add [`TermRow`] to [`TermCol`] to create a cursor position.
    ///
    /// # Examples
    /// ```rust
    /// use r3bl_tui::{term_col, term_row};
    /// use std::num::NonZeroU16;
    ///
    /// let position = term_col(NonZeroU16::new(10).unwrap()) + term_row(NonZeroU16::new(5).unwrap());
    /// // This creates a CsiSequence::CursorPosition { row: TermRow(5), col: TermCol(10) }
    /// ```
    impl Add<TermRow> for TermCol {
        type Output = CsiSequence;

        fn add(self, rhs: TermRow) -> Self::Output {
            CsiSequence::CursorPosition {
                row: rhs,
                col: self,
            }
        }
    }
}
