/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Iterator implementation for `GCStringOwned` type.
//!
//! This module provides iterator functionality for the `GCStringOwned` struct, allowing
//! users to iterate over grapheme cluster segments as string slices. The iterator handles
//! the complexity of grapheme cluster boundaries and provides a clean interface for
//! traversing Unicode text.

use super::GCStringOwned;

#[derive(Debug)]
pub struct GCStringIterator<'a> {
    gc_string: &'a GCStringOwned,
    index: usize,
}

impl<'a> GCStringIterator<'a> {
    /// Creates a new iterator for the given `GCStringOwned`.
    #[must_use]
    pub fn new(gc_string: &'a GCStringOwned) -> Self {
        Self {
            gc_string,
            index: 0,
        }
    }
}

impl<'a> Iterator for GCStringIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.gc_string.get_segment(self.index) {
            Some(segment) => {
                self.index += 1;
                Some(segment)
            }
            None => None, // Stop iteration when `get_segment` returns `None`.
        }
    }
}

/// This implementation allows the [`GCStringOwned`] to be used in a for loop
/// directly.
impl<'a> IntoIterator for &'a GCStringOwned {
    type Item = &'a str;
    type IntoIter = GCStringIterator<'a>;

    fn into_iter(self) -> Self::IntoIter { GCStringIterator::new(self) }
}
