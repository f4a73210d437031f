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

//! A circulant with capacity determined at construction time, using heap allocation.
//! The capacity is the length of the seed sequence, and the seed values populate the
//! slots, oldest first. For a compile-time-capacity version using stack allocation,
//! take a look at [`crate::CirculantStack`].

use std::ops::{Index, IndexMut};

use crate::{Circulant, CirculantError, CirculantErrorType, CirculantResult};

/// Runtime-capacity circulant. Constructed from a non-empty seed [Vec] whose length
/// becomes the capacity for the lifetime of the instance; the storage is allocated
/// once and never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct CirculantHeap<T> {
    internal_storage: Vec<T>,
    cursor: usize,
}

impl<T> CirculantHeap<T> {
    /// Build a circulant whose capacity is `seed.len()` and whose slots are populated
    /// from `seed` in order, oldest first.
    ///
    /// # Errors
    ///
    /// [`CirculantErrorType::InvalidArguments`] when `seed` is empty; a circulant
    /// must have capacity of at least 1, and no instance is created.
    pub fn from_seed(seed: Vec<T>) -> CirculantResult<Self> {
        if seed.is_empty() {
            return CirculantError::new_error_result(
                CirculantErrorType::InvalidArguments,
                "seed must contain at least one value",
            );
        }

        Ok(CirculantHeap {
            internal_storage: seed,
            cursor: 0,
        })
    }
}

impl<T> Circulant<T> for CirculantHeap<T> {
    fn capacity(&self) -> usize { self.internal_storage.len() }

    fn cursor(&self) -> usize { self.cursor }

    fn as_slice_raw(&self) -> &[T] { &self.internal_storage }

    /// Overwrite the oldest value (at the cursor) and advance the cursor.
    fn push_back(&mut self, value: T) {
        let cursor = self.cursor;
        self.internal_storage[cursor] = value;
        self.cursor = (cursor + 1) % self.internal_storage.len();
    }
}

/// Unchecked convenience alongside [`Circulant::get`] / [`Circulant::at`]: logical
/// indexing with `[]`, following the convention of [Vec] and friends.
impl<T> Index<usize> for CirculantHeap<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics when `index >= capacity`. Use [`Circulant::get`] or [`Circulant::at`]
    /// for checked lookups.
    fn index(&self, index: usize) -> &Self::Output {
        let capacity = self.capacity();
        if index >= capacity {
            panic!(
                "Index out of bounds: the capacity is {capacity} but the index is {index}"
            );
        }

        let actual_index = (self.cursor + index) % capacity;
        &self.internal_storage[actual_index]
    }
}

impl<T> IndexMut<usize> for CirculantHeap<T> {
    /// # Panics
    ///
    /// Panics when `index >= capacity`. See [`Index`] impl above.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let capacity = self.capacity();
        if index >= capacity {
            panic!(
                "Index out of bounds: the capacity is {capacity} but the index is {index}"
            );
        }

        let actual_index = (self.cursor + index) % capacity;
        &mut self.internal_storage[actual_index]
    }
}
