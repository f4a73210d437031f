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

use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::{CirculantError, CirculantErrorType, CirculantResult};

/// Number of slots a [`Circulant::snapshot`] can hold before spilling to the heap.
pub const DEFAULT_SNAPSHOT_SIZE: usize = 8;

/// Return type of [`Circulant::snapshot`]: all elements in logical order, oldest first.
pub type Snapshot<'a, T> = SmallVec<[&'a T; DEFAULT_SNAPSHOT_SIZE]>;

/// A circulant is a fixed-capacity circular buffer that always holds the `capacity`
/// most recently inserted values. Every slot holds a real value at all times: the
/// constructors fully populate the storage (from a seed sequence or from
/// [`Default::default`]), and [`Self::push_back`] overwrites the oldest value in
/// place. The buffer never grows, shrinks, or empties.
///
/// There are two implementations of this trait:
/// - [`crate::CirculantStack`] which uses a fixed-size array on the stack.
/// - [`crate::CirculantHeap`] which uses a [Vec] on the heap, sized at construction.
///
/// # Logical index convention
///
/// Logical index `0` is the OLDEST element; logical index `capacity - 1` is the
/// newest, which is also what [`Self::back`] returns. The physical slot for logical
/// index `i` is `(cursor + i) % capacity`, where `cursor` is the slot the next
/// insertion will overwrite.
///
/// # Examples
///
/// ```
/// use r3bl_circulant::{Circulant, CirculantHeap};
///
/// let mut circulant = CirculantHeap::from_seed(vec![1, 2, 3, 4]).unwrap();
/// circulant.push_back(5);
///
/// assert_eq!(circulant.back(), &5);
/// assert_eq!(circulant.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
/// ```
pub trait Circulant<T> {
    /// Number of slots, fixed at construction. Always >= 1.
    fn capacity(&self) -> usize;

    /// The slot index that the next [`Self::push_back`] will overwrite. Always in
    /// `[0, capacity)`.
    fn cursor(&self) -> usize;

    /// Returns a view of the underlying internal storage of the struct that
    /// implements this trait, in physical (not logical) slot order.
    fn as_slice_raw(&self) -> &[T];

    /// Overwrite the oldest value with `value` and advance the cursor. Always
    /// succeeds; the buffer never grows.
    fn push_back(&mut self, value: T);

    /// Same as [`Self::capacity`]: every slot always holds a value, so the buffer is
    /// always full.
    fn len(&self) -> usize { self.capacity() }

    /// Always `false`; a circulant is fully populated from construction onwards.
    fn is_empty(&self) -> bool { false }

    /// The most recently written value, ie the slot just behind the cursor. Before
    /// the first [`Self::push_back`] this is the last seed / default value.
    fn back(&self) -> &T {
        let capacity = self.capacity();
        &self.as_slice_raw()[(self.cursor() + capacity - 1) % capacity]
    }

    /// Checked logical lookup: the element `index` slots ahead of the oldest one.
    /// Returns [None] when `index >= capacity`.
    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.capacity() {
            return None;
        }

        let actual_index = (self.cursor() + index) % self.capacity();
        self.as_slice_raw().get(actual_index)
    }

    /// Like [`Self::get`], but reports an out-of-range `index` as an error instead of
    /// [None]. The buffer is left unchanged on failure.
    ///
    /// # Errors
    ///
    /// [`CirculantErrorType::IndexOutOfBounds`] when `index >= capacity`.
    fn at(&self, index: usize) -> CirculantResult<&T> {
        match self.get(index) {
            Some(value) => Ok(value),
            None => CirculantError::new_error_result(
                CirculantErrorType::IndexOutOfBounds,
                &format!(
                    "logical index {index} is out of bounds for capacity {}",
                    self.capacity()
                ),
            ),
        }
    }

    /// Iterate all elements in logical order, oldest first.
    fn iter(&self) -> CirculantIterator<'_, T, Self>
    where
        Self: Sized,
    {
        CirculantIterator {
            circulant: self,
            iterator_index: 0,
            _phantom: PhantomData,
        }
    }

    /// All elements in logical order, oldest first, collected into a [`Snapshot`].
    /// Even though `T` is not cloned, the collection has to be allocated and moved to
    /// the caller, via return. A slice can't be returned because logical order is not
    /// contiguous in storage after wraparound.
    fn snapshot(&self) -> Snapshot<'_, T>
    where
        Self: Sized,
    {
        self.iter().collect()
    }
}

/// Logical-order iterator over any [Circulant]. Yields `capacity` items, oldest
/// first.
pub struct CirculantIterator<'a, T, C: Circulant<T>> {
    circulant: &'a C,
    iterator_index: usize,
    _phantom: PhantomData<T>,
}

impl<'a, T: 'a, C: Circulant<T>> Iterator for CirculantIterator<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iterator_index == self.circulant.capacity() {
            return None;
        }

        let item = self.circulant.get(self.iterator_index);
        self.iterator_index += 1;

        item
    }
}
