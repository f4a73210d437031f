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

//! A circulant with capacity fixed at compile time, using stack allocation. Be
//! careful of the size of the buffer, since if it is too large, you might get a stack
//! overflow error. For a heap allocated version sized at construction time, take a
//! look at [`crate::CirculantHeap`].

use crate::Circulant;

/// Compile-time-capacity circulant. All `N` slots are populated with
/// [`Default::default`] at construction, so every read is total from the start; the
/// default values are simply the first to be overwritten.
///
/// `N` must be at least 1; this is enforced at definition time, not at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct CirculantStack<T, const N: usize> {
    internal_storage: [T; N],
    cursor: usize,
}

impl<T: Default, const N: usize> Default for CirculantStack<T, N> {
    fn default() -> Self { Self::new() }
}

impl<T: Default, const N: usize> CirculantStack<T, N> {
    pub fn new() -> Self {
        const { assert!(N >= 1, "a circulant must have capacity of at least 1") };
        CirculantStack {
            internal_storage: [(); N].map(|_| T::default()),
            cursor: 0,
        }
    }
}

impl<T, const N: usize> Circulant<T> for CirculantStack<T, N> {
    fn capacity(&self) -> usize { N }

    fn cursor(&self) -> usize { self.cursor }

    fn as_slice_raw(&self) -> &[T] { &self.internal_storage }

    /// Overwrite the oldest value (at the cursor) and advance the cursor.
    fn push_back(&mut self, value: T) {
        self.internal_storage[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
    }
}

#[cfg(test)]
mod tests {
    use smallstr::SmallString;

    use super::*;
    pub type SmallStringBackingStore = SmallString<[u8; DEFAULT_SMALL_STRING_SIZE]>;
    pub const DEFAULT_SMALL_STRING_SIZE: usize = 32;

    #[test]
    fn test_new_circulant_stack_is_fully_populated() {
        let circulant: CirculantStack<SmallStringBackingStore, 3> =
            CirculantStack::new();
        assert_eq!(circulant.len(), 3);
        assert_eq!(circulant.capacity(), 3);
        assert_eq!(circulant.cursor, 0);

        // Every slot holds the default value from the start.
        assert_eq!(circulant.get(0).unwrap(), "");
        assert_eq!(circulant.get(1).unwrap(), "");
        assert_eq!(circulant.get(2).unwrap(), "");
        assert_eq!(circulant.back(), "");
    }

    #[test]
    fn test_normal_insert_stack() {
        let mut circulant: CirculantStack<SmallStringBackingStore, 3> =
            CirculantStack::new();
        circulant.push_back("Hello".into());
        assert_eq!(circulant.len(), 3);
        assert_eq!(circulant.cursor, 1);
        assert_eq!(circulant.back(), "Hello");

        // Logical order: two defaults (oldest), then the new value.
        let mut iter = circulant.iter();
        assert_eq!(iter.next().unwrap(), "");
        assert_eq!(iter.next().unwrap(), "");
        assert_eq!(iter.next().unwrap(), "Hello");
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_wrap_around_insert_stack() {
        let mut circulant: CirculantStack<SmallStringBackingStore, 3> =
            CirculantStack::new();
        circulant.push_back("Hello".into());
        circulant.push_back("World".into());
        circulant.push_back("Rust".into());
        circulant.push_back("R3BL".into());
        assert_eq!(circulant.len(), 3);
        assert_eq!(circulant.cursor, 1);

        let mut iter = circulant.iter();
        assert_eq!(iter.next().unwrap(), "World");
        assert_eq!(iter.next().unwrap(), "Rust");
        assert_eq!(iter.next().unwrap(), "R3BL");
        assert_eq!(iter.next(), None);

        assert_eq!(circulant.get(0).unwrap(), "World");
        assert_eq!(circulant.get(1).unwrap(), "Rust");
        assert_eq!(circulant.get(2).unwrap(), "R3BL");
        assert_eq!(circulant.get(3), None);

        assert_eq!(circulant.back(), "R3BL");
    }

    #[test]
    fn test_overwrite_oldest_law_stack() {
        let mut circulant: CirculantStack<i32, 4> = CirculantStack::new();
        circulant.push_back(1);
        circulant.push_back(2);
        circulant.push_back(3);
        circulant.push_back(4);

        // Exactly `capacity` more insertions evict every value present before.
        for value in 10..14 {
            circulant.push_back(value);
        }
        let scan: Vec<i32> = circulant.iter().copied().collect();
        assert_eq!(scan, vec![10, 11, 12, 13]);
        assert_eq!(circulant.back(), &13);
    }

    #[test]
    fn test_capacity_one_stack() {
        let mut circulant: CirculantStack<i32, 1> = CirculantStack::new();
        assert_eq!(circulant.back(), &0);
        circulant.push_back(2);
        assert_eq!(circulant.back(), &2);
        circulant.push_back(3);
        assert_eq!(circulant.back(), &3);
        assert_eq!(circulant.len(), 1);
    }

    #[test]
    fn test_out_of_range_lookup_stack() {
        let mut circulant: CirculantStack<i32, 3> = CirculantStack::new();
        circulant.push_back(1);

        let before = circulant.clone();
        assert_eq!(circulant.get(3), None);
        assert!(circulant.at(3).is_err());
        // Failed lookups leave the buffer untouched.
        assert_eq!(circulant, before);
    }
}
