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

//! # r3bl_circulant
//!
//! A circulant is a fixed-capacity circular buffer that always holds the N most
//! recently inserted values, with indexed access relative to insertion order. When
//! the buffer is full (which is always, since every slot holds a value from
//! construction onwards), inserting a new value overwrites the oldest one in place.
//! All operations are O(1); there is one contiguous allocation and no resizing.
//!
//! Two variants share the wraparound arithmetic through the [Circulant] trait:
//! - [`CirculantStack`]: capacity fixed at compile time (const generic), slots filled
//!   with [`Default::default`], stack allocated.
//! - [`CirculantHeap`]: capacity fixed at construction time from a non-empty seed
//!   sequence, heap allocated.
//!
//! ```
//! use r3bl_circulant::{Circulant, CirculantHeap, CirculantStack};
//!
//! let mut dynamic = CirculantHeap::from_seed(vec![1, 2, 3, 4]).unwrap();
//! dynamic.push_back(5);
//! assert_eq!(dynamic.back(), &5);
//! assert_eq!(dynamic.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
//!
//! let mut fixed: CirculantStack<i32, 4> = CirculantStack::new();
//! fixed.push_back(1);
//! assert_eq!(fixed.back(), &1);
//! assert_eq!(fixed.len(), 4);
//! ```
//!
//! The buffer is not safe for concurrent mutation from multiple threads without
//! external synchronization; copying a circulant duplicates its storage and cursor
//! (value semantics).

// Production library code enforces strict error handling; test code is exempt.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod circulant;
pub mod circulant_heap;
pub mod circulant_stack;
pub mod pretty_print;
pub mod result_and_error;

// Re-export everything from the modules.
pub use circulant::*;
pub use circulant_heap::*;
pub use circulant_stack::*;
pub use pretty_print::*;
pub use result_and_error::*;
