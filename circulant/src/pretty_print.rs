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

use std::fmt::Debug;

use crate::{Circulant, CirculantHeap, CirculantStack};

/// Marker trait to "remember" which types support pretty printing for debugging.
/// This rendering is a peripheral convenience (used by the demo binary), not part of
/// the container contract.
pub trait PrettyPrintDebug {
    fn pretty_print_debug(&self) -> String;
}

/// All slots in logical order, oldest first, eg `[2, 3, 4, 5]`.
fn render_logical_order<'a, T: Debug + 'a>(
    iter: impl Iterator<Item = &'a T>,
) -> String {
    let acc: Vec<String> = iter.map(|item| format!("{item:?}")).collect();
    format!("[{}]", acc.join(", "))
}

impl<T: Debug> PrettyPrintDebug for CirculantHeap<T> {
    fn pretty_print_debug(&self) -> String { render_logical_order(self.iter()) }
}

impl<T: Debug, const N: usize> PrettyPrintDebug for CirculantStack<T, N> {
    fn pretty_print_debug(&self) -> String { render_logical_order(self.iter()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pretty_print_logical_order() {
        let mut circulant = CirculantHeap::from_seed(vec![1, 2, 3, 4]).unwrap();
        circulant.push_back(5);
        assert_eq!(circulant.pretty_print_debug(), "[2, 3, 4, 5]");

        let circulant: CirculantStack<i32, 2> = CirculantStack::new();
        assert_eq!(circulant.pretty_print_debug(), "[0, 0]");
    }
}
