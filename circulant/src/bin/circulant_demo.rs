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

//! Demo driver for the circulant container. Walks both variants through
//! construction, repeated insertion, full logical scans, and back-value retrieval,
//! reporting the state after each step. None of this output is part of the container
//! contract.

use r3bl_circulant::{Circulant,
                     CirculantHeap,
                     CirculantStack,
                     PrettyPrintDebug};
use tracing_core::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    run_heap_scenario("heap circulant, capacity 1", vec![1.0], 7);
    run_heap_scenario("heap circulant, capacity 4", vec![1.0, 2.0, 3.0, 4.0], 13);
    run_stack_scenario_capacity_1();
    run_stack_scenario_capacity_4();
}

fn run_heap_scenario(scenario: &str, seed: Vec<f32>, n_insertions: usize) {
    tracing::info!(scenario, ?seed, "constructing seeded circulant");
    let mut circulant = CirculantHeap::from_seed(seed).unwrap();
    tracing::info!(state = %circulant.pretty_print_debug(), "initial state");

    for insertion_no in 0..n_insertions {
        let value = (circulant.len() + 1 + insertion_no) as f32;
        circulant.push_back(value);
        log_state(insertion_no, &circulant);
    }
}

fn run_stack_scenario_capacity_1() {
    tracing::info!("constructing stack circulant, capacity 1");
    let mut circulant: CirculantStack<f32, 1> = CirculantStack::new();

    for insertion_no in 0..7 {
        circulant.push_back(insertion_no as f32);
        log_state(insertion_no, &circulant);
    }
}

fn run_stack_scenario_capacity_4() {
    tracing::info!("constructing stack circulant, capacity 4");
    let mut circulant: CirculantStack<f32, 4> = CirculantStack::new();
    circulant.push_back(0.0);
    circulant.push_back(1.0);
    circulant.push_back(2.0);
    circulant.push_back(3.0);
    tracing::info!(state = %circulant.pretty_print_debug(), "seeded via push_back");

    for insertion_no in 0..13 {
        circulant.push_back((4 + insertion_no) as f32);
        log_state(insertion_no, &circulant);
    }
}

/// Log the whole buffer, then each logical slot, then the back value, mirroring a
/// full scan by a caller.
fn log_state<C: Circulant<f32> + PrettyPrintDebug>(
    insertion_no: usize,
    circulant: &C,
) {
    tracing::info!(
        insertion_no,
        state = %circulant.pretty_print_debug(),
        back = circulant.back(),
        "after insertion"
    );
    for logical_index in 0..circulant.capacity() {
        tracing::debug!(
            logical_index,
            value = circulant.at(logical_index).unwrap(),
            "slot"
        );
    }
}
