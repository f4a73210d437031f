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

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [miette::Result] and [miette::Report], which are [std::error::Error] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [CirculantError] and any other type of error.
///
/// # Example
///
/// ```
/// use r3bl_circulant::{CirculantError, CirculantErrorType, CirculantResult};
/// pub fn checked_capacity(value: usize) -> CirculantResult<usize> {
///   if value == 0 {
///     let err_msg = format!("invalid capacity: {value}");
///     CirculantError::new_error_result(CirculantErrorType::InvalidArguments, &err_msg)
///   } else {
///     Ok(value)
///   }
/// }
/// ```
pub type CirculantResult<T> = miette::Result<T>;

/// Error struct for everything that can fail in this crate, which is not much: a
/// construction-time argument problem, or a logical index outside `[0, capacity)`.
/// All failures are reported immediately and leave the buffer unchanged.
#[derive(Debug, Clone)]
pub struct CirculantError {
    pub error_type: CirculantErrorType,
    pub error_message: Option<String>,
}

/// The errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy)]
pub enum CirculantErrorType {
    #[default]
    General,
    /// Construction was given an invalid argument, eg an empty seed sequence.
    InvalidArguments,
    /// A logical index was outside `[0, capacity)`.
    IndexOutOfBounds,
}

/// Implement [`Error`] trait.
impl Error for CirculantError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CirculantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CirculantError {
    /// Both [`CirculantError::error_type`] and [`CirculantError::error_message`]
    /// available.
    ///
    /// # Errors
    ///
    /// Always returns [Err]; this is a constructor for the error case.
    pub fn new_error_result<T>(
        err_type: CirculantErrorType,
        msg: &str,
    ) -> CirculantResult<T> {
        Err(miette::miette!(CirculantError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Only [`CirculantError::error_type`] available, and no
    /// [`CirculantError::error_message`].
    ///
    /// # Errors
    ///
    /// Always returns [Err]; this is a constructor for the error case.
    pub fn new_error_result_with_only_type<T>(
        err_type: CirculantErrorType,
    ) -> CirculantResult<T> {
        Err(miette::miette!(CirculantError {
            error_type: err_type,
            error_message: None,
        }))
    }
}
