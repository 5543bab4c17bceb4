// Copyright (c) 2024 Zensical <contributors@zensical.org>

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Decoding error.

use std::result;
use thiserror::Error;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Decoding error.
///
/// Both variants carry the zero-based byte position of the `%` that starts
/// the offending escape. The rendered messages are relied upon by consumers,
/// so their wording must not change.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Escape is cut short by the end of the input.
    ///
    /// The message contains the remainder of the input starting at the `%`,
    /// and not the entire input, e.g., `abc%2` is reported as `<%2>`.
    #[error("Could not percent decode <{value}>: incomplete %-pair at position {position}")]
    Incomplete {
        /// Remaining input, starting at the `%`.
        value: String,
        /// Position of the `%`.
        position: usize,
    },

    /// Escape is not followed by two hexadecimal digits.
    #[error("Invalid %-tuple <{tuple}>")]
    Invalid {
        /// The `%` and the two characters following it.
        tuple: String,
        /// Position of the `%`.
        position: usize,
    },
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

#[allow(clippy::must_use_candidate)]
impl Error {
    /// Returns the position of the offending escape.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Error::Incomplete { position, .. } | Error::Invalid { position, .. } => {
                *position
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Decoding result.
pub type Result<T = ()> = result::Result<T, Error>;
