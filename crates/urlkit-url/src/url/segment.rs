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

//! Path segment.

use super::{pair, Pair};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Path segment.
///
/// A path segment is the raw text between two slashes, together with an
/// ordered list of matrix parameters, which are appended to the segment as
/// `;name=value` pairs. A segment might be empty, e.g., to attach matrix
/// parameters to the root of the path.
///
/// # Examples
///
/// ```
/// use urlkit_url::{pair, Segment};
///
/// // Create path segment with matrix parameter
/// let segment = Segment::with_params("foo", [pair("m1", "v1")]);
/// assert_eq!(segment.params().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Raw value.
    value: String,
    /// Matrix parameters.
    params: Vec<Pair>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Segment {
    /// Creates a path segment without matrix parameters.
    #[must_use]
    pub fn new<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self { value: value.into(), params: Vec::new() }
    }

    /// Creates a path segment with matrix parameters.
    #[must_use]
    pub fn with_params<S, I>(value: S, params: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Pair>,
    {
        Self {
            value: value.into(),
            params: params.into_iter().collect(),
        }
    }

    /// Adds a matrix parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Segment;
    ///
    /// // Create path segment and add matrix parameter
    /// let mut segment = Segment::new("foo");
    /// segment.add_param("m1", "v1");
    /// ```
    pub fn add_param<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.params.push(pair(name, value));
        self
    }
}

#[allow(clippy::must_use_candidate)]
impl Segment {
    /// Returns the raw value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the matrix parameters.
    #[inline]
    pub fn params(&self) -> &[Pair] {
        &self.params
    }
}
