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

//! Query.

use urlkit_pct::{Charset, Profile};

use super::Pair;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Query.
///
/// Queries are either structured, i.e., an ordered list of `name=value` pairs
/// joined by `&`, or unstructured, i.e., arbitrary text. The latter is used
/// for queries that can't be represented as pairs without losing information,
/// e.g., `q1=v1=v2`, or `q1=v1&q2`. Both variants retain the raw text, which
/// is only encoded when the URL is turned into a string.
///
/// # Examples
///
/// ```
/// use urlkit_url::{pair, Query};
///
/// // Create structured query
/// let query = Query::Structured(vec![pair("q", "a&b")]);
/// assert!(!query.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// Ordered `name=value` pairs.
    Structured(Vec<Pair>),
    /// Arbitrary text.
    Unstructured(String),
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Query {
    /// Writes the encoded query to the given buffer.
    ///
    /// Names and values of structured queries must escape `&` and `=`, which
    /// are delimiters there, while unstructured queries keep both literal.
    pub(crate) fn write_to(&self, buffer: &mut String, charset: Charset) {
        match self {
            Query::Structured(pairs) => {
                let profile = Profile::QUERY_PARAM.with_charset(charset);
                for (index, (name, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        buffer.push('&');
                    }
                    buffer.push_str(&profile.encode(name));
                    buffer.push('=');
                    buffer.push_str(&profile.encode(value));
                }
            }
            Query::Unstructured(text) => {
                let profile = Profile::QUERY.with_charset(charset);
                buffer.push_str(&profile.encode(text));
            }
        }
    }
}

#[allow(clippy::must_use_candidate)]
impl Query {
    /// Returns whether the query is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Query;
    ///
    /// // Create empty query
    /// let query = Query::Unstructured(String::new());
    /// assert!(query.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Structured(pairs) => pairs.is_empty(),
            Query::Unstructured(text) => text.is_empty(),
        }
    }
}
