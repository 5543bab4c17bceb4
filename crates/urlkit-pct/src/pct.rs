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

//! Percent-encoding.
//!
//! This module implements percent-encoding and percent-decoding of strings as
//! used within URLs. Which characters are escaped depends on the position of
//! the string inside the URL, which is why encoding is always driven by a
//! [`Profile`]. Profiles for all structural positions are provided by the
//! registry in [`Component`], e.g., path segments, query parameters or the
//! fragment, and can be derived for other [`Charset`] values if necessary.
//!
//! Encoding never fails, as every string can be represented as a sequence of
//! bytes in each of the supported character sets. Decoding fails if an escape
//! is incomplete or malformed, and reports the offending position.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use urlkit_pct::{decode, encode, Profile};
//!
//! // Encode and decode path segment
//! let value = encode("a/b c", &Profile::PATH);
//! assert_eq!(value, "a%2Fb%20c");
//! assert_eq!(decode(&value)?, "a/b c");
//! # Ok(())
//! # }
//! ```

pub mod charset;
mod decoder;
mod encoder;
mod error;
pub mod profile;

pub use charset::Charset;
pub use decoder::{decode, decode_with};
pub use encoder::encode;
pub use error::{Error, Result};
pub use profile::{Component, Profile};
