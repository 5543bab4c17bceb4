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

//! Component-aware URL building and percent-encoding.
//!
//! URLs are assembled from raw components, each of which is percent-encoded
//! with the rules of its position, so values can contain any character:
//!
//! ```
//! use urlkit::{pair, Url};
//!
//! // Create URL
//! let url = Url::builder("http", "foo.com")
//!     .add_path_with("a/b", [pair("m", "1;2")])
//!     .add_query("q", "a&b")
//!     .build();
//!
//! // Obtain string representation
//! assert_eq!(url.to_string(), "http://foo.com/a%2Fb;m=1%3B2?q=a%26b");
//! ```

pub mod pct {
    //! Percent-encoding for URL components.
    pub use urlkit_pct::*;
}

pub mod url {
    //! URL model, parser and builder.
    pub use urlkit_url::*;
}

pub use urlkit_pct::{decode, encode, Charset, Component, Profile};
pub use urlkit_url::{pair, Builder, Url};
