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

//! Encoding profiles.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::fmt;

use super::charset::Charset;
use super::encoder::{encode, is_literal};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Characters to be percent-encoded, except RFC 3986 'unreserved'.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters to be percent-encoded, except RFC 3986 'reg-name'.
///
/// This is 'unreserved' and 'sub-delims', which is not very aggressive, as it
/// allows for names that are not valid DNS names. It is URI-compliant, though.
const REG_NAME: &AsciiSet = &UNRESERVED
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Characters to be percent-encoded, except RFC 3986 'pchar'.
const PCHAR: &AsciiSet = &REG_NAME.remove(b':').remove(b'@');

/// Characters to be percent-encoded in a scheme.
const SCHEME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'+')
    .remove(b'-')
    .remove(b'.');

/// Characters to be percent-encoded in a path segment.
///
/// The `;` starts the matrix parameters of a segment, so it must be escaped,
/// while `/` and `?` are already not part of 'pchar'.
const PATH: &AsciiSet = &PCHAR.add(b';');

/// Characters to be percent-encoded in a matrix parameter name or value.
const MATRIX: &AsciiSet = &PATH.add(b'=');

/// Characters to be percent-encoded in an unstructured query.
///
/// HTML forms use `+` to denote a space, which is why it's always escaped.
const QUERY: &AsciiSet = &PCHAR.remove(b'/').remove(b'?').add(b'+');

/// Characters to be percent-encoded in a query parameter name or value.
const QUERY_PARAM: &AsciiSet = &QUERY.add(b'&').add(b'=');

/// Characters to be percent-encoded in a fragment.
const FRAGMENT: &AsciiSet = &PCHAR.remove(b'/').remove(b'?');

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Encoding profile.
///
/// A profile pairs the set of characters that must be escaped in a specific
/// position of a URL with the [`Charset`] used to convert characters into
/// bytes. Profiles are immutable and cheap to copy, and are provided for all
/// structural positions as associated constants, all of which use UTF-8. The
/// `%` character is escaped by every profile, as it introduces an escape.
///
/// # Examples
///
/// ```
/// use urlkit_pct::Profile;
///
/// // Encode query parameter value
/// let value = Profile::QUERY_PARAM.encode("fancy?=value");
/// assert_eq!(value, "fancy?%3Dvalue");
/// ```
#[derive(Clone, Copy)]
pub struct Profile {
    /// Characters to be percent-encoded.
    set: &'static AsciiSet,
    /// Character set.
    charset: Charset,
}

// ----------------------------------------------------------------------------

/// Structural position within a URL.
///
/// This is the registry of all encoding profiles, each of which is obtained
/// through [`Component::profile`].
///
/// # Examples
///
/// ```
/// use urlkit_pct::Component;
///
/// // Obtain profile for fragment
/// let profile = Component::Fragment.profile();
/// assert_eq!(profile.encode("#?="), "%23?=");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Scheme, e.g., `http`.
    Scheme,
    /// Host, i.e., a registered name.
    Host,
    /// Path segment.
    Path,
    /// Matrix parameter name or value.
    Matrix,
    /// Unstructured query.
    Query,
    /// Query parameter name or value.
    QueryParam,
    /// Fragment.
    Fragment,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Profile {
    /// Profile for schemes.
    pub const SCHEME: Profile = Profile::new(SCHEME);
    /// Profile for hosts, i.e., RFC 3986 'reg-name'.
    pub const HOST: Profile = Profile::new(REG_NAME);
    /// Profile for path segments.
    pub const PATH: Profile = Profile::new(PATH);
    /// Profile for matrix parameter names and values.
    pub const MATRIX: Profile = Profile::new(MATRIX);
    /// Profile for unstructured queries.
    pub const QUERY: Profile = Profile::new(QUERY);
    /// Profile for query parameter names and values.
    pub const QUERY_PARAM: Profile = Profile::new(QUERY_PARAM);
    /// Profile for fragments.
    pub const FRAGMENT: Profile = Profile::new(FRAGMENT);

    /// Creates a profile with UTF-8 from the set of characters to escape.
    ///
    /// Non-ASCII characters are always escaped. The set must contain `%`, as
    /// a literal `%` would otherwise be mistaken for an escape when decoding,
    /// which holds for all sets derived from [`NON_ALPHANUMERIC`][].
    ///
    /// [`NON_ALPHANUMERIC`]: percent_encoding::NON_ALPHANUMERIC
    ///
    /// # Examples
    ///
    /// ```
    /// use percent_encoding::NON_ALPHANUMERIC;
    /// use urlkit_pct::Profile;
    ///
    /// // Create profile escaping everything except letters and digits
    /// let profile = Profile::new(NON_ALPHANUMERIC);
    /// assert_eq!(profile.encode("abcd+-*/"), "abcd%2B%2D%2A%2F");
    /// ```
    #[must_use]
    pub const fn new(set: &'static AsciiSet) -> Self {
        Self { set, charset: Charset::Utf8 }
    }

    /// Returns a copy of the profile using the given character set.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_pct::{Charset, Profile};
    ///
    /// // Create profile for path segments using UTF-16
    /// let profile = Profile::PATH.with_charset(Charset::Utf16Be);
    /// assert_eq!(profile.encode("snowman\u{2603}"), "snowman%26%03");
    /// ```
    #[must_use]
    pub const fn with_charset(self, charset: Charset) -> Self {
        Self { set: self.set, charset }
    }

    /// Encodes a string with the profile.
    ///
    /// This is a shortcut for [`encode`][], see there for more information.
    ///
    /// [`encode`]: crate::encode
    #[inline]
    #[must_use]
    pub fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        encode(value, self)
    }

    /// Returns whether the given character is emitted as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_pct::Profile;
    ///
    /// // Check characters in path segments
    /// assert!(Profile::PATH.is_safe('='));
    /// assert!(!Profile::PATH.is_safe('/'));
    /// ```
    #[must_use]
    pub fn is_safe(&self, char: char) -> bool {
        u8::try_from(char).is_ok_and(|byte| is_literal(byte, self.set))
    }
}

#[allow(clippy::must_use_candidate)]
impl Profile {
    /// Returns the set of characters to be percent-encoded.
    #[inline]
    pub const fn set(&self) -> &'static AsciiSet {
        self.set
    }

    /// Returns the character set.
    #[inline]
    pub const fn charset(&self) -> Charset {
        self.charset
    }
}

// ----------------------------------------------------------------------------

impl Component {
    /// Returns the encoding profile for the component.
    #[must_use]
    pub const fn profile(self) -> Profile {
        match self {
            Component::Scheme => Profile::SCHEME,
            Component::Host => Profile::HOST,
            Component::Path => Profile::PATH,
            Component::Matrix => Profile::MATRIX,
            Component::Query => Profile::QUERY,
            Component::QueryParam => Profile::QUERY_PARAM,
            Component::Fragment => Profile::FRAGMENT,
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Debug for Profile {
    /// Formats the profile for debugging.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Profile")
            .field("charset", &self.charset)
            .finish_non_exhaustive()
    }
}
