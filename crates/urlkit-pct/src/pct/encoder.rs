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

//! Percent-encoder.

use percent_encoding::{
    percent_encode, percent_encode_byte, utf8_percent_encode, AsciiSet,
};
use std::borrow::Cow;

use super::charset::Charset;
use super::profile::Profile;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes a string with the given profile.
///
/// ASCII characters that are safe in the profile's context are emitted as is.
/// Every other character is converted into bytes with the profile's [`Charset`]
/// and each byte is emitted as `%XX`, using two uppercase hexadecimal digits.
/// The input is iterated by [`char`], so characters outside of the Basic
/// Multilingual Plane are always converted as a whole, and never as two
/// separate surrogate halves. The output is always ASCII.
///
/// If no character must be escaped, a borrowed reference is returned, which
/// is expected to be the common case.
///
/// # Examples
///
/// ```
/// use urlkit_pct::{encode, Profile};
///
/// // Encode path segment containing a slash
/// assert_eq!(encode("21/5", &Profile::PATH), "21%2F5");
///
/// // Encode path segment containing a musical G clef
/// assert_eq!(encode("clef\u{1D11E}", &Profile::PATH), "clef%F0%9D%84%9E");
/// ```
#[must_use]
pub fn encode<'a>(value: &'a str, profile: &Profile) -> Cow<'a, str> {
    let set = profile.set();
    match profile.charset() {
        Charset::Utf8 => utf8_percent_encode(value, set).into(),
        charset => encode_with(value, set, charset),
    }
}

/// Encodes a string with a character set other than UTF-8.
///
/// In contrast to UTF-8, other character sets might produce bytes within the
/// ASCII range for non-ASCII characters, and vice versa, so we must decide on
/// a per-character basis and convert the character before escaping it.
fn encode_with<'a>(
    value: &'a str, set: &'static AsciiSet, charset: Charset,
) -> Cow<'a, str> {
    if value.bytes().all(|byte| is_literal(byte, set)) {
        return Cow::Borrowed(value);
    }

    // Escape all bytes of each character that can't be emitted as is
    let mut buffer = String::with_capacity(value.len() * 3);
    let mut bytes = [0; 4];
    for char in value.chars() {
        if u8::try_from(char).is_ok_and(|byte| is_literal(byte, set)) {
            buffer.push(char);
        } else {
            for &byte in charset.encode_char(char, &mut bytes) {
                buffer.push_str(percent_encode_byte(byte));
            }
        }
    }

    // Return encoded string
    Cow::Owned(buffer)
}

/// Returns whether the given byte is emitted as is.
///
/// Escaped bytes always expand to three characters, so a byte is left as is
/// exactly when the encoder yields a chunk of length one for it. Non-ASCII
/// bytes are always escaped.
#[inline]
pub(crate) fn is_literal(byte: u8, set: &'static AsciiSet) -> bool {
    percent_encode(&[byte], set)
        .next()
        .is_some_and(|chunk| chunk.len() == 1)
}
