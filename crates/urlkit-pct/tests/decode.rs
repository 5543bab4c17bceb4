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

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::borrow::Cow;
use urlkit_pct::{decode, decode_with, Charset, Error};

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[rstest]
#[case("asdf", "asdf")]
#[case("%23", "#")]
#[case("a%20b", "a b")]
#[case("%2f%2F", "//")]
#[case("%e2%98%83", "\u{2603}")]
#[case("a%20b%E2%98%83c", "a b\u{2603}c")]
#[case("clef%F0%9D%84%9E", "clef\u{1D11E}")]
#[case("\u{2603}%20", "\u{2603} ")]
#[case("%FF", "\u{FFFD}")]
#[case("%E2%98x%83", "\u{FFFD}x\u{FFFD}")]
/// Escapes are decoded as UTF-8.
fn decode_utf8(#[case] value: &str, #[case] expected: &str) {
    assert_eq!(decode(value).unwrap(), expected);
}

#[rstest]
#[case(Charset::Utf16Be, "%26%03", "\u{2603}")]
#[case(Charset::Utf16Le, "%03%26", "\u{2603}")]
#[case(Charset::Utf16Be, "a%00%20b", "a b")]
#[case(Charset::Utf16Be, "%D8%34%DD%1E", "\u{1D11E}")]
#[case(Charset::Utf16Be, "%D8%34", "\u{FFFD}")]
#[case(Charset::Utf16Be, "%26", "\u{FFFD}")]
/// Escapes are decoded with the character set.
fn decode_charset(
    #[case] charset: Charset,
    #[case] value: &str,
    #[case] expected: &str,
) {
    assert_eq!(decode_with(value, charset).unwrap(), expected);
}

#[rstest]
#[case("%", 0, "Could not percent decode <%>: incomplete %-pair at position 0")]
#[case("%2", 0, "Could not percent decode <%2>: incomplete %-pair at position 0")]
#[case("abc%2", 3, "Could not percent decode <%2>: incomplete %-pair at position 3")]
#[case("%20%", 3, "Could not percent decode <%>: incomplete %-pair at position 3")]
#[case("%\u{e9}", 0, "Could not percent decode <%\u{e9}>: incomplete %-pair at position 0")]
#[case("a%\u{2603}", 1, "Could not percent decode <%\u{2603}>: incomplete %-pair at position 1")]
#[case("%\u{1D11E}", 0, "Could not percent decode <%\u{1D11E}>: incomplete %-pair at position 0")]
/// Escapes cut short by the end of the input are rejected.
fn decode_incomplete(
    #[case] value: &str,
    #[case] position: usize,
    #[case] message: &str,
) {
    let err = decode(value).unwrap_err();
    assert!(matches!(err, Error::Incomplete { .. }));
    assert_eq!(err.position(), position);
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case("%2o", 0, "Invalid %-tuple <%2o>")]
#[case("fo%2o", 2, "Invalid %-tuple <%2o>")]
#[case("%zz%", 0, "Invalid %-tuple <%zz>")]
#[case("%%20", 0, "Invalid %-tuple <%%2>")]
#[case("%\u{e9}x", 0, "Invalid %-tuple <%\u{e9}x>")]
#[case("%2\u{e9}", 0, "Invalid %-tuple <%2\u{e9}>")]
/// Escapes not followed by two hexadecimal digits are rejected.
fn decode_invalid(
    #[case] value: &str,
    #[case] position: usize,
    #[case] message: &str,
) {
    let err = decode(value).unwrap_err();
    assert!(matches!(err, Error::Invalid { .. }));
    assert_eq!(err.position(), position);
    assert_eq!(err.to_string(), message);
}

#[test]
/// Strings without escapes are borrowed.
fn decode_borrowed() {
    assert!(matches!(decode("asdf"), Ok(Cow::Borrowed("asdf"))));
    assert!(matches!(decode("a%20b"), Ok(Cow::Owned(_))));
}
