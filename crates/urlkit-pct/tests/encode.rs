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
use urlkit_pct::{decode_with, encode, Charset, Component, Profile};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// All structural positions.
const COMPONENTS: [Component; 7] = [
    Component::Scheme,
    Component::Host,
    Component::Path,
    Component::Matrix,
    Component::Query,
    Component::QueryParam,
    Component::Fragment,
];

/// All character sets.
const CHARSETS: [Charset; 3] =
    [Charset::Utf8, Charset::Utf16Be, Charset::Utf16Le];

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[rstest]
#[case(Component::Path, "asdf", "asdf")]
#[case(Component::Path, "with spaces", "with%20spaces")]
#[case(Component::Path, "&=?/", "&=%3F%2F")]
#[case(Component::Path, "a;b", "a%3Bb")]
#[case(Component::Path, "100%", "100%25")]
#[case(Component::Path, "-._~", "-._~")]
#[case(Component::Path, "\u{2603}", "%E2%98%83")]
#[case(Component::Path, "clef\u{1D11E}", "clef%F0%9D%84%9E")]
#[case(Component::Matrix, "param?", "param%3F")]
#[case(Component::Matrix, "a=b", "a%3Db")]
#[case(Component::Query, "q1=v1&q2", "q1=v1&q2")]
#[case(Component::Query, "a+b", "a%2Bb")]
#[case(Component::QueryParam, "fancy + name", "fancy%20%2B%20name")]
#[case(Component::QueryParam, "fancy?=value", "fancy?%3Dvalue")]
#[case(Component::QueryParam, "a&b/c", "a%26b/c")]
#[case(Component::Fragment, "#?=", "%23?=")]
#[case(Component::Host, "foo bar.com", "foo%20bar.com")]
#[case(Component::Host, "a:b", "a%3Ab")]
#[case(Component::Scheme, "svn+ssh", "svn+ssh")]
#[case(Component::Scheme, "a b", "a%20b")]
/// Components are encoded with their profile.
fn encode_component(
    #[case] component: Component,
    #[case] value: &str,
    #[case] expected: &str,
) {
    assert_eq!(encode(value, &component.profile()), expected);
}

#[rstest]
#[case(Charset::Utf16Be, "\u{2603}", "%26%03")]
#[case(Charset::Utf16Le, "\u{2603}", "%03%26")]
#[case(Charset::Utf16Be, "a b", "a%00%20b")]
#[case(Charset::Utf16Be, "\u{1D11E}", "%D8%34%DD%1E")]
#[case(Charset::Utf16Le, "\u{1D11E}", "%34%D8%1E%DD")]
/// Characters are converted with the character set before escaping.
fn encode_charset(
    #[case] charset: Charset,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let profile = Profile::PATH.with_charset(charset);
    assert_eq!(profile.encode(value), expected);
}

#[test]
/// Strings without characters to escape are borrowed.
fn encode_borrowed() {
    for charset in CHARSETS {
        let profile = Profile::PATH.with_charset(charset);
        assert!(matches!(profile.encode("asdf"), Cow::Borrowed(_)));
    }
}

#[test]
/// Safe characters are emitted as is, all others as uppercase escapes.
fn encode_ascii() {
    for component in COMPONENTS {
        let profile = component.profile();
        for char in (0..0x80u8).map(char::from) {
            let value = char.to_string();
            let encoded = profile.encode(&value);
            if profile.is_safe(char) {
                assert_eq!(encoded, value);
            } else {
                assert_eq!(encoded, format!("%{:02X}", u32::from(char)));
            }
        }
        assert!(!profile.is_safe('%'));
        assert!(!profile.is_safe('\u{e9}'));
    }
}

#[test]
/// Encoding and decoding yields the original string.
fn encode_round_trip() {
    let chars: String = (0..=0x10_FFFF)
        .step_by(97)
        .filter_map(char::from_u32)
        .collect();
    for component in COMPONENTS {
        for charset in CHARSETS {
            let profile = component.profile().with_charset(charset);
            let encoded = profile.encode(&chars);
            assert!(encoded.is_ascii());
            assert_eq!(decode_with(&encoded, charset).unwrap(), chars);
        }
    }
}
