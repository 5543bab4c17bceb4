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
use urlkit_url::{pair, Builder, Charset, Pair, Url};

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[test]
/// Reserved characters are escaped per component.
fn build_reserved() {
    let url = Url::builder("http", "foo.com")
        .add_path("with spaces")
        .add_paths(["path", "with", "varArgs"])
        .add_path_with("&=?/", [pair("matrix", "param?")])
        .set_query([pair("fancy + name", "fancy?=value")])
        .set_fragment("#?=")
        .build();
    assert_eq!(
        url.to_url_string(),
        "http://foo.com/with%20spaces/path/with/varArgs/&=%3F%2F;matrix=param%3F\
         ?fancy%20%2B%20name=fancy?%3Dvalue#%23?="
    );
}

#[rstest]
#[case("127.0.0.1", "http://127.0.0.1")]
#[case("[::1]", "http://[::1]")]
#[case("[2001:db8::7]", "http://[2001:db8::7]")]
#[case("[zz]", "http://%5Bzz%5D")]
#[case("foo bar.com", "http://foo%20bar.com")]
#[case("b\u{fc}cher.de", "http://b%C3%BCcher.de")]
/// Hosts are IP literals or registered names.
fn build_host(#[case] host: &str, #[case] expected: &str) {
    let mut builder = Url::builder("http", host);
    assert_eq!(builder.to_url_string(), expected);

    // Hosts are always encoded as UTF-8
    builder.set_charset(Charset::Utf16Be);
    assert_eq!(builder.to_url_string(), expected);
}

#[test]
/// Ports are emitted after the host.
fn build_port() {
    let mut builder = Url::builder("http", "foo.com");
    builder.set_port(33).add_path("foo");
    assert_eq!(builder.to_url_string(), "http://foo.com:33/foo");
    builder.reset_port();
    assert_eq!(builder.to_url_string(), "http://foo.com/foo");
}

#[test]
/// Paths end with a slash on request.
fn build_trailing_slash() {
    let mut builder = Url::builder("http", "foo.com");
    builder.set_trailing_slash(true);
    assert_eq!(builder.to_url_string(), "http://foo.com/");
    builder.add_paths(["foo", "bar"]);
    assert_eq!(builder.to_url_string(), "http://foo.com/foo/bar/");
}

#[test]
/// Matrix parameters are attached to the last segment.
fn build_matrix_params() {
    let mut builder = Url::builder("http", "foo.com");
    builder.add_matrix_param("m1", "v1");
    assert_eq!(builder.to_url_string(), "http://foo.com/;m1=v1");
    builder.add_path("foo").add_matrix_param("m2", "a=b;c");
    assert_eq!(
        builder.to_url_string(),
        "http://foo.com/;m1=v1/foo;m2=a%3Db%3Bc"
    );
    builder.reset_path();
    assert_eq!(builder.to_url_string(), "http://foo.com");
}

#[test]
/// Empty queries are omitted.
fn build_empty_query() {
    let mut builder = Url::builder("http", "foo.com");
    builder.set_query(Vec::<Pair>::new());
    assert_eq!(builder.to_url_string(), "http://foo.com");
    builder.set_unstructured_query("");
    assert_eq!(builder.to_url_string(), "http://foo.com");
}

#[test]
/// Unstructured queries keep delimiters literal.
fn build_unstructured_query() {
    let mut builder = Url::builder("http", "foo.com");
    builder.set_unstructured_query("q1=v1&q2 +");
    assert_eq!(builder.to_url_string(), "http://foo.com?q1=v1&q2%20%2B");

    // Adding a pair replaces unstructured text
    builder.add_query("q3", "v3");
    assert_eq!(builder.to_url_string(), "http://foo.com?q3=v3");
    builder.reset_query();
    assert_eq!(builder.to_url_string(), "http://foo.com");
}

#[test]
/// Fragments are emitted even if empty.
fn build_fragment() {
    let mut builder = Url::builder("http", "foo.com");
    builder.set_fragment("");
    assert_eq!(builder.to_url_string(), "http://foo.com#");
    builder.reset_fragment();
    assert_eq!(builder.to_url_string(), "http://foo.com");
}

#[test]
/// Components use the configured character set.
fn build_charset() {
    let mut builder = Url::builder("http", "foo.com");
    builder
        .set_charset(Charset::Utf16Be)
        .add_path_with("\u{2603}", [pair("m", "\u{2603}")])
        .add_query("q", "\u{2603}")
        .set_fragment("\u{2603}");
    assert_eq!(
        builder.to_url_string(),
        "http://foo.com/%26%03;m=%26%03?q=%26%03#%26%03"
    );
}

#[test]
/// Builders can be reused after building.
fn build_reuse() {
    let mut builder = Url::builder("http", "foo.com");
    let a = builder.add_path("a").build();
    let b = builder.set_scheme("https").set_host("bar.com").build();
    assert_eq!(a.to_string(), "http://foo.com/a");
    assert_eq!(b.to_string(), "https://bar.com/a");
}

#[test]
/// Builders can be created from URLs.
fn build_from_url() {
    let url = Url::builder("http", "foo.com").add_path("a").build();
    let mut builder = Builder::from(url);
    builder.add_path("b");
    assert_eq!(builder.to_url_string(), "http://foo.com/a/b");
}
