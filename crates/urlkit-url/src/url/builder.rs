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

//! URL builder.

use std::str::FromStr;
use urlkit_pct::Charset;

use super::error::Error;
use super::query::Query;
use super::segment::Segment;
use super::{pair, Pair, Url};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// URL builder.
///
/// The builder accumulates raw, i.e., unescaped components, which are only
/// encoded once a string is requested, so values can contain any character.
/// Builders can be created from scratch, or from an existing [`Url`], which
/// allows to modify a parsed URL before turning it back into a string.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlkit_url::Builder;
///
/// // Create URL builder from string and modify it
/// let mut builder: Builder = "http://foo.com/foo?q=1".parse()?;
/// builder.reset_query().add_path("bar");
/// assert_eq!(builder.to_url_string(), "http://foo.com/foo/bar");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    /// URL under construction.
    url: Url,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Builder {
    /// Creates a URL builder from a scheme and host.
    ///
    /// Note that the canonical way to create a [`Builder`] is to invoke the
    /// [`Url::builder`] method, which creates an instance of [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Builder;
    ///
    /// // Create URL builder
    /// let builder = Builder::new("http", "foo.com");
    /// assert_eq!(builder.to_url_string(), "http://foo.com");
    /// ```
    #[must_use]
    pub fn new<S, H>(scheme: S, host: H) -> Self
    where
        S: Into<String>,
        H: Into<String>,
    {
        Self { url: Url::new(scheme, host) }
    }

    /// Sets the scheme.
    pub fn set_scheme<S>(&mut self, scheme: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.url.scheme = scheme.into();
        self
    }

    /// Sets the host.
    ///
    /// IPv4 and bracketed IPv6 literals are emitted as they are, while all
    /// other hosts are treated as registered names and encoded as UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL builder and set IPv6 host
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.set_host("[::1]");
    /// assert_eq!(builder.to_url_string(), "http://[::1]");
    /// ```
    pub fn set_host<H>(&mut self, host: H) -> &mut Self
    where
        H: Into<String>,
    {
        self.url.host = host.into();
        self
    }

    /// Sets the port.
    #[inline]
    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.url.port = Some(port);
        self
    }

    /// Removes the port.
    #[inline]
    pub fn reset_port(&mut self) -> &mut Self {
        self.url.port = None;
        self
    }

    /// Sets the character set.
    ///
    /// The character set applies to all components except the host, which
    /// is always encoded as UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::{Charset, Url};
    ///
    /// // Create URL builder and encode path as UTF-16
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.set_charset(Charset::Utf16Be).add_path("\u{2603}");
    /// assert_eq!(builder.to_url_string(), "http://foo.com/%26%03");
    /// ```
    #[inline]
    pub fn set_charset(&mut self, charset: Charset) -> &mut Self {
        self.url.charset = charset;
        self
    }

    /// Adds a path segment.
    ///
    /// The segment is taken literally, which means that slashes are encoded,
    /// and don't introduce further segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL builder and add path segment
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.add_path("a/b");
    /// assert_eq!(builder.to_url_string(), "http://foo.com/a%2Fb");
    /// ```
    pub fn add_path<S>(&mut self, segment: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.url.path.push(Segment::new(segment));
        self
    }

    /// Adds a path segment with matrix parameters.
    pub fn add_path_with<S, I>(&mut self, segment: S, params: I) -> &mut Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Pair>,
    {
        self.url.path.push(Segment::with_params(segment, params));
        self
    }

    /// Adds multiple path segments.
    pub fn add_paths<I>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let iter = segments.into_iter().map(Segment::new);
        self.url.path.extend(iter);
        self
    }

    /// Adds a matrix parameter to the last path segment.
    ///
    /// If the path is empty, an empty segment is created, which results in
    /// the matrix parameter being attached to the root of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL builder and add matrix parameter
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.add_matrix_param("m1", "v1");
    /// assert_eq!(builder.to_url_string(), "http://foo.com/;m1=v1");
    /// ```
    pub fn add_matrix_param<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        if self.url.path.is_empty() {
            self.url.path.push(Segment::default());
        }
        if let Some(segment) = self.url.path.last_mut() {
            segment.add_param(name, value);
        }
        self
    }

    /// Removes all path segments.
    #[inline]
    pub fn reset_path(&mut self) -> &mut Self {
        self.url.path.clear();
        self
    }

    /// Sets whether the path ends with a slash.
    #[inline]
    pub fn set_trailing_slash(&mut self, trailing_slash: bool) -> &mut Self {
        self.url.trailing_slash = trailing_slash;
        self
    }

    /// Sets the query to the given pairs, replacing any existing query.
    pub fn set_query<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = Pair>,
    {
        let pairs = pairs.into_iter().collect();
        self.url.query = Some(Query::Structured(pairs));
        self
    }

    /// Adds a query parameter.
    ///
    /// If the current query is unstructured, it is replaced, as pairs can't
    /// be appended to arbitrary text.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL builder and add query parameters
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.add_query("q1", "a&b").add_query("q2", "c=d");
    /// assert_eq!(
    ///     builder.to_url_string(),
    ///     "http://foo.com?q1=a%26b&q2=c%3Dd"
    /// );
    /// ```
    pub fn add_query<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        match &mut self.url.query {
            Some(Query::Structured(pairs)) => pairs.push(pair(name, value)),
            query => *query = Some(Query::Structured(vec![pair(name, value)])),
        }
        self
    }

    /// Sets the query to arbitrary text, replacing any existing query.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL builder and set unstructured query
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.set_unstructured_query("q1=v1=v2 & q2");
    /// assert_eq!(
    ///     builder.to_url_string(),
    ///     "http://foo.com?q1=v1=v2%20&%20q2"
    /// );
    /// ```
    pub fn set_unstructured_query<S>(&mut self, query: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.url.query = Some(Query::Unstructured(query.into()));
        self
    }

    /// Removes the query.
    #[inline]
    pub fn reset_query(&mut self) -> &mut Self {
        self.url.query = None;
        self
    }

    /// Sets the fragment.
    pub fn set_fragment<S>(&mut self, fragment: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.url.fragment = Some(fragment.into());
        self
    }

    /// Removes the fragment.
    #[inline]
    pub fn reset_fragment(&mut self) -> &mut Self {
        self.url.fragment = None;
        self
    }

    /// Builds the URL.
    ///
    /// The builder is left untouched, so it can be modified further and used
    /// to build other URLs.
    #[must_use]
    pub fn build(&self) -> Url {
        self.url.clone()
    }

    /// Returns the string representation of the URL under construction.
    #[inline]
    #[must_use]
    pub fn to_url_string(&self) -> String {
        self.url.to_url_string()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl From<Url> for Builder {
    /// Creates a URL builder from a URL.
    #[inline]
    fn from(url: Url) -> Self {
        Self { url }
    }
}

impl FromStr for Builder {
    type Err = Error;

    /// Attempts to create a URL builder from a string.
    ///
    /// # Errors
    ///
    /// This method returns an error if the string is not a valid URL, see
    /// [`Url::parse_with`] for details.
    #[inline]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse().map(|url: Url| Self { url })
    }
}
