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

//! URL.

use std::fmt;
use std::str::FromStr;
use urlkit_pct::Profile;

pub mod builder;
mod error;
mod host;
mod parser;
pub mod query;
pub mod segment;

pub use builder::Builder;
pub use error::{Error, Result};
pub use query::Query;
pub use segment::Segment;
pub use urlkit_pct::Charset;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// URL.
///
/// URLs are kept in structured form, with every component holding raw, i.e.,
/// unescaped text, which is percent-encoded only when the URL is turned into
/// a string. Each component is encoded with the [`Profile`] matching its
/// position, so delimiters like `/`, `;`, `=`, `&`, `?` or `#` that appear
/// inside of a value never leak into the structure of the resulting string.
/// The string representation is defined as follows:
///
/// ``` text
/// <scheme>://<host>[:<port>]{/<segment>{;<name>=<value>}}[?<query>][#<fragment>]
/// ```
///
/// URLs are created with a [`Builder`] or by parsing a string. Parsing splits
/// the string on delimiters first and decodes each piece afterwards, so that
/// escaped delimiters are preserved as part of the values they belong to.
///
/// # Examples
///
/// Create a URL:
///
/// ```
/// use urlkit_url::{pair, Url};
///
/// // Create URL
/// let url = Url::builder("http", "foo.com")
///     .add_path("with spaces")
///     .add_paths(["path", "with", "varArgs"])
///     .add_path_with("&=?/", [pair("matrix", "param?")])
///     .set_query([pair("fancy + name", "fancy?=value")])
///     .set_fragment("#?=")
///     .build();
///
/// // Obtain string representation
/// assert_eq!(
///     url.to_string(),
///     "http://foo.com/with%20spaces/path/with/varArgs/&=%3F%2F;matrix=param%3F\
///      ?fancy%20%2B%20name=fancy?%3Dvalue#%23?="
/// );
/// ```
///
/// Create a URL from a string:
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlkit_url::Url;
///
/// // Create URL from string
/// let url: Url = "https://localhost/schedules/21%2F5/delete".parse()?;
/// assert_eq!(url.path()[1].value(), "21/5");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Url {
    /// Scheme, e.g., `http`.
    scheme: String,
    /// Host, i.e., a registered name or IP literal.
    host: String,
    /// Port, if any.
    port: Option<u16>,
    /// Path segments.
    path: Vec<Segment>,
    /// Query, if any.
    query: Option<Query>,
    /// Fragment, if any.
    fragment: Option<String>,
    /// Whether to end the path with a slash.
    trailing_slash: bool,
    /// Character set for everything except the host.
    charset: Charset,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Url {
    /// Creates a URL from a scheme and host.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL
    /// let url = Url::new("http", "foo.com");
    /// assert_eq!(url.to_string(), "http://foo.com");
    /// ```
    #[must_use]
    pub fn new<S, H>(scheme: S, host: H) -> Self
    where
        S: Into<String>,
        H: Into<String>,
    {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port: None,
            path: Vec::new(),
            query: None,
            fragment: None,
            trailing_slash: false,
            charset: Charset::default(),
        }
    }

    /// Creates a URL builder from a scheme and host.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL builder
    /// let mut builder = Url::builder("http", "foo.com");
    /// builder.set_port(33);
    /// assert_eq!(builder.to_url_string(), "http://foo.com:33");
    /// ```
    #[inline]
    #[must_use]
    pub fn builder<S, H>(scheme: S, host: H) -> Builder
    where
        S: Into<String>,
        H: Into<String>,
    {
        Builder::new(scheme, host)
    }

    /// Attempts to create a URL from a string with the given character set.
    ///
    /// The character set is used to decode all components except the host,
    /// which is always decoded as UTF-8, and is retained for encoding.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Scheme`], if the string doesn't contain a
    /// `://`, [`Error::Port`], if the port is invalid, [`Error::Matrix`], if
    /// a matrix parameter is not a `name=value` pair, or [`Error::Decode`], if
    /// a component contains a malformed escape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use urlkit_url::{Charset, Url};
    ///
    /// // Create URL from string using UTF-16
    /// let url = Url::parse_with("http://foo.com/%26%03", Charset::Utf16Be)?;
    /// assert_eq!(url.path()[0].value(), "\u{2603}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_with(value: &str, charset: Charset) -> Result<Self> {
        parser::parse(value, charset)
    }

    /// Returns the string representation.
    ///
    /// Components are percent-encoded and joined with their delimiters in the
    /// following order: scheme and host, port, path segments and their matrix
    /// parameters, query and fragment. Absent components are omitted, so an
    /// empty path does not produce a slash after the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_url::Url;
    ///
    /// // Create URL and obtain string representation
    /// let url = Url::builder("https", "localhost")
    ///     .add_paths(["schedules", "21/5", "delete"])
    ///     .build();
    /// assert_eq!(
    ///     url.to_url_string(),
    ///     "https://localhost/schedules/21%2F5/delete"
    /// );
    /// ```
    #[must_use]
    pub fn to_url_string(&self) -> String {
        let mut buffer = String::with_capacity(64);
        buffer.push_str(&Profile::SCHEME.encode(&self.scheme));
        buffer.push_str("://");
        buffer.push_str(&host::encode(&self.host));
        if let Some(port) = self.port {
            buffer.push(':');
            buffer.push_str(&port.to_string());
        }

        // Append path segments with matrix parameters
        let path = Profile::PATH.with_charset(self.charset);
        let matrix = Profile::MATRIX.with_charset(self.charset);
        for segment in &self.path {
            buffer.push('/');
            buffer.push_str(&path.encode(segment.value()));
            for (name, value) in segment.params() {
                buffer.push(';');
                buffer.push_str(&matrix.encode(name));
                buffer.push('=');
                buffer.push_str(&matrix.encode(value));
            }
        }
        if self.trailing_slash {
            buffer.push('/');
        }

        // Append query, unless it has no parameters
        if let Some(query) = &self.query {
            if !query.is_empty() {
                buffer.push('?');
                query.write_to(&mut buffer, self.charset);
            }
        }

        // Append fragment
        if let Some(fragment) = &self.fragment {
            buffer.push('#');
            let profile = Profile::FRAGMENT.with_charset(self.charset);
            buffer.push_str(&profile.encode(fragment));
        }

        // Return string representation
        tracing::trace!(url = %buffer, "assembled url");
        buffer
    }
}

#[allow(clippy::must_use_candidate)]
impl Url {
    /// Returns the scheme.
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host.
    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if any.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path segments.
    #[inline]
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    /// Returns the query, if any.
    #[inline]
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Returns the fragment, if any.
    #[inline]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the character set.
    #[inline]
    pub fn charset(&self) -> Charset {
        self.charset
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Url {
    type Err = Error;

    /// Attempts to create a URL from a string.
    ///
    /// This is a shortcut for [`Url::parse_with`] using UTF-8.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Scheme`], if the string doesn't contain a
    /// `://`, [`Error::Port`], if the port is invalid, [`Error::Matrix`], if
    /// a matrix parameter is not a `name=value` pair, or [`Error::Decode`], if
    /// a component contains a malformed escape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use urlkit_url::Url;
    ///
    /// // Create URL from string
    /// let url: Url = "http://foo.com:1234/foo;m%202=v%202".parse()?;
    /// assert_eq!(url.port(), Some(1234));
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    fn from_str(value: &str) -> Result<Self> {
        Self::parse_with(value, Charset::default())
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Url {
    /// Formats the URL for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_url_string())
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Name and value.
pub type Pair = (String, String);

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Creates a name and value pair.
///
/// # Examples
///
/// ```
/// use urlkit_url::pair;
///
/// // Create pair
/// let pair = pair("name", "value");
/// assert_eq!(pair, ("name".to_string(), "value".to_string()));
/// ```
#[inline]
pub fn pair<N, V>(name: N, value: V) -> Pair
where
    N: Into<String>,
    V: Into<String>,
{
    (name.into(), value.into())
}
