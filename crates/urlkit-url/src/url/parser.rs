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

//! URL parser.

use urlkit_pct::{decode, decode_with, Charset};

use super::error::{Error, Result};
use super::query::Query;
use super::segment::Segment;
use super::{Pair, Url};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a URL from a string.
///
/// The string is split into its components on their delimiters first, and
/// each component is decoded afterwards, so that escaped delimiters end up
/// as part of the values they were escaped in. Empty path segments and empty
/// matrix parameters are dropped, and an empty query is treated as absent.
pub fn parse(value: &str, charset: Charset) -> Result<Url> {
    let Some((scheme, rest)) = value.split_once("://") else {
        return Err(Error::Scheme(value.to_string()));
    };

    // Split off host, which might be a bracketed IPv6 literal
    let end = match rest.strip_prefix('[') {
        Some(inner) => inner.find(']').map_or(rest.len(), |index| index + 2),
        None => rest.find([':', '/', ';', '?', '#']).unwrap_or(rest.len()),
    };
    let (host, mut rest) = rest.split_at(end);

    // Split off port, if any
    let mut port = None;
    if let Some(tail) = rest.strip_prefix(':') {
        let end = tail.find(['/', ';', '?', '#']).unwrap_or(tail.len());
        let (digits, tail) = tail.split_at(end);
        if !digits.is_empty() {
            let number = digits
                .parse::<u16>()
                .map_err(|_| Error::Port(digits.to_string()))?;
            port = Some(number);
        }
        rest = tail;
    }

    // Split off fragment and query, and what's left is the path
    let (rest, fragment) = match rest.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (rest, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    // Assemble URL from decoded components
    let mut url = Url::new(scheme, decode(host)?);
    url.port = port;
    url.charset = charset;
    url.path = parse_path(path, charset)?;
    url.query = match query {
        Some(query) => parse_query(query, charset)?,
        None => None,
    };
    url.fragment = match fragment {
        Some(fragment) => Some(decode_with(fragment, charset)?.into_owned()),
        None => None,
    };

    // Return URL
    tracing::trace!(url = %value, "parsed url");
    Ok(url)
}

/// Parses path segments and their matrix parameters.
fn parse_path(path: &str, charset: Charset) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    for raw in path.split('/').filter(|raw| !raw.is_empty()) {
        let mut chunks = raw.split(';');
        let value = chunks.next().unwrap_or_default();

        // Matrix parameters must be pairs, but empty ones are dropped
        let params = chunks
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                parse_pair(chunk, charset)?
                    .ok_or_else(|| Error::Matrix(chunk.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        // Skip segments that consist of nothing but semicolons
        if value.is_empty() && params.is_empty() {
            continue;
        }
        let value = decode_with(value, charset)?;
        segments.push(Segment::with_params(value, params));
    }
    Ok(segments)
}

/// Parses a query, falling back to unstructured text.
///
/// A query is only structured if every `&`-delimited chunk is a pair with
/// exactly one `=`, since anything else can't be represented as pairs.
fn parse_query(query: &str, charset: Charset) -> Result<Option<Query>> {
    if query.is_empty() {
        return Ok(None);
    }

    // Attempt to parse query as pairs
    let mut pairs = Vec::new();
    for chunk in query.split('&') {
        match parse_pair(chunk, charset)? {
            Some(pair) => pairs.push(pair),
            None => {
                tracing::debug!(query = %query, "unstructured query");
                let text = decode_with(query, charset)?;
                return Ok(Some(Query::Unstructured(text.into_owned())));
            }
        }
    }
    Ok(Some(Query::Structured(pairs)))
}

/// Parses a `name=value` pair, if the chunk contains exactly one `=`.
fn parse_pair(chunk: &str, charset: Charset) -> Result<Option<Pair>> {
    let Some((name, value)) = chunk.split_once('=') else {
        return Ok(None);
    };
    if value.contains('=') {
        return Ok(None);
    }

    // Decode name and value separately
    let name = decode_with(name, charset)?;
    let value = decode_with(value, charset)?;
    Ok(Some((name.into_owned(), value.into_owned())))
}
