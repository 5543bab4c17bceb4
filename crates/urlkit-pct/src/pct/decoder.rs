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

//! Percent-decoder.

use std::borrow::Cow;
#[cfg(feature = "tinyvec")]
use tinyvec::TinyVec;

use super::charset::Charset;
use super::error::{Error, Result};

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Buffer for runs of escaped bytes.
///
/// Runs are rarely longer than a handful of bytes, which is why we keep them
/// inline, unless the `tinyvec` feature is disabled.
#[cfg(feature = "tinyvec")]
type Buffer = TinyVec<[u8; 16]>;

/// Buffer for runs of escaped bytes.
#[cfg(not(feature = "tinyvec"))]
type Buffer = Vec<u8>;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Decodes a percent-encoded string as UTF-8.
///
/// This is a shortcut for [`decode_with`] using [`Charset::Utf8`].
///
/// # Errors
///
/// This function returns [`Error::Incomplete`], if an escape is cut short by
/// the end of the input, or [`Error::Invalid`], if an escape is not followed
/// by two hexadecimal digits.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlkit_pct::decode;
///
/// // Decode string
/// assert_eq!(decode("%23")?, "#");
/// assert_eq!(decode("asdf")?, "asdf");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn decode(value: &str) -> Result<Cow<'_, str>> {
    decode_with(value, Charset::Utf8)
}

/// Decodes a percent-encoded string with the given character set.
///
/// The input is scanned from left to right, and consecutive escapes are
/// collected into a run of bytes which is decoded as a whole, as a single
/// character might span multiple escapes, e.g., `%E2%98%83`. Characters that
/// are not part of an escape are emitted as is, after the preceding run was
/// decoded. Malformed byte sequences are replaced with �.
///
/// If the input doesn't contain any escape, a borrowed reference is returned.
///
/// # Errors
///
/// This function returns [`Error::Incomplete`], if an escape is cut short by
/// the end of the input, or [`Error::Invalid`], if an escape is not followed
/// by two hexadecimal digits. A single malformed escape fails the whole call.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlkit_pct::{decode_with, Charset};
///
/// // Decode string from UTF-16
/// let value = decode_with("clef%D8%34%DD%1E", Charset::Utf16Be)?;
/// assert_eq!(value, "clef\u{1D11E}");
/// # Ok(())
/// # }
/// ```
pub fn decode_with(value: &str, charset: Charset) -> Result<Cow<'_, str>> {
    if !value.contains('%') {
        return Ok(Cow::Borrowed(value));
    }

    // Initialize output and run of escaped bytes
    let mut output = String::with_capacity(value.len());
    let mut run = Buffer::default();

    // Every escape is three ASCII characters long, so the position will always
    // be at a character boundary after consuming an escape or literal text
    let mut position = 0;
    while position < value.len() {
        if value.as_bytes()[position] == b'%' {
            run.push(octet(value, position)?);
            position += 3;
        } else {
            flush(&mut run, &mut output, charset);

            // Consume all characters up to the next escape
            let end = value[position..]
                .find('%')
                .map_or(value.len(), |index| position + index);
            output.push_str(&value[position..end]);
            position = end;
        }
    }

    // Decode trailing run and return output
    flush(&mut run, &mut output, charset);
    Ok(Cow::Owned(output))
}

// ----------------------------------------------------------------------------

/// Parses the escape at the given position into a byte.
///
/// The escape is incomplete unless at least two characters follow the `%`,
/// which is counted in characters and not bytes, so that a single trailing
/// multi-byte character is not mistaken for a pair of digits.
fn octet(value: &str, position: usize) -> Result<u8> {
    let rest = &value[position + 1..];
    let (Some(_), Some(digits)) = (rest.chars().nth(1), rest.as_bytes().get(..2))
    else {
        return Err(Error::Incomplete {
            value: value[position..].to_string(),
            position,
        });
    };

    // Both digits must be hexadecimal, but since they might be part of a
    // multi-byte character, the tuple is extracted as characters
    let mut octet = [0];
    hex::decode_to_slice(digits, &mut octet).map_err(|_| Error::Invalid {
        tuple: value[position..].chars().take(3).collect(),
        position,
    })?;
    Ok(octet[0])
}

/// Decodes and clears the run of escaped bytes, if any.
fn flush(run: &mut Buffer, output: &mut String, charset: Charset) {
    if !run.is_empty() {
        charset.decode_into(run, output);
        run.clear();
    }
}
