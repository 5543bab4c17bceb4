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

//! Character set.

use std::char::{decode_utf16, REPLACEMENT_CHARACTER};

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Character set.
///
/// The character set determines how a character is turned into bytes before
/// each byte is percent-encoded, and how a run of percent-decoded bytes is
/// turned back into text. URLs should use UTF-8, which is why it's the default,
/// but UTF-16 in both byte orders is supported for systems that expect it.
///
/// # Examples
///
/// ```
/// use urlkit_pct::{encode, Charset, Profile};
///
/// // Encode snowman in UTF-16 (big endian)
/// let profile = Profile::PATH.with_charset(Charset::Utf16Be);
/// assert_eq!(encode("\u{2603}", &profile), "%26%03");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8.
    #[default]
    Utf8,
    /// UTF-16, big endian.
    Utf16Be,
    /// UTF-16, little endian.
    Utf16Le,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Charset {
    /// Encodes a character into the given buffer, returning the written bytes.
    ///
    /// Characters outside of the Basic Multilingual Plane are always encoded
    /// as a whole, which for UTF-16 means as a surrogate pair of four bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_pct::Charset;
    ///
    /// // Encode musical G clef
    /// let mut buffer = [0; 4];
    /// let bytes = Charset::Utf16Be.encode_char('\u{1D11E}', &mut buffer);
    /// assert_eq!(bytes, [0xD8, 0x34, 0xDD, 0x1E]);
    /// ```
    #[must_use]
    pub fn encode_char(self, char: char, buffer: &mut [u8; 4]) -> &[u8] {
        match self {
            Charset::Utf8 => char.encode_utf8(buffer).as_bytes(),
            Charset::Utf16Be | Charset::Utf16Le => {
                let mut units = [0; 2];
                let units = char.encode_utf16(&mut units);

                // Write each code unit in the configured byte order
                let chunks = buffer.chunks_exact_mut(2);
                for (chunk, unit) in chunks.zip(units.iter()) {
                    chunk.copy_from_slice(&match self {
                        Charset::Utf16Le => unit.to_le_bytes(),
                        _ => unit.to_be_bytes(),
                    });
                }
                &buffer[..units.len() * 2]
            }
        }
    }

    /// Decodes a run of bytes and appends the result to the given string.
    ///
    /// Malformed sequences are replaced with the Unicode replacement character
    /// �, which includes a trailing byte that doesn't form a UTF-16 code unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit_pct::Charset;
    ///
    /// // Decode snowman
    /// let mut value = String::new();
    /// Charset::Utf8.decode_into(&[0xE2, 0x98, 0x83], &mut value);
    /// assert_eq!(value, "\u{2603}");
    /// ```
    pub fn decode_into(self, bytes: &[u8], value: &mut String) {
        if self == Charset::Utf8 {
            value.push_str(&String::from_utf8_lossy(bytes));
            return;
        }

        // Combine pairs of bytes into code units in the configured byte order
        let chunks = bytes.chunks_exact(2);
        let rest = chunks.remainder();
        let units = chunks.map(|chunk| {
            let pair = [chunk[0], chunk[1]];
            match self {
                Charset::Utf16Le => u16::from_le_bytes(pair),
                _ => u16::from_be_bytes(pair),
            }
        });

        // Decode code units, which might contain unpaired surrogates
        value.extend(
            decode_utf16(units).map(|res| res.unwrap_or(REPLACEMENT_CHARACTER)),
        );
        if !rest.is_empty() {
            value.push(REPLACEMENT_CHARACTER);
        }
    }
}
