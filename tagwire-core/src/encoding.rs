// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;

use crate::error::Error;

/// Character encoding applied to one text member.
///
/// Labels are resolved once, when the member's schema is built. The wire
/// format terminates text with a single `0x00` byte, so only encodings that
/// never emit a zero byte inside a character are offered; UTF-16 is excluded
/// for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Resolves a tag's encoding label, case-insensitively.
    pub fn for_label(label: &str) -> Result<TextEncoding, Error> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(Error::unknown_encoding(label.to_owned())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    pub fn encode<'a>(&self, s: &'a str) -> Result<Cow<'a, [u8]>, Error> {
        match self {
            TextEncoding::Utf8 => Ok(Cow::Borrowed(s.as_bytes())),
            TextEncoding::Latin1 => {
                let mut out = Vec::with_capacity(s.len());
                for c in s.chars() {
                    let code = c as u32;
                    if code > 0xFF {
                        return Err(Error::encoding_error(format!(
                            "char `{}` (U+{:04X}) cannot be encoded as latin-1",
                            c, code
                        )));
                    }
                    out.push(code as u8);
                }
                Ok(Cow::Owned(out))
            }
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, Error> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| Error::encoding_error(format!("malformed utf-8 text: {}", e))),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}
