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

use thiserror::Error;

/// Error type for tagwire schema building, serialization and deserialization.
///
/// Schema-level variants (`SchemaConflict`, `UnknownEncoding`, `CyclicSchema`)
/// fire when a codec is built and are fatal for that type; the remaining
/// variants fire per serialize/deserialize call. Every failure is surfaced
/// synchronously to the immediate caller — there are no retries and no
/// partial-success mode.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Two tagged members of one type declare the same order value, or one
    /// member name is declared twice.
    #[error("schema conflict in `{0}`: {1}")]
    SchemaConflict(Cow<'static, str>, Cow<'static, str>),

    /// A text tag names an encoding label the engine does not know.
    #[error("unknown text encoding `{0}`")]
    UnknownEncoding(Cow<'static, str>),

    /// A type reaches itself through its own member types.
    #[error("cyclic member type `{0}` cannot be laid out")]
    CyclicSchema(Cow<'static, str>),

    /// A read would cross the end of the backing buffer.
    #[error("buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// A presence byte was neither `0x00` nor `0xFF` under strict validation.
    #[error("invalid presence byte 0x{0:02x}")]
    InvalidPresence(u8),

    /// A value could not be converted under the member's text encoding.
    #[error("{0}")]
    EncodingError(Cow<'static, str>),

    /// A value did not match its member's declared type category.
    #[error("{0}")]
    TypeError(Cow<'static, str>),
}

impl Error {
    #[cold]
    #[track_caller]
    pub fn schema_conflict<S: Into<Cow<'static, str>>>(type_name: S, detail: String) -> Self {
        Error::SchemaConflict(type_name.into(), detail.into())
    }

    #[cold]
    #[track_caller]
    pub fn unknown_encoding<S: Into<Cow<'static, str>>>(label: S) -> Self {
        Error::UnknownEncoding(label.into())
    }

    #[cold]
    #[track_caller]
    pub fn cyclic_schema<S: Into<Cow<'static, str>>>(type_name: S) -> Self {
        Error::CyclicSchema(type_name.into())
    }

    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, capacity: usize) -> Self {
        Error::BufferOutOfBound(offset, length, capacity)
    }

    #[cold]
    #[track_caller]
    pub fn invalid_presence(byte: u8) -> Self {
        Error::InvalidPresence(byte)
    }

    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::EncodingError(s.into())
    }

    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::TypeError(s.into())
    }
}

/// Ensures a condition holds; otherwise returns a [`Error::TypeError`].
///
/// ```
/// use tagwire_core::ensure;
/// use tagwire_core::error::Error;
///
/// fn check(n: i32) -> Result<(), Error> {
///     ensure!(n > 0, "value must be positive");
///     ensure!(n < 10, "value {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::type_error($msg));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::type_error(format!($fmt, $($arg)*)));
        }
    };
}
