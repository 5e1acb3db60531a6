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

//! # Tagwire
//!
//! Declarative binary object serialization: tag a type's members with an
//! order index, and tagwire gives the type a deterministic byte layout —
//! per-member regions concatenated in ascending tag order, with no header,
//! length prefix, or version tag.
//!
//! A [`CodecRegistry`] builds and caches one [`Codec`] per type. Nested
//! record members are resolved through the same registry, so asking for a
//! root type wires up everything it reaches.
//!
//! ```rust
//! use tagwire::{CodecRegistry, Reader, Record};
//!
//! #[derive(Record, Clone, Default, Debug, PartialEq)]
//! struct Greeting {
//!     #[tag(order = 0)]
//!     name: Option<String>,
//!     #[tag(order = 1)]
//!     value: i32,
//! }
//!
//! # fn main() -> Result<(), tagwire::Error> {
//! let registry = CodecRegistry::default();
//! let codec = registry.codec::<Greeting>()?;
//!
//! let greeting = Greeting {
//!     name: Some("hi".to_string()),
//!     value: 7,
//! };
//! let bytes = codec.serialize(&greeting)?;
//! assert_eq!(bytes, [0xFF, b'h', b'i', 0x00, 0x07, 0x00, 0x00, 0x00]);
//!
//! let mut reader = Reader::new(&bytes);
//! let back: Greeting = codec.deserialize(&mut reader)?;
//! assert_eq!(back, greeting);
//! # Ok(())
//! # }
//! ```
//!
//! Nullable members (`Option`-wrapped, and all text) carry a one-byte
//! presence marker: `0x00` absent, `0xFF` present. Value-kind members
//! (bare numerics, bare nested records) can never be absent and carry
//! none. Strict presence validation is the default; see
//! [`CodecRegistry::lenient_presence`].

pub use tagwire_core::buffer::{Reader, Writer};
pub use tagwire_core::codec::Codec;
pub use tagwire_core::config::Config;
pub use tagwire_core::encoding::TextEncoding;
pub use tagwire_core::error::Error;
pub use tagwire_core::member::{
    FieldAccessor, MemberAccessor, MemberDef, MemberKind, RecordType, Tag, Value,
};
pub use tagwire_core::record::Record;
pub use tagwire_core::registry::CodecRegistry;
pub use tagwire_core::schema::Schema;

pub use tagwire_derive::Record;
