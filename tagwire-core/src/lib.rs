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

//! # Tagwire Core
//!
//! Core engine of the tagwire binary serialization framework: a record
//! type declares its members with order tags, and the engine derives a
//! deterministic byte layout from them.
//!
//! ## Architecture
//!
//! - **`record`**: the [`record::Record`] trait a serializable type
//!   implements (usually via `#[derive(Record)]` from `tagwire-derive`)
//! - **`member`**: member descriptors — tags, declared-type kinds, and the
//!   uniform get/set accessor interface
//! - **`schema`**: orders and validates a type's member table
//! - **`codec`**: serialize/deserialize against one built schema
//! - **`registry`**: caches one codec per type, resolving nested record
//!   members transitively
//! - **`buffer`**: little-endian `Writer`/`Reader` byte primitives
//! - **`encoding`**: per-member text encodings
//! - **`error`**: error handling
//!
//! ## Wire format
//!
//! Per-member regions concatenated in ascending tag order, no header and
//! no length prefix. Value-kind members (bare numerics, bare nested
//! records) are raw payload; nullable members carry a one-byte presence
//! marker (`0x00` absent, `0xFF` present) before their payload. Numerics
//! are fixed-width little-endian; text is encoded bytes plus a single
//! `0x00` terminator; nested records embed their own layout inline.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod member;
pub mod record;
pub mod registry;
pub mod schema;

pub use buffer::{Reader, Writer};
pub use codec::Codec;
pub use encoding::TextEncoding;
pub use error::Error;
pub use member::{FieldAccessor, MemberDef, MemberKind, RecordType, Tag, Value};
pub use record::Record;
pub use registry::CodecRegistry;
pub use schema::Schema;
