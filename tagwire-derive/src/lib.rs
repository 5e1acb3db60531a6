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

//! # Tagwire Derive Macro
//!
//! Provides `#[derive(Record)]`, which turns `#[tag(...)]` field
//! attributes into the static member table consumed by `tagwire-core`.
//!
//! Members opt in: a field without a `#[tag]` attribute is not part of the
//! byte layout and keeps its `Default` value on deserialize.
//!
//! ```rust
//! use tagwire_derive::Record;
//!
//! #[derive(Record, Clone, Default, Debug, PartialEq)]
//! struct Login {
//!     #[tag(order = 0, encoding = "latin-1")]
//!     user: Option<String>,
//!     #[tag(order = 1)]
//!     attempts: u32,
//!     session: u64, // untagged, never serialized
//! }
//! ```
//!
//! Supported member types: `i32`, `u32`, `i64`, `u64` (value-kind),
//! `Option` of those (nullable, presence byte on the wire), `String` and
//! `Option<String>` (text, NUL-terminated under the tag's encoding), and
//! any other `Record` type, bare or `Option`-wrapped, for nested layouts.
//! Array and collection members are rejected at compile time.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod field;
mod record;

/// Derive macro generating the [`Record`] member table from `#[tag(...)]`
/// attributes.
///
/// `#[tag(order = N)]` declares a member's position in the byte layout;
/// `#[tag(order = N, encoding = "label")]` additionally names the text
/// encoding of a text member. Order values must be unique within a type —
/// duplicates fail when the type's codec is built.
#[proc_macro_derive(Record, attributes(tag))]
pub fn proc_macro_derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
