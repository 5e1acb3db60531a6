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

use crate::member::MemberDef;

/// A type whose tagged members can be laid out as bytes.
///
/// Implementations declare their member table once; the schema builder
/// orders and validates it when the type's codec is first requested.
/// `#[derive(Record)]` from `tagwire-derive` generates the table from
/// `#[tag(...)]` attributes, but a hand-written impl is equally valid.
///
/// The `Default` bound is the deserializer's constructor: a fresh instance
/// is default-constructed and then populated member by member, so members
/// left untagged keep their default values.
pub trait Record: Default + 'static {
    /// Display name used in schema diagnostics.
    fn type_name() -> &'static str;

    /// The declared member table. Only tagged members appear here; order
    /// within the returned list is irrelevant (the tag's `order` decides
    /// the layout).
    fn members() -> Vec<MemberDef>;
}
