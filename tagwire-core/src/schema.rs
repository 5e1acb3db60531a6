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

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::encoding::TextEncoding;
use crate::error::Error;
use crate::member::{MemberDef, MemberKind};

/// The ordered, immutable description of which members of a type are
/// serialized and how.
///
/// Member order is the sorted-by-tag-order projection of the declared
/// member table and is the only source of truth for the byte layout;
/// serialize and deserialize both traverse it.
pub struct Schema {
    type_name: &'static str,
    members: Vec<MemberDef>,
    encodings: HashMap<&'static str, TextEncoding>,
    value_kinds: HashSet<&'static str>,
}

impl Schema {
    /// Validates and orders a type's declared member table.
    ///
    /// Fails on a duplicate order value, a duplicate member name, an
    /// unknown encoding label, or an encoding label on a non-text member.
    pub fn build(type_name: &'static str, defs: Vec<MemberDef>) -> Result<Schema, Error> {
        let mut by_order: BTreeMap<u32, MemberDef> = BTreeMap::new();
        let mut names: HashSet<&'static str> = HashSet::new();
        let mut encodings = HashMap::new();
        let mut value_kinds = HashSet::new();

        for def in defs {
            let order = def.tag().order();
            if !names.insert(def.name()) {
                return Err(Error::schema_conflict(
                    type_name,
                    format!("member `{}` is tagged more than once", def.name()),
                ));
            }
            if let Some(previous) = by_order.get(&order) {
                return Err(Error::schema_conflict(
                    type_name,
                    format!(
                        "members `{}` and `{}` share order {}",
                        previous.name(),
                        def.name(),
                        order
                    ),
                ));
            }

            match def.kind() {
                MemberKind::Text => {
                    let encoding = match def.tag().encoding() {
                        Some(label) => TextEncoding::for_label(label)?,
                        None => TextEncoding::default(),
                    };
                    encodings.insert(def.name(), encoding);
                }
                _ => {
                    if let Some(label) = def.tag().encoding() {
                        return Err(Error::type_error(format!(
                            "member `{}` of `{}` is not text but names encoding `{}`",
                            def.name(),
                            type_name,
                            label
                        )));
                    }
                    // text can always be absent on the wire, everything else
                    // is value-kind unless declared nullable
                    if !def.nullable() {
                        value_kinds.insert(def.name());
                    }
                }
            }

            by_order.insert(order, def);
        }

        Ok(Schema {
            type_name,
            members: by_order.into_values().collect(),
            encodings,
            value_kinds,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Members in wire order.
    pub fn members(&self) -> &[MemberDef] {
        &self.members
    }

    /// Member names in wire order.
    pub fn ordered_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.iter().map(|m| m.name())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The text encoding configured for a member; UTF-8 unless the member's
    /// tag named another label.
    pub fn encoding(&self, name: &str) -> TextEncoding {
        self.encodings.get(name).copied().unwrap_or_default()
    }

    /// Whether a member can never be absent, and so carries no presence
    /// byte on the wire.
    pub fn is_value_kind(&self, name: &str) -> bool {
        self.value_kinds.contains(name)
    }
}
