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

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::buffer::{Reader, Writer};
use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::member::{MemberDef, MemberKind, Value};
use crate::record::Record;
use crate::registry::CodecRegistry;
use crate::schema::Schema;

/// Presence byte for an absent nullable member.
pub const PRESENCE_ABSENT: u8 = 0x00;
/// Presence byte for a present nullable member.
pub const PRESENCE_PRESENT: u8 = 0xFF;

/// Type-erased codec for one concrete record type.
///
/// One instance exists per type per registry; it is shared read-only across
/// arbitrarily many serialize/deserialize calls. Nested record members were
/// resolved to their own codecs when this one was built, so a call never
/// goes back to the registry.
pub(crate) struct RawCodec {
    schema: Schema,
    nested: HashMap<&'static str, Arc<RawCodec>>,
    new_instance: fn() -> Box<dyn Any>,
    config: Config,
}

impl RawCodec {
    pub(crate) fn build<T: Record>(
        registry: &CodecRegistry,
        in_progress: &mut Vec<TypeId>,
    ) -> Result<RawCodec, Error> {
        let schema = Schema::build(T::type_name(), T::members())?;
        let mut nested = HashMap::new();
        for member in schema.members() {
            if let MemberKind::Record(record_type) = member.kind() {
                let codec = (record_type.resolve)(registry, in_progress)?;
                nested.insert(member.name(), codec);
            }
        }
        let new_instance: fn() -> Box<dyn Any> = || Box::new(T::default());
        Ok(RawCodec {
            schema,
            nested,
            new_instance,
            config: registry.config(),
        })
    }

    pub(crate) fn schema(&self) -> &Schema {
        &self.schema
    }

    fn nested_codec(&self, member: &MemberDef) -> Result<&RawCodec, Error> {
        self.nested.get(member.name()).map(|c| c.as_ref()).ok_or_else(|| {
            Error::type_error(format!(
                "no codec resolved for nested member `{}` of `{}`",
                member.name(),
                self.schema.type_name()
            ))
        })
    }

    pub(crate) fn write(&self, obj: &dyn Any, writer: &mut Writer) -> Result<(), Error> {
        for member in self.schema.members() {
            let value = member.accessor().get(obj)?;
            if !self.schema.is_value_kind(member.name()) {
                if value.is_null() {
                    writer.write_u8(PRESENCE_ABSENT);
                    continue;
                }
                writer.write_u8(PRESENCE_PRESENT);
            } else {
                ensure!(
                    !value.is_null(),
                    "value-kind member `{}` of `{}` yielded no value",
                    member.name(),
                    self.schema.type_name()
                );
            }
            match member.kind() {
                MemberKind::Int32 => writer.write_i32(value.into_i32()?),
                MemberKind::UInt32 => writer.write_u32(value.into_u32()?),
                MemberKind::Int64 => writer.write_i64(value.into_i64()?),
                MemberKind::UInt64 => writer.write_u64(value.into_u64()?),
                MemberKind::Text => {
                    let text = value.into_text()?;
                    let bytes = self.schema.encoding(member.name()).encode(&text)?;
                    writer.write_bytes(&bytes);
                    writer.write_u8(0);
                }
                MemberKind::Record(_) => {
                    let boxed = value.into_boxed_record()?;
                    self.nested_codec(member)?.write(boxed.as_ref(), writer)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn read(&self, reader: &mut Reader<'_>) -> Result<Box<dyn Any>, Error> {
        let mut obj = (self.new_instance)();
        for member in self.schema.members() {
            if !self.schema.is_value_kind(member.name()) {
                let presence = reader.read_u8()?;
                if presence == PRESENCE_ABSENT {
                    member.accessor().set(obj.as_mut(), Value::Null)?;
                    continue;
                }
                if presence != PRESENCE_PRESENT && !self.config.is_lenient_presence() {
                    return Err(Error::invalid_presence(presence));
                }
            }
            let value = match member.kind() {
                MemberKind::Int32 => Value::I32(reader.read_i32()?),
                MemberKind::UInt32 => Value::U32(reader.read_u32()?),
                MemberKind::Int64 => Value::I64(reader.read_i64()?),
                MemberKind::UInt64 => Value::U64(reader.read_u64()?),
                MemberKind::Text => {
                    let bytes = reader.read_until_zero()?;
                    Value::Text(self.schema.encoding(member.name()).decode(bytes)?)
                }
                MemberKind::Record(_) => {
                    Value::Record(self.nested_codec(member)?.read(reader)?)
                }
            };
            member.accessor().set(obj.as_mut(), value)?;
        }
        Ok(obj)
    }
}

/// The per-type serializer/deserializer against one built schema.
///
/// Obtained from [`CodecRegistry::codec`]; cloning is cheap and clones
/// share the underlying schema.
pub struct Codec<T> {
    raw: Arc<RawCodec>,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Codec {
            raw: Arc::clone(&self.raw),
            marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: Record> Codec<T> {
    pub(crate) fn new(raw: Arc<RawCodec>) -> Codec<T> {
        Codec {
            raw,
            marker: PhantomData,
        }
    }

    /// Lays out one instance as bytes: per-member regions concatenated in
    /// ascending tag order, with no outer length prefix or header.
    ///
    /// Pure function of the instance and the schema.
    pub fn serialize(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::default();
        self.raw.write(value, &mut writer)?;
        Ok(writer.dump())
    }

    /// Reconstructs an instance from a cursor positioned at the start of
    /// this type's layout, advancing the cursor past the consumed bytes.
    pub fn deserialize(&self, reader: &mut Reader<'_>) -> Result<T, Error> {
        let obj = self.raw.read(reader)?;
        obj.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            Error::type_error(format!(
                "codec produced a value that is not `{}`",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Member names in wire order, as built from the type's tags.
    pub fn member_names(&self) -> Vec<&'static str> {
        self.raw.schema().ordered_names().collect()
    }
}
