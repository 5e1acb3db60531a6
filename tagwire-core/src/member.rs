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
use std::fmt;
use std::sync::Arc;

use crate::codec::RawCodec;
use crate::error::Error;
use crate::record::Record;
use crate::registry::CodecRegistry;

/// A member value in transit between an instance and the codec.
///
/// `Null` stands for an absent nullable member; accessors never hand the
/// codec a `Null` for a value-kind member.
pub enum Value {
    Null,
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Text(String),
    Record(Box<dyn Any>),
}

impl Value {
    /// Boxes a nested record value.
    pub fn record<T: Any>(value: T) -> Value {
        Value::Record(Box::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn category(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::I32(_) => "i32",
            Value::U32(_) => "u32",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::Text(_) => "text",
            Value::Record(_) => "record",
        }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::type_error(format!(
            "expected {} value, found {}",
            expected,
            self.category()
        ))
    }

    pub fn into_i32(self) -> Result<i32, Error> {
        match self {
            Value::I32(v) => Ok(v),
            other => Err(other.mismatch("i32")),
        }
    }

    pub fn into_u32(self) -> Result<u32, Error> {
        match self {
            Value::U32(v) => Ok(v),
            other => Err(other.mismatch("u32")),
        }
    }

    pub fn into_i64(self) -> Result<i64, Error> {
        match self {
            Value::I64(v) => Ok(v),
            other => Err(other.mismatch("i64")),
        }
    }

    pub fn into_u64(self) -> Result<u64, Error> {
        match self {
            Value::U64(v) => Ok(v),
            other => Err(other.mismatch("u64")),
        }
    }

    pub fn into_opt_i32(self) -> Result<Option<i32>, Error> {
        match self {
            Value::Null => Ok(None),
            other => other.into_i32().map(Some),
        }
    }

    pub fn into_opt_u32(self) -> Result<Option<u32>, Error> {
        match self {
            Value::Null => Ok(None),
            other => other.into_u32().map(Some),
        }
    }

    pub fn into_opt_i64(self) -> Result<Option<i64>, Error> {
        match self {
            Value::Null => Ok(None),
            other => other.into_i64().map(Some),
        }
    }

    pub fn into_opt_u64(self) -> Result<Option<u64>, Error> {
        match self {
            Value::Null => Ok(None),
            other => other.into_u64().map(Some),
        }
    }

    pub fn into_text(self) -> Result<String, Error> {
        match self {
            Value::Text(v) => Ok(v),
            other => Err(other.mismatch("text")),
        }
    }

    pub fn into_opt_text(self) -> Result<Option<String>, Error> {
        match self {
            Value::Null => Ok(None),
            other => other.into_text().map(Some),
        }
    }

    pub fn into_record<T: Any>(self) -> Result<T, Error> {
        match self {
            Value::Record(boxed) => boxed.downcast::<T>().map(|b| *b).map_err(|_| {
                Error::type_error(format!(
                    "record value is not a `{}`",
                    std::any::type_name::<T>()
                ))
            }),
            other => Err(other.mismatch("record")),
        }
    }

    pub fn into_opt_record<T: Any>(self) -> Result<Option<T>, Error> {
        match self {
            Value::Null => Ok(None),
            other => other.into_record().map(Some),
        }
    }

    pub(crate) fn into_boxed_record(self) -> Result<Box<dyn Any>, Error> {
        match self {
            Value::Record(boxed) => Ok(boxed),
            other => Err(other.mismatch("record")),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::I32(v) => write!(f, "I32({})", v),
            Value::U32(v) => write!(f, "U32({})", v),
            Value::I64(v) => write!(f, "I64({})", v),
            Value::U64(v) => write!(f, "U64({})", v),
            Value::Text(v) => write!(f, "Text({:?})", v),
            Value::Record(_) => write!(f, "Record(..)"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::I32(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Value {
        Value::U32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Value {
        Value::U64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Text(v.to_owned())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(v: Option<T>) -> Value {
        match v {
            Some(inner) => Value::from(inner),
            None => Value::Null,
        }
    }
}

type ResolveFn = fn(&CodecRegistry, &mut Vec<TypeId>) -> Result<Arc<RawCodec>, Error>;

/// Handle to a nested record member's type, used by the registry to resolve
/// the nested codec transitively while the owning codec is built.
pub struct RecordType {
    pub(crate) type_name: &'static str,
    pub(crate) resolve: ResolveFn,
}

impl RecordType {
    pub fn of<T: Record>() -> RecordType {
        RecordType {
            type_name: T::type_name(),
            resolve: CodecRegistry::resolve_raw::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordType({})", self.type_name)
    }
}

/// Declared-type category of a member; the codec dispatches on this.
#[derive(Debug)]
pub enum MemberKind {
    Int32,
    UInt32,
    Int64,
    UInt64,
    Text,
    Record(RecordType),
}

/// The serialization tag attached to a member declaration.
///
/// `order` is the member's position in the byte layout and must be unique
/// within one type. The text-specialized variant additionally names the
/// member's character encoding; omitted, text defaults to UTF-8. Tags are
/// read once, when the schema is built, and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    order: u32,
    encoding: Option<&'static str>,
}

impl Tag {
    /// The plain tag.
    pub fn new(order: u32) -> Tag {
        Tag {
            order,
            encoding: None,
        }
    }

    /// The text-specialized tag.
    pub fn text(order: u32, encoding: Option<&'static str>) -> Tag {
        Tag { order, encoding }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn encoding(&self) -> Option<&'static str> {
        self.encoding
    }
}

/// Uniform get/set capability over one declared member of a type.
///
/// The schema only ever depends on this interface, never on how the member
/// is stored.
pub trait MemberAccessor: Send + Sync {
    fn get(&self, obj: &dyn Any) -> Result<Value, Error>;
    fn set(&self, obj: &mut dyn Any, value: Value) -> Result<(), Error>;
}

/// [`MemberAccessor`] backed by a pair of plain functions over the concrete
/// owning type, as generated by `#[derive(Record)]`.
pub struct FieldAccessor<T: 'static> {
    get: fn(&T) -> Value,
    set: fn(&mut T, Value) -> Result<(), Error>,
}

impl<T: 'static> FieldAccessor<T> {
    pub fn new(get: fn(&T) -> Value, set: fn(&mut T, Value) -> Result<(), Error>) -> Self {
        FieldAccessor { get, set }
    }

    fn downcast<'a>(&self, obj: &'a dyn Any) -> Result<&'a T, Error> {
        obj.downcast_ref::<T>().ok_or_else(|| {
            Error::type_error(format!(
                "accessor applied to a value that is not `{}`",
                std::any::type_name::<T>()
            ))
        })
    }
}

impl<T: 'static> MemberAccessor for FieldAccessor<T> {
    fn get(&self, obj: &dyn Any) -> Result<Value, Error> {
        Ok((self.get)(self.downcast(obj)?))
    }

    fn set(&self, obj: &mut dyn Any, value: Value) -> Result<(), Error> {
        let obj = obj.downcast_mut::<T>().ok_or_else(|| {
            Error::type_error(format!(
                "accessor applied to a value that is not `{}`",
                std::any::type_name::<T>()
            ))
        })?;
        (self.set)(obj, value)
    }
}

/// One declared, tagged member of a record type.
///
/// Immutable once built; owned exclusively by the schema it belongs to.
/// `nullable` marks reference-kind members, which carry a presence byte on
/// the wire; value-kind members can never be absent and carry none.
pub struct MemberDef {
    name: &'static str,
    tag: Tag,
    kind: MemberKind,
    nullable: bool,
    accessor: Box<dyn MemberAccessor>,
}

impl MemberDef {
    pub fn new(
        name: &'static str,
        tag: Tag,
        kind: MemberKind,
        nullable: bool,
        accessor: impl MemberAccessor + 'static,
    ) -> MemberDef {
        MemberDef {
            name,
            tag,
            kind,
            nullable,
            accessor: Box::new(accessor),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn kind(&self) -> &MemberKind {
        &self.kind
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub(crate) fn accessor(&self) -> &dyn MemberAccessor {
        self.accessor.as_ref()
    }
}

impl fmt::Debug for MemberDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDef")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .field("nullable", &self.nullable)
            .finish_non_exhaustive()
    }
}
