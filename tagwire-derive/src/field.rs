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

//! Parsing of `#[tag(...)]` attributes and classification of member types.

use syn::{Field, GenericArgument, PathArguments, Type};

/// Parsed `#[tag(order = N, encoding = "label")]` attribute.
pub struct TagMeta {
    pub order: u32,
    pub encoding: Option<String>,
}

/// Extracts the field's tag, if any.
///
/// A field with no `#[tag]` attribute opts out of serialization. More than
/// one tag on a field makes its order ambiguous and is rejected here.
pub fn parse_tag(field: &Field) -> syn::Result<Option<TagMeta>> {
    let mut found: Option<TagMeta> = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "member carries more than one #[tag] attribute",
            ));
        }
        let mut order: Option<u32> = None;
        let mut encoding: Option<String> = None;
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("order") {
                let lit: syn::LitInt = nested.value()?.parse()?;
                order = Some(lit.base10_parse()?);
            } else if nested.path.is_ident("encoding") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                encoding = Some(lit.value());
            } else {
                return Err(nested.error("expected `order` or `encoding`"));
            }
            Ok(())
        })?;
        let order = order
            .ok_or_else(|| syn::Error::new_spanned(attr, "#[tag] requires `order = <n>`"))?;
        found = Some(TagMeta { order, encoding });
    }
    Ok(found)
}

/// Declared-type category of a tagged field, as far as the macro can see
/// syntactically. Anything that is not a known primitive, text, or
/// rejected shape is assumed to be a nested record; a type that does not
/// actually implement `Record` fails the generated bounds instead.
pub enum FieldKind {
    Int32,
    UInt32,
    Int64,
    UInt64,
    Text,
    Record(Type),
}

pub struct FieldInfo {
    pub kind: FieldKind,
    pub nullable: bool,
}

pub fn classify(field: &Field) -> syn::Result<FieldInfo> {
    let ty = &field.ty;
    match option_inner(ty) {
        Some(inner) => {
            if option_inner(inner).is_some() {
                return Err(syn::Error::new_spanned(
                    ty,
                    "nested Option members are not supported",
                ));
            }
            Ok(FieldInfo {
                kind: classify_base(inner)?,
                nullable: true,
            })
        }
        None => Ok(FieldInfo {
            kind: classify_base(ty)?,
            nullable: false,
        }),
    }
}

fn classify_base(ty: &Type) -> syn::Result<FieldKind> {
    let path = match ty {
        Type::Path(p) if p.qself.is_none() => &p.path,
        Type::Array(_) | Type::Slice(_) => {
            return Err(syn::Error::new_spanned(
                ty,
                "array and collection members are not supported",
            ));
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "unsupported member type",
            ));
        }
    };
    let segment = match path.segments.last() {
        Some(s) => s,
        None => return Err(syn::Error::new_spanned(ty, "unsupported member type")),
    };
    let ident = segment.ident.to_string();
    match ident.as_str() {
        "Vec" | "VecDeque" | "LinkedList" | "HashMap" | "BTreeMap" | "HashSet" | "BTreeSet" => {
            Err(syn::Error::new_spanned(
                ty,
                "array and collection members are not supported",
            ))
        }
        "bool" | "char" | "f32" | "f64" | "i8" | "i16" | "u8" | "u16" | "i128" | "u128"
        | "isize" | "usize" => Err(syn::Error::new_spanned(
            ty,
            format!("unsupported member type `{}`", ident),
        )),
        "i32" => Ok(FieldKind::Int32),
        "u32" => Ok(FieldKind::UInt32),
        "i64" => Ok(FieldKind::Int64),
        "u64" => Ok(FieldKind::UInt64),
        "String" => Ok(FieldKind::Text),
        _ => Ok(FieldKind::Record(ty.clone())),
    }
}

/// Returns the payload type of an `Option<T>` field, if the field is one.
fn option_inner(ty: &Type) -> Option<&Type> {
    let path = match ty {
        Type::Path(p) if p.qself.is_none() => &p.path,
        _ => return None,
    };
    let segment = path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let args = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args,
        _ => return None,
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
