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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::field::{classify, parse_tag, FieldInfo, FieldKind};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "#[derive(Record)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Record)] only supports structs",
            ));
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Record)] does not support generic types",
        ));
    }

    let mut defs = Vec::new();
    for field in fields {
        let tag = match parse_tag(field)? {
            Some(tag) => tag,
            None => continue,
        };
        let info = classify(field)?;
        if tag.encoding.is_some() && !matches!(info.kind, FieldKind::Text) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "`encoding` applies only to text members",
            ));
        }
        defs.push(member_def(field, &tag, &info));
    }

    let name = &input.ident;
    Ok(quote! {
        impl tagwire_core::record::Record for #name {
            fn type_name() -> &'static str {
                stringify!(#name)
            }

            fn members() -> Vec<tagwire_core::member::MemberDef> {
                vec![#(#defs),*]
            }
        }
    })
}

fn member_def(field: &syn::Field, tag: &crate::field::TagMeta, info: &FieldInfo) -> TokenStream {
    let ident = field.ident.as_ref().expect("named field");
    let name_lit = ident.to_string();
    let order = tag.order;
    let nullable = info.nullable;

    let tag_expr = match &tag.encoding {
        Some(label) => quote! { tagwire_core::member::Tag::text(#order, Some(#label)) },
        None => quote! { tagwire_core::member::Tag::new(#order) },
    };

    let kind_expr = match &info.kind {
        FieldKind::Int32 => quote! { tagwire_core::member::MemberKind::Int32 },
        FieldKind::UInt32 => quote! { tagwire_core::member::MemberKind::UInt32 },
        FieldKind::Int64 => quote! { tagwire_core::member::MemberKind::Int64 },
        FieldKind::UInt64 => quote! { tagwire_core::member::MemberKind::UInt64 },
        FieldKind::Text => quote! { tagwire_core::member::MemberKind::Text },
        FieldKind::Record(ty) => quote! {
            tagwire_core::member::MemberKind::Record(
                tagwire_core::member::RecordType::of::<#ty>(),
            )
        },
    };

    let get_expr = match (&info.kind, nullable) {
        (FieldKind::Record(_), false) => quote! {
            |obj: &Self| tagwire_core::member::Value::record(obj.#ident.clone())
        },
        (FieldKind::Record(_), true) => quote! {
            |obj: &Self| match obj.#ident.as_ref() {
                Some(v) => tagwire_core::member::Value::record(v.clone()),
                None => tagwire_core::member::Value::Null,
            }
        },
        (FieldKind::Text, _) => quote! {
            |obj: &Self| tagwire_core::member::Value::from(obj.#ident.clone())
        },
        _ => quote! {
            |obj: &Self| tagwire_core::member::Value::from(obj.#ident)
        },
    };

    let set_expr = match (&info.kind, nullable) {
        (FieldKind::Int32, false) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_i32()?; Ok(()) }
        },
        (FieldKind::Int32, true) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_opt_i32()?; Ok(()) }
        },
        (FieldKind::UInt32, false) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_u32()?; Ok(()) }
        },
        (FieldKind::UInt32, true) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_opt_u32()?; Ok(()) }
        },
        (FieldKind::Int64, false) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_i64()?; Ok(()) }
        },
        (FieldKind::Int64, true) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_opt_i64()?; Ok(()) }
        },
        (FieldKind::UInt64, false) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_u64()?; Ok(()) }
        },
        (FieldKind::UInt64, true) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_opt_u64()?; Ok(()) }
        },
        (FieldKind::Text, false) => quote! {
            |obj: &mut Self, value| {
                obj.#ident = value.into_opt_text()?.unwrap_or_default();
                Ok(())
            }
        },
        (FieldKind::Text, true) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_opt_text()?; Ok(()) }
        },
        (FieldKind::Record(ty), false) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_record::<#ty>()?; Ok(()) }
        },
        (FieldKind::Record(ty), true) => quote! {
            |obj: &mut Self, value| { obj.#ident = value.into_opt_record::<#ty>()?; Ok(()) }
        },
    };

    quote! {
        tagwire_core::member::MemberDef::new(
            #name_lit,
            #tag_expr,
            #kind_expr,
            #nullable,
            tagwire_core::member::FieldAccessor::<Self>::new(#get_expr, #set_expr),
        )
    }
}
