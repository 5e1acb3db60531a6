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

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::codec::{Codec, RawCodec};
use crate::config::Config;
use crate::error::Error;
use crate::record::Record;

/// Caches one codec per concrete record type.
///
/// The cache grows monotonically and never evicts. A codec is built lazily
/// on first request; nested record members are resolved transitively
/// through the same registry, so asking for a root type builds the codecs
/// of everything it reaches. The lock is held only around cache lookup and
/// insert — when two callers race on the first use of a type, both may
/// build, but insert-if-absent publishes a single winner and every caller
/// observes that one instance.
///
/// A type that reaches itself through its member types has no finite
/// layout and is rejected with [`Error::CyclicSchema`] during construction.
pub struct CodecRegistry {
    codecs: Mutex<HashMap<TypeId, Arc<RawCodec>>>,
    config: Config,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        CodecRegistry {
            codecs: Mutex::new(HashMap::new()),
            config: Config::default(),
        }
    }
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any non-zero presence byte as "present" instead of requiring
    /// `0xFF`. Applies to codecs built after the call.
    pub fn lenient_presence(mut self, lenient: bool) -> Self {
        self.config.lenient_presence = lenient;
        self
    }

    pub(crate) fn config(&self) -> Config {
        self.config
    }

    /// Returns the codec for `T`, building and caching it on first use.
    pub fn codec<T: Record>(&self) -> Result<Codec<T>, Error> {
        let mut in_progress = Vec::new();
        let raw = Self::resolve_raw::<T>(self, &mut in_progress)?;
        Ok(Codec::new(raw))
    }

    /// Number of codecs cached so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<TypeId, Arc<RawCodec>>> {
        self.codecs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolves the codec for `T`, recursing into nested member types.
    ///
    /// `in_progress` is the chain of types currently being built; meeting
    /// one of them again means the schema is cyclic.
    pub(crate) fn resolve_raw<T: Record>(
        &self,
        in_progress: &mut Vec<TypeId>,
    ) -> Result<Arc<RawCodec>, Error> {
        let type_id = TypeId::of::<T>();
        if let Some(codec) = self.lock().get(&type_id) {
            return Ok(Arc::clone(codec));
        }
        if in_progress.contains(&type_id) {
            return Err(Error::cyclic_schema(T::type_name()));
        }

        in_progress.push(type_id);
        let built = RawCodec::build::<T>(self, in_progress);
        in_progress.pop();
        let built = built?;

        let mut codecs = self.lock();
        let codec = codecs.entry(type_id).or_insert_with(|| Arc::new(built));
        Ok(Arc::clone(codec))
    }
}
