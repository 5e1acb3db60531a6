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

/// Configuration shared by a registry and every codec it builds.
///
/// Codecs capture the configuration when they are built, so a codec's
/// behavior never changes after construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Whether deserialization accepts any non-zero presence byte as
    /// "present". The default is strict: `0x00` means absent, `0xFF` means
    /// present, and anything else fails the call.
    pub lenient_presence: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn is_lenient_presence(&self) -> bool {
        self.lenient_presence
    }
}
