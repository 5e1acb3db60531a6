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

use std::sync::Arc;
use std::thread;

use tagwire_core::buffer::Reader;
use tagwire_core::registry::CodecRegistry;
use tagwire_derive::Record;

#[derive(Record, Clone, Default, Debug, PartialEq)]
struct Sample {
    #[tag(order = 0)]
    id: u64,
    #[tag(order = 1)]
    label: Option<String>,
}

#[test]
fn repeated_requests_hit_the_cache() {
    let registry = CodecRegistry::default();
    let first = registry.codec::<Sample>().unwrap();
    assert_eq!(registry.len(), 1);

    let second = registry.codec::<Sample>().unwrap();
    assert_eq!(registry.len(), 1);

    // both handles drive the identical layout
    let sample = Sample {
        id: 12,
        label: Some("s".to_string()),
    };
    assert_eq!(
        first.serialize(&sample).unwrap(),
        second.serialize(&sample).unwrap()
    );
}

#[test]
fn codec_handles_are_cheaply_cloneable() {
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Sample>().unwrap();
    let clone = codec.clone();

    let sample = Sample {
        id: 1,
        label: None,
    };
    let bytes = codec.serialize(&sample).unwrap();
    let mut reader = Reader::new(&bytes);
    assert_eq!(clone.deserialize(&mut reader).unwrap(), sample);
}

#[test]
fn concurrent_first_use_builds_one_codec() {
    let registry = Arc::new(CodecRegistry::default());
    let mut handles = Vec::new();

    for i in 0..8u64 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            let codec = registry.codec::<Sample>().unwrap();
            let sample = Sample {
                id: i,
                label: Some(format!("t{}", i)),
            };
            let bytes = codec.serialize(&sample).unwrap();
            let mut reader = Reader::new(&bytes);
            assert_eq!(codec.deserialize(&mut reader).unwrap(), sample);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 1);
}

#[test]
fn registries_are_independent() {
    #[derive(Record, Clone, Default, Debug, PartialEq)]
    struct Other {
        #[tag(order = 0)]
        n: i32,
    }

    let a = CodecRegistry::default();
    let b = CodecRegistry::default();
    a.codec::<Sample>().unwrap();
    b.codec::<Other>().unwrap();

    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
}
