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

//! End-to-end usage through the `tagwire` facade, the way a host
//! application would drive the engine.

use tagwire::{CodecRegistry, Reader, Record};

#[derive(Record, Clone, Default, Debug, PartialEq)]
struct Profile {
    #[tag(order = 0)]
    name: Option<String>,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
struct Session {
    #[tag(order = 1)]
    profile: Option<Profile>,
    #[tag(order = 2)]
    value: i32,
}

#[test]
fn host_round_trip_through_the_facade() {
    let session = Session {
        profile: Some(Profile {
            name: Some("\u{3042}\u{3044}\u{3046}\u{3048}\u{304a}".to_string()),
        }),
        value: 114_514,
    };

    let registry = CodecRegistry::default();
    let codec = registry.codec::<Session>().unwrap();

    let buf = codec.serialize(&session).unwrap();
    let mut source = Reader::new(&buf);
    let back: Session = codec.deserialize(&mut source).unwrap();

    assert_eq!(back, session);
    assert_eq!(back.profile.unwrap().name.as_deref(), Some("あいうえお"));
    assert_eq!(back.value, 114_514);
}

#[test]
fn serialized_bytes_are_a_plain_buffer_for_any_sink() {
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Session>().unwrap();
    let session = Session {
        profile: None,
        value: 1,
    };

    // the engine hands the host a fully materialized byte sequence; writing
    // it somewhere is the host's business
    let buf: Vec<u8> = codec.serialize(&session).unwrap();
    let copy = buf.clone();

    let mut source = Reader::new(&copy);
    assert_eq!(codec.deserialize(&mut source).unwrap(), session);
}
