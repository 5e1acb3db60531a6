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

use tagwire_core::buffer::Reader;
use tagwire_core::error::Error;
use tagwire_core::registry::CodecRegistry;
use tagwire_derive::Record;

#[derive(Record, Clone, Default, Debug, PartialEq)]
struct Note {
    #[tag(order = 0)]
    text: Option<String>,
}

#[test]
fn absent_text_serializes_to_exactly_one_byte() {
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Note>().unwrap();

    let bytes = codec.serialize(&Note { text: None }).unwrap();
    assert_eq!(bytes, [0x00]);

    // and consumes exactly one byte on the way back in
    let padded = [0x00, 0xAB, 0xCD];
    let mut reader = Reader::new(&padded);
    let note = codec.deserialize(&mut reader).unwrap();
    assert_eq!(note, Note { text: None });
    assert_eq!(reader.cursor(), 1);
}

#[test]
fn boxed_numeric_presence_regions() {
    #[derive(Record, Clone, Default, Debug, PartialEq)]
    struct Boxed {
        #[tag(order = 0)]
        value: Option<i32>,
    }

    let registry = CodecRegistry::default();
    let codec = registry.codec::<Boxed>().unwrap();

    let present = codec.serialize(&Boxed { value: Some(-2) }).unwrap();
    assert_eq!(present, [0xFF, 0xFE, 0xFF, 0xFF, 0xFF]);

    let absent = codec.serialize(&Boxed { value: None }).unwrap();
    assert_eq!(absent, [0x00]);

    let mut reader = Reader::new(&present);
    assert_eq!(
        codec.deserialize(&mut reader).unwrap(),
        Boxed { value: Some(-2) }
    );
}

#[test]
fn strict_validation_rejects_unexpected_presence_bytes() {
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Note>().unwrap();

    let bytes = [0x01, b'x', 0x00];
    let mut reader = Reader::new(&bytes);
    let err = codec.deserialize(&mut reader).unwrap_err();
    assert!(matches!(err, Error::InvalidPresence(0x01)), "got {err}");
}

#[test]
fn lenient_validation_accepts_any_non_zero_presence_byte() {
    let registry = CodecRegistry::default().lenient_presence(true);
    let codec = registry.codec::<Note>().unwrap();

    let bytes = [0x01, b'x', 0x00];
    let mut reader = Reader::new(&bytes);
    let note = codec.deserialize(&mut reader).unwrap();
    assert_eq!(note.text.as_deref(), Some("x"));
}

#[test]
fn presence_byte_fidelity_skips_encoding_logic() {
    // a single absent marker decodes even though the buffer holds no text
    // bytes at all
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Note>().unwrap();

    let mut reader = Reader::new(&[0x00]);
    assert_eq!(
        codec.deserialize(&mut reader).unwrap(),
        Note { text: None }
    );
    assert_eq!(reader.remaining(), 0);
}
