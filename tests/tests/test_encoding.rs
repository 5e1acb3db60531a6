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
struct Latin {
    #[tag(order = 0, encoding = "latin-1")]
    motto: Option<String>,
}

#[test]
fn latin1_member_round_trips() {
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Latin>().unwrap();
    let value = Latin {
        motto: Some("caf\u{e9}".to_string()),
    };

    let bytes = codec.serialize(&value).unwrap();
    assert_eq!(bytes, [0xFF, b'c', b'a', b'f', 0xE9, 0x00]);

    let mut reader = Reader::new(&bytes);
    assert_eq!(codec.deserialize(&mut reader).unwrap(), value);
}

#[test]
fn latin1_rejects_unencodable_chars_at_serialize_time() {
    let registry = CodecRegistry::default();
    let codec = registry.codec::<Latin>().unwrap();
    let value = Latin {
        motto: Some("\u{3042}".to_string()),
    };

    let err = codec.serialize(&value).unwrap_err();
    assert!(matches!(err, Error::EncodingError(..)), "got {err}");
}

#[test]
fn text_defaults_to_utf8() {
    #[derive(Record, Clone, Default, Debug, PartialEq)]
    struct Plain {
        #[tag(order = 0)]
        text: Option<String>,
    }

    let registry = CodecRegistry::default();
    let codec = registry.codec::<Plain>().unwrap();
    let value = Plain {
        text: Some("\u{3042}".to_string()),
    };

    let bytes = codec.serialize(&value).unwrap();
    // presence byte, three utf-8 bytes, terminator
    assert_eq!(bytes, [0xFF, 0xE3, 0x81, 0x82, 0x00]);

    let mut reader = Reader::new(&bytes);
    assert_eq!(codec.deserialize(&mut reader).unwrap(), value);
}

#[test]
fn malformed_utf8_fails_deserialize() {
    #[derive(Record, Clone, Default, Debug, PartialEq)]
    struct Plain {
        #[tag(order = 0)]
        text: Option<String>,
    }

    let registry = CodecRegistry::default();
    let codec = registry.codec::<Plain>().unwrap();

    let bytes = [0xFF, 0xC3, 0x28, 0x00];
    let mut reader = Reader::new(&bytes);
    let err = codec.deserialize(&mut reader).unwrap_err();
    assert!(matches!(err, Error::EncodingError(..)), "got {err}");
}

#[test]
fn empty_text_is_terminator_only() {
    #[derive(Record, Clone, Default, Debug, PartialEq)]
    struct Plain {
        #[tag(order = 0)]
        text: Option<String>,
    }

    let registry = CodecRegistry::default();
    let codec = registry.codec::<Plain>().unwrap();
    let value = Plain {
        text: Some(String::new()),
    };

    let bytes = codec.serialize(&value).unwrap();
    assert_eq!(bytes, [0xFF, 0x00]);

    let mut reader = Reader::new(&bytes);
    assert_eq!(codec.deserialize(&mut reader).unwrap(), value);
}

#[test]
fn encoding_labels_are_case_insensitive() {
    #[derive(Record, Clone, Default, Debug, PartialEq)]
    struct Shouty {
        #[tag(order = 0, encoding = "LATIN-1")]
        text: Option<String>,
    }

    let registry = CodecRegistry::default();
    let codec = registry.codec::<Shouty>().unwrap();
    let value = Shouty {
        text: Some("\u{ff}".to_string()),
    };

    let bytes = codec.serialize(&value).unwrap();
    assert_eq!(bytes, [0xFF, 0xFF, 0x00]);
}
