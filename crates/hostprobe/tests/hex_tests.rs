//! Hex helper tests.

use hostprobe::{HostError, HostStrExt, hex};

#[test]
fn test_encode_known_value() {
    assert_eq!(hex::encode([0x00u8, 0xFF, 0x0A]), "00ff0a");
}

#[test]
fn test_round_trip_assorted() {
    let samples: [&[u8]; 4] = [b"", b"\x00", b"\xde\xad\xbe\xef", "héllo wörld".as_bytes()];
    for bytes in samples {
        let encoded = hex::encode(bytes);
        assert_eq!(encoded.len(), bytes.len() * 2);
        assert_eq!(hex::decode(&encoded).unwrap(), bytes);
    }
}

#[test]
fn test_decode_rejects_bad_input() {
    for input in ["abc", "zz11", "0x10", "12 34"] {
        match hex::decode(input) {
            Err(HostError::Format { input: reported, .. }) => assert_eq!(reported, input),
            other => panic!("expected format error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_str_extension() {
    assert_eq!("AB".hexify(), "4142");
    assert_eq!("4142".unhexify().unwrap(), b"AB");
    assert!("4".unhexify().unwrap_err().is_format());
}
