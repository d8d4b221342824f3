//! Encoding rules shared by the ECDSA contexts.

use crate::Error;

/// Length of a compressed SEC 1 point over a 256-bit field.
pub(crate) const COMPRESSED_POINT_LENGTH: usize = 33;

/// Length of a compact `r || s` signature over a 256-bit group.
pub(crate) const COMPACT_SIGNATURE_LENGTH: usize = 64;

/// Ensure `bytes` has the compressed layout: a `0x02`/`0x03` parity tag followed by `x`.
///
/// SEC 1 decoders also accept other tags of the same length (such as the `0x05` compact form),
/// which would give one point more than one encoding.
pub(crate) fn check_compressed_point(algorithm: &'static str, bytes: &[u8]) -> Result<(), Error> {
    match bytes {
        [0x02 | 0x03, x @ ..] if x.len() == COMPRESSED_POINT_LENGTH - 1 => Ok(()),
        _ => Err(Error::MalformedKey(algorithm)),
    }
}

/// Ensure `bytes` has the compact `r || s` layout.
pub(crate) fn check_compact_signature(algorithm: &'static str, bytes: &[u8]) -> Result<(), Error> {
    if bytes.len() != COMPACT_SIGNATURE_LENGTH {
        return Err(Error::MalformedSignature(algorithm));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x02, true; "even")]
    #[test_case(0x03, true; "odd")]
    #[test_case(0x00, false; "identity")]
    #[test_case(0x04, false; "uncompressed")]
    #[test_case(0x05, false; "compact")]
    #[test_case(0x06, false; "hybrid even")]
    #[test_case(0x07, false; "hybrid odd")]
    fn test_compressed_point_tag(tag: u8, valid: bool) {
        let mut bytes = vec![tag];
        bytes.extend_from_slice(&[0x11; 32]);
        assert_eq!(check_compressed_point("test", &bytes).is_ok(), valid);
    }

    #[test]
    fn test_compressed_point_length() {
        assert_eq!(
            check_compressed_point("test", &[0x02; 32]).unwrap_err(),
            Error::MalformedKey("test")
        );
        assert_eq!(
            check_compressed_point("test", &[0x02; 34]).unwrap_err(),
            Error::MalformedKey("test")
        );
        assert_eq!(
            check_compressed_point("test", &[]).unwrap_err(),
            Error::MalformedKey("test")
        );
    }

    #[test]
    fn test_compact_signature_length() {
        assert!(check_compact_signature("test", &[0; 64]).is_ok());
        assert_eq!(
            check_compact_signature("test", &[0; 65]).unwrap_err(),
            Error::MalformedSignature("test")
        );
    }
}
