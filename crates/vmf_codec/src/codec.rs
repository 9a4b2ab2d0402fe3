//! MessagePack and JSON codec helpers.
//!
//! Vectors are written as a component array in declaration order. In
//! MessagePack each component is a fixed-width `float64` (`0xcb` followed by
//! eight big-endian bytes), so decoding reproduces the original bits exactly.

use serde::{Deserialize, Serialize};
use vmf_math::{AnyVector, Vector};

use crate::error::CodecError;

/// MessagePack marker byte for a `float64`.
pub const FLOAT64_MARKER: u8 = 0xcb;

/// Encode a value to MessagePack bytes.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialisation fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    rmp_serde::to_vec(value).map_err(CodecError::Encode)
}

/// Decode a value from MessagePack bytes.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if deserialisation fails, including when
/// the array length does not match the requested vector dimension.
pub fn decode<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, CodecError> {
    rmp_serde::from_slice(bytes).map_err(CodecError::Decode)
}

/// Decode a bare component array of unknown dimension.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed input and
/// [`CodecError::Arity`] when the array does not hold 2, 3 or 4 components.
pub fn decode_any(bytes: &[u8]) -> Result<AnyVector, CodecError> {
    let components: Vec<f64> = decode(bytes)?;
    AnyVector::from_components(&components).ok_or(CodecError::Arity(components.len()))
}

/// Encode a vector as a JSON component array.
///
/// # Errors
///
/// Returns [`CodecError::NonFinite`] if any component is NaN or infinite,
/// since JSON would silently turn them into `null`.
pub fn encode_json<V: Vector + Serialize>(value: &V) -> Result<String, CodecError> {
    if !value.is_finite() {
        return Err(CodecError::NonFinite(V::TYPE_NAME));
    }
    Ok(serde_json::to_string(value)?)
}

/// Decode a vector from a JSON component array.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if the text is not an array of the right
/// length.
pub fn decode_json<V: Vector + for<'de> Deserialize<'de>>(text: &str) -> Result<V, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use vmf_math::{Vec2d, Vec3d, Vec4d};

    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let v = Vec3d::new(1.0, 2.0, 3.0);
        let bytes = encode(&v).unwrap();
        let restored: Vec3d = decode(&bytes).unwrap();
        assert_eq!(v, restored);
    }

    #[test]
    fn test_wire_layout_is_fixed_width() {
        let bytes = encode(&Vec2d::new(1.0, 2.0)).unwrap();
        // fixarray(2), then two float64 values.
        assert_eq!(bytes.len(), 1 + 2 * 9);
        assert_eq!(bytes[0], 0x92);
        assert_eq!(bytes[1], FLOAT64_MARKER);
        assert_eq!(&bytes[2..10], &1.0_f64.to_be_bytes());
        assert_eq!(bytes[10], FLOAT64_MARKER);
        assert_eq!(&bytes[11..19], &2.0_f64.to_be_bytes());
    }

    #[test]
    fn test_roundtrip_preserves_non_finite_bits() {
        let v = Vec4d::new(f64::NAN, -0.0, f64::INFINITY, f64::MIN_POSITIVE);
        let restored: Vec4d = decode(&encode(&v).unwrap()).unwrap();
        for (a, b) in v.to_array().iter().zip(restored.to_array()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert!(v.approx_eq(&restored));
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result: Result<Vec2d, _> = decode(&[0xFF, 0xFF]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_wrong_dimension() {
        let bytes = encode(&Vec3d::new(1.0, 2.0, 3.0)).unwrap();
        let result: Result<Vec2d, _> = decode(&bytes);
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_decode_any() {
        let bytes = encode(&Vec4d::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        let v = decode_any(&bytes).unwrap();
        assert_eq!(v.dim(), 4);
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_decode_any_bad_arity() {
        let bytes = encode(&[1.0_f64; 5]).unwrap();
        assert!(matches!(decode_any(&bytes), Err(CodecError::Arity(5))));
    }

    #[test]
    fn test_json_roundtrip() {
        let v = Vec2d::new(0.25, -8.0);
        let text = encode_json(&v).unwrap();
        assert_eq!(text, "[0.25,-8.0]");
        assert_eq!(decode_json::<Vec2d>(&text).unwrap(), v);
    }

    #[test]
    fn test_json_rejects_non_finite() {
        let v = Vec3d::new(1.0, f64::NAN, 3.0);
        assert!(matches!(
            encode_json(&v),
            Err(CodecError::NonFinite("vec3d"))
        ));
    }
}
