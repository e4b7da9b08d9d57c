//! Structural hashing and equality
//!
//! Shape hashes are computed from field values only, folding each field into the
//! accumulator as `hash * 31 + component`. Component hashes are the values the
//! AWS Java SDK runtime produces, so a shape hashes the same on both sides.
//!
//! Equality compares the same canonical forms the hash uses, so equal values
//! always hash alike and every value, NaN included, equals itself.

use std::collections::HashMap;

/// Multiplier used when folding component hashes together.
pub const PRIME: i32 = 31;

/// Content-derived hash, consistent with `PartialEq`.
pub trait StructuralHash {
    /// Returns the structural hash of `self`.
    fn structural_hash(&self) -> i32;
}

/// Field-wise equality over canonical values.
pub trait StructuralEq {
    /// Returns `true` if `self` and `other` hold the same values.
    fn structural_eq(&self, other: &Self) -> bool;
}

/// Bit pattern used for both hashing and comparing doubles.
///
/// `-0.0` maps to `0.0` and every NaN maps to the canonical NaN.
pub fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        value.to_bits()
    }
}

/// Folds one component into an accumulator.
#[inline]
pub fn combine(hash: i32, component: i32) -> i32 {
    hash.wrapping_mul(PRIME).wrapping_add(component)
}

/// Polynomial hash over UTF-16 code units.
pub fn str_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| combine(hash, i32::from(unit)))
}

impl<T: StructuralHash> StructuralHash for Option<T> {
    fn structural_hash(&self) -> i32 {
        self.as_ref().map_or(0, StructuralHash::structural_hash)
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for &T {
    fn structural_hash(&self) -> i32 {
        (**self).structural_hash()
    }
}

impl StructuralHash for i32 {
    fn structural_hash(&self) -> i32 {
        *self
    }
}

impl StructuralHash for bool {
    fn structural_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl StructuralHash for f64 {
    fn structural_hash(&self) -> i32 {
        let bits = canonical_bits(*self);
        (bits ^ (bits >> 32)) as i32
    }
}

impl StructuralHash for str {
    fn structural_hash(&self) -> i32 {
        str_hash(self)
    }
}

impl StructuralHash for String {
    fn structural_hash(&self) -> i32 {
        str_hash(self)
    }
}

impl<T: StructuralHash> StructuralHash for [T] {
    fn structural_hash(&self) -> i32 {
        self.iter()
            .fold(1, |hash, item| combine(hash, item.structural_hash()))
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self) -> i32 {
        self.as_slice().structural_hash()
    }
}

impl StructuralHash for HashMap<String, String> {
    fn structural_hash(&self) -> i32 {
        // Order-independent: entry hashes are summed.
        self.iter().fold(0i32, |hash, (key, value)| {
            hash.wrapping_add(str_hash(key) ^ str_hash(value))
        })
    }
}

impl<T: StructuralEq> StructuralEq for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.structural_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl StructuralEq for i32 {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl StructuralEq for bool {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl StructuralEq for f64 {
    fn structural_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }
}

impl StructuralEq for String {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.structural_eq(b))
    }
}

impl StructuralEq for HashMap<String, String> {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_matches_runtime_values() {
        assert_eq!("".structural_hash(), 0);
        assert_eq!("abc".structural_hash(), 96354);
        assert_eq!(String::from("HIGH").structural_hash(), "HIGH".structural_hash());
    }

    #[test]
    fn test_scalar_hashes() {
        assert_eq!(5_000_000i32.structural_hash(), 5_000_000);
        assert_eq!(true.structural_hash(), 1231);
        assert_eq!(false.structural_hash(), 1237);
        assert_eq!(1.0f64.structural_hash(), 1072693248);
        assert_eq!(0.0f64.structural_hash(), 0);
        assert_eq!((-0.0f64).structural_hash(), 0);
    }

    #[test]
    fn test_absent_hashes_to_zero() {
        let absent: Option<i32> = None;
        assert_eq!(absent.structural_hash(), 0);
        assert_eq!(Some(7).structural_hash(), 7);
    }

    #[test]
    fn test_sequence_hash_is_order_sensitive() {
        let a = vec!["x".to_string(), "y".to_string()];
        let b = vec!["y".to_string(), "x".to_string()];
        assert_ne!(a.structural_hash(), b.structural_hash());
        assert_eq!(Vec::<i32>::new().structural_hash(), 1);
    }

    #[test]
    fn test_double_equality_uses_canonical_bits() {
        assert!(f64::NAN.structural_eq(&f64::NAN));
        assert!(f64::NAN.structural_eq(&-f64::NAN));
        assert!(0.0f64.structural_eq(&-0.0));
        assert!(!1.0f64.structural_eq(&-1.0));
        assert_eq!(f64::NAN.structural_hash(), (-f64::NAN).structural_hash());
    }

    #[test]
    fn test_option_equality_requires_matching_presence() {
        assert!(None::<i32>.structural_eq(&None));
        assert!(!Some(0).structural_eq(&None));
        assert!(Some(vec![f64::NAN]).structural_eq(&Some(vec![f64::NAN])));
    }

    #[test]
    fn test_map_hash_is_order_independent() {
        let mut a = HashMap::new();
        a.insert("env".to_string(), "prod".to_string());
        a.insert("team".to_string(), "video".to_string());

        let mut b = HashMap::new();
        b.insert("team".to_string(), "video".to_string());
        b.insert("env".to_string(), "prod".to_string());

        assert_eq!(a.structural_hash(), b.structural_hash());
    }
}
