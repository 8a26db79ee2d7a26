// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StatVec`](crate::StatVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`);
//!   reserve values are never written out.
//! - **Deserialize**: from any sequence up to capacity `N`; longer input is
//!   an error, not a truncation.
//!
//! ### Trait bounds
//!
//! `StatVec<T, N>: Deserialize` requires `T: Deserialize<'de> + Default`:
//! the backing `[T; N]` buffer is eagerly initialized before elements are
//! pushed into it.

// Crate imports
use crate::vec::StatVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, const N: usize> Serialize for StatVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(core::marker::PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = StatVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StatVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StatVec<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StatVec;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: StatVec<i32, 5> = StatVec::try_from(&[1, 2, 3][..]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: StatVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<StatVec<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("too many elements") || msg.contains("capacity 3"),
            "msg: {msg}"
        );
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: StatVec<i32, 4> = StatVec::default();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: StatVec<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serialize_skips_reserve_values() {
        let mut v: StatVec<i32, 4> = StatVec::try_from(&[1, 2, 3][..]).unwrap();
        v.truncate(1);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1]");
    }

    #[test]
    fn test_serde_non_copy_elements() {
        use alloc::string::String;

        let mut v: StatVec<String, 3> = StatVec::new();
        v.push(String::from("a")).unwrap();
        v.push(String::from("bc")).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"["a","bc"]"#);
        let back: StatVec<String, 3> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), v.as_slice());
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        // Try to deserialize from a JSON object instead of an array/sequence.
        let err = serde_json::from_str::<StatVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();

        // This should include the string from VecVisitor::expecting.
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
