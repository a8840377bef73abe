use decode_hooks_rules::Composer;
use decode_hooks_types::{Number, NumericKind, TypeDescriptor, Value};
use proptest::prelude::*;

fn reparse(kind: NumericKind, literal: String) -> Number {
    let value = Composer::shared()
        .apply(&TypeDescriptor::String, &TypeDescriptor::Numeric(kind), Value::String(literal))
        .unwrap();
    value.as_number().expect("numeric hook must produce a number")
}

proptest! {
    #[test]
    fn roundtrip_signed_integers(a in any::<i8>(), b in any::<i16>(), c in any::<i32>(), d in any::<i64>(), e in any::<isize>()) {
        prop_assert_eq!(reparse(NumericKind::I8, a.to_string()), Number::I8(a));
        prop_assert_eq!(reparse(NumericKind::I16, b.to_string()), Number::I16(b));
        prop_assert_eq!(reparse(NumericKind::I32, c.to_string()), Number::I32(c));
        prop_assert_eq!(reparse(NumericKind::I64, d.to_string()), Number::I64(d));
        prop_assert_eq!(reparse(NumericKind::Isize, e.to_string()), Number::Isize(e));
    }

    #[test]
    fn roundtrip_unsigned_integers(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>(), e in any::<usize>()) {
        prop_assert_eq!(reparse(NumericKind::U8, a.to_string()), Number::U8(a));
        prop_assert_eq!(reparse(NumericKind::U16, b.to_string()), Number::U16(b));
        prop_assert_eq!(reparse(NumericKind::U32, c.to_string()), Number::U32(c));
        prop_assert_eq!(reparse(NumericKind::U64, d.to_string()), Number::U64(d));
        prop_assert_eq!(reparse(NumericKind::Usize, e.to_string()), Number::Usize(e));
    }

    #[test]
    fn roundtrip_floats(a in any::<f32>().prop_filter("finite", |f| f.is_finite()), b in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(reparse(NumericKind::F32, a.to_string()), Number::F32(a));
        prop_assert_eq!(reparse(NumericKind::F64, b.to_string()), Number::F64(b));
    }

    #[test]
    fn binary_suffix_scales_in_width(n in 0u32..=4096) {
        prop_assert_eq!(reparse(NumericKind::U64, format!("{n}Ki")), Number::U64(u64::from(n) * 1024));
        prop_assert_eq!(reparse(NumericKind::U32, format!("{n}Mi")), Number::U32(n.wrapping_mul(1 << 20)));
    }
}
