use super::*;

#[test]
fn test_tag_codes_round_trip() {
  for tag in ValueTypeTag::ALL {
    assert_eq!(ValueTypeTag::from_code(tag.code()), Some(tag), "{:?}", tag);
  }
  assert_eq!(ValueTypeTag::from_code(0), None);
  assert_eq!(ValueTypeTag::from_code(14), None);
}

/// Several tags share one storage type.
#[test]
fn test_tags_map_to_storage_types() {
  assert_eq!(ValueTypeTag::Char.value_type(), ValueType::I8);
  assert_eq!(ValueTypeTag::SignedChar.value_type(), ValueType::I8);
  assert_eq!(ValueTypeTag::IdType.value_type(), ValueType::I64);
  assert_eq!(ValueTypeTag::LongLong.value_type(), ValueType::I64);
  assert_eq!(ValueTypeTag::UnsignedLong.value_type(), ValueType::U64);
  assert_eq!(ValueTypeTag::Double.value_type(), ValueType::F64);
  assert_eq!(ValueTypeTag::Variant.value_type(), ValueType::Variant);
}

#[test]
fn test_numeric_conversions() {
  assert_eq!(i32::from_variant(&Variant::F64(3.75)), Some(3));
  assert_eq!(f64::from_variant(&Variant::I16(-4)), Some(-4.0));
  assert_eq!(u64::from_variant(&Variant::U64(u64::MAX)), Some(u64::MAX));
  assert_eq!(i64::from_variant(&Variant::from("42")), Some(42));
  assert_eq!(f32::from_variant(&Variant::from("2.5")), Some(2.5));
  assert_eq!(i32::from_variant(&Variant::Invalid), None);
  assert_eq!(i32::from_variant(&Variant::from("not a number")), None);
}

#[test]
fn test_out_of_range_integers_are_rejected() {
  assert_eq!(i8::from_variant(&Variant::I64(1000)), None);
  assert_eq!(i8::from_variant(&Variant::I64(-128)), Some(-128));
  assert_eq!(u8::from_variant(&Variant::I32(-1)), None);
  assert_eq!(u16::from_variant(&Variant::F64(-0.5)), None);
  assert_eq!(u64::from_variant(&Variant::I64(-1)), None);
  assert_eq!(i64::from_variant(&Variant::U64(u64::MAX)), None);
  assert_eq!(u32::from_variant(&Variant::from("4294967296")), None);
  assert_eq!(u64::from_variant(&Variant::from("18446744073709551615")), Some(u64::MAX));
}

/// Float targets round rather than reject.
#[test]
fn test_float_narrowing_rounds() {
  assert_eq!(f32::from_variant(&Variant::F64(0.1)), Some(0.1f32));
  assert_eq!(f32::from_variant(&Variant::F64(1e300)), Some(f32::INFINITY));
  assert_eq!(f64::from_variant(&Variant::U64(u64::MAX)), Some(u64::MAX as f64));
}

#[test]
fn test_string_conversions() {
  assert_eq!(String::from_variant(&Variant::I32(7)), Some("7".to_string()));
  assert_eq!(String::from_variant(&Variant::Invalid), None);
  assert_eq!("abc".to_string().to_variant(), Variant::from("abc"));
}

#[test]
fn test_variant_holds_variant() {
  let v = Variant::F32(1.5);
  assert_eq!(Variant::from_variant(&v), Some(v.clone()));
  assert_eq!(v.to_variant(), v);
  assert_eq!(Variant::Invalid.value_type(), None);
  assert_eq!(v.value_type(), Some(ValueType::F32));
}
