//! Value model: storage types, C-style type tags and the `Variant` wrapper.
//!
//! `ValueType` names the Rust storage type of an array. `ValueTypeTag` is the
//! wider set of tags callers pass to the factory; several tags share one
//! storage type (`Long`, `LongLong` and `IdType` all store `i64`).

use std::fmt;

/// Storage type held by an array.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValueType {
  I8,
  U8,
  I16,
  U16,
  I32,
  U32,
  I64,
  U64,
  F32,
  F64,
  String,
  Variant,
}

/// Value-type tag accepted by the array factory.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValueTypeTag {
  Char,
  SignedChar,
  UnsignedChar,
  Short,
  UnsignedShort,
  Int,
  UnsignedInt,
  Long,
  UnsignedLong,
  LongLong,
  UnsignedLongLong,
  Float,
  Double,
  IdType,
  String,
  Variant,
}

impl ValueTypeTag {
  pub const ALL: [ValueTypeTag; 16] = [
    Self::Char,
    Self::SignedChar,
    Self::UnsignedChar,
    Self::Short,
    Self::UnsignedShort,
    Self::Int,
    Self::UnsignedInt,
    Self::Long,
    Self::UnsignedLong,
    Self::LongLong,
    Self::UnsignedLongLong,
    Self::Float,
    Self::Double,
    Self::IdType,
    Self::String,
    Self::Variant,
  ];

  /// Map a numeric type code to a tag.
  ///
  /// Codes follow the usual data-model numbering (2 = char, 11 = double,
  /// 12 = id type, 13 = string, 20 = variant).
  pub fn from_code(code: i32) -> Option<Self> {
    Some(match code {
      2 => Self::Char,
      3 => Self::UnsignedChar,
      4 => Self::Short,
      5 => Self::UnsignedShort,
      6 => Self::Int,
      7 => Self::UnsignedInt,
      8 => Self::Long,
      9 => Self::UnsignedLong,
      10 => Self::Float,
      11 => Self::Double,
      12 => Self::IdType,
      13 => Self::String,
      15 => Self::SignedChar,
      16 => Self::LongLong,
      17 => Self::UnsignedLongLong,
      20 => Self::Variant,
      _ => return None,
    })
  }

  pub fn code(self) -> i32 {
    match self {
      Self::Char => 2,
      Self::UnsignedChar => 3,
      Self::Short => 4,
      Self::UnsignedShort => 5,
      Self::Int => 6,
      Self::UnsignedInt => 7,
      Self::Long => 8,
      Self::UnsignedLong => 9,
      Self::Float => 10,
      Self::Double => 11,
      Self::IdType => 12,
      Self::String => 13,
      Self::SignedChar => 15,
      Self::LongLong => 16,
      Self::UnsignedLongLong => 17,
      Self::Variant => 20,
    }
  }

  /// Storage type used for this tag.
  pub fn value_type(self) -> ValueType {
    match self {
      Self::Char | Self::SignedChar => ValueType::I8,
      Self::UnsignedChar => ValueType::U8,
      Self::Short => ValueType::I16,
      Self::UnsignedShort => ValueType::U16,
      Self::Int => ValueType::I32,
      Self::UnsignedInt => ValueType::U32,
      Self::Long | Self::LongLong | Self::IdType => ValueType::I64,
      Self::UnsignedLong | Self::UnsignedLongLong => ValueType::U64,
      Self::Float => ValueType::F32,
      Self::Double => ValueType::F64,
      Self::String => ValueType::String,
      Self::Variant => ValueType::Variant,
    }
  }
}

// =============================================================================
// Variant
// =============================================================================

/// Type-erased value able to hold any supported storage type.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Variant {
  #[default]
  Invalid,
  I8(i8),
  U8(u8),
  I16(i16),
  U16(u16),
  I32(i32),
  U32(u32),
  I64(i64),
  U64(u64),
  F32(f32),
  F64(f64),
  String(String),
}

impl Variant {
  #[inline]
  pub fn is_valid(&self) -> bool {
    !matches!(self, Variant::Invalid)
  }

  /// Storage type of the held value; `None` for `Invalid`.
  pub fn value_type(&self) -> Option<ValueType> {
    Some(match self {
      Variant::Invalid => return None,
      Variant::I8(_) => ValueType::I8,
      Variant::U8(_) => ValueType::U8,
      Variant::I16(_) => ValueType::I16,
      Variant::U16(_) => ValueType::U16,
      Variant::I32(_) => ValueType::I32,
      Variant::U32(_) => ValueType::U32,
      Variant::I64(_) => ValueType::I64,
      Variant::U64(_) => ValueType::U64,
      Variant::F32(_) => ValueType::F32,
      Variant::F64(_) => ValueType::F64,
      Variant::String(_) => ValueType::String,
    })
  }

  /// Numeric conversion; strings are parsed.
  /// Integer value, truncating floats; `None` when it does not fit.
  pub fn to_i64(&self) -> Option<i64> {
    match self {
      Variant::Invalid => None,
      Variant::I8(v) => Some(*v as i64),
      Variant::U8(v) => Some(*v as i64),
      Variant::I16(v) => Some(*v as i64),
      Variant::U16(v) => Some(*v as i64),
      Variant::I32(v) => Some(*v as i64),
      Variant::U32(v) => Some(*v as i64),
      Variant::I64(v) => Some(*v),
      Variant::U64(v) => i64::try_from(*v).ok(),
      Variant::F32(v) => Some(*v as i64),
      Variant::F64(v) => Some(*v as i64),
      Variant::String(s) => parse_number(s).and_then(|n| n.as_i64()),
    }
  }

  /// Unsigned value, truncating floats; `None` for negatives.
  pub fn to_u64(&self) -> Option<u64> {
    match self {
      Variant::U64(v) => Some(*v),
      Variant::F32(v) if *v >= 0.0 => Some(*v as u64),
      Variant::F64(v) if *v >= 0.0 => Some(*v as u64),
      Variant::F32(_) | Variant::F64(_) => None,
      Variant::String(s) => parse_number(s).and_then(|n| n.as_u64()),
      other => other.to_i64().and_then(|v| u64::try_from(v).ok()),
    }
  }

  pub fn to_f64(&self) -> Option<f64> {
    match self {
      Variant::Invalid => None,
      Variant::U64(v) => Some(*v as f64),
      Variant::F32(v) => Some(*v as f64),
      Variant::F64(v) => Some(*v),
      Variant::String(s) => parse_number(s).map(|n| n.as_f64()),
      other => other.to_i64().map(|v| v as f64),
    }
  }

  /// String form of the held value; `None` for `Invalid`.
  pub fn to_string_value(&self) -> Option<String> {
    match self {
      Variant::Invalid => None,
      Variant::String(s) => Some(s.clone()),
      other => Some(other.to_string()),
    }
  }
}

enum Number {
  Int(i64),
  UInt(u64),
  Float(f64),
}

impl Number {
  fn as_i64(&self) -> Option<i64> {
    match *self {
      Number::Int(v) => Some(v),
      Number::UInt(v) => i64::try_from(v).ok(),
      Number::Float(v) => Some(v as i64),
    }
  }

  fn as_u64(&self) -> Option<u64> {
    match *self {
      Number::Int(v) => u64::try_from(v).ok(),
      Number::UInt(v) => Some(v),
      Number::Float(v) if v >= 0.0 => Some(v as u64),
      Number::Float(_) => None,
    }
  }

  fn as_f64(&self) -> f64 {
    match *self {
      Number::Int(v) => v as f64,
      Number::UInt(v) => v as f64,
      Number::Float(v) => v,
    }
  }
}

fn parse_number(s: &str) -> Option<Number> {
  let s = s.trim();
  if let Ok(v) = s.parse::<i64>() {
    return Some(Number::Int(v));
  }
  if let Ok(v) = s.parse::<u64>() {
    return Some(Number::UInt(v));
  }
  s.parse::<f64>().ok().map(Number::Float)
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Variant::Invalid => f.write_str("(invalid)"),
      Variant::I8(v) => write!(f, "{}", v),
      Variant::U8(v) => write!(f, "{}", v),
      Variant::I16(v) => write!(f, "{}", v),
      Variant::U16(v) => write!(f, "{}", v),
      Variant::I32(v) => write!(f, "{}", v),
      Variant::U32(v) => write!(f, "{}", v),
      Variant::I64(v) => write!(f, "{}", v),
      Variant::U64(v) => write!(f, "{}", v),
      Variant::F32(v) => write!(f, "{}", v),
      Variant::F64(v) => write!(f, "{}", v),
      Variant::String(s) => f.write_str(s),
    }
  }
}

impl From<&str> for Variant {
  fn from(s: &str) -> Self {
    Variant::String(s.to_owned())
  }
}

// =============================================================================
// ArrayValue - element types an array can store
// =============================================================================

/// Element type storable in a typed array.
pub trait ArrayValue: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
  const VALUE_TYPE: ValueType;

  fn to_variant(&self) -> Variant;

  /// Convert from a variant; `None` if the variant holds nothing usable.
  fn from_variant(value: &Variant) -> Option<Self>;
}

/// Integer targets reject values outside their range; float targets round
/// to the nearest representable value.
macro_rules! impl_numeric_value {
  (@checked $t:ty, $v:expr) => {
    <$t>::try_from($v).ok()
  };
  (@rounded $t:ty, $v:expr) => {
    Some($v as $t)
  };
  ($($t:ty => $variant:ident, $conv:ident, $narrow:ident);* $(;)?) => {
    $(
      impl ArrayValue for $t {
        const VALUE_TYPE: ValueType = ValueType::$variant;

        #[inline]
        fn to_variant(&self) -> Variant {
          Variant::$variant(*self)
        }

        #[inline]
        fn from_variant(value: &Variant) -> Option<Self> {
          match value {
            Variant::$variant(v) => Some(*v),
            other => other.$conv().and_then(|v| impl_numeric_value!(@$narrow $t, v)),
          }
        }
      }

      impl From<$t> for Variant {
        fn from(v: $t) -> Self {
          Variant::$variant(v)
        }
      }
    )*
  };
}

impl_numeric_value! {
  i8 => I8, to_i64, checked;
  u8 => U8, to_u64, checked;
  i16 => I16, to_i64, checked;
  u16 => U16, to_u64, checked;
  i32 => I32, to_i64, checked;
  u32 => U32, to_u64, checked;
  i64 => I64, to_i64, checked;
  u64 => U64, to_u64, checked;
  f32 => F32, to_f64, rounded;
  f64 => F64, to_f64, rounded;
}

impl ArrayValue for String {
  const VALUE_TYPE: ValueType = ValueType::String;

  fn to_variant(&self) -> Variant {
    Variant::String(self.clone())
  }

  fn from_variant(value: &Variant) -> Option<Self> {
    value.to_string_value()
  }
}

impl From<String> for Variant {
  fn from(s: String) -> Self {
    Variant::String(s)
  }
}

impl ArrayValue for Variant {
  const VALUE_TYPE: ValueType = ValueType::Variant;

  fn to_variant(&self) -> Variant {
    self.clone()
  }

  fn from_variant(value: &Variant) -> Option<Self> {
    Some(value.clone())
  }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;
