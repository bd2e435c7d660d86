//! Array factory keyed by storage kind and value-type tag.

use super::{Array, DenseArray, SparseArray, ValueType, ValueTypeTag, Variant};

/// Storage backend selector.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StorageKind {
  Dense = 0,
  Sparse = 1,
}

impl StorageKind {
  pub fn from_code(code: i32) -> Option<Self> {
    match code {
      0 => Some(Self::Dense),
      1 => Some(Self::Sparse),
      _ => None,
    }
  }
}

fn boxed<A: Array + 'static>(array: A) -> Box<dyn Array> {
  Box::new(array)
}

macro_rules! dispatch_value_type {
  ($value_type:expr, $array:ident) => {
    match $value_type {
      ValueType::I8 => boxed($array::<i8>::new()),
      ValueType::U8 => boxed($array::<u8>::new()),
      ValueType::I16 => boxed($array::<i16>::new()),
      ValueType::U16 => boxed($array::<u16>::new()),
      ValueType::I32 => boxed($array::<i32>::new()),
      ValueType::U32 => boxed($array::<u32>::new()),
      ValueType::I64 => boxed($array::<i64>::new()),
      ValueType::U64 => boxed($array::<u64>::new()),
      ValueType::F32 => boxed($array::<f32>::new()),
      ValueType::F64 => boxed($array::<f64>::new()),
      ValueType::String => boxed($array::<String>::new()),
      ValueType::Variant => boxed($array::<Variant>::new()),
    }
  };
}

/// Create an empty, zero-dimensional array.
pub fn create_array(kind: StorageKind, tag: ValueTypeTag) -> Box<dyn Array> {
  match kind {
    StorageKind::Dense => dispatch_value_type!(tag.value_type(), DenseArray),
    StorageKind::Sparse => dispatch_value_type!(tag.value_type(), SparseArray),
  }
}

/// Create an array from raw storage and value-type codes.
///
/// Unknown codes log a warning and yield `None`.
pub fn create_array_from_codes(storage: i32, value_type: i32) -> Option<Box<dyn Array>> {
  match (StorageKind::from_code(storage), ValueTypeTag::from_code(value_type)) {
    (Some(kind), Some(tag)) => Some(create_array(kind, tag)),
    _ => {
      log::warn!(
        "create_array: unsupported storage/value type combination ({}, {})",
        storage,
        value_type
      );
      None
    }
  }
}

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;
