use std::fmt;

use crate::reflect::{FieldType, Kind, StructType, Type};

/// Runtime value with its type recoverable from the value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Untyped nil; the zero value of `any`.
	Nil,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// Floating-point scalar.
	Float(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Typed sequence.
	Slice(SliceValue),
	/// Struct-shaped value.
	Struct(StructValue),
	/// Pointer to another value, possibly nil.
	Ptr(PtrValue),
}

/// Sequence value carrying its element type, so empty slices stay typed.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceValue {
	/// Element type.
	pub elem: Type,
	/// Elements in index order.
	pub items: Vec<Value>,
}

/// Struct value with field names preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Struct type name.
	pub type_name: Box<str>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

/// Named struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Field payload.
	pub value: Value,
}

/// Pointer value; `target` is `None` for a nil pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct PtrValue {
	/// Pointee type, kept for nil pointers.
	pub elem: Type,
	/// Addressed value.
	pub target: Option<Box<Value>>,
}

impl Value {
	/// Build a string value.
	pub fn string(value: impl Into<Box<str>>) -> Self {
		Value::String(value.into())
	}

	/// Build a non-nil pointer addressing `target`.
	pub fn ptr_to(target: Value) -> Self {
		Value::Ptr(PtrValue {
			elem: target.ty(),
			target: Some(Box::new(target)),
		})
	}

	/// Build a nil pointer to `elem`.
	pub fn nil_ptr(elem: Type) -> Self {
		Value::Ptr(PtrValue { elem, target: None })
	}

	/// Return this value's own type, without any indirection.
	pub fn ty(&self) -> Type {
		match self {
			Value::Nil => Type::Any,
			Value::Bool(_) => Type::Bool,
			Value::Int(_) => Type::Int,
			Value::Float(_) => Type::Float,
			Value::String(_) => Type::String,
			Value::Slice(slice) => slice.ty(),
			Value::Struct(item) => Type::Struct(item.layout()),
			Value::Ptr(ptr) => Type::ptr_to(ptr.elem.clone()),
		}
	}

	/// Return this value's own kind, without any indirection.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Nil => Kind::Any,
			Value::Bool(_) => Kind::Bool,
			Value::Int(_) => Kind::Int,
			Value::Float(_) => Kind::Float,
			Value::String(_) => Kind::String,
			Value::Slice(_) => Kind::Slice,
			Value::Struct(_) => Kind::Struct,
			Value::Ptr(_) => Kind::Ptr,
		}
	}

	/// Whether this is the untyped nil value.
	pub fn is_nil(&self) -> bool {
		matches!(self, Value::Nil)
	}

	/// Borrow the boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow the integer payload.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow the float payload.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(value) => Some(&**value),
			_ => None,
		}
	}

	/// Borrow the slice payload.
	pub fn as_slice(&self) -> Option<&SliceValue> {
		match self {
			Value::Slice(slice) => Some(slice),
			_ => None,
		}
	}

	/// Borrow the struct payload.
	pub fn as_struct(&self) -> Option<&StructValue> {
		match self {
			Value::Struct(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow the pointer payload.
	pub fn as_ptr(&self) -> Option<&PtrValue> {
		match self {
			Value::Ptr(ptr) => Some(ptr),
			_ => None,
		}
	}
}

impl SliceValue {
	/// Build a slice from an element type and items.
	pub fn new(elem: Type, items: Vec<Value>) -> Self {
		Self { elem, items }
	}

	/// Build an empty slice of `elem`.
	pub fn empty(elem: Type) -> Self {
		Self { elem, items: Vec::new() }
	}

	/// Slice type `[]elem`.
	pub fn ty(&self) -> Type {
		Type::slice_of(self.elem.clone())
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the slice has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Element at `index`.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.items.get(index)
	}
}

impl StructValue {
	/// Build a struct value.
	pub fn new(type_name: impl Into<Box<str>>, fields: Vec<FieldValue>) -> Self {
		Self {
			type_name: type_name.into(),
			fields,
		}
	}

	/// Find a field value by exact, case-sensitive name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}

	/// Derive the struct layout from the field values.
	pub fn layout(&self) -> StructType {
		StructType {
			name: self.type_name.clone(),
			fields: self.fields.iter().map(|field| FieldType::new(field.name.clone(), field.value.ty())).collect(),
		}
	}
}

impl FieldValue {
	/// Build a named field.
	pub fn new(name: impl Into<Box<str>>, value: Value) -> Self {
		Self { name: name.into(), value }
	}
}

impl PtrValue {
	/// Whether the pointer addresses nothing.
	pub fn is_nil(&self) -> bool {
		self.target.is_none()
	}

	/// Borrow the addressed value.
	pub fn target(&self) -> Option<&Value> {
		self.target.as_deref()
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value.into_boxed_str())
	}
}

impl From<SliceValue> for Value {
	fn from(value: SliceValue) -> Self {
		Value::Slice(value)
	}
}

impl From<StructValue> for Value {
	fn from(value: StructValue) -> Self {
		Value::Struct(value)
	}
}

impl From<PtrValue> for Value {
	fn from(value: PtrValue) -> Self {
		Value::Ptr(value)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Nil => f.write_str("nil"),
			Value::Bool(value) => write!(f, "{value}"),
			Value::Int(value) => write!(f, "{value}"),
			Value::Float(value) => write!(f, "{value}"),
			Value::String(value) => write!(f, "{value:?}"),
			Value::Slice(slice) => {
				write!(f, "{}{{", slice.ty())?;
				for (idx, item) in slice.items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("}")
			}
			Value::Struct(item) => {
				write!(f, "{}{{", item.type_name)?;
				for (idx, field) in item.fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}:{}", field.name, field.value)?;
				}
				f.write_str("}")
			}
			Value::Ptr(ptr) => match ptr.target() {
				Some(target) => write!(f, "&{target}"),
				None => write!(f, "(*{})(nil)", ptr.elem),
			},
		}
	}
}
