use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::reflect::{FieldValue, ReflectError, Result, SliceValue, StructValue, Type, Value};

/// Default object key marking a pointer: `{"$ptr": <target>}`.
pub const DEFAULT_PTR_KEY: &str = "$ptr";
/// Default object key carrying a struct type name.
pub const DEFAULT_TYPE_KEY: &str = "$type";

/// Limits and naming for JSON to [`Value`] conversion.
#[derive(Debug, Clone)]
pub struct JsonOptions {
	/// Struct type name used when an object has no type-name key.
	pub struct_name: Box<str>,
	/// Maximum nesting depth of arrays and objects.
	pub max_depth: u32,
	/// Single-key object marker that turns the object into a pointer.
	pub ptr_key: Box<str>,
	/// Object key whose string value names the struct type.
	pub type_key: Box<str>,
}

impl Default for JsonOptions {
	fn default() -> Self {
		Self {
			struct_name: "Object".into(),
			max_depth: 64,
			ptr_key: DEFAULT_PTR_KEY.into(),
			type_key: DEFAULT_TYPE_KEY.into(),
		}
	}
}

impl JsonOptions {
	/// Preset with a shallow depth limit for untrusted input.
	pub fn compact() -> Self {
		Self {
			max_depth: 16,
			..Self::default()
		}
	}
}

impl Value {
	/// Convert a parsed JSON document into a runtime value.
	///
	/// Arrays become slices typed after their common item type (`any` when
	/// items differ or the array is empty). Objects become structs, except a
	/// single-key object under `ptr_key`, which becomes a pointer. `null` is
	/// untyped nil.
	pub fn from_json(json: &serde_json::Value, opt: &JsonOptions) -> Result<Self> {
		from_json_impl(json, opt, 0)
	}
}

/// Parse JSON bytes and convert them into a runtime value.
pub fn from_json_slice(bytes: &[u8], opt: &JsonOptions) -> Result<Value> {
	let json: serde_json::Value = serde_json::from_slice(bytes)?;
	Value::from_json(&json, opt)
}

fn from_json_impl(json: &serde_json::Value, opt: &JsonOptions, depth: u32) -> Result<Value> {
	if depth > opt.max_depth {
		tracing::debug!(max_depth = opt.max_depth, "json conversion too deep");
		return Err(ReflectError::JsonDepthExceeded { max_depth: opt.max_depth });
	}

	match json {
		serde_json::Value::Null => Ok(Value::Nil),
		serde_json::Value::Bool(value) => Ok(Value::Bool(*value)),
		serde_json::Value::Number(number) => {
			if let Some(value) = number.as_i64() {
				return Ok(Value::Int(value));
			}
			number
				.as_f64()
				.map(Value::Float)
				.ok_or_else(|| ReflectError::JsonNumberOutOfRange { number: number.to_string() })
		}
		serde_json::Value::String(value) => Ok(Value::string(value.as_str())),
		serde_json::Value::Array(items) => {
			let values = items.iter().map(|item| from_json_impl(item, opt, depth + 1)).collect::<Result<Vec<_>>>()?;
			Ok(Value::Slice(SliceValue::new(common_type(&values), values)))
		}
		serde_json::Value::Object(map) => {
			if map.len() == 1
				&& let Some(inner) = map.get(&*opt.ptr_key)
			{
				return match from_json_impl(inner, opt, depth + 1)? {
					Value::Nil => Ok(Value::nil_ptr(Type::Any)),
					target => Ok(Value::ptr_to(target)),
				};
			}

			let mut type_name = opt.struct_name.clone();
			let mut fields = Vec::with_capacity(map.len());
			for (key, item) in map {
				if **key == *opt.type_key {
					let name = item.as_str().ok_or_else(|| ReflectError::JsonBadTypeName { key: key.clone() })?;
					type_name = name.into();
					continue;
				}
				fields.push(FieldValue::new(key.as_str(), from_json_impl(item, opt, depth + 1)?));
			}
			Ok(Value::Struct(StructValue::new(type_name, fields)))
		}
	}
}

fn common_type(values: &[Value]) -> Type {
	let mut types = values.iter().map(Value::ty);
	let Some(first) = types.next() else {
		return Type::Any;
	};
	types.fold(first, |common, ty| common.unify(&ty))
}

impl Value {
	/// Encode this value as JSON using the key names from `opt`.
	///
	/// Reading the result back with the same options yields an equal value.
	pub fn to_json(&self, opt: &JsonOptions) -> Result<serde_json::Value> {
		Ok(serde_json::to_value(Encoded::new(self, opt))?)
	}
}

/// Serializes with the default `$ptr` and `$type` keys.
impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		Encoded {
			value: self,
			ptr_key: DEFAULT_PTR_KEY,
			type_key: DEFAULT_TYPE_KEY,
		}
		.serialize(serializer)
	}
}

struct Encoded<'a> {
	value: &'a Value,
	ptr_key: &'a str,
	type_key: &'a str,
}

impl<'a> Encoded<'a> {
	fn new(value: &'a Value, opt: &'a JsonOptions) -> Self {
		Self {
			value,
			ptr_key: &opt.ptr_key,
			type_key: &opt.type_key,
		}
	}

	fn nested(&self, value: &'a Value) -> Self {
		Self { value, ..*self }
	}
}

impl Serialize for Encoded<'_> {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self.value {
			Value::Nil => serializer.serialize_unit(),
			Value::Bool(value) => serializer.serialize_bool(*value),
			Value::Int(value) => serializer.serialize_i64(*value),
			Value::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
			Value::Float(_) => serializer.serialize_unit(),
			Value::String(value) => serializer.serialize_str(value),
			Value::Slice(slice) => serializer.collect_seq(slice.items.iter().map(|item| self.nested(item))),
			Value::Struct(item) => {
				let mut map = serializer.serialize_map(Some(item.fields.len() + 1))?;
				map.serialize_entry(self.type_key, &*item.type_name)?;
				for field in &item.fields {
					map.serialize_entry(&*field.name, &self.nested(&field.value))?;
				}
				map.end()
			}
			Value::Ptr(ptr) => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry(self.ptr_key, &ptr.target().map(|target| self.nested(target)))?;
				map.end()
			}
		}
	}
}
