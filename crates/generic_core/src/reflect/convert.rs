use crate::reflect::{SliceValue, Type, Value};

/// Native data that can be viewed as a runtime [`Value`].
///
/// Integers map to `int`, floats to `float`, `Vec<T>` to `[]T`,
/// and both `Option<T>` and `Box<T>` to `*T` (with `None` as the nil
/// pointer). Structs opt in through [`impl_reflect!`](crate::impl_reflect).
pub trait Reflect {
	/// Static type descriptor for `Self`.
	fn reflect_type() -> Type
	where
		Self: Sized;

	/// Runtime value for `self`.
	fn reflect(&self) -> Value;
}

macro_rules! reflect_scalar {
	($ty:ty, $variant:ident, $cast:ty) => {
		impl Reflect for $ty {
			fn reflect_type() -> Type {
				Type::$variant
			}

			fn reflect(&self) -> Value {
				Value::$variant(<$cast>::from(*self))
			}
		}
	};
}

reflect_scalar!(bool, Bool, bool);
reflect_scalar!(i8, Int, i64);
reflect_scalar!(i16, Int, i64);
reflect_scalar!(i32, Int, i64);
reflect_scalar!(i64, Int, i64);
reflect_scalar!(u8, Int, i64);
reflect_scalar!(u16, Int, i64);
reflect_scalar!(u32, Int, i64);
reflect_scalar!(f32, Float, f64);
reflect_scalar!(f64, Float, f64);

impl Reflect for &str {
	fn reflect_type() -> Type {
		Type::String
	}

	fn reflect(&self) -> Value {
		Value::string(*self)
	}
}

impl Reflect for String {
	fn reflect_type() -> Type {
		Type::String
	}

	fn reflect(&self) -> Value {
		Value::string(self.as_str())
	}
}

impl<T: Reflect> Reflect for Vec<T> {
	fn reflect_type() -> Type {
		Type::slice_of(T::reflect_type())
	}

	fn reflect(&self) -> Value {
		Value::Slice(SliceValue::new(T::reflect_type(), self.iter().map(Reflect::reflect).collect()))
	}
}

impl<T: Reflect> Reflect for Option<T> {
	fn reflect_type() -> Type {
		Type::ptr_to(T::reflect_type())
	}

	fn reflect(&self) -> Value {
		match self {
			Some(inner) => Value::ptr_to(inner.reflect()),
			None => Value::nil_ptr(T::reflect_type()),
		}
	}
}

impl<T: Reflect> Reflect for Box<T> {
	fn reflect_type() -> Type {
		Type::ptr_to(T::reflect_type())
	}

	fn reflect(&self) -> Value {
		Value::ptr_to(self.as_ref().reflect())
	}
}

impl Reflect for Value {
	fn reflect_type() -> Type {
		Type::Any
	}

	fn reflect(&self) -> Value {
		self.clone()
	}
}

/// Implement [`Reflect`] for a named struct by listing its fields and types.
///
/// ```
/// use generic::impl_reflect;
/// use generic::reflect::{Reflect, field};
///
/// struct Point {
/// 	x: i64,
/// 	y: i64,
/// }
///
/// impl_reflect!(Point { x: i64, y: i64 });
///
/// let point = Point { x: 3, y: 4 }.reflect();
/// assert_eq!(field(&point, "y").as_int(), Some(4));
/// ```
#[macro_export]
macro_rules! impl_reflect {
	($name:ident { $($field:ident : $fty:ty),* $(,)? }) => {
		impl $crate::reflect::Reflect for $name {
			fn reflect_type() -> $crate::reflect::Type {
				$crate::reflect::Type::Struct($crate::reflect::StructType::new(
					stringify!($name),
					vec![$($crate::reflect::FieldType::new(
						stringify!($field),
						<$fty as $crate::reflect::Reflect>::reflect_type(),
					)),*],
				))
			}

			fn reflect(&self) -> $crate::reflect::Value {
				$crate::reflect::Value::Struct($crate::reflect::StructValue::new(
					stringify!($name),
					vec![$($crate::reflect::FieldValue::new(
						stringify!($field),
						$crate::reflect::Reflect::reflect(&self.$field),
					)),*],
				))
			}
		}
	};
}
