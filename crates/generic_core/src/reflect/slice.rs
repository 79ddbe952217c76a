use crate::reflect::{ReflectError, Result, Shape, SliceValue, Value, classify, indirect, value_of};

/// Build an empty slice typed after an exemplar.
///
/// A slice exemplar donates its element type; any other exemplar becomes the
/// element type itself.
pub fn make_slice(exemplar: &Value) -> Value {
	let resolved = indirect(exemplar);
	let elem = match classify(&resolved) {
		Shape::Slice(slice) => slice.elem.clone(),
		_ => resolved.ty(),
	};
	Value::Slice(SliceValue::empty(elem))
}

/// Append `k` to the slice `ret` and return the result.
///
/// When `k` resolves to a slice its elements are appended, otherwise `k` is
/// appended as one element. Neither argument is modified.
pub fn append(ret: &Value, k: &Value) -> Result<Value> {
	let dest = value_of(ret);
	let Shape::Slice(dest) = classify(&dest) else {
		return Err(ReflectError::NotASlice { got: classify(&dest).label() });
	};

	let src = value_of(k);
	let mut out = dest.clone();
	match classify(&src) {
		Shape::Slice(src) => {
			if !src.elem.assignable_to(&out.elem) {
				return Err(ReflectError::NotAssignable {
					expected: format!("{:#}", out.elem),
					got: format!("{:#}", src.elem),
				});
			}
			out.items.extend(src.items.iter().cloned());
		}
		_ => {
			let ty = src.ty();
			if !ty.assignable_to(&out.elem) {
				return Err(ReflectError::NotAssignable {
					expected: format!("{:#}", out.elem),
					got: format!("{ty:#}"),
				});
			}
			out.items.push(Value::clone(&src));
		}
	}

	Ok(Value::Slice(out))
}

/// Call `f(index, element)` for each element of a slice until it returns `false`.
///
/// Non-slice inputs are ignored.
pub fn foreach<F>(value: &Value, mut f: F)
where
	F: FnMut(usize, &Value) -> bool,
{
	let resolved = value_of(value);
	let Shape::Slice(slice) = classify(&resolved) else {
		return;
	};

	for (idx, item) in slice.items.iter().enumerate() {
		if !f(idx, item) {
			break;
		}
	}
}

#[cfg(test)]
mod tests;
