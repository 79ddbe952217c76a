use std::fmt::Write;

use generic::reflect::Value;

/// Output truncation and formatting limits for printed values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single struct.
	pub max_fields_per_struct: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for slices.
	pub max_array_items: usize,
	/// Maximum nesting depth for slices, structs, and pointers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_struct: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset for one-line-per-item listings.
	pub fn compact() -> Self {
		Self {
			max_fields_per_struct: 16,
			max_string_len: 60,
			max_array_items: 8,
			max_print_depth: 2,
		}
	}
}

/// Print one value tree to stdout.
pub fn print_value(value: &Value, options: PrintOptions) {
	print!("{}", render_value(value, options));
}

/// Render one value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	render_into(&mut out, value, 0, 0, options);
	out
}

fn render_into(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Nil => {
			let _ = writeln!(out, "{pad}nil");
		}
		Value::Bool(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Value::Int(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Value::Float(v) => {
			let _ = writeln!(out, "{pad}{v}");
		}
		Value::String(v) => {
			let _ = writeln!(out, "{pad}\"{}\"", truncate(v, options.max_string_len));
		}
		Value::Slice(slice) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{}[... {} items]", slice.ty(), slice.len());
				return;
			}
			let _ = writeln!(out, "{pad}{} [", slice.ty());
			for item in slice.items.iter().take(options.max_array_items) {
				render_into(out, item, indent + 2, depth + 1, options);
			}
			if slice.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", slice.len() - options.max_array_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Struct(item) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{} {{ ... }}", item.type_name);
				return;
			}
			let _ = writeln!(out, "{pad}{} {{", item.type_name);
			for field in item.fields.iter().take(options.max_fields_per_struct) {
				let _ = write!(out, "{pad}  {} = ", field.name);
				if matches!(field.value, Value::Struct(_) | Value::Slice(_) | Value::Ptr(_)) {
					let _ = writeln!(out);
					render_into(out, &field.value, indent + 4, depth + 1, options);
				} else {
					render_into(out, &field.value, 0, depth + 1, options);
				}
			}
			if item.fields.len() > options.max_fields_per_struct {
				let _ = writeln!(out, "{pad}  ... {} more fields", item.fields.len() - options.max_fields_per_struct);
			}
			let _ = writeln!(out, "{pad}}}");
		}
		Value::Ptr(ptr) => match ptr.target() {
			None => {
				let _ = writeln!(out, "{pad}(*{})(nil)", ptr.elem);
			}
			Some(_) if depth >= options.max_print_depth => {
				let _ = writeln!(out, "{pad}&...");
			}
			Some(target) => {
				let _ = writeln!(out, "{pad}&");
				render_into(out, target, indent + 2, depth + 1, options);
			}
		},
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
