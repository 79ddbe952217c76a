use generic::reflect::{
	Value, classify, is_int, is_ptr, is_slice, is_string, is_struct, is_struct_or_struct_ptr, is_struct_ptr, type_of,
};

use crate::cmd::util::{InputArgs, emit_json};

/// Report kind, type, and classification predicates for a document.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Classify the loaded value and print every predicate.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let value = args.input.load()?;
	let report = InspectJson::from_value(&value);

	if args.json {
		emit_json(&report)?;
		return Ok(());
	}

	println!("shape: {}", report.shape);
	println!("type: {}", report.own_type);
	println!("resolved_type: {}", report.resolved_type);
	for (name, flag) in report.flags() {
		println!("{name}: {flag}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct InspectJson {
	shape: &'static str,
	own_type: String,
	resolved_type: String,
	is_int: bool,
	is_string: bool,
	is_slice: bool,
	is_ptr: bool,
	is_struct: bool,
	is_struct_ptr: bool,
	is_struct_or_struct_ptr: bool,
}

impl InspectJson {
	fn from_value(value: &Value) -> Self {
		Self {
			shape: classify(value).label(),
			own_type: value.ty().to_string(),
			resolved_type: type_of(value).to_string(),
			is_int: is_int(value),
			is_string: is_string(value),
			is_slice: is_slice(value),
			is_ptr: is_ptr(value),
			is_struct: is_struct(value),
			is_struct_ptr: is_struct_ptr(value),
			is_struct_or_struct_ptr: is_struct_or_struct_ptr(value),
		}
	}

	fn flags(&self) -> [(&'static str, bool); 7] {
		[
			("is_int", self.is_int),
			("is_string", self.is_string),
			("is_slice", self.is_slice),
			("is_ptr", self.is_ptr),
			("is_struct", self.is_struct),
			("is_struct_ptr", self.is_struct_ptr),
			("is_struct_or_struct_ptr", self.is_struct_or_struct_ptr),
		]
	}
}
