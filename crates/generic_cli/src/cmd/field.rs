use generic::reflect::{field, try_field};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{InputArgs, emit_json};

/// Look up a struct field.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub name: String,
	/// Fail on a missing field or non-struct input instead of printing a zero value.
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print the named field of the loaded struct or struct pointer.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let value = args.input.load()?;
	let found = if args.strict { try_field(&value, &args.name)? } else { field(&value, &args.name) };

	if args.json {
		emit_json(&found)?;
	} else {
		print_value(&found, PrintOptions::default());
	}
	Ok(())
}
