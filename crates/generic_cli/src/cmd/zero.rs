use generic::reflect::{type_of, zero};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{InputArgs, emit_json};

/// Print the zero value of a document's type.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print the zero value for the loaded exemplar.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let value = args.input.load()?;
	let zeroed = zero(&value);

	if args.json {
		emit_json(&zeroed)?;
	} else {
		println!("type: {}", type_of(&value));
		print_value(&zeroed, PrintOptions::default());
	}
	Ok(())
}
