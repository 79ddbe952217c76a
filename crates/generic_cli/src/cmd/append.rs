use std::path::PathBuf;

use generic::reflect::append;

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{InputArgs, emit_json, load_value};

/// Append one document to a slice document.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Element or slice document to append.
	#[arg(long = "with")]
	pub with: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the slice produced by appending `--with` to the input.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let options = args.input.json_options();
	let ret = args.input.load()?;
	let k = load_value(&args.with, &options)?;
	let out = append(&ret, &k)?;

	if args.json {
		emit_json(&out)?;
	} else {
		print_value(&out, PrintOptions::default());
	}
	Ok(())
}
