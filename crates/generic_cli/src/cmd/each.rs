use generic::reflect::{Value, foreach};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::{InputArgs, emit_json};

/// Iterate the elements of a slice document.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Stop after this many elements.
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Print `index: element` for each visited slice element.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let value = args.input.load()?;
	let limit = args.limit.unwrap_or(usize::MAX);

	let mut visited = Vec::new();
	if limit > 0 {
		foreach(&value, |idx, item| {
			visited.push(EachItemJson { index: idx, value: item.clone() });
			visited.len() < limit
		});
	}

	if args.json {
		emit_json(&visited)?;
		return Ok(());
	}

	for item in &visited {
		print!("{}: {}", item.index, render_value(&item.value, PrintOptions::compact()));
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct EachItemJson {
	index: usize,
	value: Value,
}
