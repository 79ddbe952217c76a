use generic::reflect::make_slice;

use crate::cmd::util::{InputArgs, emit_json};

/// Build an empty slice typed after a document.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print the type of the empty slice built from the exemplar.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let value = args.input.load()?;
	let made = make_slice(&value);

	if args.json {
		emit_json(&MakeSliceJson {
			slice_type: made.ty().to_string(),
			value: &made,
		})?;
	} else {
		println!("{}", made.ty());
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct MakeSliceJson<'a> {
	#[serde(rename = "type")]
	slice_type: String,
	value: &'a generic::reflect::Value,
}
