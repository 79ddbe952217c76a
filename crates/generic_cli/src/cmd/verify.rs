use generic::reflect::{Guard, VerifyOptions};

use crate::cmd::util::InputArgs;

/// Shape a guard checks for.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Target {
	Int,
	String,
	Slice,
}

/// Run a precondition guard against a document.
#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long = "as", value_enum)]
	pub target: Target,
	/// Panic instead of reporting the failure.
	#[arg(long)]
	pub strict: bool,
}

/// Exit successfully when the guard accepts the loaded value.
pub fn run(args: Args) -> generic::reflect::Result<()> {
	let value = args.input.load()?;
	let options = if args.strict { VerifyOptions::strict() } else { VerifyOptions::default() };
	let guard = Guard::new(options);

	match args.target {
		Target::Int => guard.int(&value)?,
		Target::String => guard.string(&value)?,
		Target::Slice => guard.slice(&value)?,
	}
	println!("ok");
	Ok(())
}
