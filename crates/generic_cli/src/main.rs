#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "generic", about = "Inspect and combine JSON documents as runtime-typed values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Inspect(cmd::inspect::Args),
	Field(cmd::field::Args),
	Each(cmd::each::Args),
	Append(cmd::append::Args),
	Zero(cmd::zero::Args),
	MakeSlice(cmd::make_slice::Args),
	Verify(cmd::verify::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> generic::reflect::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Field(args) => cmd::field::run(args),
		Commands::Each(args) => cmd::each::run(args),
		Commands::Append(args) => cmd::append::run(args),
		Commands::Zero(args) => cmd::zero::run(args),
		Commands::MakeSlice(args) => cmd::make_slice::run(args),
		Commands::Verify(args) => cmd::verify::run(args),
	}
}
