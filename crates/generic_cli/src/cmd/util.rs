use std::io::Read;
use std::path::{Path, PathBuf};

use generic::reflect::{JsonOptions, Result, Value, from_json_slice};

/// JSON conversion flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
	/// JSON document to load, or `-` for stdin.
	pub file: PathBuf,
	/// Struct name for objects without a `$type` key.
	#[arg(long = "struct-name")]
	pub struct_name: Option<String>,
	/// Maximum JSON nesting depth.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

impl InputArgs {
	/// Conversion options with CLI overrides applied.
	pub fn json_options(&self) -> JsonOptions {
		let mut options = JsonOptions::default();
		if let Some(name) = &self.struct_name {
			options.struct_name = name.as_str().into();
		}
		if let Some(depth) = self.max_depth {
			options.max_depth = depth;
		}
		options
	}

	/// Load the main input document.
	pub fn load(&self) -> Result<Value> {
		load_value(&self.file, &self.json_options())
	}
}

/// Read a JSON document from a path (or stdin for `-`) and convert it.
pub(crate) fn load_value(path: &Path, options: &JsonOptions) -> Result<Value> {
	let bytes = if path.as_os_str() == "-" {
		let mut buf = Vec::new();
		std::io::stdin().read_to_end(&mut buf)?;
		buf
	} else {
		std::fs::read(path)?
	};
	tracing::debug!(path = %path.display(), len = bytes.len(), "loaded input");
	from_json_slice(&bytes, options)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

#[cfg(test)]
mod tests;
