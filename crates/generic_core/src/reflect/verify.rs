use crate::reflect::{ReflectError, Result, Value, classify, is_int, is_slice, is_string};

/// What a guard does after rejecting its argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerifyMode {
	/// Return [`ReflectError::VerifyFailed`] to the caller.
	#[default]
	Report,
	/// Log the diagnostic and panic.
	Abort,
}

/// Guard behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
	/// Failure handling mode.
	pub mode: VerifyMode,
}

impl VerifyOptions {
	/// Preset that panics on the first failed guard.
	pub fn strict() -> Self {
		Self { mode: VerifyMode::Abort }
	}
}

/// Precondition guard for call sites that require a particular shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guard {
	options: VerifyOptions,
}

impl Guard {
	/// Create a guard with explicit options.
	pub fn new(options: VerifyOptions) -> Self {
		Self { options }
	}

	/// Require the resolved value to be an int.
	pub fn int(&self, value: &Value) -> Result<()> {
		self.check(is_int(value), "int", value)
	}

	/// Require the value to be a string.
	pub fn string(&self, value: &Value) -> Result<()> {
		self.check(is_string(value), "string", value)
	}

	/// Slice guard with the condition as historically observed: it rejects
	/// values that ARE slices and accepts everything else, the opposite of
	/// what its name and the int/string guards suggest.
	pub fn slice(&self, value: &Value) -> Result<()> {
		self.check(!is_slice(value), "slice", value)
	}

	fn check(&self, ok: bool, expected: &'static str, value: &Value) -> Result<()> {
		if ok {
			return Ok(());
		}

		let err = ReflectError::VerifyFailed {
			expected,
			got: classify(value).label(),
			value: value.to_string(),
		};

		match self.options.mode {
			VerifyMode::Report => {
				tracing::warn!(expected, %value, "guard rejected argument");
				Err(err)
			}
			VerifyMode::Abort => {
				tracing::error!(expected, %value, "guard rejected argument, aborting");
				panic!("{err}");
			}
		}
	}
}

/// Require the resolved value to be an int.
pub fn verify_int(value: &Value) -> Result<()> {
	Guard::default().int(value)
}

/// Require the value to be a string.
pub fn verify_string(value: &Value) -> Result<()> {
	Guard::default().string(value)
}

/// Run the slice guard; see [`Guard::slice`] for its inverted condition.
pub fn verify_slice(value: &Value) -> Result<()> {
	Guard::default().slice(value)
}
