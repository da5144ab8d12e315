// region:    --- Write Types

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverMode {
	/// Overwrite no matter what.
	Write,

	/// Skip if exists.
	#[default]
	Skip,
}

impl OverMode {
	pub fn from_override_flag(over: bool) -> OverMode {
		if over {
			OverMode::Write
		} else {
			OverMode::Skip
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			OverMode::Write => "Write",
			OverMode::Skip => "Exists",
		}
	}
}

// endregion: --- Write Types
