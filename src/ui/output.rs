//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every file touched.
    Verbose,
    /// Show summaries.
    #[default]
    Normal,
    /// Show command results, warnings and errors.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Pick the mode for the `--verbose` flag and the number of `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: u8) -> Self {
        match quiet {
            0 if verbose => Self::Verbose,
            0 => Self::Normal,
            1 => Self::Quiet,
            _ => Self::Silent,
        }
    }

    /// Check if this mode lists individual files.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status and success messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows warnings and command results.
    pub fn shows_results(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
