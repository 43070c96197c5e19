// Logging and verbosity control

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::Level;

/// Global verbosity level
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - standard output
    Normal = 1,
    /// Verbose mode - detailed output
    Verbose = 2,
}

impl VerbosityLevel {
    /// Get the current verbosity level
    pub fn current() -> Self {
        match VERBOSITY.load(Ordering::Relaxed) {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Normal,
            _ => VerbosityLevel::Verbose,
        }
    }

    /// Set the verbosity level
    pub fn set(level: Self) {
        VERBOSITY.store(level as u8, Ordering::Relaxed);
    }

    /// Check if we should output at this level
    pub fn should_output(&self) -> bool {
        self <= &Self::current()
    }

    /// Maximum tracing level shown at this verbosity
    pub fn tracing_level(&self) -> Level {
        match self {
            VerbosityLevel::Quiet => Level::ERROR,
            VerbosityLevel::Normal => Level::INFO,
            VerbosityLevel::Verbose => Level::DEBUG,
        }
    }

    /// Level selected by the `-v`/`-q` flags; quiet wins
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Initialize logging based on CLI flags
///
/// Installs a `tracing` subscriber writing to stderr. Calling it again only
/// updates the verbosity level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = VerbosityLevel::from_flags(verbose, quiet);
    VerbosityLevel::set(level);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level.tracing_level())
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(VerbosityLevel::from_flags(false, false), VerbosityLevel::Normal);
        assert_eq!(VerbosityLevel::from_flags(true, false), VerbosityLevel::Verbose);
        assert_eq!(VerbosityLevel::from_flags(false, true), VerbosityLevel::Quiet);
        assert_eq!(VerbosityLevel::from_flags(true, true), VerbosityLevel::Quiet);
    }

    #[test]
    fn test_tracing_levels() {
        assert_eq!(VerbosityLevel::Quiet.tracing_level(), Level::ERROR);
        assert_eq!(VerbosityLevel::Normal.tracing_level(), Level::INFO);
        assert_eq!(VerbosityLevel::Verbose.tracing_level(), Level::DEBUG);
    }

    #[test]
    fn test_quiet_is_always_shown() {
        for level in [
            VerbosityLevel::Quiet,
            VerbosityLevel::Normal,
            VerbosityLevel::Verbose,
        ] {
            VerbosityLevel::set(level);
            assert!(VerbosityLevel::Quiet.should_output());
        }
        VerbosityLevel::set(VerbosityLevel::Normal);
    }
}
