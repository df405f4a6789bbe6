// Logging and verbosity control

use tracing::Level;

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only, no progress bar
    Quiet = 0,
    /// Normal mode - warnings and the progress bar
    Normal = 1,
    /// Verbose mode - per-job debug logging
    Verbose = 2,
}

impl VerbosityLevel {
    /// Resolve the level from CLI flags; `quiet` wins
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Most detailed tracing level emitted at this verbosity
    pub fn max_level(&self) -> Level {
        match self {
            VerbosityLevel::Quiet => Level::ERROR,
            VerbosityLevel::Normal => Level::WARN,
            VerbosityLevel::Verbose => Level::DEBUG,
        }
    }

    /// Whether the live progress bar is drawn
    pub fn shows_progress(&self) -> bool {
        *self >= VerbosityLevel::Normal
    }
}

/// Initialize logging based on CLI flags
///
/// Logs go to stderr so they never mix with the argument report on stdout.
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbose: bool, quiet: bool) -> VerbosityLevel {
    let level = VerbosityLevel::from_flags(verbose, quiet);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level.max_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    level
}
