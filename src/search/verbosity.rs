use clap;

/// How much the solver logs to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[clap(help = "Only errors.")]
    Silent,
    #[clap(help = "Search progress and statistics.")]
    Normal,
    #[clap(help = "Also the goal and plan details.")]
    Verbose,
    #[clap(help = "Every expansion.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
