use clap;

/// How much the planner reports while searching.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only errors
    Silent,
    /// Search start, finish and periodic progress
    Normal,
    /// Additionally every new f-layer
    Verbose,
    /// Additionally every expansion
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn verbosity_parses_from_cli_names() {
        assert_eq!(
            Verbosity::from_str("verbose", true).unwrap(),
            Verbosity::Verbose
        );
        assert_eq!(
            tracing::Level::from(Verbosity::Silent),
            tracing::Level::ERROR
        );
    }
}
