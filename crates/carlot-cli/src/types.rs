use carlot_store::IdScheme;
use clap::ValueEnum;
use std::fmt;
use tracing::level_filters::LevelFilter;

/// Writes the value's command-line spelling, so `--help`, `Display` and
/// parsing never disagree.
fn write_value_name<T: ValueEnum>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.to_possible_value() {
        Some(possible) => f.write_str(possible.get_name()),
        None => Ok(()),
    }
}

/// How non-interactive commands print their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    Plain,
    /// The presented rows as pretty JSON
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Most verbose level the subscriber lets through
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

/// `--id-scheme` for `carlot init`; mirrors the store's `IdScheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum IdSchemeArg {
    /// "1", "2", ... continuing after the largest numeric id
    Sequential,
    /// Random v4 UUIDs
    Uuid,
}

impl From<IdSchemeArg> for IdScheme {
    fn from(arg: IdSchemeArg) -> Self {
        match arg {
            IdSchemeArg::Sequential => IdScheme::Sequential,
            IdSchemeArg::Uuid => IdScheme::Uuid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_cli_spelling() {
        for format in OutputFormat::value_variants() {
            assert_eq!(OutputFormat::from_str(&format.to_string(), false), Ok(*format));
        }
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_filter_ordering() {
        assert_eq!(LogLevel::Warn.filter(), LevelFilter::WARN);
        assert!(LogLevel::Trace.filter() > LogLevel::Error.filter());
    }

    #[test]
    fn test_id_scheme_arg_maps_to_store_scheme() {
        assert_eq!(IdScheme::from(IdSchemeArg::Uuid), IdScheme::Uuid);
        assert_eq!(IdScheme::from(IdSchemeArg::Sequential), IdScheme::default());
    }
}
