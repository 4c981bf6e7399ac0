use super::electron::Electron;
use crate::constants::{CONFIG_DIR_NAME, TABLE_ENV_VAR, TABLE_FILE};
use crate::errors::CapacityErrors;
use crate::performance::table_io::load_table;
use crate::performance::PerformanceTable;
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Where the performance table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    BuiltIn,
}

impl TableSource {
    /// Resolves the table source: explicit path, then `LAUNCH_CAPACITY_TABLE`,
    /// then `<config dir>/launch-capacity/performance.csv`, then the built-in dataset.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let from_env = env::var_os(TABLE_ENV_VAR).map(PathBuf::from);
        let config_file = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(TABLE_FILE));
        Self::resolve_from(explicit, from_env, config_file)
    }

    pub fn resolve_from(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> Self {
        explicit
            .or(from_env)
            .or_else(|| config_file.filter(|path| path.is_file()))
            .map(TableSource::File)
            .unwrap_or(TableSource::BuiltIn)
    }

    pub fn load(&self) -> Result<PerformanceTable, CapacityErrors> {
        match self {
            TableSource::File(path) => load_table(path),
            TableSource::BuiltIn => {
                info!("Using built-in Electron performance table");
                Electron::performance_table()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let source = TableSource::resolve_from(
            Some(PathBuf::from("cli.csv")),
            Some(PathBuf::from("env.csv")),
            None,
        );
        assert_eq!(source, TableSource::File(PathBuf::from("cli.csv")));
    }

    #[test]
    fn environment_beats_config_dir() {
        let source = TableSource::resolve_from(
            None,
            Some(PathBuf::from("env.csv")),
            Some(PathBuf::from("/nonexistent/performance.csv")),
        );
        assert_eq!(source, TableSource::File(PathBuf::from("env.csv")));
    }

    #[test]
    fn missing_config_file_falls_back_to_built_in() {
        let source = TableSource::resolve_from(
            None,
            None,
            Some(PathBuf::from("/nonexistent/launch-capacity/performance.csv")),
        );
        assert_eq!(source, TableSource::BuiltIn);
        assert!(source.load().is_ok());
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let err = TableSource::File(PathBuf::from("/nonexistent/performance.csv"))
            .load()
            .unwrap_err();
        assert!(matches!(err, CapacityErrors::IoError(_)));
    }
}
