use crate::config::DramlogConfig;
use crate::ledger::Ledger;
use crate::store::{DrinkStore, FsBackend};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Everything a UI client needs for one session.
pub struct DramlogContext {
    pub ledger: Ledger<FsBackend>,
    pub config: DramlogConfig,
    pub data_dir: PathBuf,
}

/// Resolves the data directory (explicit override, else the OS data dir),
/// loads the config living next to the slot and wires up the production
/// ledger. A broken config file falls back to defaults; session start must
/// not fail on it.
pub fn initialize(data_override: Option<PathBuf>) -> DramlogContext {
    let data_dir = data_override.unwrap_or_else(default_data_dir);
    let config = DramlogConfig::load(&data_dir).unwrap_or_default();

    let backend = FsBackend::new(&data_dir);
    let store = DrinkStore::new(backend, config.slot());
    let ledger = Ledger::new(store, config.absorption_factor());

    DramlogContext {
        ledger,
        config,
        data_dir,
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "dramlog", "dramlog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".dramlog"))
}
