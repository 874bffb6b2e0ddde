pub mod chain;
mod environment;
pub use environment::load_env_from_project_path;
mod logger;
pub use logger::{setup_info_logger, setup_logger};
pub mod metadata;
pub use metadata::{
    assemble_chain_metadata, ChainMetadata, HttpRddClient, RddDocument, RddEntry, RddFetchError,
    RddFetcher, DEFAULT_FRESHNESS_WINDOW,
};
mod shared;
pub use shared::cache::{Cache, CacheValue};
mod yaml;
pub use yaml::{read, ReadYamlError, SetupConfig};

pub use tracing::{error as chainmeta_error, info as chainmeta_info};
