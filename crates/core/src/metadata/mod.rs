mod assembler;
pub use assembler::{assemble_chain_metadata, ChainMetadata};

mod rdd;
pub use rdd::{
    HttpRddClient, RddDocument, RddEntry, RddFetchError, RddFetcher, DEFAULT_FRESHNESS_WINDOW,
};
