use std::{collections::HashMap, sync::Arc};

use tracing::{debug, warn};

use super::rdd::RddFetcher;
use crate::{
    chain::{Chain, Network, PageId},
    chainmeta_error,
};

/// Lookup from chain page identifier to the chain with enriched networks.
/// Rebuilt fresh on every assembly.
pub type ChainMetadata = HashMap<PageId, Chain>;

/// Builds the per-chain metadata lookup.
///
/// For every network declaring an RDD URL the remote document is fetched
/// through `fetcher`, entries flagged hidden are dropped (order preserved)
/// and the rest attached as the network's `metadata`. Networks without an
/// RDD URL pass through untouched. All per-chain work is awaited before the
/// lookup is built, so the returned mapping always holds every input chain.
///
/// A failed fetch degrades that one network to no metadata; it never aborts
/// the assembly.
pub async fn assemble_chain_metadata(
    fetcher: &Arc<dyn RddFetcher>,
    chains: Vec<Chain>,
) -> ChainMetadata {
    debug!("Assembling metadata for {} chains", chains.len());

    let handles: Vec<_> = chains
        .into_iter()
        .map(|chain| {
            let fetcher = Arc::clone(fetcher);
            let fallback = chain.clone();
            let handle = tokio::spawn(async move { assemble_chain(fetcher, chain).await });
            (fallback, handle)
        })
        .collect();

    let mut metadata = ChainMetadata::new();
    for (fallback, handle) in handles {
        let chain = match handle.await {
            Ok(chain) => chain,
            Err(e) => {
                chainmeta_error!("Assembly task for chain {} panicked: {}", fallback.page, e);
                fallback
            }
        };

        metadata.insert(chain.page.clone(), chain);
    }

    metadata
}

/// Enriches every network of one chain, issuing all fetches concurrently and
/// awaiting them together.
async fn assemble_chain(fetcher: Arc<dyn RddFetcher>, chain: Chain) -> Chain {
    let Chain { page, label, img, networks } = chain;

    let handles: Vec<_> = networks
        .into_iter()
        .map(|network| {
            let fetcher = Arc::clone(&fetcher);
            let fallback = network.clone();
            let handle = tokio::spawn(async move { enrich_network(fetcher, network).await });
            (fallback, handle)
        })
        .collect();

    let mut networks = Vec::with_capacity(handles.len());
    for (fallback, handle) in handles {
        match handle.await {
            Ok(network) => networks.push(network),
            Err(e) => {
                chainmeta_error!("Enrichment task for network {} panicked: {}", fallback.name, e);
                networks.push(fallback);
            }
        }
    }

    Chain { page, label, img, networks }
}

async fn enrich_network(fetcher: Arc<dyn RddFetcher>, network: Network) -> Network {
    let rdd_url = match &network.rdd_url {
        Some(url) => url.clone(),
        None => return network,
    };

    match fetcher.fetch_document(&rdd_url).await {
        Ok(document) => {
            let metadata =
                document.into_iter().filter(|entry| !entry.is_hidden()).collect::<Vec<_>>();

            Network { metadata: Some(metadata), ..network }
        }
        Err(e) => {
            warn!("Failed to fetch metadata document {}: {}", rdd_url, e);
            network
        }
    }
}
