use serde::{Deserialize, Serialize};

use crate::metadata::RddEntry;

/// A deployment of a chain. `rdd_url`, when present, points at the remote
/// data document the metadata assembler fetches and filters; `metadata` is
/// only populated by assembly and stays absent for networks with no RDD URL.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Network {
    pub name: String,

    #[serde(rename = "networkType", skip_serializing_if = "Option::is_none", default)]
    pub network_type: Option<NetworkType>,

    #[serde(rename = "explorerUrl", skip_serializing_if = "Option::is_none", default)]
    pub explorer_url: Option<String>,

    #[serde(rename = "rddUrl", skip_serializing_if = "Option::is_none", default)]
    pub rdd_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<Vec<RddEntry>>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Testnet,
}
