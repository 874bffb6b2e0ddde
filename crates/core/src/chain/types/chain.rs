use serde::{Deserialize, Serialize};

use super::{Network, PageId};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Chain {
    pub page: PageId,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub img: Option<String>,

    pub networks: Vec<Network>,
}
