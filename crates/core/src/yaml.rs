use std::{collections::HashSet, env, fs::File, io::Read, path::PathBuf};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    chain::{Chain, PageId},
    chainmeta_error,
};

/// The chain configuration source: the list of chains whose networks the
/// assembler enriches.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetupConfig {
    pub chains: Vec<Chain>,
}

fn substitute_env_variables(contents: &str) -> Result<String, regex::Error> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;
    let result = re.replace_all(contents, |caps: &Captures| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                chainmeta_error!("Environment variable {} not found", var_name);
                panic!("Environment variable {} not found", var_name)
            }
        }
    });
    Ok(result.into_owned())
}

#[derive(Error, Debug)]
pub enum ReadYamlError {
    #[error("Can not find yaml")]
    CanNotFindYaml,

    #[error("Can not read yaml")]
    CanNotReadYaml,

    #[error("Setup config is invalid yaml and does not match the struct - {0}")]
    SetupConfigInvalidYaml(String),

    #[error("Environment variable substitution failed: {0}")]
    EnvironmentVariableNotFound(#[from] regex::Error),

    #[error("No chains defined in the yaml")]
    NoChainsDefined,

    #[error("Chain page {0} defined more than once")]
    DuplicateChainPage(PageId),

    #[error("Chain {0} has a network with no name")]
    NetworkNameNotDefined(PageId),
}

pub fn read(file_path: &PathBuf, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let mut file = File::open(file_path).map_err(|_| ReadYamlError::CanNotFindYaml)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|_| ReadYamlError::CanNotReadYaml)?;

    let substituted_contents =
        if raw_yaml { contents } else { substitute_env_variables(&contents)? };

    let config: SetupConfig = serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadYamlError::SetupConfigInvalidYaml(e.to_string()))?;

    if config.chains.is_empty() {
        return Err(ReadYamlError::NoChainsDefined);
    }

    let mut seen_pages: HashSet<PageId> = HashSet::new();
    for chain in &config.chains {
        if !seen_pages.insert(chain.page.clone()) {
            return Err(ReadYamlError::DuplicateChainPage(chain.page.clone()));
        }

        for network in &chain.networks {
            if network.name.is_empty() {
                return Err(ReadYamlError::NetworkNameNotDefined(chain.page.clone()));
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_chains_from_yaml() {
        let path = write_config(
            "chainmeta_read_test.yaml",
            r#"
chains:
  - page: ethereum
    label: Ethereum
    networks:
      - name: mainnet
        rddUrl: https://example.com/ethereum-mainnet.json
      - name: sepolia
"#,
        );

        let config = read(&path, true).unwrap();

        assert_eq!(config.chains.len(), 1);
        let chain = &config.chains[0];
        assert_eq!(chain.page.as_str(), "ethereum");
        assert_eq!(chain.networks.len(), 2);
        assert_eq!(
            chain.networks[0].rdd_url.as_deref(),
            Some("https://example.com/ethereum-mainnet.json")
        );
        assert!(chain.networks[1].rdd_url.is_none());
    }

    #[test]
    fn substitutes_environment_variables() {
        env::set_var("CHAINMETA_TEST_RDD_URL", "https://example.com/env.json");

        let path = write_config(
            "chainmeta_env_test.yaml",
            r#"
chains:
  - page: ethereum
    networks:
      - name: mainnet
        rddUrl: ${CHAINMETA_TEST_RDD_URL}
"#,
        );

        let config = read(&path, false).unwrap();

        assert_eq!(
            config.chains[0].networks[0].rdd_url.as_deref(),
            Some("https://example.com/env.json")
        );
    }

    #[test]
    fn rejects_empty_chain_list() {
        let path = write_config("chainmeta_empty_test.yaml", "chains: []\n");

        assert!(matches!(read(&path, true), Err(ReadYamlError::NoChainsDefined)));
    }

    #[test]
    fn rejects_duplicate_pages() {
        let path = write_config(
            "chainmeta_duplicate_test.yaml",
            r#"
chains:
  - page: ethereum
    networks:
      - name: mainnet
  - page: ethereum
    networks:
      - name: sepolia
"#,
        );

        assert!(matches!(read(&path, true), Err(ReadYamlError::DuplicateChainPage(_))));
    }

    #[test]
    fn rejects_unnamed_networks() {
        let path = write_config(
            "chainmeta_unnamed_test.yaml",
            r#"
chains:
  - page: ethereum
    networks:
      - name: ""
"#,
        );

        assert!(matches!(read(&path, true), Err(ReadYamlError::NetworkNameNotDefined(_))));
    }
}
