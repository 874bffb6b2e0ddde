use std::{
    error::Error,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Page identifier of a chain, the key of the assembled metadata lookup.
#[derive(Debug, Clone, Serialize, Eq)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        PageId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;

        Ok(PageId(id))
    }
}

impl Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for PageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq for PageId {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[derive(Debug)]
pub struct ParsePageIdError;

impl Display for ParsePageIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid page id")
    }
}

impl Error for ParsePageIdError {}

impl FromStr for PageId {
    type Err = ParsePageIdError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        if param.is_empty() {
            return Err(ParsePageIdError);
        }

        Ok(PageId(param.to_string()))
    }
}

impl From<PageId> for String {
    fn from(page: PageId) -> Self {
        page.0
    }
}

impl From<String> for PageId {
    fn from(page: String) -> Self {
        PageId(page)
    }
}

impl From<&str> for PageId {
    fn from(page: &str) -> Self {
        PageId(page.to_string())
    }
}
