use std::fmt::Display;

use derive_more::derive::{Deref, From};

/// Opaque key of a remote node, used for config sections and credential file names.
#[derive(Debug, Hash, PartialEq, Eq, From, Deref, Clone)]
pub struct NodeId(String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can be used as a file name stem inside the credential store,
    /// i.e. it cannot point outside of it.
    pub fn is_file_stem(&self) -> bool {
        !self.0.is_empty() && !self.0.contains("..") && !self.0.contains(['/', '\\', '\0'])
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
