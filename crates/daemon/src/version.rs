use serde::{Deserialize, Serialize};

/// Build information reported by the version endpoint and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub git_commit: String,
    pub build_timestamp: String,
}

impl BuildInfo {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_commit: env!("GIT_COMMIT").to_string(),
            build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "share-manager {} ({}, built {})",
            self.version, self.git_commit, self.build_timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_has_version() {
        let info = BuildInfo::new();
        assert!(!info.version.is_empty());
        assert!(!info.git_commit.is_empty());
    }
}
