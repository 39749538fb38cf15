//! Configuration of the collector

use std::ffi::OsString;
use std::path::PathBuf;

/// Where the kernel exposes the device tree.
pub const DEFAULT_ROOT: &str = "/sys";

/// Name of the pseudo-file holding the modalias of a device.
pub const MODALIAS_FILE_NAME: &str = "modalias";

/// Describes where and what to collect.
///
/// The default is what the command line tool uses. Other values are mostly of
/// use for testing against a fake device tree.
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder)]
#[builder(setter(into))]
#[non_exhaustive]
pub struct CollectorConfiguration {
    /// Directory to scan recursively
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    /// Exact (case sensitive) file name to select
    #[builder(default = "OsString::from(MODALIAS_FILE_NAME)")]
    pub file_name: OsString,
    /// Don't descend into other file systems than the one of the root
    #[builder(default = "false")]
    pub same_file_system: bool,
}

impl CollectorConfiguration {
    pub fn builder() -> CollectorConfigurationBuilder {
        CollectorConfigurationBuilder::default()
    }
}

impl Default for CollectorConfiguration {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            file_name: OsString::from(MODALIAS_FILE_NAME),
            same_file_system: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let built = CollectorConfiguration::builder().build().unwrap();
        assert_eq!(built, CollectorConfiguration::default());
        assert_eq!(built.root, PathBuf::from("/sys"));
        assert_eq!(built.file_name, OsString::from("modalias"));
        assert!(!built.same_file_system);
    }

    #[test]
    fn test_builder_root() {
        let built = CollectorConfiguration::builder()
            .root("/tmp/fake_sys")
            .build()
            .unwrap();
        assert_eq!(built.root, PathBuf::from("/tmp/fake_sys"));
        assert_eq!(built.file_name, OsString::from("modalias"));
    }
}
