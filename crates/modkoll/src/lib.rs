//! Implements the CLI for modkoll
//!
//! Only exposed as a library for the benefit of xtask (man pages and shell
//! completions) and tests. No stability guarantees whatsoever.

use std::io::BufWriter;
use std::io::Write;

use eyre::WrapErr;
use modkoll_core::CollectError;
use modkoll_core::CollectorConfiguration;

pub mod cli;

/// Collect modaliases according to `config` and write them to `output`.
///
/// The reader of `output` going away early is not an error.
pub fn run(config: &CollectorConfiguration, output: impl Write) -> eyre::Result<()> {
    let records = modkoll_core::collect_modaliases(config)
        .wrap_err("Failed to collect modaliases")?;
    match records.write_to(BufWriter::new(output)).map_err(CollectError::from) {
        Ok(()) => Ok(()),
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("Output closed before all modaliases were written");
            Ok(())
        }
        Err(err) => Err(err).wrap_err("Failed to write to standard output"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Writer that behaves like a pipe whose reader exited
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    fn fake_sys() -> (tempfile::TempDir, CollectorConfiguration) {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("devices/pci0000:00/0000:00:1f.0")).unwrap();
        std::fs::write(
            dir.path().join("devices/pci0000:00/0000:00:1f.0/modalias"),
            "pci:v00008086d00001C3Asv00001028sd000004AAbc0Csc05i00\n",
        )
        .unwrap();
        let config = CollectorConfiguration::builder()
            .root(dir.path())
            .build()
            .unwrap();
        (dir, config)
    }

    #[test]
    fn test_run() {
        let (_dir, config) = fake_sys();
        let mut out = vec![];
        run(&config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "pci:v00008086d00001C3Asv00001028sd000004AAbc0Csc05i00\n"
        );
    }

    #[test]
    fn test_run_broken_pipe() {
        let (_dir, config) = fake_sys();
        run(&config, ClosedPipe).unwrap();
    }

    #[test]
    fn test_run_missing_root() {
        let (dir, _) = fake_sys();
        let config = CollectorConfiguration::builder()
            .root(dir.path().join("missing"))
            .build()
            .unwrap();
        let err = run(&config, std::io::sink()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectError>(),
            Some(CollectError::RootInaccessible { .. })
        ));
    }
}
