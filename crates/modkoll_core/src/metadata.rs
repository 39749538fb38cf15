//! Metadata describing the tool to the commissioning harness that schedules it
//!
//! The harness reads this from a comment block, then enforces the timeout and
//! parallelism itself. Nothing here changes how collection works.

use std::fmt::Display;
use std::time::Duration;

/// What kind of script the harness should treat us as
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ScriptType {
    /// Run while a machine is being commissioned
    Commissioning,
}

impl Display for ScriptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptType::Commissioning => write!(f, "commissioning"),
        }
    }
}

/// Whether the harness may run other scripts at the same time
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Parallel {
    /// May run alongside any other script of its kind
    Any,
}

impl Display for Parallel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parallel::Any => write!(f, "any"),
        }
    }
}

/// How the harness should schedule and describe a script
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ScriptMetadata {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub script_type: ScriptType,
    pub parallel: Parallel,
    /// The harness may kill us after this
    pub timeout: Duration,
}

/// Metadata of the modalias listing
pub const MODALIAS_SCRIPT: ScriptMetadata = ScriptMetadata {
    name: "00-maas-04-list-modaliases",
    title: "List modaliases",
    description: "Gather the modalias of every device exposed by the kernel.",
    script_type: ScriptType::Commissioning,
    parallel: Parallel::Any,
    timeout: Duration::from_secs(10),
};

impl Display for ScriptMetadata {
    /// Render as the comment block the harness parses
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# --- Start MAAS 1.0 script metadata ---")?;
        writeln!(f, "# name: {}", self.name)?;
        writeln!(f, "# title: {}", self.title)?;
        writeln!(f, "# description: {}", self.description)?;
        writeln!(f, "# script_type: {}", self.script_type)?;
        writeln!(f, "# parallel: {}", self.parallel)?;
        writeln!(f, "# timeout: {}", self.timeout.as_secs())?;
        writeln!(f, "# --- End MAAS 1.0 script metadata ---")
    }
}
