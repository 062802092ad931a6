use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::config::{TreeConfig, TreeConfigError};
use crate::tree::{Node, TreeWalker};

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let tree_config = TreeConfig::from_path(&runtime_config.config_path)
            .await
            .context(TreeConfigSnafu)?;
        debug!("Loaded config: {:?}", tree_config);

        let mut root = tree_config.into_tree();
        let printed = Self::print_tree(&mut root, &mut io::stdout().lock()).context(OutputSnafu)?;
        info!("Printed {} nodes", printed);

        Ok(())
    }

    /// Numbers `root` with a fresh counter and writes one line per node.
    /// Returns the number of lines written.
    pub fn print_tree(root: &mut Node, out: &mut impl Write) -> io::Result<usize> {
        let mut printed = 0;
        for line in TreeWalker::new(root) {
            writeln!(out, "{line}")?;
            printed += 1;
        }
        out.flush()?;
        Ok(printed)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    TreeConfigError { source: TreeConfigError },
    #[snafu(display("Failed to write the tree to standard output"))]
    OutputError { source: io::Error },
}
