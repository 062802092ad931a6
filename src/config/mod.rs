mod tree_config;

pub use tree_config::{NodeRecord, TreeConfig, TreeConfigError};
