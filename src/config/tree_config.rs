use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{borrow::Cow, path::Path, string::FromUtf8Error};
use tracing::debug;

use crate::{ext::PathDisplayExt, tree::Node};

const NODES_KEY: &str = "nodes";
const ID_KEY: &str = "id";
const NAME_KEY: &str = "name";
const TYPE_KEY: &str = "type";

const ROOT_NAME: &str = "root";
const ROOT_KIND: &str = "root";

type Mapping<'input> = LinkedHashMap<Yaml<'input>, Yaml<'input>>;

fn lookup<'a, 'input>(mapping: &'a Mapping<'input>, key: &'static str) -> Option<&'a Yaml<'input>> {
    mapping.get(&Yaml::Value(Scalar::String(Cow::Borrowed(key))))
}

fn describe(value: &Yaml) -> &'static str {
    match value {
        Yaml::Value(Scalar::Null) => "null",
        Yaml::Value(Scalar::Boolean(_)) => "boolean",
        Yaml::Value(Scalar::Integer(_)) => "integer",
        Yaml::Value(Scalar::FloatingPoint(_)) => "float",
        Yaml::Value(Scalar::String(_)) => "string",
        Yaml::Sequence(_) => "sequence",
        Yaml::Mapping(_) => "mapping",
        _ => "unsupported value",
    }
}

/// One entry of the `nodes` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Kept for reference only, walks always renumber.
    pub id: Option<i64>,
    pub name: String,
    pub kind: String,
}

impl NodeRecord {
    fn from_yaml(index: usize, value: &Yaml) -> Result<Self, TreeConfigError> {
        let record = value
            .as_mapping()
            .ok_or(TreeConfigError::RecordNotMap { index })?;

        let id = match lookup(record, ID_KEY) {
            None | Some(Yaml::Value(Scalar::Null)) => None,
            Some(Yaml::Value(Scalar::Integer(id))) => Some(*id),
            Some(other) => {
                return Err(TreeConfigError::InvalidField {
                    index,
                    field: ID_KEY,
                    expected: "integer",
                    found: describe(other),
                });
            }
        };

        Ok(NodeRecord {
            id,
            name: Self::required_string(index, record, NAME_KEY)?,
            kind: Self::required_string(index, record, TYPE_KEY)?,
        })
    }

    fn required_string(
        index: usize,
        record: &Mapping,
        field: &'static str,
    ) -> Result<String, TreeConfigError> {
        match lookup(record, field) {
            None => Err(TreeConfigError::MissingField { index, field }),
            Some(Yaml::Value(Scalar::String(value))) if value.is_empty() => {
                Err(TreeConfigError::EmptyField { index, field })
            }
            Some(Yaml::Value(Scalar::String(value))) => Ok(value.to_string()),
            Some(other) => Err(TreeConfigError::InvalidField {
                index,
                field,
                expected: "string",
                found: describe(other),
            }),
        }
    }
}

/// Validated contents of a tree configuration file.
///
/// The file is read as YAML, which also accepts plain JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    nodes: Vec<NodeRecord>,
}

impl TreeConfig {
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, TreeConfigError> {
        let path = path.as_ref();
        debug!("Reading tree config: {}", path.best_effort_display());

        let bytes = compio::fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_display(),
        })?;
        debug!("Successfully read tree config: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_display(),
        })?;
        contents.as_str().try_into()
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Builds a synthetic `root` node with one leaf per record, in file order.
    pub fn into_tree(self) -> Node {
        let mut root = Node::leaf(ROOT_NAME, ROOT_KIND);
        for record in self.nodes {
            if let Some(id) = record.id {
                debug!("Ignoring configured id {} of node '{}'", id, record.name);
            }
            root.add_child(Node::leaf(record.name, record.kind));
        }
        root
    }

    fn parse_nodes(top_level: &Mapping) -> Result<Vec<NodeRecord>, TreeConfigError> {
        lookup(top_level, NODES_KEY)
            .ok_or(TreeConfigError::MissingNodes)?
            .as_sequence()
            .ok_or(TreeConfigError::NodesNotSequence)?
            .iter()
            .enumerate()
            .map(|(index, value)| NodeRecord::from_yaml(index, value))
            .collect()
    }
}

impl TryFrom<&str> for TreeConfig {
    type Error = TreeConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().ok_or(TreeConfigError::MalformedConfig)?;

        let top_level = document
            .as_mapping()
            .ok_or(TreeConfigError::TopLevelNotMap)?;

        let nodes = Self::parse_nodes(top_level)?;
        debug!("Parsed {} node records", nodes.len());

        Ok(TreeConfig { nodes })
    }
}

#[derive(Debug, Snafu)]
pub enum TreeConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Config file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Config is missing the 'nodes' list"))]
    MissingNodes,
    #[snafu(display("'nodes' should be a list"))]
    NodesNotSequence,
    #[snafu(display("nodes[{}] should be a map", index))]
    RecordNotMap { index: usize },
    #[snafu(display("nodes[{}] is missing required field '{}'", index, field))]
    MissingField { index: usize, field: &'static str },
    #[snafu(display(
        "nodes[{}].{} should be {}, found {}",
        index,
        field,
        expected,
        found
    ))]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[snafu(display("nodes[{}].{} must not be empty", index, field))]
    EmptyField { index: usize, field: &'static str },
}
