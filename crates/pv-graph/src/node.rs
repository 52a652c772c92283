//! Pipeline nodes: database objects and the packages that move data between them.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GraphError, GraphResult};

/// Kind of database object a node represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ObjectType {
    StoredProcedure,
    ScheduledPackage,
    Table,
    View,
    ScalarFunction,
    TableValuedFunction,
    #[default]
    Unknown,
}

impl ObjectType {
    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            ObjectType::StoredProcedure => "Stored procedure",
            ObjectType::ScheduledPackage => "Scheduled package",
            ObjectType::Table => "Table",
            ObjectType::View => "View",
            ObjectType::ScalarFunction => "Scalar function",
            ObjectType::TableValuedFunction => "Table-valued function",
            ObjectType::Unknown => "Unknown",
        }
    }

    /// True for object types that perform work (and so carry a duration).
    pub fn is_process(self) -> bool {
        matches!(
            self,
            ObjectType::StoredProcedure | ObjectType::ScheduledPackage
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A node in a pipeline graph.
///
/// Identity within the engine is decided by the node's arena handle, not by
/// comparing these fields; see [`crate::Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    pub short_name: String,
    pub long_name: String,
    pub db_name: String,
    pub object_type: ObjectType,
    /// Used only by critical-path search.
    pub weight: u64,
    properties: BTreeMap<String, String>,
}

impl Node {
    /// Create a node with the given id and empty attributes.
    pub fn new(id: impl Into<String>) -> GraphResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(GraphError::InvalidNodeId);
        }
        Ok(Self {
            id,
            short_name: String::new(),
            long_name: String::new(),
            db_name: String::new(),
            object_type: ObjectType::Unknown,
            weight: 0,
            properties: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = long_name.into();
        self
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn with_object_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn with_weight(mut self, weight: u64) -> Self {
        self.weight = weight;
        self
    }

    /// Set (or overwrite) an auxiliary attribute.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Read an auxiliary attribute; check [`Node::has_property`] first to avoid the error.
    pub fn property(&self, key: &str) -> GraphResult<&str> {
        self.properties
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| GraphError::PropertyNotFound {
                key: key.to_string(),
            })
    }

    /// Iterate auxiliary attributes in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Label for display: the short name, or the id when no short name was set.
    pub fn label(&self) -> &str {
        if self.short_name.is_empty() {
            &self.id
        } else {
            &self.short_name
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node[Id={},LongName={},Type={}]",
            self.id, self.long_name, self.object_type
        )
    }
}
