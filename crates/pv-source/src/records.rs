//! Record types produced by metadata sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pv_graph::{GraphResult, Node, ObjectType};

/// One node as delivered by the metadata store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub db_name: String,
    /// Database object type code (`P`, `SSIS`, `U`, `V`, `FN`, `IF`).
    #[serde(default)]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    /// Attributes not covered by the fixed fields.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_name: String::new(),
            long_name: String::new(),
            db_name: String::new(),
            object_type: object_type.into(),
            weight: None,
            extra: BTreeMap::new(),
        }
    }

    /// Convert into a graph node; fails only on an empty id.
    pub fn to_node(&self) -> GraphResult<Node> {
        let mut node = Node::new(self.id.as_str())?
            .with_short_name(self.short_name.as_str())
            .with_long_name(self.long_name.as_str())
            .with_db_name(self.db_name.as_str())
            .with_object_type(object_type_from_code(&self.object_type))
            .with_weight(self.weight.unwrap_or(0));
        for (key, value) in &self.extra {
            node.set_property(key.as_str(), value.as_str());
        }
        Ok(node)
    }
}

/// One dependency: data flows from `start_id` to `end_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
    pub start_id: String,
    pub end_id: String,
}

impl EdgeRecord {
    pub fn new(start_id: impl Into<String>, end_id: impl Into<String>) -> Self {
        Self {
            start_id: start_id.into(),
            end_id: end_id.into(),
        }
    }
}

/// On-disk layout of a record file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Map a database object type code to an [`ObjectType`].
pub fn object_type_from_code(code: &str) -> ObjectType {
    match code.trim() {
        "P" => ObjectType::StoredProcedure,
        "SSIS" => ObjectType::ScheduledPackage,
        "U" => ObjectType::Table,
        "V" => ObjectType::View,
        "FN" => ObjectType::ScalarFunction,
        "IF" => ObjectType::TableValuedFunction,
        _ => ObjectType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_codes() {
        assert_eq!(object_type_from_code("P"), ObjectType::StoredProcedure);
        assert_eq!(object_type_from_code("SSIS"), ObjectType::ScheduledPackage);
        assert_eq!(object_type_from_code("U"), ObjectType::Table);
        assert_eq!(object_type_from_code("V "), ObjectType::View);
        assert_eq!(object_type_from_code("FN"), ObjectType::ScalarFunction);
        assert_eq!(object_type_from_code("IF"), ObjectType::TableValuedFunction);
        assert_eq!(object_type_from_code(""), ObjectType::Unknown);
        assert_eq!(object_type_from_code("TR"), ObjectType::Unknown);
    }

    #[test]
    fn record_to_node_copies_attributes() {
        let mut record = NodeRecord::new("P12", "P");
        record.short_name = "dbo.LoadSales".into();
        record.long_name = "[dw].[dbo].[LoadSales]".into();
        record.db_name = "dw".into();
        record.weight = Some(90);
        record.extra.insert("AvgDuration".into(), "90".into());

        let node = record.to_node().unwrap();
        assert_eq!(node.id(), "P12");
        assert_eq!(node.label(), "dbo.LoadSales");
        assert_eq!(node.db_name, "dw");
        assert_eq!(node.object_type, ObjectType::StoredProcedure);
        assert_eq!(node.weight, 90);
        assert_eq!(node.property("AvgDuration").unwrap(), "90");
    }

    #[test]
    fn missing_weight_defaults_to_zero() {
        let node = NodeRecord::new("R1", "U").to_node().unwrap();
        assert_eq!(node.weight, 0);
        assert!(NodeRecord::new("", "U").to_node().is_err());
    }

    #[test]
    fn yaml_document_with_defaults() {
        let yaml = r#"
nodes:
  - id: R1
    object_type: U
  - id: P1
    short_name: dbo.Load
    object_type: P
    weight: 12
    extra:
      AvgDuration: "12"
edges:
  - start_id: R1
    end_id: P1
"#;
        let doc: RecordDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[0].short_name, "");
        assert_eq!(doc.nodes[1].weight, Some(12));
        assert_eq!(doc.edges, vec![EdgeRecord::new("R1", "P1")]);
    }
}
