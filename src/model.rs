//! Normalized documentation records
//!
//! These types are shared by the parser (which produces them from HTML) and the
//! storage layer (which persists and reads them back).

use serde::{Deserialize, Serialize};

/// The kind of a documented type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl ClassKind {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Class => "CLASS",
            Self::Interface => "INTERFACE",
            Self::Enum => "ENUM",
            Self::Annotation => "ANNOTATION",
            Self::Record => "RECORD",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "CLASS" => Some(Self::Class),
            "INTERFACE" => Some(Self::Interface),
            "ENUM" => Some(Self::Enum),
            "ANNOTATION" => Some(Self::Annotation),
            "RECORD" => Some(Self::Record),
            _ => None,
        }
    }
}

/// A documented parameter of a method or constructor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
}

/// A documented method
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Method {
    pub name: String,
    pub signature: String,
    pub return_type: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
    pub throws_list: Vec<String>,
    pub annotations: Vec<String>,
    pub deprecated: bool,
    pub deprecated_message: Option<String>,
}

/// A documented field or enum constant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    pub name: String,
    pub field_type: Option<String>,
    pub modifiers: Option<String>,
    pub summary: Option<String>,
    pub deprecated: bool,
    pub constant_value: Option<String>,
}

/// A documented constructor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constructor {
    pub signature: String,
    pub summary: Option<String>,
    pub parameters: Vec<Parameter>,
    pub throws_list: Vec<String>,
    pub annotations: Vec<String>,
    pub deprecated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_kind_roundtrip() {
        for kind in &[
            ClassKind::Class,
            ClassKind::Interface,
            ClassKind::Enum,
            ClassKind::Annotation,
            ClassKind::Record,
        ] {
            let db_str = kind.to_db_string();
            assert_eq!(ClassKind::from_db_string(db_str), Some(*kind));
        }
    }

    #[test]
    fn test_class_kind_invalid() {
        assert_eq!(ClassKind::from_db_string("STRUCT"), None);
    }

    #[test]
    fn test_parameter_serializes_type_key() {
        let param = Parameter {
            name: "name".to_string(),
            param_type: "String".to_string(),
            description: "the name".to_string(),
        };
        let json = serde_json::to_string(&param).unwrap();
        assert!(json.contains(r#""type":"String""#));
    }
}
