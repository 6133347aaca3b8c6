//! Lead records and the configurable schema they are checked against.
//!
//! The set of lead fields is deployment configuration: the frontend form
//! decides what it collects, so the service only knows field names, JSON
//! kinds and whether a field is required.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_core::error::AppError;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

pub const DEFAULT_LEAD_FIELDS: &str =
    "name:string:required,email:string:required,phone:string,message:string";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl FieldKind {
    /// Returns the value as it will be stored, or `None` if it is not of
    /// this kind. Every accepted value has a BSON representation.
    fn coerce(self, value: &Value) -> Option<Value> {
        match (self, value) {
            (FieldKind::String, Value::String(_)) | (FieldKind::Boolean, Value::Bool(_)) => {
                Some(value.clone())
            }
            (FieldKind::Number, Value::Number(n)) if n.is_i64() || n.is_f64() => {
                Some(value.clone())
            }
            // u64 above i64::MAX: BSON has no unsigned type, store as a double.
            (FieldKind::Number, Value::Number(n)) => n.as_f64().map(Value::from),
            (FieldKind::Integer, Value::Number(n)) => match n.as_i64() {
                Some(i) => Some(Value::from(i)),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| Value::from(f as i64)),
            },
            _ => None,
        }
    }

    fn article(self) -> &'static str {
        match self {
            FieldKind::Integer => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Boolean => write!(f, "boolean"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("invalid field spec `{0}`: expected name:kind[:required]")]
    Malformed(String),

    #[error("unknown field kind `{0}`")]
    UnknownKind(String),

    #[error("duplicate field `{0}`")]
    Duplicate(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct FieldSpec {
    #[validate(length(min = 1, max = 64, message = "Field name must be 1-64 characters"))]
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FromStr for FieldSpec {
    type Err = SchemaError;

    /// Parses `name:kind` or `name:kind:required`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();
        let (name, kind, required) = match parts.as_slice() {
            [name, kind] => (*name, *kind, false),
            [name, kind, "required"] => (*name, *kind, true),
            _ => return Err(SchemaError::Malformed(s.trim().to_string())),
        };

        let kind = match kind.to_ascii_lowercase().as_str() {
            "string" => FieldKind::String,
            "number" => FieldKind::Number,
            "integer" => FieldKind::Integer,
            "boolean" => FieldKind::Boolean,
            other => return Err(SchemaError::UnknownKind(other.to_string())),
        };

        Ok(FieldSpec {
            name: name.to_string(),
            kind,
            required,
        })
    }
}

/// Ordered, validated list of lead fields.
#[derive(Debug, Clone, Serialize, Validate, PartialEq, Eq)]
pub struct LeadSchema {
    #[validate(length(min = 1, message = "Lead schema needs at least one field"))]
    fields: Vec<FieldSpec>,
}

impl LeadSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, AppError> {
        let schema = Self { fields };
        schema.validate()?;

        let mut seen = HashSet::new();
        for field in &schema.fields {
            field.validate()?;
            if !seen.insert(field.name.as_str()) {
                return Err(AppError::ConfigError(
                    SchemaError::Duplicate(field.name.clone()).into(),
                ));
            }
        }

        Ok(schema)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Checks presence and kind of every declared field and keeps only
    /// declared fields. All violations are reported together.
    pub fn validate_payload(&self, payload: &Map<String, Value>) -> Result<Lead, AppError> {
        let mut violations = Vec::new();
        let mut fields = Map::new();

        for spec in &self.fields {
            match payload.get(&spec.name) {
                None | Some(Value::Null) if spec.required => {
                    violations.push(format!("missing required field `{}`", spec.name));
                }
                None | Some(Value::Null) => {}
                Some(value) => match spec.kind.coerce(value) {
                    Some(stored) => {
                        fields.insert(spec.name.clone(), stored);
                    }
                    None => violations.push(format!(
                        "field `{}` must be {} {}",
                        spec.name,
                        spec.kind.article(),
                        spec.kind
                    )),
                },
            }
        }

        if violations.is_empty() {
            Ok(Lead { fields })
        } else {
            Err(AppError::SchemaViolation(violations))
        }
    }
}

impl Default for LeadSchema {
    fn default() -> Self {
        // DEFAULT_LEAD_FIELDS is covered by tests; it always parses.
        DEFAULT_LEAD_FIELDS
            .parse()
            .unwrap_or_else(|_| Self { fields: Vec::new() })
    }
}

impl FromStr for LeadSchema {
    type Err = AppError;

    /// Parses a comma-separated list of field specs, e.g.
    /// `name:string:required,email:string:required,message:string`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(FieldSpec::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::ConfigError(e.into()))?;

        Self::new(fields)
    }
}

/// A submission that passed schema validation. Holds only declared fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    fields: Map<String, Value>,
}

impl Lead {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_document(self) -> Result<Document, AppError> {
        bson::to_document(&self.fields)
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Lead cannot be stored: {}", e)))
    }
}
