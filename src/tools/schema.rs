//! Input contracts for tool calls
//!
//! An [`OperationSpec`] lists the fields a tool accepts, in declaration order.
//! [`OperationSpec::validate`] turns an untyped argument bag into
//! [`ValidatedArgs`] holding only declared fields, with defaults applied.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Value type accepted by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    /// Non-negative whole number (ids, ports, timestamps)
    Integer,
    Boolean,
    /// String restricted to a closed set
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// JSON schema type name
    fn json_type(&self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Enum(_) => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// Default applied when an optional field is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Integer(u64),
    Text(&'static str),
}

impl FieldDefault {
    fn to_value(self) -> Value {
        match self {
            FieldDefault::Integer(n) => Value::from(n),
            FieldDefault::Text(s) => Value::from(s),
        }
    }
}

/// One declared input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<FieldDefault>,
    pub description: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::String, description)
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Number, description)
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Integer, description)
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean, description)
    }

    pub const fn one_of(
        name: &'static str,
        values: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, FieldKind::Enum(values), description)
    }

    /// Mark the field as required
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Give the field a default value
    pub const fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Same field, optional and without a default
    pub const fn partial(mut self) -> Self {
        self.required = false;
        self.default = None;
        self
    }

    fn check(&self, value: &Value) -> Result<Value, ValidationError> {
        let fail = |reason: String| Err(ValidationError::new(self.name, reason));
        match self.kind {
            FieldKind::String => match value {
                Value::String(_) => Ok(value.clone()),
                other => fail(expected("string", other)),
            },
            FieldKind::Number => match value {
                Value::Number(_) => Ok(value.clone()),
                other => fail(expected("number", other)),
            },
            FieldKind::Boolean => match value {
                Value::Bool(_) => Ok(value.clone()),
                other => fail(expected("boolean", other)),
            },
            FieldKind::Integer => match value {
                Value::Number(n) => {
                    if let Some(u) = n.as_u64() {
                        return Ok(Value::from(u));
                    }
                    match n.as_f64() {
                        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                            Ok(Value::from(f as u64))
                        }
                        _ => fail(format!(
                            "Expected a non-negative integer, received {}",
                            n
                        )),
                    }
                }
                other => fail(expected("integer", other)),
            },
            FieldKind::Enum(allowed) => match value {
                Value::String(s) if allowed.contains(&s.as_str()) => Ok(value.clone()),
                Value::String(s) => fail(format!(
                    "Invalid enum value. Expected {}, received '{}'",
                    allowed
                        .iter()
                        .map(|a| format!("'{}'", a))
                        .collect::<Vec<_>>()
                        .join(" | "),
                    s
                )),
                other => fail(expected("string", other)),
            },
        }
    }

    fn schema(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".to_string(), json!(self.kind.json_type()));
        if let FieldKind::Enum(values) = self.kind {
            property.insert("enum".to_string(), json!(values));
        }
        if let FieldKind::Integer = self.kind {
            property.insert("minimum".to_string(), json!(0));
        }
        property.insert("description".to_string(), json!(self.description));
        if let Some(default) = self.default {
            property.insert("default".to_string(), default.to_value());
        }
        Value::Object(property)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(kind: &str, received: &Value) -> String {
    format!("Expected {}, received {}", kind, type_name(received))
}

/// First field that failed validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid argument '{field}': {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Input contract of one tool
#[derive(Debug, Clone)]
pub struct OperationSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl OperationSpec {
    pub fn new(name: &'static str, description: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            description,
            fields,
        }
    }

    /// Update contract: the identifier fields followed by every create field,
    /// all optional and without defaults
    pub fn update(
        name: &'static str,
        description: &'static str,
        ids: &[FieldSpec],
        create: &[FieldSpec],
    ) -> Self {
        let fields = ids
            .iter()
            .copied()
            .chain(create.iter().map(|f| f.partial()))
            .collect();
        Self::new(name, description, fields)
    }

    /// Look up a declared field
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// Check a raw argument bag against this contract.
    ///
    /// Absent and `null` bags count as `{}`; `null` values count as absent.
    /// Fields are checked in declaration order and the first failure wins.
    pub fn validate(&self, raw: Option<&Value>) -> Result<ValidatedArgs, ValidationError> {
        let empty = Map::new();
        let bag = match raw {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ValidationError::new("arguments", expected("object", other)));
            }
        };

        let mut values = Map::new();
        for field in &self.fields {
            match bag.get(field.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    values.insert(field.name.to_string(), field.check(value)?);
                }
                None if field.required => {
                    return Err(ValidationError::new(field.name, "Required"));
                }
                None => {
                    if let Some(default) = field.default {
                        values.insert(field.name.to_string(), default.to_value());
                    }
                }
            }
        }

        Ok(ValidatedArgs { values })
    }

    /// JSON schema advertised in the tool listing
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        let required: Vec<&str> = self.required_fields().collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        Value::Object(schema)
    }
}

/// Arguments that passed validation, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArgs {
    values: Map<String, Value>,
}

impl ValidatedArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Deserialize the arguments into a typed structure
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(|e| ValidationError::new("arguments", e.to_string()))
    }

    /// Remaining fields once the named identifiers are removed
    pub fn without(&self, names: &[&str]) -> Map<String, Value> {
        self.values
            .iter()
            .filter(|(k, _)| !names.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
