//! Entities of the machine-readable Bot API specification document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A Bot API method such as `sendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub description: Vec<String>,
    pub href: String,
    #[serde(default)]
    pub returns: Vec<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A Bot API type such as `ChatMember`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    #[serde(default)]
    pub description: Vec<String>,
    pub href: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtype_of: Vec<String>,
}

/// A parameter of a method or a member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Union of accepted type identifiers.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

/// The decoded specification document.
///
/// Unknown top-level members are ignored and missing maps decode as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub changelog: Option<String>,
    #[serde(default)]
    pub methods: HashMap<String, Method>,
    #[serde(default)]
    pub types: HashMap<String, Type>,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Vec::new(),
            href: href.into(),
            returns: Vec::new(),
            fields: Vec::new(),
        }
    }
}

impl Type {
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Vec::new(),
            href: href.into(),
            fields: Vec::new(),
            subtypes: Vec::new(),
            subtype_of: Vec::new(),
        }
    }
}
