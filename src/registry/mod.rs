//! Module registry: the compiled-type metadata that autodoc inspects
//!
//! A module is described by a manifest rather than discovered through runtime
//! reflection. The manifest lists every type of the module in its native
//! order together with the type's base, a compiler-generated marker and the
//! methods the type declares.
//!
//! # Manifest format
//!
//! ```json
//! { "name": "shapes", "types": [
//!     { "name": "Shape", "methods": [
//!         { "name": "area", "visibility": "public", "dispatch": "virtual" } ] },
//!     { "name": "Circle", "base": "Shape", "methods": [
//!         { "name": "area", "visibility": "public", "dispatch": "override" } ] } ] }
//! ```

pub mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Accessibility of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    /// Visible inside the defining module only
    Internal,
    #[default]
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// Whether derived types see this method in their own method list.
    pub fn is_inherited(self) -> bool {
        self != Visibility::Private
    }
}

/// How calls to a method are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// Not overridable
    #[default]
    Final,
    /// Introduces a new overridable slot
    Virtual,
    /// Replaces an overridable method inherited from a base type
    Override,
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A method as declared on one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub dispatch: Dispatch,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "constructor")]
    pub is_constructor: bool,
    #[serde(default)]
    pub params: Vec<Param>,
}

impl MethodDef {
    pub fn is_virtual(&self) -> bool {
        self.dispatch != Dispatch::Final
    }

    /// Same name and same parameter types, in order.
    pub fn same_signature(&self, other: &MethodDef) -> bool {
        self.name == other.name
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.type_name == b.type_name)
    }
}

/// A type defined in a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Name of the base type. May refer to a type outside the module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default)]
    pub compiler_generated: bool,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl TypeDef {
    /// `namespace.Name`, or just `Name` without a namespace.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.qualified_name() == name
    }
}

/// A compiled unit and the types it defines, in native order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl ModuleInfo {
    /// Parse and validate a JSON manifest. `origin` names the source in errors.
    pub fn from_json(origin: &str, json: &str) -> Result<Self> {
        let module: ModuleInfo = serde_json::from_str(json).map_err(|source| Error::Manifest {
            origin: origin.to_string(),
            source,
        })?;
        module.validate()?;
        debug!(
            module = %module.name,
            types = module.types.len(),
            "loaded module manifest from {}",
            origin
        );
        Ok(module)
    }

    /// Read a manifest file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&path.display().to_string(), &json)
    }

    /// Reject manifests the extractor cannot walk safely.
    pub fn validate(&self) -> Result<()> {
        for ty in &self.types {
            for method in &ty.methods {
                let reason = if method.is_static && method.is_virtual() {
                    Some("static methods cannot be virtual")
                } else if method.is_abstract && !method.is_virtual() {
                    Some("abstract methods must be virtual")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(Error::InvalidMethod {
                        type_name: ty.name.clone(),
                        method: method.name.clone(),
                        reason,
                    });
                }
            }

            // A chain longer than the number of types must revisit one.
            let mut steps = 0;
            let mut current = self.base_of(ty);
            while let Some(base) = current {
                steps += 1;
                if steps > self.types.len() {
                    return Err(Error::InheritanceCycle(ty.name.clone()));
                }
                current = self.base_of(base);
            }
        }
        Ok(())
    }

    /// First type answering to `name` (simple or namespace-qualified).
    pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|ty| ty.answers_to(name))
    }

    /// The base of `ty` when it is defined in this module.
    pub fn base_of(&self, ty: &TypeDef) -> Option<&TypeDef> {
        ty.base.as_deref().and_then(|name| self.find_type(name))
    }

    /// Base types of `ty`, nearest first, stopping where the chain leaves the module.
    pub fn ancestors<'a>(&'a self, ty: &'a TypeDef) -> Ancestors<'a> {
        Ancestors {
            module: self,
            current: self.base_of(ty),
            remaining: self.types.len(),
        }
    }
}

/// Iterator over the in-module base chain of a type.
pub struct Ancestors<'a> {
    module: &'a ModuleInfo,
    current: Option<&'a TypeDef>,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeDef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let ty = self.current?;
        self.current = self.module.base_of(ty);
        Some(ty)
    }
}
