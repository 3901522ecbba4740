//! Test utilities for building module fixtures and scratch output directories.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::registry::{Dispatch, MethodDef, ModuleInfo, Param, TypeDef, Visibility};

/// Builder for a `ModuleInfo` fixture.
pub struct ModuleBuilder {
    module: ModuleInfo,
}

impl ModuleBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            module: ModuleInfo {
                name: name.to_string(),
                types: Vec::new(),
            },
        }
    }

    /// Append a type, keeping insertion order as module order.
    pub fn with_type(mut self, ty: TypeBuilder) -> Self {
        self.module.types.push(ty.build());
        self
    }

    /// Finish the module.
    ///
    /// Panics if the fixture would be rejected by manifest validation.
    pub fn build(self) -> ModuleInfo {
        self.module
            .validate()
            .expect("fixture module should be valid");
        self.module
    }
}

/// Builder for a single `TypeDef`.
pub struct TypeBuilder {
    ty: TypeDef,
}

impl TypeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            ty: TypeDef {
                name: name.to_string(),
                namespace: None,
                base: None,
                compiler_generated: false,
                methods: Vec::new(),
            },
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.ty.namespace = Some(namespace.to_string());
        self
    }

    pub fn base(mut self, base: &str) -> Self {
        self.ty.base = Some(base.to_string());
        self
    }

    pub fn compiler_generated(mut self) -> Self {
        self.ty.compiler_generated = true;
        self
    }

    /// Add an instance method without parameters.
    pub fn method(mut self, name: &str, visibility: Visibility, dispatch: Dispatch) -> Self {
        self.ty.methods.push(MethodDef {
            name: name.to_string(),
            visibility,
            is_static: false,
            dispatch,
            is_abstract: false,
            is_constructor: false,
            params: Vec::new(),
        });
        self
    }

    /// Add a non-virtual instance method with `(name, type)` parameters.
    pub fn method_with_params(
        mut self,
        name: &str,
        visibility: Visibility,
        params: &[(&str, &str)],
    ) -> Self {
        self.ty.methods.push(MethodDef {
            name: name.to_string(),
            visibility,
            is_static: false,
            dispatch: Dispatch::Final,
            is_abstract: false,
            is_constructor: false,
            params: params
                .iter()
                .map(|(name, type_name)| Param {
                    name: name.to_string(),
                    type_name: type_name.to_string(),
                })
                .collect(),
        });
        self
    }

    pub fn static_method(mut self, name: &str, visibility: Visibility) -> Self {
        self.ty.methods.push(MethodDef {
            name: name.to_string(),
            visibility,
            is_static: true,
            dispatch: Dispatch::Final,
            is_abstract: false,
            is_constructor: false,
            params: Vec::new(),
        });
        self
    }

    pub fn abstract_method(mut self, name: &str, visibility: Visibility) -> Self {
        self.ty.methods.push(MethodDef {
            name: name.to_string(),
            visibility,
            is_static: false,
            dispatch: Dispatch::Virtual,
            is_abstract: true,
            is_constructor: false,
            params: Vec::new(),
        });
        self
    }

    pub fn build(self) -> TypeDef {
        self.ty
    }
}

/// A temporary directory for manifests and output files.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Serialize `module` as a JSON manifest named `file_name`.
    pub fn write_manifest(&self, file_name: &str, module: &ModuleInfo) -> PathBuf {
        let json = serde_json::to_string_pretty(module).expect("Failed to serialize manifest");
        self.add_file(file_name, &json)
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Contents of `path` relative to the workspace, or `None` when missing.
    pub fn read(&self, path: &str) -> Option<String> {
        fs::read_to_string(self.dir.path().join(path)).ok()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-type module used by end-to-end scenarios.
pub fn alpha_beta_module() -> ModuleInfo {
    ModuleBuilder::new("greek")
        .with_type(
            TypeBuilder::new("Alpha")
                .method("Describe", Visibility::Public, Dispatch::Virtual)
                .method("Validate", Visibility::Private, Dispatch::Final)
                .static_method("Create", Visibility::Public),
        )
        .with_type(TypeBuilder::new("<Alpha>d__1").compiler_generated())
        .with_type(
            TypeBuilder::new("Beta")
                .base("Alpha")
                .method("Describe", Visibility::Public, Dispatch::Override)
                .method("Reset", Visibility::Protected, Dispatch::Final),
        )
        .build()
}
