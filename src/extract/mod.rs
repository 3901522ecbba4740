//! Type and method extraction over a module registry
//!
//! The extractor answers the questions the interactive session asks of a
//! module: which types can be documented, which methods a type exposes under a
//! visibility mask, and where each method's override chain is rooted.
//!
//! # Method lists
//!
//! A type's method list starts with the methods it declares, in declaration
//! order, followed by the instance methods it inherits from in-module base
//! types (nearest base first). Private and static base methods are not
//! inherited, and a base method is hidden once a more-derived method with the
//! same signature has been listed.

pub mod signature;

use bitflags::bitflags;
use tracing::debug;

use crate::record::MethodFact;
use crate::registry::{Dispatch, MethodDef, ModuleInfo, TypeDef};

bitflags! {
    /// Which methods a method list should contain.
    ///
    /// A method is admitted when both its visibility bit and its storage bit
    /// are set: `PUBLIC` alone admits nothing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodFilter: u8 {
        const PUBLIC = 1;
        const NON_PUBLIC = 1 << 1;
        const INSTANCE = 1 << 2;
        const STATIC = 1 << 3;
    }
}

impl MethodFilter {
    /// Every visibility, instance methods only.
    pub fn instance_members() -> Self {
        Self::PUBLIC | Self::NON_PUBLIC | Self::INSTANCE
    }

    /// Whether `method` passes this filter.
    pub fn admits(self, method: &MethodDef) -> bool {
        let visibility = if method.visibility.is_public() {
            Self::PUBLIC
        } else {
            Self::NON_PUBLIC
        };
        let storage = if method.is_static {
            Self::STATIC
        } else {
            Self::INSTANCE
        };
        self.contains(visibility | storage)
    }
}

/// One method as seen from a particular type's method list.
#[derive(Debug, Clone, Copy)]
pub struct MethodHandle<'m> {
    /// The type whose method list produced this handle
    pub reflected: &'m TypeDef,
    /// The type that declares the method
    pub declaring: &'m TypeDef,
    pub def: &'m MethodDef,
}

impl<'m> MethodHandle<'m> {
    pub fn name(&self) -> &'m str {
        &self.def.name
    }

    pub fn is_public(&self) -> bool {
        self.def.visibility.is_public()
    }

    /// True for methods declared by a base type of the reflected type.
    pub fn is_inherited(&self) -> bool {
        !std::ptr::eq(self.reflected, self.declaring)
    }
}

/// The 1-indexed list of documentable types offered to the operator.
#[derive(Debug, Clone)]
pub struct Catalogue<'m> {
    entries: Vec<&'m TypeDef>,
}

impl<'m> Catalogue<'m> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type at 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&'m TypeDef> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .copied()
    }

    /// Menu number of the "print all methods" entry.
    pub fn print_all_option(&self) -> usize {
        self.entries.len() + 1
    }

    /// `(index, type)` pairs in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'m TypeDef)> + '_ {
        self.entries.iter().enumerate().map(|(i, ty)| (i + 1, *ty))
    }
}

/// Read-only queries over one module.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'m> {
    module: &'m ModuleInfo,
}

impl<'m> Extractor<'m> {
    pub fn new(module: &'m ModuleInfo) -> Self {
        Self { module }
    }

    /// Types that are not compiler generated, in module order.
    pub fn documentable_types(&self) -> impl Iterator<Item = &'m TypeDef> + 'm {
        self.module.types.iter().filter(|ty| !ty.compiler_generated)
    }

    /// Build the menu catalogue: documentable types numbered from 1.
    pub fn list_types(&self) -> Catalogue<'m> {
        let entries: Vec<&TypeDef> = self.documentable_types().collect();
        debug!(
            module = %self.module.name,
            total = self.module.types.len(),
            listed = entries.len(),
            "built type catalogue"
        );
        Catalogue { entries }
    }

    /// Methods of `ty` admitted by `filter`, own methods first.
    pub fn list_methods(&self, ty: &'m TypeDef, filter: MethodFilter) -> Vec<MethodHandle<'m>> {
        let mut methods: Vec<MethodHandle<'m>> = ty
            .methods
            .iter()
            .filter(|def| filter.admits(def))
            .map(|def| MethodHandle {
                reflected: ty,
                declaring: ty,
                def,
            })
            .collect();

        let mut seen: Vec<&MethodDef> = ty.methods.iter().collect();
        for base in self.module.ancestors(ty) {
            for def in &base.methods {
                if def.is_static || !def.visibility.is_inherited() {
                    continue;
                }
                if seen.iter().any(|s| s.same_signature(def)) {
                    continue;
                }
                seen.push(def);
                if filter.admits(def) {
                    methods.push(MethodHandle {
                        reflected: ty,
                        declaring: base,
                        def,
                    });
                }
            }
        }

        methods
    }

    /// The root declaration of `method`'s override chain.
    ///
    /// Non-overriding methods are their own base definition. An override
    /// resolves to the nearest in-module `virtual` with the same signature;
    /// `None` when the chain leaves the module before reaching it.
    pub fn base_definition(&self, method: &MethodHandle<'m>) -> Option<MethodHandle<'m>> {
        if method.def.dispatch != Dispatch::Override {
            return Some(MethodHandle {
                reflected: method.declaring,
                ..*method
            });
        }

        for base in self.module.ancestors(method.declaring) {
            let slot = base.methods.iter().find(|def| {
                !def.is_static && def.is_virtual() && def.same_signature(method.def)
            });
            if let Some(def) = slot {
                if def.dispatch == Dispatch::Virtual {
                    return Some(MethodHandle {
                        reflected: base,
                        declaring: base,
                        def,
                    });
                }
            }
        }
        None
    }

    /// True when the base definition lives on a different type than the method.
    pub fn is_override(&self, method: &MethodHandle<'m>) -> bool {
        self.base_definition(method)
            .is_some_and(|base| !std::ptr::eq(base.declaring, method.declaring))
    }

    /// Override facts for `methods`, skipping any whose names cannot be resolved.
    pub fn describe_overrides(&self, methods: &[MethodHandle<'m>]) -> Vec<MethodFact> {
        methods
            .iter()
            .filter_map(|method| {
                let Some(base) = self.base_definition(method) else {
                    debug!(
                        type_name = %method.reflected.name,
                        method = %method.def.name,
                        "skipping method with unresolvable base definition"
                    );
                    return None;
                };
                if method.reflected.name.is_empty() || base.declaring.name.is_empty() {
                    debug!(method = %method.def.name, "skipping method with unnamed type");
                    return None;
                }
                Some(MethodFact {
                    declaring_type_name: method.reflected.name.clone(),
                    method_name: method.def.name.clone(),
                    base_declaring_type_name: base.declaring.name.clone(),
                    is_override: !std::ptr::eq(base.declaring, method.declaring),
                    is_public: method.is_public(),
                })
            })
            .collect()
    }
}
