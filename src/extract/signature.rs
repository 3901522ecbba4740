//! Human-readable method names and property listings

use crate::record::bool_text;
use crate::registry::{Dispatch, Visibility};

use super::MethodHandle;

impl MethodHandle<'_> {
    /// `name(T a, U b)`.
    pub fn name_and_params(&self) -> String {
        let params: Vec<String> = self
            .def
            .params
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect();
        format!("{}({})", self.def.name, params.join(", "))
    }

    /// `Type.name(T a, U b)`, qualified by the type whose list produced the handle.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.reflected.name, self.name_and_params())
    }

    /// Named boolean properties of the method, in display order.
    pub fn properties(&self) -> [(&'static str, bool); 7] {
        let def = self.def;
        [
            ("IsPrivate", def.visibility == Visibility::Private),
            ("IsPublic", def.visibility.is_public()),
            ("IsVirtual", def.dispatch != Dispatch::Final),
            ("IsStatic", def.is_static),
            ("IsAbstract", def.is_abstract),
            ("IsAssembly", def.visibility == Visibility::Internal),
            ("IsConstructor", def.is_constructor),
        ]
    }

    /// `IsPrivate = False` style lines for every property.
    pub fn property_lines(&self) -> Vec<String> {
        self.properties()
            .iter()
            .map(|(name, value)| format!("{} = {}", name, bool_text(*value)))
            .collect()
    }
}
