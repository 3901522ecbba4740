//! Override records written to the output file
//!
//! Each record is one line of five comma-separated fields:
//! `type,method,base type,is override,is public`. Booleans are written as
//! `True` / `False`. Fields are not escaped; type and method names never
//! contain commas or line breaks.

use std::fmt;

/// Override facts about one method of a documented type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodFact {
    /// The documented type the method was listed on
    pub declaring_type_name: String,
    pub method_name: String,
    /// Type holding the root of the method's override chain
    pub base_declaring_type_name: String,
    pub is_override: bool,
    pub is_public: bool,
}

/// Textual form used for booleans in records and property listings.
pub fn bool_text(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Render `fact` as a single record line without a terminator.
pub fn format_record(fact: &MethodFact) -> String {
    fact.to_string()
}

impl fmt::Display for MethodFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.declaring_type_name,
            self.method_name,
            self.base_declaring_type_name,
            bool_text(self.is_override),
            bool_text(self.is_public)
        )
    }
}
