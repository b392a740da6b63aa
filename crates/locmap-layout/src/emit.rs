use crate::error::{LayoutError, LayoutResult};
use crate::{LocationTable, MAX_CONNECTIONS};

/// Controls the shape of emitted C source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Path written in the initializer's `#include`
    pub include_path: String,
    /// Name of the `LOCATION` array
    pub array_name: String,
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            include_path: "principal/map_base.h".to_string(),
            array_name: "locations_info".to_string(),
            indent: 4,
        }
    }
}

impl EmitOptions {
    /// Checks that both names can be pasted into C source as-is.
    pub fn validate(&self) -> LayoutResult<()> {
        let invalid = |key, value: &str, reason| LayoutError::InvalidEmitOption {
            key,
            value: value.to_string(),
            reason,
        };

        let mut chars = self.array_name.chars();
        match chars.next() {
            None => return Err(invalid("array_name", &self.array_name, "must not be empty")),
            Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                return Err(invalid("array_name", &self.array_name, "must start with a letter or `_`"))
            }
            _ => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("array_name", &self.array_name, "must be a C identifier"));
        }

        if self.include_path.is_empty() {
            return Err(invalid("include_path", &self.include_path, "must not be empty"));
        }
        if self
            .include_path
            .chars()
            .any(|c| matches!(c, '"' | '<' | '>') || c.is_control())
        {
            return Err(invalid(
                "include_path",
                &self.include_path,
                "must not contain quotes, angle brackets or control characters",
            ));
        }
        Ok(())
    }
}

/// The C header declaring the `CONNECT` and `LOCATION` record types.
pub fn header_source(options: &EmitOptions) -> String {
    let tab = " ".repeat(options.indent);
    format!(
        "#ifndef PRINCIPAL_MAP_BASE_H\n\
         #define PRINCIPAL_MAP_BASE_H\n\
         \n\
         #include <stdint.h>\n\
         \n\
         #define MAX_CONNECTIONS {MAX_CONNECTIONS}\n\
         typedef struct {{\n\
         {tab}uint16_t locate;\n\
         {tab}uint32_t length;\n\
         }} CONNECT;\n\
         typedef struct LOCATION {{\n\
         {tab}uint16_t id;\n\
         {tab}CONNECT connect[MAX_CONNECTIONS];\n\
         }} LOCATION;\n\
         \n\
         #endif\n"
    )
}

/// A C translation unit defining the table as a `LOCATION` array.
///
/// Only real edges are listed; the compiler zero-fills the remaining slots,
/// which is the vacant value. A location without edges lists one explicit
/// `{0, 0}` so its inner braces are never empty, and an empty table gets a
/// single zeroed placeholder. `<array_name>_count` always holds the real
/// number of locations.
pub fn initializer_source(table: &LocationTable, options: &EmitOptions) -> String {
    let tab = " ".repeat(options.indent);
    let mut out = String::new();

    out.push_str(&format!("#include \"{}\"\n\n", options.include_path));
    out.push_str(&format!("LOCATION {}[] = {{\n", options.array_name));
    for location in table {
        out.push_str(&format!("{tab}{{{}, {{\n", location.id));
        let mut listed = 0;
        for edge in location.edges() {
            out.push_str(&format!("{tab}{tab}{{{}, {}}},\n", edge.locate, edge.length));
            listed += 1;
        }
        if listed == 0 {
            out.push_str(&format!("{tab}{tab}{{0, 0}},\n"));
        }
        out.push_str(&format!("{tab}}}}},\n"));
    }
    if table.is_empty() {
        out.push_str(&format!("{tab}{{0}},\n"));
    }
    out.push_str("};\n");
    out.push_str(&format!(
        "const uint16_t {}_count = {};\n",
        options.array_name,
        table.len()
    ));

    log::debug!(
        "emitted {} locations ({} slots each) as `{}`",
        table.len(),
        MAX_CONNECTIONS,
        options.array_name
    );
    out
}
