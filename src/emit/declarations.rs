//! Forward declarations, the id enumeration and static size checks.

use super::marshal::ADDRESS_WORD;
use crate::core::types::{TypeRegistry, VOID};
use crate::decl::Declaration;

/// Prototype of the routine a wrapper calls, named `name`.
pub fn build_fn_declaration(decl: &Declaration, name: &str) -> String {
    let arguments: Vec<String> = std::iter::once("Core::System& system".to_string())
        .chain(decl.arguments.iter().map(|arg| {
            let ty = if arg.is_address() { ADDRESS_WORD } else { arg.ty.name.as_str() };
            let pointer = if arg.is_register_output() { "*" } else { "" };
            format!("{ty}{pointer} {}", arg.var_name)
        }))
        .collect();

    format!("{} {}({});", decl.return_type.name, name, arguments.join(", "))
}

/// `enum class SvcId` covering every catalog entry.
pub fn build_enum_declarations<'a>(entries: impl IntoIterator<Item = (u32, &'a str)>) -> String {
    let mut lines = vec!["enum class SvcId : u32 {".to_string()];
    for (id, name) in entries {
        lines.push(format!("    {name} = {id:#x},"));
    }
    lines.push("};".to_string());
    lines.join("\n")
}

/// One `static_assert` per registry entry checking the declared size.
pub fn emit_size_check(registry: &TypeRegistry) -> String {
    registry
        .entries()
        .filter(|(name, _)| *name != VOID)
        .map(|(name, size)| format!("static_assert(sizeof({name}) == {size});"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::width::RegisterWidth;
    use crate::decl::parse_declaration;

    #[test]
    fn test_fn_declaration() {
        let registry = TypeRegistry::horizon();
        let decl = parse_declaration(
            "Result QueryMemory(Address out_memory_info, PageInfo* out_page_info, Address address);",
            &registry,
            RegisterWidth::Narrow,
        )
        .unwrap();
        assert_eq!(
            build_fn_declaration(&decl, "QueryMemory64From32"),
            "Result QueryMemory64From32(Core::System& system, uint32_t out_memory_info, PageInfo* out_page_info, uint32_t address);"
        );

        let decl = parse_declaration("Result SetHeapSize(Address* out_address, Size size);", &registry, RegisterWidth::Narrow).unwrap();
        assert_eq!(
            build_fn_declaration(&decl, "SetHeapSize64From32"),
            "Result SetHeapSize64From32(Core::System& system, uint64_t* out_address, uint32_t size);"
        );
    }

    #[test]
    fn test_enum() {
        let text = build_enum_declarations([(0x01, "SetHeapSize"), (0x7F, "CallSecureMonitor")]);
        assert_eq!(
            text,
            "enum class SvcId : u32 {\n    SetHeapSize = 0x1,\n    CallSecureMonitor = 0x7f,\n};"
        );
    }

    #[test]
    fn test_size_check_skips_void() {
        let text = emit_size_check(&TypeRegistry::horizon());
        assert!(text.starts_with("static_assert(sizeof(ArbitrationType) == 4);"));
        assert!(text.contains("static_assert(sizeof(lp64::SecureMonitorArguments) == 64);"));
        assert!(!text.contains("void"));
    }
}
