//! Wrapper emission: gather inputs, call, scatter results.
//!
//! Values cross the register boundary through `Convert<T>`, a bytewise copy
//! bounded by the smaller of the two sizes. Values spanning several
//! registers go through a `std::array` of raw register words in allocation
//! order.

use super::{indent_body, INDENT};
use crate::abi::RegisterLayout;
use crate::core::width::RegisterWidth;
use crate::decl::Declaration;

/// Type register-returned addresses are widened to.
pub const ADDRESS_WORD: &str = "uint64_t";

/// Statements loading `name` from the registers in `sources`.
pub fn emit_gather(sources: &[usize], name: &str, type_name: &str, width: RegisterWidth) -> Vec<String> {
    let get_fn = format!("GetArg{}", width.register_bits());

    if let [source] = sources {
        return vec![format!("{name} = Convert<{type_name}>({get_fn}(args, {source}));")];
    }

    let mut lines = vec![format!(
        "std::array<uint{}_t, {}> {name}_gather{{}};",
        width.register_bits(),
        sources.len()
    )];
    for (i, source) in sources.iter().enumerate() {
        lines.push(format!("{name}_gather[{i}] = {get_fn}(args, {source});"));
    }
    lines.push(format!("{name} = Convert<{type_name}>({name}_gather);"));
    lines
}

/// Statements storing `name` into the registers in `destinations`.
pub fn emit_scatter(destinations: &[usize], name: &str, width: RegisterWidth) -> Vec<String> {
    let set_fn = format!("SetArg{}", width.register_bits());
    let reg_type = format!("uint{}_t", width.register_bits());

    if let [dest] = destinations {
        return vec![format!("{set_fn}(args, {dest}, Convert<{reg_type}>({name}));")];
    }

    let mut lines = vec![format!(
        "auto {name}_scatter = Convert<std::array<{reg_type}, {}>>({name});",
        destinations.len()
    )];
    for (i, dest) in destinations.iter().enumerate() {
        lines.push(format!("{set_fn}(args, {dest}, {name}_scatter[{i}]);"));
    }
    lines
}

/// Emit the wrapper translating the register buffer into a call of
/// `<Name><Suffix>` and back.
pub fn emit_wrapper(decl: &Declaration, layout: &RegisterLayout) -> String {
    let width = layout.width;
    let suffix = width.suffix();
    let mut lines = vec![format!(
        "static void SvcWrap_{}{}(Core::System& system, std::span<uint64_t, 8> args) {{",
        decl.name, suffix
    )];

    if let Some(ret) = &layout.return_slot {
        lines.push(format!("{} ret{{}};", ret.ty.name));
        lines.push(String::new());
    }

    for out in &layout.output_slots {
        let ty = if out.is_address { ADDRESS_WORD } else { out.ty.name.as_str() };
        lines.push(format!("{} {}{{}};", ty, out.var_name));
    }
    for input in &layout.input_slots {
        lines.push(format!("{} {}{{}};", input.ty.name, input.var_name));
    }
    if !layout.output_slots.is_empty() || !layout.input_slots.is_empty() {
        lines.push(String::new());
    }

    for input in &layout.input_slots {
        lines.extend(emit_gather(&input.registers, &input.var_name, &input.ty.name, width));
    }
    if !layout.input_slots.is_empty() {
        lines.push(String::new());
    }

    let call_arguments: Vec<String> = std::iter::once("system".to_string())
        .chain(decl.arguments.iter().map(|arg| {
            if arg.is_register_output() {
                format!("std::addressof({})", arg.var_name)
            } else {
                arg.var_name.clone()
            }
        }))
        .collect();
    let assign = if layout.return_slot.is_some() { "ret = " } else { "" };
    lines.push(format!("{assign}{}{suffix}({});", decl.name, call_arguments.join(", ")));

    if layout.return_slot.is_some() || !layout.output_slots.is_empty() {
        lines.push(String::new());
    }

    if let Some(ret) = &layout.return_slot {
        lines.extend(emit_scatter(&ret.registers, "ret", width));
    }
    for out in &layout.output_slots {
        lines.extend(emit_scatter(&out.registers, &out.var_name, width));
    }

    format!("{}\n}}", indent_body(&lines, INDENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::plan_layout;
    use crate::core::types::TypeRegistry;
    use crate::decl::parse_declaration;

    fn wrapper(sig: &str, width: RegisterWidth) -> String {
        let decl = parse_declaration(sig, &TypeRegistry::horizon(), width).unwrap();
        let layout = plan_layout(&decl, width).unwrap();
        emit_wrapper(&decl, &layout)
    }

    #[test]
    fn test_gather_single() {
        let lines = emit_gather(&[3], "size", "uint64_t", RegisterWidth::Wide);
        assert_eq!(lines, vec!["size = Convert<uint64_t>(GetArg64(args, 3));"]);
    }

    #[test]
    fn test_gather_multi() {
        let lines = emit_gather(&[0, 3], "timeout_ns", "int64_t", RegisterWidth::Narrow);
        assert_eq!(
            lines,
            vec![
                "std::array<uint32_t, 2> timeout_ns_gather{};",
                "timeout_ns_gather[0] = GetArg32(args, 0);",
                "timeout_ns_gather[1] = GetArg32(args, 3);",
                "timeout_ns = Convert<int64_t>(timeout_ns_gather);",
            ]
        );
    }

    #[test]
    fn test_scatter_multi() {
        let lines = emit_scatter(&[1, 2], "out", RegisterWidth::Narrow);
        assert_eq!(
            lines,
            vec![
                "auto out_scatter = Convert<std::array<uint32_t, 2>>(out);",
                "SetArg32(args, 1, out_scatter[0]);",
                "SetArg32(args, 2, out_scatter[1]);",
            ]
        );
    }

    #[test]
    fn test_wrapper_shape() {
        let text = wrapper("Result SetHeapSize(Address* out_address, Size size);", RegisterWidth::Wide);
        let expected = "\
static void SvcWrap_SetHeapSize64(Core::System& system, std::span<uint64_t, 8> args) {
    Result ret{};

    uint64_t out_address{};
    uint64_t size{};

    size = Convert<uint64_t>(GetArg64(args, 1));

    ret = SetHeapSize64(system, std::addressof(out_address), size);

    SetArg64(args, 0, Convert<uint64_t>(ret));
    SetArg64(args, 1, Convert<uint64_t>(out_address));
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_wrapper_void_no_args() {
        let text = wrapper("void ExitProcess();", RegisterWidth::Narrow);
        assert_eq!(
            text,
            "static void SvcWrap_ExitProcess64From32(Core::System& system, std::span<uint64_t, 8> args) {\n    ExitProcess64From32(system);\n}"
        );
    }

    #[test]
    fn test_wrapper_narrow_address_output_widened() {
        let text = wrapper("Result SetHeapSize(Address* out_address, Size size);", RegisterWidth::Narrow);
        assert!(text.contains("    uint64_t out_address{};"));
        assert!(text.contains("    uint32_t size{};"));
        assert!(text.contains("    SetArg32(args, 1, Convert<uint32_t>(out_address));"));
    }
}
