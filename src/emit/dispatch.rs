//! Width-specific dispatch tables.
//!
//! Every catalog id is routed to `SvcWrap_<Name><Suffix>`. Generated routes
//! point at wrappers emitted by this crate; custom-ABI routes point at the
//! hand-written wrapper of the same name. Unknown ids reach the `default`
//! arm, which logs and returns without touching the registers.

use super::INDENT;
use crate::core::width::RegisterWidth;

/// Where a route's wrapper comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Generated,
    Custom,
}

/// One `case` of a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: u32,
    pub name: String,
    pub kind: RouteKind,
}

/// Dispatcher for one register width.
#[derive(Debug, Clone)]
pub struct DispatchTable {
    width: RegisterWidth,
    routes: Vec<Route>,
}

impl DispatchTable {
    /// Build from `(id, name)` pairs in catalog order.
    pub fn build<'a>(
        width: RegisterWidth,
        entries: impl IntoIterator<Item = (u32, &'a str)>,
        is_custom: impl Fn(u32) -> bool,
    ) -> Self {
        let routes = entries
            .into_iter()
            .map(|(id, name)| Route {
                id,
                name: name.to_string(),
                kind: if is_custom(id) { RouteKind::Custom } else { RouteKind::Generated },
            })
            .collect();
        Self { width, routes }
    }

    pub fn width(&self) -> RegisterWidth {
        self.width
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Ids routed to generated wrappers.
    pub fn generated_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.routes
            .iter()
            .filter(|r| r.kind == RouteKind::Generated)
            .map(|r| r.id)
    }

    /// Wrapper name for `id`, if routed.
    pub fn lookup(&self, id: u32) -> Option<String> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .map(|r| format!("SvcWrap_{}{}", r.name, self.width.suffix()))
    }

    /// Emit the `Call32`/`Call64` switch.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!(
                "static void {}(Core::System& system, u32 imm, std::span<uint64_t, 8> args) {{",
                self.width.dispatcher_name()
            ),
            format!("{INDENT}switch (static_cast<SvcId>(imm)) {{"),
        ];

        for route in &self.routes {
            lines.push(format!("{INDENT}case SvcId::{}:", route.name));
            lines.push(format!(
                "{INDENT}{INDENT}return SvcWrap_{}{}(system, args);",
                route.name,
                self.width.suffix()
            ));
        }

        lines.push(format!("{INDENT}default:"));
        lines.push(format!(
            "{INDENT}{INDENT}LOG_CRITICAL(Kernel_SVC, \"Unknown SVC {{:x}}!\", imm);"
        ));
        lines.push(format!("{INDENT}{INDENT}break;"));
        lines.push(format!("{INDENT}}}"));
        lines.push("}".to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(width: RegisterWidth) -> DispatchTable {
        DispatchTable::build(
            width,
            [(0x01, "SetHeapSize"), (0x20, "SendSyncRequestLight"), (0x21, "SendSyncRequest")],
            |id| id == 0x20,
        )
    }

    #[test]
    fn test_generated_ids_exclude_custom() {
        let t = table(RegisterWidth::Wide);
        assert_eq!(t.generated_ids().collect::<Vec<_>>(), vec![0x01, 0x21]);
        assert_eq!(t.routes().len(), 3);
    }

    #[test]
    fn test_lookup() {
        let t = table(RegisterWidth::Narrow);
        assert_eq!(t.lookup(0x21).as_deref(), Some("SvcWrap_SendSyncRequest64From32"));
        assert_eq!(t.lookup(0x20).as_deref(), Some("SvcWrap_SendSyncRequestLight64From32"));
        assert_eq!(t.lookup(0x99), None);
    }

    #[test]
    fn test_render() {
        let text = table(RegisterWidth::Narrow).render();
        let expected = "\
static void Call32(Core::System& system, u32 imm, std::span<uint64_t, 8> args) {
    switch (static_cast<SvcId>(imm)) {
    case SvcId::SetHeapSize:
        return SvcWrap_SetHeapSize64From32(system, args);
    case SvcId::SendSyncRequestLight:
        return SvcWrap_SendSyncRequestLight64From32(system, args);
    case SvcId::SendSyncRequest:
        return SvcWrap_SendSyncRequest64From32(system, args);
    default:
        LOG_CRITICAL(Kernel_SVC, \"Unknown SVC {:x}!\", imm);
        break;
    }
}";
        assert_eq!(text, expected);
    }
}
