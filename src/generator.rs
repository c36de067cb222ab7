// This module drives the whole pipeline for a catalog: every entry is parsed and resolved
// for each register width, planned onto the transfer buffer, and emitted as a wrapper and
// forward declaration; the id enumeration, static size checks and both dispatchers are
// built alongside, and everything is wrapped in the framing text. Work proceeds in catalog
// order and stops at the first fatal error, which carries the offending entry's id.

//! Catalog to generated sources.

use crate::abi::{plan_layout, RegisterLayout};
use crate::catalog::{Catalog, CatalogEntry};
use crate::core::error::GenResult;
use crate::core::types::TypeRegistry;
use crate::core::width::RegisterWidth;
use crate::decl::{parse_declaration, Declaration};
use crate::emit::{
    build_enum_declarations, build_fn_declaration, emit_size_check, emit_wrapper, DispatchTable, Framing,
};
use std::fmt;

/// Counters collected while generating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Catalog entries (including custom ABI).
    pub definitions: usize,
    /// Wrappers emitted across both widths.
    pub wrappers: usize,
    /// Entries skipped because their wrapper is hand-written.
    pub custom_abi: usize,
    /// Register slots assigned across all layouts.
    pub registers_allocated: usize,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation Statistics:")?;
        writeln!(f, "  Definitions: {}", self.definitions)?;
        writeln!(f, "  Wrappers emitted: {}", self.wrappers)?;
        writeln!(f, "  Custom ABI entries: {}", self.custom_abi)?;
        writeln!(f, "  Registers allocated: {}", self.registers_allocated)
    }
}

/// The two generated documents.
#[derive(Debug, Clone)]
pub struct GeneratedSources {
    /// Declarations document (`svc.h`).
    pub header: String,
    /// Definitions document (`svc.cpp`).
    pub source: String,
    pub stats: GenerationStats,
}

/// Marshalling-code generator.
#[derive(Debug, Clone)]
pub struct Generator {
    registry: TypeRegistry,
    framing: Framing,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(TypeRegistry::horizon(), Framing::horizon())
    }
}

impl Generator {
    pub fn new(registry: TypeRegistry, framing: Framing) -> Self {
        Self { registry, framing }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Parse `entry` for `width`.
    pub fn declaration(&self, entry: &CatalogEntry, width: RegisterWidth) -> GenResult<Declaration> {
        parse_declaration(&entry.signature, &self.registry, width)
            .map_err(|e| e.in_entry(entry.id, entry.name()))
    }

    /// Parse and plan `entry` for `width`.
    pub fn plan(&self, entry: &CatalogEntry, width: RegisterWidth) -> GenResult<(Declaration, RegisterLayout)> {
        let decl = self.declaration(entry, width)?;
        let layout = plan_layout(&decl, width).map_err(|e| e.in_entry(entry.id, entry.name()))?;
        Ok((decl, layout))
    }

    /// Dispatch tables for both widths.
    pub fn dispatch_tables(&self, catalog: &Catalog) -> GenResult<[DispatchTable; 2]> {
        let names = self.entry_names(catalog)?;
        Ok(RegisterWidth::ALL.map(|width| {
            DispatchTable::build(
                width,
                names.iter().map(|(id, name)| (*id, name.as_str())),
                |id| catalog.is_custom_abi(id),
            )
        }))
    }

    fn entry_names(&self, catalog: &Catalog) -> GenResult<Vec<(u32, String)>> {
        catalog
            .entries()
            .iter()
            .map(|entry| Ok((entry.id, self.declaration(entry, RegisterWidth::Wide)?.name)))
            .collect()
    }

    /// Generate both documents for `catalog`.
    pub fn generate(&self, catalog: &Catalog) -> GenResult<GeneratedSources> {
        let mut stats = GenerationStats {
            definitions: catalog.len(),
            custom_abi: catalog.entries().iter().filter(|e| catalog.is_custom_abi(e.id)).count(),
            ..Default::default()
        };

        let mut generic_decls = Vec::new();
        for entry in catalog.generated() {
            let decl = self.declaration(entry, RegisterWidth::Wide)?;
            generic_decls.push(build_fn_declaration(&decl, &decl.name));
        }

        let mut width_decls: [Vec<String>; 2] = [Vec::new(), Vec::new()];
        let mut wrappers = Vec::new();
        for (slot, width) in RegisterWidth::ALL.into_iter().enumerate() {
            for entry in catalog.generated() {
                let (decl, layout) = self.plan(entry, width)?;
                stats.registers_allocated += layout.read_registers().count() + layout.written_registers().count();
                wrappers.push(emit_wrapper(&decl, &layout));
                width_decls[slot].push(build_fn_declaration(&decl, &format!("{}{}", decl.name, width.suffix())));
            }
        }
        stats.wrappers = wrappers.len();

        let names = self.entry_names(catalog)?;
        let enum_decls = build_enum_declarations(names.iter().map(|(id, name)| (*id, name.as_str())));
        let [call_32, call_64] = self.dispatch_tables(catalog)?;

        let [narrow_decls, wide_decls] = width_decls;
        let mut header = String::new();
        header.push_str(&self.framing.banner);
        header.push_str(&self.framing.header_prologue);
        header.push_str(&generic_decls.join("\n"));
        header.push_str("\n\n");
        header.push_str(&narrow_decls.join("\n"));
        header.push_str("\n\n");
        header.push_str(&wide_decls.join("\n"));
        header.push_str("\n\n");
        header.push_str(&enum_decls);
        header.push_str(&self.framing.header_epilogue);

        let mut source = String::new();
        source.push_str(&self.framing.banner);
        source.push_str(&self.framing.source_prologue);
        source.push_str(&emit_size_check(&self.registry));
        source.push_str("\n\n");
        source.push_str(&wrappers.join("\n\n"));
        source.push_str("\n\n");
        source.push_str(&call_32.render());
        source.push_str("\n\n");
        source.push_str(&call_64.render());
        source.push_str(&self.framing.source_epilogue);

        log::info!(
            "generated {} wrappers for {} definitions",
            stats.wrappers,
            stats.definitions
        );

        Ok(GeneratedSources { header, source, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GenError;

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.push(0x01, "Result SetHeapSize(Address* out_address, Size size);").unwrap();
        catalog.push(0x07, "void ExitProcess();").unwrap();
        catalog.push(0x7F, "void CallSecureMonitor(SecureMonitorArguments args);").unwrap();
        catalog.exclude(0x7F, "CallSecureMonitor");
        catalog
    }

    #[test]
    fn test_generate_small_catalog() {
        let generator = Generator::new(TypeRegistry::horizon(), Framing::bare());
        let out = generator.generate(&small_catalog()).unwrap();

        assert_eq!(out.stats.definitions, 3);
        assert_eq!(out.stats.custom_abi, 1);
        assert_eq!(out.stats.wrappers, 4);

        assert!(out.header.starts_with(
            "Result SetHeapSize(Core::System& system, uint64_t* out_address, uint64_t size);\nvoid ExitProcess(Core::System& system);\n\n"
        ));
        assert!(out.header.contains("Result SetHeapSize64From32(Core::System& system, uint64_t* out_address, uint32_t size);"));
        assert!(out.header.contains("    CallSecureMonitor = 0x7f,"));
        assert!(!out.header.contains("void CallSecureMonitor("));

        assert!(out.source.contains("static void SvcWrap_SetHeapSize64From32("));
        assert!(out.source.contains("static void SvcWrap_ExitProcess64("));
        assert!(!out.source.contains("static void SvcWrap_CallSecureMonitor"));
        assert!(out.source.contains("        return SvcWrap_CallSecureMonitor64(system, args);"));
    }

    #[test]
    fn test_error_names_entry() {
        let mut catalog = small_catalog();
        catalog.push(0x99, "Result Broken(Widget w);").unwrap();
        let err = Generator::default().generate(&catalog).unwrap_err();
        assert_eq!(err.entry_id(), Some(0x99));
        assert!(err.to_string().contains("Broken"));
        assert!(matches!(err.root_cause(), GenError::UnknownType { .. }));
    }
}
