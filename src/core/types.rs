// This module holds the type registry consulted by the generator: a closed table of type
// names and their byte sizes, plus the alias table mapping abstract names (Address, Size,
// arch-specific structs) to the concrete type for each register width. The registry is an
// injected value rather than global state; TypeRegistry::horizon() builds the default
// configuration for the kernel supervisor-call interface and with_size/with_alias extend it.

//! Type registry and resolution.

use super::error::{GenError, GenResult};
use super::width::RegisterWidth;
use hashbrown::HashMap;

/// Name of the empty return type.
pub const VOID: &str = "void";

/// A type name resolved for one register width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub name: String,
    pub size: usize,
}

impl ResolvedType {
    pub fn is_void(&self) -> bool {
        self.name == VOID
    }
}

/// Closed registry of type sizes plus width-dependent aliases.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// Sizes in insertion order; emitted static checks follow this order.
    sizes: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    aliases: HashMap<String, [String; 2]>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or resize) a concrete type.
    pub fn with_size(mut self, name: impl Into<String>, size: usize) -> Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.sizes[slot].1 = size,
            None => {
                self.index.insert(name.clone(), self.sizes.len());
                self.sizes.push((name, size));
            }
        }
        self
    }

    /// Register an abstract name that resolves differently per width.
    pub fn with_alias(
        mut self,
        name: impl Into<String>,
        narrow: impl Into<String>,
        wide: impl Into<String>,
    ) -> Self {
        self.aliases.insert(name.into(), [narrow.into(), wide.into()]);
        self
    }

    /// Replace an abstract name with its concrete type for `width`.
    pub fn substitute<'a>(&'a self, name: &'a str, width: RegisterWidth) -> &'a str {
        match self.aliases.get(name) {
            Some([narrow, wide]) => match width {
                RegisterWidth::Narrow => narrow.as_str(),
                RegisterWidth::Wide => wide.as_str(),
            },
            None => name,
        }
    }

    /// Byte size of a concrete type name.
    pub fn size_of(&self, name: &str) -> GenResult<usize> {
        self.index
            .get(name)
            .map(|&slot| self.sizes[slot].1)
            .ok_or_else(|| GenError::UnknownType { name: name.to_string() })
    }

    /// Substitute and size a type name for `width`.
    pub fn resolve(&self, name: &str, width: RegisterWidth) -> GenResult<ResolvedType> {
        let concrete = self.substitute(name, width);
        let size = self.size_of(concrete)?;
        Ok(ResolvedType {
            name: concrete.to_string(),
            size,
        })
    }

    /// Registry entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.sizes.iter().map(|(name, size)| (name.as_str(), *size))
    }

    /// Default registry for the kernel supervisor-call interface.
    pub fn horizon() -> Self {
        let enum_types = [
            "ArbitrationType",
            "BreakReason",
            "CodeMemoryOperation",
            "DebugThreadParam",
            "DeviceName",
            "HardwareBreakPointRegisterName",
            "Handle",
            "InfoType",
            "InterruptType",
            "IoPoolType",
            "KernelDebugType",
            "KernelTraceState",
            "LimitableResource",
            "MemoryMapping",
            "MemoryPermission",
            "PageInfo",
            "ProcessActivity",
            "ProcessInfoType",
            "Result",
            "SignalType",
            "SystemInfoType",
            "ThreadActivity",
        ];

        let mut registry = enum_types
            .iter()
            .fold(Self::new(), |registry, name| registry.with_size(*name, 4));

        registry = registry
            .with_size("ilp32::LastThreadContext", 16)
            .with_size("ilp32::PhysicalMemoryInfo", 16)
            .with_size("ilp32::SecureMonitorArguments", 32)
            .with_size("lp64::LastThreadContext", 32)
            .with_size("lp64::PhysicalMemoryInfo", 24)
            .with_size("lp64::SecureMonitorArguments", 64)
            .with_size("bool", 1)
            .with_size("int32_t", 4)
            .with_size("int64_t", 8)
            .with_size("uint32_t", 4)
            .with_size("uint64_t", 8)
            .with_size(VOID, 0);

        registry
            .with_alias("Address", "uint32_t", "uint64_t")
            .with_alias("LastThreadContext", "ilp32::LastThreadContext", "lp64::LastThreadContext")
            .with_alias("PhysicalAddress", "uint64_t", "uint64_t")
            .with_alias("PhysicalMemoryInfo", "ilp32::PhysicalMemoryInfo", "lp64::PhysicalMemoryInfo")
            .with_alias(
                "SecureMonitorArguments",
                "ilp32::SecureMonitorArguments",
                "lp64::SecureMonitorArguments",
            )
            .with_alias("Size", "uint32_t", "uint64_t")
            .with_alias("ThreadFunc", "uint32_t", "uint64_t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution_per_width() {
        let registry = TypeRegistry::horizon();

        let narrow = registry.resolve("Address", RegisterWidth::Narrow).unwrap();
        assert_eq!(narrow, ResolvedType { name: "uint32_t".into(), size: 4 });

        let wide = registry.resolve("Address", RegisterWidth::Wide).unwrap();
        assert_eq!(wide, ResolvedType { name: "uint64_t".into(), size: 8 });

        let ctx = registry.resolve("LastThreadContext", RegisterWidth::Narrow).unwrap();
        assert_eq!(ctx.name, "ilp32::LastThreadContext");
        assert_eq!(ctx.size, 16);
    }

    #[test]
    fn test_concrete_name_passes_through() {
        let registry = TypeRegistry::horizon();
        for width in RegisterWidth::ALL {
            let handle = registry.resolve("Handle", width).unwrap();
            assert_eq!(handle.name, "Handle");
            assert_eq!(handle.size, 4);
        }
        assert!(registry.resolve(VOID, RegisterWidth::Wide).unwrap().is_void());
    }

    #[test]
    fn test_unknown_type() {
        let registry = TypeRegistry::horizon();
        let err = registry.resolve("float", RegisterWidth::Wide).unwrap_err();
        assert!(matches!(err, GenError::UnknownType { ref name } if name == "float"));
    }

    #[test]
    fn test_with_size_keeps_order_and_overrides() {
        let registry = TypeRegistry::new()
            .with_size("b", 2)
            .with_size("a", 1)
            .with_size("b", 3);
        let entries: Vec<_> = registry.entries().collect();
        assert_eq!(entries, vec![("b", 3), ("a", 1)]);
    }
}
