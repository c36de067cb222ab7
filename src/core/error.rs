// This module defines error types for the supervisor-call generator using the thiserror
// crate. GenError covers every fatal generation-time condition: type names missing from
// the registry, signatures that do not follow the `Ret Name(Type name, ...)` grammar,
// register allocator logic errors (double allocation, exhaustion of the 8-slot bank),
// catalog loading problems and I/O failures when writing the artifacts. Entry wraps any
// of these with the catalog id and name so the diagnostic points at the offending entry.

//! Error types for the generator.

use thiserror::Error;

/// Main error type for catalog processing and code generation.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Unknown type '{name}'")]
    UnknownType {
        name: String,
    },

    #[error("Malformed signature '{signature}': {reason}")]
    MalformedSignature {
        signature: String,
        reason: &'static str,
    },

    #[error("Register R{register} already allocated")]
    DoubleAllocation {
        register: usize,
    },

    #[error("No registers available (bank of {bank_size})")]
    RegisterExhaustion {
        bank_size: usize,
    },

    #[error("Duplicate catalog id {id:#x}")]
    DuplicateId {
        id: u32,
    },

    #[error("Malformed catalog line {line}: {reason}")]
    MalformedCatalog {
        line: usize,
        reason: String,
    },

    #[error("Catalog entry {id:#x} ({name}): {source}")]
    Entry {
        id: u32,
        name: String,
        #[source]
        source: Box<GenError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Attach the catalog entry that was being processed.
    pub fn in_entry(self, id: u32, name: impl Into<String>) -> Self {
        GenError::Entry {
            id,
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Catalog id of the entry this error arose in, if known.
    pub fn entry_id(&self) -> Option<u32> {
        match self {
            GenError::Entry { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The innermost error, skipping any entry context.
    pub fn root_cause(&self) -> &GenError {
        match self {
            GenError::Entry { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_context_in_message() {
        let err = GenError::UnknownType { name: "Foo".into() }.in_entry(0x2a, "DoThing");
        let msg = err.to_string();
        assert!(msg.contains("0x2a"));
        assert!(msg.contains("DoThing"));
        assert!(msg.contains("Unknown type 'Foo'"));
        assert!(matches!(err.root_cause(), GenError::UnknownType { .. }));
        assert_eq!(err.entry_id(), Some(0x2a));
    }
}
