//! Signature parser.
//!
//! Grammar: `ReturnType Name(ArgType ArgName, ArgType* ArgName, ...);`

use super::{Argument, ArgumentKind, Declaration};
use crate::core::error::{GenError, GenResult};
use crate::core::types::TypeRegistry;
use crate::core::width::RegisterWidth;

/// Abstract types whose register-returned outputs are widened to a full word.
const ADDRESS_TYPES: [&str; 2] = ["Address", "Size"];

/// Parse `signature` and resolve every type for `width`.
pub fn parse_declaration(
    signature: &str,
    registry: &TypeRegistry,
    width: RegisterWidth,
) -> GenResult<Declaration> {
    let malformed = |reason| GenError::MalformedSignature {
        signature: signature.to_string(),
        reason,
    };

    let (return_type, rest) = signature
        .split_once(' ')
        .ok_or_else(|| malformed("missing return type"))?;
    let (name, rest) = rest
        .split_once('(')
        .ok_or_else(|| malformed("missing '('"))?;
    let (arg_list, _) = rest
        .split_once(')')
        .ok_or_else(|| malformed("missing ')'"))?;

    let name = name.trim();
    if return_type.is_empty() || name.is_empty() {
        return Err(malformed("empty return type or name"));
    }

    let return_type = registry.resolve(return_type, width)?;

    let mut arguments = Vec::new();
    if !arg_list.trim().is_empty() {
        for token in arg_list.split(", ") {
            arguments.push(parse_argument(token, registry, width).map_err(|e| match e {
                GenError::MalformedSignature { reason, .. } => malformed(reason),
                other => other,
            })?);
        }
    }

    Ok(Declaration {
        return_type,
        name: name.to_string(),
        arguments,
    })
}

fn parse_argument(token: &str, registry: &TypeRegistry, width: RegisterWidth) -> GenResult<Argument> {
    let indirect = token.contains('*');
    let stripped = token.replace('*', "");
    let (type_name, var_name) = stripped
        .trim()
        .split_once(' ')
        .ok_or(GenError::MalformedSignature {
            signature: token.to_string(),
            reason: "argument is not 'type name'",
        })?;
    let var_name = var_name.trim();
    if type_name.is_empty() || var_name.is_empty() || var_name.contains(' ') {
        return Err(GenError::MalformedSignature {
            signature: token.to_string(),
            reason: "argument is not 'type name'",
        });
    }

    let is_output = var_name == "out" || var_name.contains("out_");
    let kind = if !is_output {
        ArgumentKind::Input
    } else if indirect {
        ArgumentKind::OutputByValue {
            address: ADDRESS_TYPES.contains(&type_name),
        }
    } else {
        ArgumentKind::OutputByPointer
    };

    Ok(Argument {
        ty: registry.resolve(type_name, width)?,
        var_name: var_name.to_string(),
        kind,
    })
}
