use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
    auxiliary::constants::general::{CALLING_CONVENTION, NO_PARAMETERS, RETURN_TYPE},
    locator::KernelRoot,
    types::{InputKind, MissingInput, SignatureEntry, Signatures},
};

// the parameter list is lazy so neighbouring prototypes never merge
static PROTOTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s){CALLING_CONVENTION}\s+{RETURN_TYPE}\s+([a-zA-Z0-9_]+)\s*\((.*?)\);"
    ))
    .unwrap()
});

pub fn parse_signatures(root: &KernelRoot) -> Result<Signatures> {
    let path = root.syscalls_header();
    if !path.is_file() {
        return Err(MissingInput {
            kind: InputKind::SyscallsHeader,
            path,
        }
        .into());
    }
    let header =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_header_text(&header))
}

pub fn parse_header_text(header: &str) -> Signatures {
    // prototypes wrap freely, treat the whole header as one logical line
    let flattened = header.replace("\r\n", " ").replace(['\n', '\r'], " ");
    let mut signatures = Signatures::new();
    for captures in PROTOTYPE.captures_iter(&flattened) {
        let entry_point = captures[1].to_owned();
        let (arg_count, arg_types) = parse_arguments(&captures[2]);
        // last prototype wins, a later redeclaration is taken as the corrected one
        // (the table parser does the opposite on purpose)
        signatures.insert(
            entry_point.clone(),
            SignatureEntry {
                entry_point,
                arg_count,
                arg_types,
            },
        );
    }
    signatures
}

pub fn parse_arguments(raw: &str) -> (usize, Vec<String>) {
    let raw = raw.trim();
    if raw.is_empty() || raw == NO_PARAMETERS {
        return (0, Vec::new());
    }
    let declarations = raw.split(',').collect::<Vec<_>>();
    let arg_types = declarations
        .iter()
        .filter_map(|declaration| parameter_type(declaration))
        .collect();
    (declarations.len(), arg_types)
}

/// `char __user *buf` -> `char __user *`, an unnamed `size_t` stays `size_t`.
fn parameter_type(declaration: &str) -> Option<String> {
    let spaced = declaration.trim().replace('*', " * ");
    let tokens = spaced.split_whitespace().collect::<Vec<_>>();
    match tokens.as_slice() {
        [] => None,
        [only] => Some((*only).to_owned()),
        [ty @ .., _name] => Some(ty.join(" ")),
    }
}
