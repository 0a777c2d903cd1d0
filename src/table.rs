use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
    locator::KernelRoot,
    types::{InputKind, MissingInput, SyscallTable, SyscallTableEntry},
};

// <number> <abi> <name> <entry point> [compat entry point]
static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(\w+)\s+([a-zA-Z0-9_]+)\s+([a-zA-Z0-9_]+)").unwrap()
});

pub fn parse_table(root: &KernelRoot, excluded_abi: &str) -> Result<SyscallTable> {
    let path = root.syscall_table();
    if !path.is_file() {
        return Err(MissingInput {
            kind: InputKind::SyscallTable,
            path,
        }
        .into());
    }
    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    parse_table_lines(BufReader::new(file), excluded_abi, &path)
}

fn parse_table_lines(
    reader: impl BufRead,
    excluded_abi: &str,
    path: &Path,
) -> Result<SyscallTable> {
    let mut syscalls = SyscallTable::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let Some(entry) = parse_row(&line, excluded_abi) else {
            continue;
        };
        // first row wins, the same call can be listed under several historical
        // entry points and the earliest one is the canonical one
        // (the header parser does the opposite on purpose)
        syscalls.insert_first(entry);
    }
    Ok(syscalls)
}

/// `None` for blanks, comments, noise and rows of the excluded abi.
fn parse_row(line: &str, excluded_abi: &str) -> Option<SyscallTableEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let captures = TABLE_ROW.captures(line)?;
    if &captures[2] == excluded_abi {
        return None;
    }
    let number = captures[1].parse::<u64>().ok()?;
    Some(SyscallTableEntry {
        name: captures[3].to_owned(),
        number,
        entry_point: captures[4].to_owned(),
    })
}
