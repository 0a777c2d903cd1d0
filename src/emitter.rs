use std::path::Path;

use anyhow::{Context, Result};

use crate::types::{FinalizedMap, FinalizedSyscall};

/// Renders the whole `SyscallMap.cpp` in memory, entries in ascending number order.
pub fn render_table(finalized: &FinalizedMap, include: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("#include \"{include}\"\n"));
    out.push_str("#include <string>\n#include <vector>\n\n");
    out.push_str("namespace Syscall {\n\n");
    out.push_str("const std::map<long, SyscallInfo> g_syscall_map = {\n");
    for (number, syscall) in finalized {
        out.push_str(&render_entry(*number, syscall));
    }
    out.push_str("};\n\n");
    out.push_str("} // namespace Syscall\n");
    out
}

fn render_entry(number: u64, syscall: &FinalizedSyscall) -> String {
    let arg_types = syscall
        .arg_types
        .iter()
        .map(|arg_type| format!("\"{}\"", escape(arg_type)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "    {{ {number}, {{ \"{}\", {}, {{ {arg_types} }} }} }},\n",
        escape(&syscall.name),
        syscall.arg_count
    )
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The declarations the generated table is compiled against.
pub fn render_header() -> String {
    "\
#pragma once

#include <map>
#include <string>
#include <vector>

namespace Syscall
{
struct SyscallInfo
{
    std::string name;
    int arg_count;
    std::vector<std::string> arg_types;
};
extern const std::map<long, SyscallInfo> g_syscall_map;
inline const SyscallInfo *get_syscall_info(long number)
{
    auto it = g_syscall_map.find(number);
    if (it != g_syscall_map.end())
    {
        return &it->second;
    }
    return nullptr;
}
} // namespace Syscall
"
    .to_owned()
}

/// Writes an already rendered artifact, creating the destination directory.
pub fn emit(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
