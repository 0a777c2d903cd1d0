use anyhow::Result;
use clap::Parser;

use cli::{GeneratorConfig, SysmapgenArgs};
use types::Warning;
use writer::Reporter;

mod auxiliary;
mod cli;
mod colors;
mod emitter;
mod locator;
mod reconcile;
mod signatures;
mod table;
mod types;
mod utilities;
mod writer;

fn main() {
    let args = SysmapgenArgs::parse();
    let config = args.into_config(std::env::var_os("HOME").map(Into::into));
    let reporter = Reporter {
        quiet: config.quiet,
    };
    match run(&config, &reporter) {
        Ok(outcome) => {
            reporter.success(&config.output, outcome.syscalls);
            if !outcome.warnings.is_empty() {
                reporter.info(&format!("{} warnings", outcome.warnings.len()));
            }
        }
        Err(error) => {
            reporter.error(&error);
            std::process::exit(1);
        }
    }
}

pub struct RunOutcome {
    pub syscalls: usize,
    pub warnings: Vec<Warning>,
}

/// locate -> parse both inputs -> reconcile -> emit.
/// Both inputs are parsed before anything is written, a missing one leaves
/// the previous output untouched.
fn run(config: &GeneratorConfig, reporter: &Reporter) -> Result<RunOutcome> {
    let root = config.source.locate();
    reporter.kernel_root(&root);

    let syscall_table = table::parse_table(&root, &config.excluded_abi)?;
    let signatures = signatures::parse_signatures(&root)?;
    reporter.info(&format!(
        "{} table rows, {} prototypes",
        syscall_table.len(),
        signatures.len()
    ));

    let (finalized, mut warnings) = reconcile::reconcile(&syscall_table, &signatures);
    if config.cross_check {
        warnings.extend(utilities::cross_check(&finalized));
    }
    for warning in &warnings {
        reporter.warn(warning);
    }

    let rendered = emitter::render_table(&finalized, &config.include);
    emitter::emit(&config.output, &rendered)?;
    if let Some(header) = &config.header {
        emitter::emit(header, &emitter::render_header())?;
        reporter.info(&format!("wrote {}", header.display()));
    }

    if config.summary {
        utilities::print_summary(&finalized);
    }
    Ok(RunOutcome {
        syscalls: finalized.len(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auxiliary::constants::paths::{SYSCALLS_HEADER, SYSCALL_TABLE},
        locator::KernelSource,
        types::{InputKind, MissingInput},
    };
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const TABLE: &str = "\
# <number> <abi> <name> <entry point>
0\tcommon\tread\t\t\tsys_read
1\tx32\twrite\t\t\tsys_write
39\tcommon\tgetpid\t\t\tsys_getpid
400\tcommon\tunknown\t\t\tsys_unknown
";

    const HEADER: &str = "\
asmlinkage long sys_read(unsigned int fd, char *buf, size_t count);
asmlinkage long sys_write(unsigned int fd, const char __user *buf,
\t\t\t  size_t count);
asmlinkage long sys_getpid(void);
";

    fn kernel_tree(table: Option<&str>, header: Option<&str>) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for (relative, contents) in [(SYSCALL_TABLE, table), (SYSCALLS_HEADER, header)] {
            if let Some(contents) = contents {
                let path = tmp.path().join(relative);
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(path, contents).unwrap();
            }
        }
        tmp
    }

    fn config(kernel: &Path, output: PathBuf) -> GeneratorConfig {
        GeneratorConfig {
            source: KernelSource::Fixed(kernel.to_path_buf()),
            output,
            header: None,
            include: "Syscall.h".into(),
            excluded_abi: "x32".into(),
            summary: false,
            cross_check: false,
            quiet: true,
        }
    }

    #[test]
    fn generates_table_end_to_end() {
        let kernel = kernel_tree(Some(TABLE), Some(HEADER));
        let out = TempDir::new().unwrap();
        let output = out.path().join("src/SyscallMap.cpp");
        let mut config = config(kernel.path(), output.clone());
        config.header = Some(out.path().join("include/Syscall.h"));

        let outcome = run(&config, &Reporter { quiet: true }).unwrap();
        assert_eq!(outcome.syscalls, 3);
        assert_eq!(
            outcome.warnings,
            vec![Warning::UnmatchedSignature {
                name: "unknown".into(),
                entry_point: "sys_unknown".into(),
            }]
        );

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "\
#include \"Syscall.h\"
#include <string>
#include <vector>

namespace Syscall {

const std::map<long, SyscallInfo> g_syscall_map = {
    { 0, { \"read\", 3, { \"unsigned int\", \"char *\", \"size_t\" } } },
    { 39, { \"getpid\", 0, {  } } },
    { 400, { \"unknown\", 6, {  } } },
};

} // namespace Syscall
"
        );
        assert!(out.path().join("include/Syscall.h").is_file());
    }

    #[test]
    fn missing_header_aborts_without_output() {
        let kernel = kernel_tree(Some(TABLE), None);
        let out = TempDir::new().unwrap();
        let output = out.path().join("SyscallMap.cpp");

        let err = run(&config(kernel.path(), output.clone()), &Reporter { quiet: true })
            .err()
            .unwrap();
        let missing = err.downcast_ref::<MissingInput>().unwrap();
        assert_eq!(missing.kind, InputKind::SyscallsHeader);
        assert_eq!(missing.path, kernel.path().join(SYSCALLS_HEADER));
        assert!(!output.exists());
    }

    #[test]
    fn missing_table_leaves_previous_output_alone() {
        let kernel = kernel_tree(None, Some(HEADER));
        let out = TempDir::new().unwrap();
        let output = out.path().join("SyscallMap.cpp");
        std::fs::write(&output, "previous run").unwrap();

        let err = run(&config(kernel.path(), output.clone()), &Reporter { quiet: true })
            .err()
            .unwrap();
        assert!(err.to_string().contains(SYSCALL_TABLE));
        assert_eq!(std::fs::read_to_string(output).unwrap(), "previous run");
    }
}
