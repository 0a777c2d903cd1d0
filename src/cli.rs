use std::path::PathBuf;

use clap::Parser;

use crate::{
    auxiliary::constants::{
        general::EXCLUDED_ABI,
        paths::{DEFAULT_INCLUDE, DEFAULT_OUTPUT},
    },
    locator::KernelSource,
};

#[derive(Parser, Debug)]
#[command(
    about = "sysmapgen generates a static syscall table from a linux source tree.",
    version
)]
pub struct SysmapgenArgs {
    /// kernel source root, probe well known checkouts when omitted
    #[arg(short = 'k', long = "kernel-dir")]
    pub kernel_dir: Option<PathBuf>,

    /// where to write the generated table
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// also write the companion declarations header here
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// header name included by the generated table
    #[arg(long, default_value = DEFAULT_INCLUDE)]
    pub include: String,

    /// abi tag whose table rows are skipped
    #[arg(long = "exclude-abi", default_value = EXCLUDED_ABI)]
    pub exclude_abi: String,

    /// print a table of syscalls per argument count
    #[arg(short = 'c', long)]
    pub summary: bool,

    /// compare the generated numbering against this host's syscall table
    #[arg(long = "cross-check")]
    pub cross_check: bool,

    /// only print warnings and errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Everything one generator run needs, no globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: KernelSource,
    pub output: PathBuf,
    pub header: Option<PathBuf>,
    pub include: String,
    pub excluded_abi: String,
    pub summary: bool,
    pub cross_check: bool,
    pub quiet: bool,
}

impl SysmapgenArgs {
    pub fn into_config(self, home: Option<PathBuf>) -> GeneratorConfig {
        let source = match self.kernel_dir {
            Some(path) => KernelSource::Fixed(path),
            None => KernelSource::discover_from(home),
        };
        GeneratorConfig {
            source,
            output: self.output,
            header: self.header,
            include: self.include,
            excluded_abi: self.exclude_abi,
            summary: self.summary,
            cross_check: self.cross_check,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_discovery() {
        let args = SysmapgenArgs::try_parse_from(["sysmapgen"]).unwrap();
        let config = args.into_config(Some(PathBuf::from("/home/dev")));
        assert!(matches!(
            config.source,
            KernelSource::Discover { home: Some(ref home), .. } if home == &PathBuf::from("/home/dev")
        ));
        assert_eq!(config.output, PathBuf::from("src/SyscallMap.cpp"));
        assert_eq!(config.include, "Syscall.h");
        assert_eq!(config.excluded_abi, "x32");
        assert_eq!(config.header, None);
    }

    #[test]
    fn kernel_dir_selects_fixed_mode() {
        let args = SysmapgenArgs::try_parse_from([
            "sysmapgen",
            "-k",
            "/usr/src/linux",
            "-o",
            "out/map.cpp",
            "--header",
            "out/Syscall.h",
            "-c",
        ])
        .unwrap();
        let config = args.into_config(None);
        assert_eq!(
            config.source,
            KernelSource::Fixed(PathBuf::from("/usr/src/linux"))
        );
        assert_eq!(config.output, PathBuf::from("out/map.cpp"));
        assert_eq!(config.header, Some(PathBuf::from("out/Syscall.h")));
        assert!(config.summary);
    }
}
