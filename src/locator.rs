use std::path::{Path, PathBuf};

use crate::auxiliary::constants::paths::{
    FALLBACK_STAGING, HOME_CANDIDATES, SYSCALLS_HEADER, SYSCALL_TABLE,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelSource {
    // used as given, existence is checked by the parsers
    Fixed(PathBuf),
    Discover {
        home: Option<PathBuf>,
        staging: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOrigin {
    Fixed,
    Discovered,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelRoot {
    pub path: PathBuf,
    pub origin: RootOrigin,
}

impl KernelRoot {
    pub fn syscall_table(&self) -> PathBuf {
        self.path.join(SYSCALL_TABLE)
    }
    pub fn syscalls_header(&self) -> PathBuf {
        self.path.join(SYSCALLS_HEADER)
    }
}

impl KernelSource {
    pub fn discover_from(home: Option<PathBuf>) -> KernelSource {
        KernelSource::Discover {
            home,
            staging: std::env::temp_dir().join(FALLBACK_STAGING),
        }
    }

    /// Picks the kernel root to scan. Never fails, a bad root surfaces later
    /// as a missing input from the parsers.
    pub fn locate(&self) -> KernelRoot {
        match self {
            KernelSource::Fixed(path) => KernelRoot {
                path: path.clone(),
                origin: RootOrigin::Fixed,
            },
            KernelSource::Discover { home, staging } => {
                let found = home.as_deref().and_then(|home| {
                    HOME_CANDIDATES
                        .iter()
                        .map(|candidate| home.join(candidate))
                        .find(|candidate| has_header(candidate))
                });
                match found {
                    Some(path) => KernelRoot {
                        path,
                        origin: RootOrigin::Discovered,
                    },
                    None => KernelRoot {
                        path: staging.clone(),
                        origin: RootOrigin::Fallback,
                    },
                }
            }
        }
    }
}

fn has_header(candidate: &Path) -> bool {
    candidate.join(SYSCALLS_HEADER).is_file()
}
