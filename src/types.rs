use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    path::PathBuf,
};

/// One row of `syscall_64.tbl`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyscallTableEntry {
    pub name: String,
    pub number: u64,
    pub entry_point: String,
}

/// One `asmlinkage long sys_*(...)` prototype from `syscalls.h`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureEntry {
    pub entry_point: String,
    pub arg_count: usize,
    pub arg_types: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizedSyscall {
    pub name: String,
    pub arg_count: usize,
    pub arg_types: Vec<String>,
    // true when no prototype matched and the fallback shape was used
    pub fallback: bool,
}

/// Table rows keyed by syscall name, iterated in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyscallTable {
    entries: Vec<SyscallTableEntry>,
    by_name: HashMap<String, usize>,
}

impl SyscallTable {
    pub fn new() -> SyscallTable {
        SyscallTable::default()
    }

    /// Keeps the first row seen for a name, returns false for a later duplicate.
    pub fn insert_first(&mut self, entry: SyscallTableEntry) -> bool {
        if self.by_name.contains_key(&entry.name) {
            return false;
        }
        self.by_name.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&SyscallTableEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    pub fn values(&self) -> std::slice::Iter<'_, SyscallTableEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::ops::Index<&str> for SyscallTable {
    type Output = SyscallTableEntry;

    fn index(&self, name: &str) -> &SyscallTableEntry {
        self.get(name)
            .unwrap_or_else(|| panic!("no syscall named {name} in table"))
    }
}

impl FromIterator<SyscallTableEntry> for SyscallTable {
    fn from_iter<I: IntoIterator<Item = SyscallTableEntry>>(iter: I) -> SyscallTable {
        let mut table = SyscallTable::new();
        for entry in iter {
            table.insert_first(entry);
        }
        table
    }
}

// keyed by entry point
pub type Signatures = HashMap<String, SignatureEntry>;
// keyed by syscall number, iterates in ascending order
pub type FinalizedMap = BTreeMap<u64, FinalizedSyscall>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    UnmatchedSignature {
        name: String,
        entry_point: String,
    },
    HostMismatch {
        number: u64,
        generated: String,
        host: Option<&'static str>,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Warning::UnmatchedSignature { name, entry_point } => write!(
                f,
                "no prototype found for entry point {entry_point} (syscall {name}), assuming 6 untyped arguments"
            ),
            Warning::HostMismatch {
                number,
                generated,
                host: Some(host),
            } => write!(
                f,
                "syscall {number} is {generated} in the kernel tree but {host} on this host"
            ),
            Warning::HostMismatch {
                number,
                generated,
                host: None,
            } => write!(
                f,
                "syscall {number} ({generated}) is unknown to this host's syscall table"
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    SyscallTable,
    SyscallsHeader,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InputKind::SyscallTable => write!(f, "syscall table"),
            InputKind::SyscallsHeader => write!(f, "syscall declarations header"),
        }
    }
}

/// A required kernel source file is absent, nothing gets written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingInput {
    pub kind: InputKind,
    pub path: PathBuf,
}

impl Display for MissingInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} not found: {}", self.kind, self.path.display())
    }
}

impl std::error::Error for MissingInput {}
