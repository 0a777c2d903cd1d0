use std::collections::BTreeMap;

use syscalls::Sysno;

use crate::types::{FinalizedMap, Warning};

/// Compares the generated numbering with the syscall table compiled into
/// the `syscalls` crate for the host architecture. Advisory only.
pub fn cross_check(finalized: &FinalizedMap) -> Vec<Warning> {
    finalized
        .iter()
        .filter_map(|(number, syscall)| {
            let host = usize::try_from(*number).ok().and_then(Sysno::new);
            match host {
                Some(sysno) if sysno.name() == syscall.name => None,
                _ => Some(Warning::HostMismatch {
                    number: *number,
                    generated: syscall.name.clone(),
                    host: host.map(|sysno| sysno.name()),
                }),
            }
        })
        .collect()
}

/// arg count -> number of syscalls, plus how many records used the fallback shape
pub fn arg_count_histogram(finalized: &FinalizedMap) -> (BTreeMap<usize, usize>, usize) {
    let mut histogram = BTreeMap::new();
    let mut fallbacks = 0;
    for syscall in finalized.values() {
        if syscall.fallback {
            fallbacks += 1;
        } else {
            *histogram.entry(syscall.arg_count).or_insert(0) += 1;
        }
    }
    (histogram, fallbacks)
}

pub fn print_summary(finalized: &FinalizedMap) {
    use tabled::{builder::Builder, settings::Style};

    let (histogram, fallbacks) = arg_count_histogram(finalized);
    let mut builder = Builder::new();
    builder.push_record(["args", "syscalls"]);
    builder.push_record([""]);
    for (arg_count, count) in histogram {
        builder.push_record([arg_count.to_string(), count.to_string()]);
    }
    if fallbacks > 0 {
        builder.push_record(["untyped".to_owned(), fallbacks.to_string()]);
    }
    let table = builder.build().with(Style::ascii_rounded()).to_string();

    println!("\n{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FinalizedSyscall;

    fn record(name: &str, arg_count: usize, fallback: bool) -> FinalizedSyscall {
        FinalizedSyscall {
            name: name.to_owned(),
            arg_count,
            arg_types: Vec::new(),
            fallback,
        }
    }

    #[test]
    fn histogram_separates_fallbacks() {
        let finalized = FinalizedMap::from([
            (0, record("read", 3, false)),
            (1, record("write", 3, false)),
            (39, record("getpid", 0, false)),
            (400, record("mystery", 6, true)),
        ]);
        let (histogram, fallbacks) = arg_count_histogram(&finalized);
        assert_eq!(histogram, BTreeMap::from([(0, 1), (3, 2)]));
        assert_eq!(fallbacks, 1);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn cross_check_flags_renamed_and_unknown_numbers() {
        let finalized = FinalizedMap::from([
            (0, record("read", 3, false)),
            (1, record("not_write", 3, false)),
            (100_000, record("imaginary", 6, true)),
        ]);
        let warnings = cross_check(&finalized);
        assert_eq!(
            warnings,
            vec![
                Warning::HostMismatch {
                    number: 1,
                    generated: "not_write".into(),
                    host: Some("write"),
                },
                Warning::HostMismatch {
                    number: 100_000,
                    generated: "imaginary".into(),
                    host: None,
                },
            ]
        );
    }
}
