use crate::{
    auxiliary::constants::general::MAX_REGISTER_ARGS,
    types::{FinalizedMap, FinalizedSyscall, Signatures, SyscallTable, Warning},
};

pub fn reconcile(table: &SyscallTable, signatures: &Signatures) -> (FinalizedMap, Vec<Warning>) {
    let mut finalized = FinalizedMap::new();
    let mut warnings = Vec::new();

    // file order, so warnings follow the table and a shared number goes to the later row
    for entry in table.values() {
        let record = match signatures.get(&entry.entry_point) {
            Some(signature) => FinalizedSyscall {
                name: entry.name.clone(),
                arg_count: signature.arg_count,
                arg_types: signature.arg_types.clone(),
                fallback: false,
            },
            None => {
                warnings.push(Warning::UnmatchedSignature {
                    name: entry.name.clone(),
                    entry_point: entry.entry_point.clone(),
                });
                // still routable, just untyped
                FinalizedSyscall {
                    name: entry.name.clone(),
                    arg_count: MAX_REGISTER_ARGS,
                    arg_types: Vec::new(),
                    fallback: true,
                }
            }
        };
        // abi filtering should leave one row per number, if not the later one stays
        finalized.insert(entry.number, record);
    }
    (finalized, warnings)
}
