pub mod constants {
    pub mod paths {
        // relative to the kernel root
        pub const SYSCALL_TABLE: &str = "arch/x86/entry/syscalls/syscall_64.tbl";
        pub const SYSCALLS_HEADER: &str = "include/linux/syscalls.h";

        pub const DEFAULT_OUTPUT: &str = "src/SyscallMap.cpp";
        pub const DEFAULT_INCLUDE: &str = "Syscall.h";

        // discovery candidates, relative to $HOME, probed in order
        pub const HOME_CANDIDATES: [&str; 2] = ["kernel_files", "linux"];
        // relative to the temp dir, used unverified when no candidate qualifies
        pub const FALLBACK_STAGING: &str = "linux";
    }
    pub mod general {
        // x86_64 passes at most six arguments in registers
        pub const MAX_REGISTER_ARGS: usize = 6;
        pub const EXCLUDED_ABI: &str = "x32";
        pub const CALLING_CONVENTION: &str = "asmlinkage";
        pub const RETURN_TYPE: &str = "long";
        pub const NO_PARAMETERS: &str = "void";
    }
}
