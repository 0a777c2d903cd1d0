use crate::{
    colors::{ERROR_COLOR, GENERAL_TEXT_COLOR, PATH_COLOR, SUCCESS_COLOR, WARNING_COLOR},
    locator::{KernelRoot, RootOrigin},
    types::Warning,
};
use colored::Colorize;
use std::path::Path;

// diagnostics go to stderr so stdout only carries the summary
pub struct Reporter {
    pub quiet: bool,
}

impl Reporter {
    pub fn info(&self, text: &str) {
        if !self.quiet {
            eprintln!("{}", text.custom_color(*GENERAL_TEXT_COLOR));
        }
    }

    pub fn kernel_root(&self, root: &KernelRoot) {
        if self.quiet {
            return;
        }
        let how = match root.origin {
            RootOrigin::Fixed => "using kernel source at",
            RootOrigin::Discovered => "found kernel source at",
            RootOrigin::Fallback => "no kernel checkout found, falling back to",
        };
        eprintln!(
            "{} {}",
            how.custom_color(*GENERAL_TEXT_COLOR),
            root.path.display().to_string().custom_color(*PATH_COLOR)
        );
    }

    pub fn warn(&self, warning: &Warning) {
        eprintln!(
            "{} {}",
            "warning:".custom_color(*WARNING_COLOR).bold(),
            warning
        );
    }

    pub fn error(&self, error: &anyhow::Error) {
        eprintln!(
            "{} {:#}",
            "error:".custom_color(*ERROR_COLOR).bold(),
            error
        );
    }

    pub fn success(&self, output: &Path, count: usize) {
        println!(
            "{} {} {}",
            output.display().to_string().custom_color(*PATH_COLOR),
            "generated,".custom_color(*SUCCESS_COLOR),
            format!("{count} syscalls").bold()
        );
    }
}
