//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `acelist_core` linkage.
//! - Load a checklist file from disk and print a metadata summary.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        println!("acelist_core ping={}", acelist_core::ping());
        println!("acelist_core version={}", acelist_core::core_version());
        return ExitCode::SUCCESS;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("cannot read `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    match acelist_core::load(&bytes) {
        Ok(file) => {
            let checklists: usize = file
                .groups()
                .iter()
                .map(|group| group.checklists().len())
                .sum();
            let entries: usize = file
                .groups()
                .iter()
                .flat_map(|group| group.checklists())
                .map(|checklist| checklist.entries().len())
                .sum();
            println!("name={}", file.name());
            println!("make_and_model={}", file.make_and_model());
            println!("default_group={}", file.default_group_name());
            println!(
                "groups={} checklists={} entries={}",
                file.groups().len(),
                checklists,
                entries
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cannot load `{path}`: {err}");
            ExitCode::FAILURE
        }
    }
}
