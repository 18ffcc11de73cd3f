use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{load_project, report_run, resolve_shader_files, run_files, ShaderRun};

#[derive(Args)]
pub struct CheckArgs {
    /// Input shader file or directory
    pub input: PathBuf,
}

pub fn cmd_check(args: CheckArgs) {
    let CheckArgs { input } = args;
    let project = load_project(&input);
    let mut options = project.options;
    options.linting = true;

    let files = resolve_shader_files(&input, &project);
    if files.is_empty() {
        eprintln!("No shader files found in '{}'", input.display());
        return;
    }

    let failed = count_failures(run_files(&files, &options));
    if failed > 0 {
        eprintln!("{} of {} files have cross-API issues", failed, files.len());
        process::exit(1);
    }
}

/// Report every run and return how many of them have findings.
fn count_failures(runs: Vec<ShaderRun>) -> usize {
    let mut failed = 0usize;
    for mut run in runs {
        // Every finding fails a check, whatever the configured severity.
        report_run(&mut run, true);
        if run.is_clean() {
            eprintln!("OK: {}", run.path.display());
        } else {
            failed += 1;
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use glsl_xapi::PreprocessOptions;
    use std::fs;

    #[test]
    fn test_file_with_findings_counts_as_failed() {
        let dir = tempfile::tempdir().unwrap();
        let clean = dir.path().join("clean.glsl");
        let reshape = dir.path().join("reshape.glsl");
        let missing = dir.path().join("missing.glsl");
        fs::write(&clean, "void main() {}\n").unwrap();
        fs::write(&reshape, "void main() {\n  mat4 m = mat4(other);\n}\n").unwrap();

        let files = vec![clean, reshape, missing];
        let runs = run_files(&files, &PreprocessOptions::strict());
        assert_eq!(count_failures(runs), 2);
    }

    #[test]
    fn test_all_clean_counts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.glsl");
        fs::write(&path, "shared float foo;\n").unwrap();
        let runs = run_files(&[path], &PreprocessOptions::strict());
        assert_eq!(count_failures(runs), 0);
    }
}
