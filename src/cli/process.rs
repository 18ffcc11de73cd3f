use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;

use super::{load_project, report_run, resolve_shader_files, run_files};

/// Extension appended to each processed file when writing a directory.
const OUTPUT_EXTENSION: &str = "xapi";

#[derive(Args)]
pub struct ProcessArgs {
    /// Input shader file or directory
    pub input: PathBuf,
    /// Output file (single input) or directory (directory input); default: stdout / next to input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Skip the cross-API constructor checks
    #[arg(long)]
    pub no_lint: bool,
    /// Exit with status 1 when any diagnostic is reported
    #[arg(long)]
    pub deny_warnings: bool,
}

pub fn cmd_process(args: ProcessArgs) {
    let ProcessArgs {
        input,
        output,
        no_lint,
        deny_warnings,
    } = args;

    let project = load_project(&input);
    let mut options = project.options;
    if no_lint {
        options.linting = false;
    }
    let deny = deny_warnings || project.warnings_as_errors;

    let files = resolve_shader_files(&input, &project);
    if files.is_empty() {
        eprintln!("No shader files found in '{}'", input.display());
        return;
    }

    let single = !input.is_dir();
    let mut failed = false;
    for mut run in run_files(&files, &options) {
        failed |= report_run(&mut run, deny);
        let Some(text) = run.output.as_deref() else {
            failed = true;
            continue;
        };
        let written = if single {
            write_single(text, output.as_deref())
        } else {
            let dest = destination(&input, &run.path, output.as_deref());
            write_file(&dest, text)
        };
        if let Err(msg) = written {
            eprintln!("error: {}", msg);
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

fn write_single(text: &str, output: Option<&Path>) -> Result<(), String> {
    match output {
        Some(path) => write_file(path, text),
        None => std::io::stdout()
            .write_all(text.as_bytes())
            .map_err(|e| format!("cannot write to stdout: {}", e)),
    }
}

fn write_file(path: &Path, text: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create '{}': {}", parent.display(), e))?;
    }
    std::fs::write(path, text).map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// `<out>/<relative path>.xapi`, or `<file>.xapi` next to the input.
fn destination(root: &Path, file: &Path, out_dir: Option<&Path>) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    let beside = PathBuf::from(name);
    match out_dir {
        Some(dir) => dir.join(beside.strip_prefix(root).unwrap_or(&beside)),
        None => beside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_beside_input() {
        let dest = destination(
            Path::new("shaders"),
            Path::new("shaders/blur.glsl"),
            None,
        );
        assert_eq!(dest, PathBuf::from("shaders/blur.glsl.xapi"));
    }

    #[test]
    fn test_destination_under_output_dir() {
        let dest = destination(
            Path::new("shaders"),
            Path::new("shaders/compute/reduce.glsl"),
            Some(Path::new("out")),
        );
        assert_eq!(dest, PathBuf::from("out/compute/reduce.glsl.xapi"));
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b.glsl.xapi");
        write_file(&path, "void main() {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "void main() {}\n");
    }
}
