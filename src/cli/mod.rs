pub mod check;
pub mod process;
pub mod shared;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use glsl_xapi::diagnostic::render_diagnostics;
use glsl_xapi::project::Project;
use glsl_xapi::{Diagnostic, PreprocessOptions, Severity};

/// Load the glslx.toml governing `input`, exiting on error.
pub fn load_project(input: &Path) -> Project {
    let start = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or(Path::new("."))
    };
    match Project::discover(start) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e.message);
            std::process::exit(1);
        }
    }
}

/// Resolve an input path (file or directory) to the shader files it names.
pub fn resolve_shader_files(input: &Path, project: &Project) -> Vec<PathBuf> {
    if input.is_dir() {
        collect_shader_files(input, project)
    } else if input.is_file() {
        vec![input.to_path_buf()]
    } else {
        eprintln!("error: '{}' is not a file or directory", input.display());
        std::process::exit(1);
    }
}

fn collect_shader_files(dir: &Path, project: &Project) -> Vec<PathBuf> {
    let mut result = Vec::new();
    collect_shader_files_recursive(dir, project, &mut result);
    result.sort();
    result
}

fn collect_shader_files_recursive(dir: &Path, project: &Project, result: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("cannot list '{}': {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        // Skip hidden directories and target/
        if name_str.starts_with('.') || name_str == "target" {
            continue;
        }

        if path.is_dir() {
            collect_shader_files_recursive(&path, project, result);
        } else if project.is_shader_file(&path) {
            result.push(path);
        }
    }
}

/// Result of one pipeline run over one file.
pub struct ShaderRun {
    pub path: PathBuf,
    /// `None` when the file could not be read.
    pub output: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ShaderRun {
    pub fn is_clean(&self) -> bool {
        self.output.is_some() && self.diagnostics.is_empty()
    }
}

/// Preprocess every file. Files are independent, so they run in parallel.
pub fn run_files(files: &[PathBuf], options: &PreprocessOptions) -> Vec<ShaderRun> {
    files
        .par_iter()
        .map(|path| {
            let mut diagnostics = Vec::new();
            let output = match std::fs::read_to_string(path) {
                Ok(source) => Some(glsl_xapi::process(&source, options, &mut diagnostics)),
                Err(e) => {
                    diagnostics.push(Diagnostic::error(format!(
                        "cannot read '{}': {}",
                        path.display(),
                        e
                    )));
                    None
                }
            };
            log::debug!(
                "{}: {} diagnostics",
                path.display(),
                diagnostics.len()
            );
            ShaderRun {
                path: path.clone(),
                output,
                diagnostics,
            }
        })
        .collect()
}

/// Print a run's diagnostics. Returns true if any of them counts as an error.
pub fn report_run(run: &mut ShaderRun, warnings_as_errors: bool) -> bool {
    if warnings_as_errors {
        for d in &mut run.diagnostics {
            d.severity = Severity::Error;
        }
    }
    render_diagnostics(&run.diagnostics, &run.path.to_string_lossy());
    run.diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error)
}
