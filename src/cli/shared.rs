use std::path::PathBuf;
use std::process;

use clap::Args;

use glsl_xapi::diagnostic::render_diagnostics;
use glsl_xapi::preprocess::{extract_shared_vars, shared_vars_suffix, strip_comments};
use glsl_xapi::Diagnostic;

#[derive(Args)]
pub struct SharedArgs {
    /// Input shader file
    pub input: PathBuf,
}

pub fn cmd_shared(args: SharedArgs) {
    let SharedArgs { input } = args;
    let source = match std::fs::read_to_string(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", input.display(), e);
            process::exit(1);
        }
    };

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let stripped = strip_comments(&source, &mut diagnostics);
    render_diagnostics(&diagnostics, &input.to_string_lossy());

    let vars = extract_shared_vars(&stripped);
    if vars.is_empty() {
        eprintln!("No shared variables in '{}'", input.display());
        return;
    }

    let ty_width = vars.iter().map(|v| v.ty.len()).max().unwrap_or(0);
    for (i, var) in vars.iter().enumerate() {
        println!("{:>3}  {:<ty_width$}  {}{}", i, var.ty, var.name, var.array.trim());
    }
    println!();
    print!("{}", shared_vars_suffix(&vars));
}
