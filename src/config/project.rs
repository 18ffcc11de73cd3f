use std::path::{Path, PathBuf};

use crate::diagnostic::Diagnostic;
use crate::preprocess::{LintSet, PreprocessOptions};

pub const CONFIG_FILE: &str = "glslx.toml";

const DEFAULT_EXTENSIONS: &[&str] = &["glsl"];

/// Settings from glslx.toml.
#[derive(Clone, Debug)]
pub struct Project {
    pub root_dir: PathBuf,
    pub options: PreprocessOptions,
    /// Treat every reported diagnostic as an error.
    pub warnings_as_errors: bool,
    /// File extensions picked up when walking a directory, without the dot.
    pub extensions: Vec<String>,
}

/// Entries of a one-line TOML string array. Basic (`"x"`) and literal (`'x'`)
/// strings are both accepted; anything that is not an array yields nothing.
fn parse_string_array(value: &str) -> Vec<String> {
    let Some(inner) = value
        .trim()
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
    else {
        return Vec::new();
    };
    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Diagnostic> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Diagnostic::error(format!(
            "'{}' in {} must be true or false, found '{}'",
            key, CONFIG_FILE, value
        ))),
    }
}

impl Project {
    /// Settings used when no glslx.toml is found: strict linting, `.glsl` only.
    pub fn defaults(root_dir: &Path) -> Project {
        Project {
            root_dir: root_dir.to_path_buf(),
            options: PreprocessOptions::strict(),
            warnings_as_errors: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Load settings from a glslx.toml file.
    pub fn load(toml_path: &Path) -> Result<Project, Diagnostic> {
        let content = std::fs::read_to_string(toml_path).map_err(|e| {
            Diagnostic::error(format!("cannot read '{}': {}", toml_path.display(), e))
        })?;
        let root_dir = toml_path.parent().unwrap_or(Path::new("."));
        Self::parse(&content, root_dir)
    }

    /// Parse glslx.toml content. Unknown sections and keys are ignored.
    pub fn parse(content: &str, root_dir: &Path) -> Result<Project, Diagnostic> {
        let mut project = Self::defaults(root_dir);
        let mut current_section = String::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') || trimmed.is_empty() {
                continue;
            }
            // Section headers: [preprocess], [sources]
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim().trim_matches('"');
            let value = value.trim();

            match (current_section.as_str(), key) {
                ("preprocess", "lint") => project.options.linting = parse_bool(key, value)?,
                ("preprocess", "string_mutation") => {
                    project.options.string_mutation = parse_bool(key, value)?
                }
                ("preprocess", "include_mutation") => {
                    project.options.include_mutation = parse_bool(key, value)?
                }
                ("preprocess", "warnings_as_errors") => {
                    project.warnings_as_errors = parse_bool(key, value)?
                }
                ("preprocess", "lints") => {
                    let mut lints = LintSet::NONE;
                    for name in parse_string_array(value) {
                        if !lints.enable(&name) {
                            return Err(Diagnostic::error(format!(
                                "unknown lint '{}' in {}",
                                name, CONFIG_FILE
                            )));
                        }
                    }
                    project.options.lints = lints;
                }
                ("sources", "extensions") => {
                    project.extensions = parse_string_array(value)
                        .into_iter()
                        .map(|e| e.trim_start_matches('.').to_string())
                        .collect();
                }
                _ => log::debug!("ignoring '{}' in [{}]", key, current_section),
            }
        }

        Ok(project)
    }

    /// Nearest [`CONFIG_FILE`] in `start_dir` or one of its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest glslx.toml above `start_dir`, or fall back to defaults.
    pub fn discover(start_dir: &Path) -> Result<Project, Diagnostic> {
        match Self::find(start_dir) {
            Some(path) => {
                log::debug!("using {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::defaults(start_dir)),
        }
    }

    /// Whether `path` has one of the configured shader extensions.
    pub fn is_shader_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_project() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join(CONFIG_FILE);
        fs::write(
            &toml_path,
            r#"# shader build settings
[preprocess]
lint = false
include_mutation = true
warnings_as_errors = true

[sources]
extensions = ["glsl", ".comp"]
"#,
        )
        .unwrap();

        let project = Project::load(&toml_path).unwrap();
        assert!(!project.options.linting);
        assert!(project.options.include_mutation);
        assert!(project.warnings_as_errors);
        assert_eq!(project.extensions, vec!["glsl", "comp"]);
        assert_eq!(project.root_dir, dir.path());
    }

    #[test]
    fn test_lint_list_replaces_defaults() {
        let project = Project::parse(
            "[preprocess]\nlints = [\"array-constructor\"]\n",
            Path::new("."),
        )
        .unwrap();
        assert!(project.options.linting);
        assert!(!project.options.lints.matrix_constructor);
        assert!(project.options.lints.array_constructor);
    }

    #[test]
    fn test_unknown_lint_rejected() {
        let err = Project::parse("[preprocess]\nlints = [\"swizzle\"]\n", Path::new("."))
            .unwrap_err();
        assert!(err.message.contains("unknown lint 'swizzle'"));
    }

    #[test]
    fn test_bad_bool_rejected() {
        let err = Project::parse("[preprocess]\nlint = yes\n", Path::new(".")).unwrap_err();
        assert!(err.message.contains("'lint'"));
    }

    #[test]
    fn test_keys_outside_section_ignored() {
        let project = Project::parse("lint = false\n[other]\nlint = false\n", Path::new("."))
            .unwrap();
        assert!(project.options.linting);
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shaders").join("compute");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[preprocess]\n").unwrap();

        let found = Project::find(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
        assert!(Project::discover(&nested).is_ok());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::discover(dir.path()).unwrap();
        assert!(project.options.linting);
        assert!(project.is_shader_file(Path::new("a.glsl")));
        assert!(!project.is_shader_file(Path::new("a.comp")));
    }

    #[test]
    fn test_parse_string_array() {
        assert_eq!(
            parse_string_array(r#"["a", "b", "c"]"#),
            vec!["a", "b", "c"]
        );
        assert_eq!(parse_string_array(r#"["single"]"#), vec!["single"]);
        assert!(parse_string_array("not_an_array").is_empty());
        assert_eq!(parse_string_array("['vert', \"frag\"]"), vec!["vert", "frag"]);
        assert!(parse_string_array("[]").is_empty());
    }

    #[test]
    fn test_find_ignores_directory_named_like_config() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shaders");
        fs::create_dir_all(nested.join(CONFIG_FILE)).unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[preprocess]\nlint = false\n").unwrap();

        assert_eq!(Project::find(&nested), Some(dir.path().join(CONFIG_FILE)));
        assert!(!Project::discover(&nested).unwrap().options.linting);
    }
}
