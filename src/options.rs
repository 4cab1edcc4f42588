use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the generated artifact when none is configured.
pub const DEFAULT_OUTPUT: &str = "combined_code.txt";

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    ".venv",
    "env",
    ".env",
    "__pycache__",
    ".git",
    ".vscode",
    ".idea",
    "build",
    "dist",
    "target",
];

/// Extensions (dotted) and bare filenames eligible for inclusion.
pub const DEFAULT_INCLUDED_SELECTORS: &[&str] = &[
    // Python
    ".py",
    // Web
    ".html", ".css", ".js", ".jsx", ".ts", ".tsx", ".scss", ".json", ".xml", ".yaml", ".yml",
    // Markup and text
    ".md", ".markdown", ".txt", ".rst",
    // Config
    ".cfg", ".ini", ".toml",
    // C/C++
    ".c", ".h", ".cpp", ".hpp",
    // C#
    ".cs",
    // YankoviC
    ".yc", ".hat",
    // JVM
    ".java", ".gradle", ".properties",
    ".go",
    ".rs",
    ".rb",
    ".php",
    // Scripts
    ".sh", ".bat", ".ps1",
    ".sql",
    // Docker
    "Dockerfile", ".dockerignore",
];

pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["package-lock.json", "yarn.lock"];

/// Immutable configuration for one combine run.
///
/// Build it with [`CombineBuilder`] so the output name always ends up in
/// `excluded_files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOptions {
    pub root: PathBuf,
    /// Artifact location. Relative paths resolve against the working directory.
    pub output: PathBuf,
    pub excluded_dirs: BTreeSet<String>,
    /// Matched against both a file's extension and its full name.
    pub included_selectors: BTreeSet<String>,
    pub excluded_files: BTreeSet<String>,
}
impl Default for CombineOptions {
    fn default() -> Self {
        CombineBuilder::new(".").build()
    }
}
impl CombineOptions {
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_files.contains(name)
    }
    /// True when either the extension or the whole file name is a selector.
    pub fn is_selected(&self, file_name: &str) -> bool {
        extension_of(file_name).is_some_and(|ext| self.included_selectors.contains(ext))
            || self.included_selectors.contains(file_name)
    }
}

/// Returns the extension of a base name including its leading dot.
///
/// Leading dots are not extension separators, so `.bashrc` and `..` have
/// none while `archive.tar.gz` yields `.gz`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    let dot = file_name[stem_start..].rfind('.')? + stem_start;
    Some(&file_name[dot..])
}

fn to_set<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

#[derive(Debug)]
pub struct CombineBuilder {
    options: CombineOptions,
}
impl CombineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                root: root.into(),
                output: PathBuf::from(DEFAULT_OUTPUT),
                excluded_dirs: to_set(DEFAULT_EXCLUDED_DIRS.iter().copied()),
                included_selectors: to_set(DEFAULT_INCLUDED_SELECTORS.iter().copied()),
                excluded_files: to_set(DEFAULT_EXCLUDED_FILES.iter().copied()),
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    /// Replaces the excluded directory names.
    pub fn excluded_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.excluded_dirs = to_set(names);
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.options.excluded_dirs.insert(name.into());
        self
    }
    /// Replaces the selector set.
    pub fn included_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.included_selectors = to_set(selectors);
        self
    }
    pub fn include_selector(mut self, selector: impl Into<String>) -> Self {
        self.options.included_selectors.insert(selector.into());
        self
    }
    /// Replaces the excluded file names. The output name is re-added on build.
    pub fn excluded_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.excluded_files = to_set(names);
        self
    }
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.options.excluded_files.insert(name.into());
        self
    }
    pub fn build(mut self) -> CombineOptions {
        if let Some(name) = output_file_name(&self.options.output) {
            self.options.excluded_files.insert(name);
        }
        self.options
    }
}

fn output_file_name(output: &Path) -> Option<String> {
    output
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
}
