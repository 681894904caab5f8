/*!
 * Inclusion and exclusion rules for the file scanner
 *
 * Exact-name matching and glob matching are kept as two separate strategies
 * ([`NameSet`] and [`PatternSet`]) so the filter precedence rules stay
 * auditable: exclude patterns beat the blacklist, which beats the whitelist.
 *
 * Globs use fnmatch semantics: `*` and `?` are not path-aware and match `/`
 * too, so a bare `*.py` exclude rejects nested files like `sub/a.py`.
 */

use std::collections::HashSet;

use regex::Regex;
use walkdir::DirEntry;

/// Directory names that are never descended into
pub const DEFAULT_PRUNED_DIRS: &[&str] = &[
    "node_modules",
    "archive",
    ".git",
    ".vscode",
    ".appwrite",
    "static",
    ".svelte-kit",
];

/// Default glob patterns a file name must match to be included
pub const DEFAULT_WHITELIST: &[&str] = &[
    "*.js", "*.ts", "*.svelte", "*.html", "*.css", "*.json", "*.md", "*.py", "*.env",
];

/// Default exact file names that are always excluded
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    ".DS_Store",
    ".prettierrc.json",
    ".prettierignore",
    "tsconfig.json",
    "README.md",
    ".gitignore",
    "code_prompt",
];

/// A set of exact file names, matched by equality
#[derive(Debug, Clone, Default)]
pub struct NameSet(HashSet<String>);

impl NameSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A set of shell-glob patterns (`*`, `?`, character classes), each compiled
/// to an anchored regex at construction
#[derive(Debug, Clone, Default)]
pub struct PatternSet(Vec<Regex>);

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            patterns
                .into_iter()
                .map(|pattern| compile_glob(pattern.as_ref()))
                .collect(),
        )
    }

    /// True if any pattern in the set matches the whole of the given text
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|pattern| pattern.is_match(text))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Translate one glob pattern into an anchored regex, fnmatch-style: `*`
/// matches any run of characters including `/`, `?` matches one character,
/// `[...]` and `[!...]` are character classes, everything else is literal.
/// An unclosed `[` matches itself.
fn compile_glob(pattern: &str) -> Regex {
    let chars: Vec<char> = pattern.chars().collect();
    let mut re = String::from("(?s)^");
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '[' => {
                // Find the closing bracket; `]` directly after `[` or `[!`
                // is part of the class
                let mut j = i;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    re.push_str(r"\[");
                    continue;
                }
                re.push('[');
                if chars[i] == '!' {
                    re.push('^');
                    i += 1;
                } else if chars[i] == '^' {
                    re.push_str(r"\^");
                    i += 1;
                }
                for &cc in &chars[i..j] {
                    match cc {
                        '\\' | '[' | ']' | '&' => {
                            re.push('\\');
                            re.push(cc);
                        }
                        _ => re.push(cc),
                    }
                }
                re.push(']');
                i = j + 1;
            }
            _ => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');

    // A malformed class (e.g. a reversed range) falls back to a literal match
    Regex::new(&re).unwrap_or_else(|_| {
        Regex::new(&format!("^{}$", regex::escape(pattern)))
            .expect("escaped literal is a valid regex")
    })
}

/// Immutable rule set consulted for every directory and file during traversal
#[derive(Debug, Clone)]
pub struct FilterRules {
    /// Directory names pruned before descent
    pub pruned_dirs: HashSet<String>,
    /// Exact file names to reject
    pub blacklist: NameSet,
    /// File-name globs a file must match (empty = no restriction)
    pub whitelist: PatternSet,
    /// Ad-hoc globs checked against both relative and absolute paths
    pub exclude: PatternSet,
}

impl FilterRules {
    /// Build the rule set from CLI overrides.
    ///
    /// An empty whitelist or blacklist override means "use the defaults";
    /// a non-empty override replaces the corresponding default set entirely.
    pub fn new(exclude: &[String], whitelist: &[String], blacklist: &[String]) -> Self {
        let whitelist = if whitelist.is_empty() {
            PatternSet::new(DEFAULT_WHITELIST.iter().copied())
        } else {
            PatternSet::new(whitelist.iter().cloned())
        };
        let blacklist = if blacklist.is_empty() {
            NameSet::new(DEFAULT_BLACKLIST.iter().copied())
        } else {
            NameSet::new(blacklist.iter().cloned())
        };

        Self {
            pruned_dirs: DEFAULT_PRUNED_DIRS.iter().map(|s| s.to_string()).collect(),
            blacklist,
            whitelist,
            exclude: PatternSet::new(exclude.iter().cloned()),
        }
    }

    /// Whether a subdirectory with this name should be pruned from traversal
    pub fn prune_dir(&self, name: &str) -> bool {
        self.pruned_dirs.contains(name) || name.starts_with('.')
    }

    /// Traversal predicate for `walkdir::IntoIter::filter_entry`.
    ///
    /// Only directories are pruned here; file-level decisions go through
    /// [`FilterRules::accept_file`]. The scan root (depth 0) is never pruned.
    pub fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        !self.prune_dir(&entry.file_name().to_string_lossy())
    }

    /// Decide whether a file is included, in fixed precedence order:
    /// exclude patterns, then blacklist names, then the whitelist.
    pub fn accept_file(&self, rel_path: &str, abs_path: &str, file_name: &str) -> bool {
        if self.exclude.matches(rel_path) || self.exclude.matches(abs_path) {
            return false;
        }
        if self.blacklist.contains(file_name) {
            return false;
        }
        if !self.whitelist.is_empty() && !self.whitelist.matches(file_name) {
            return false;
        }
        true
    }
}
