/*!
 * Language detection and comment stripping
 *
 * Comment removal is a textual transform, not a parser: the regexes have no
 * awareness of string or character literals, so a comment delimiter embedded
 * inside a string literal is stripped along with real comments. This is an
 * accepted limitation of the tool.
 */

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Fence tag used for files with an unrecognized extension
pub const PLAINTEXT: &str = "plaintext";

/// File extension (without the dot) to Markdown fence language tag
static EXT_TO_LANG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("js", "javascript"),
        ("ts", "typescript"),
        ("svelte", "svelte"),
        ("html", "html"),
        ("css", "css"),
        ("json", "json"),
        ("md", "markdown"),
        ("py", "python"),
        ("env", "env"),
    ])
});

/// Language tag to compiled comment pattern, built once at first use
static COMMENT_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    [
        ("javascript", r"//.*|/\*[\s\S]*?\*/"),
        ("typescript", r"//.*|/\*[\s\S]*?\*/"),
        // Svelte markup uses HTML comments
        ("svelte", r"<!--[\s\S]*?-->"),
        ("html", r"<!--[\s\S]*?-->"),
        ("css", r"/\*[\s\S]*?\*/"),
        ("python", r"#.*"),
        ("env", r"#.*"),
    ]
    .into_iter()
    .map(|(lang, pattern)| (lang, Regex::new(pattern).expect("invalid comment pattern")))
    .collect()
});

/// Infer the fence language tag for a file from its extension.
///
/// Note that a file named exactly `.env` has no extension and therefore
/// falls back to [`PLAINTEXT`]; the `env` tag applies to `*.env` files.
pub fn language_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| EXT_TO_LANG.get(ext).copied())
        .unwrap_or(PLAINTEXT)
}

/// Remove every non-overlapping comment match for the given language.
///
/// Languages without a known comment pattern pass through unchanged.
pub fn strip_comments<'a>(content: &'a str, language: &str) -> Cow<'a, str> {
    match COMMENT_PATTERNS.get(language) {
        Some(pattern) => pattern.replace_all(content, ""),
        None => Cow::Borrowed(content),
    }
}
