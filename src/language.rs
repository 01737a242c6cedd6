/// Extension (without the leading dot, lowercased) to language-label table.
///
/// Order is irrelevant here since extensions are unique; kept alphabet-ish by
/// family for readability.
const LANGUAGE_MAP: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("jsx", "javascript"),
    ("tsx", "typescript"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("go", "go"),
    ("rs", "rust"),
    ("php", "php"),
    ("rb", "ruby"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("scala", "scala"),
    ("r", "r"),
    ("m", "matlab"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("zsh", "zsh"),
    ("fish", "fish"),
    ("ps1", "powershell"),
    ("bat", "batch"),
    ("cmd", "batch"),
    ("sql", "sql"),
    ("html", "html"),
    ("css", "css"),
    ("scss", "scss"),
    ("sass", "sass"),
    ("less", "less"),
    ("xml", "xml"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("toml", "toml"),
    ("ini", "ini"),
    ("cfg", "ini"),
    ("conf", "ini"),
    ("md", "markdown"),
    ("rst", "restructuredtext"),
    ("txt", "text"),
    ("log", "log"),
];

/// Map a file extension (with or without a leading dot) to a language label.
///
/// Unknown or missing extensions map to `"unknown"`.
#[must_use]
pub fn from_extension(extension: &str) -> &'static str {
    let ext = extension.trim_start_matches('.').to_lowercase();
    LANGUAGE_MAP
        .iter()
        .find(|(e, _)| *e == ext)
        .map_or("unknown", |(_, lang)| lang)
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
