//! Collision-free filenames for copied icon assets.
//!
//! Every asset written into an archive's icon directory gets a normalized
//! filename, renamed with a numeric disambiguator when the directory already
//! holds a file of that name. Resolution is deterministic: for a fixed set of
//! pre-existing files and a fixed desired name, the result is always the
//! lowest available counter.

use std::path::Path;

/// Normalizes a desired filename for the archive.
///
/// Leading dots are stripped, each run of characters outside `[A-Za-z0-9@.]`
/// collapses to a single `-`, and the result is lowercased.
pub fn normalize(name: &str) -> String {
    let trimmed = name.trim_start_matches('.');
    let mut out = String::with_capacity(trimmed.len());
    let mut in_run = false;
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() || ch == '@' || ch == '.' {
            out.push(ch.to_ascii_lowercase());
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

/// Resolves a desired filename to one unused within `directory`.
///
/// The name is normalized first. If `directory/name` does not exist it is
/// returned unchanged; otherwise `stem.<n>.ext` is probed for n = 1, 2, 3, …
/// until an unused candidate is found. Names without an extension probe
/// `name.<n>`.
pub fn unique_filename(desired: &str, directory: &Path) -> String {
    let name = normalize(desired);
    if !directory.join(&name).exists() {
        return name;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name.as_str(), None),
    };

    let mut counter = 1u64;
    loop {
        let candidate = match ext {
            Some(ext) => format!("{stem}.{counter}.{ext}"),
            None => format!("{stem}.{counter}"),
        };
        if !directory.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Icon.PNG"), "icon.png");
    }

    #[test]
    fn test_normalize_strips_leading_dots() {
        assert_eq!(normalize("..hidden.svg"), "hidden.svg");
    }

    #[test]
    fn test_normalize_collapses_delimiter_runs() {
        assert_eq!(normalize("My Fancy  Icon.png"), "my-fancy-icon.png");
        assert_eq!(normalize("a/b\\c.png"), "a-b-c.png");
        assert_eq!(normalize("user@host.png"), "user@host.png");
    }

    #[test]
    fn test_unique_without_collision_returns_normalized_name() {
        let temp = tempfile::tempdir().expect("create temp dir");
        assert_eq!(unique_filename("Icon.png", temp.path()), "icon.png");
    }

    #[test]
    fn test_unique_probes_increasing_counters() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(temp.path().join("icon.png"), b"x").expect("write icon.png");

        assert_eq!(unique_filename("icon.png", temp.path()), "icon.1.png");

        fs::write(temp.path().join("icon.1.png"), b"x").expect("write icon.1.png");
        assert_eq!(unique_filename("icon.png", temp.path()), "icon.2.png");
    }

    #[test]
    fn test_unique_fills_gaps_with_lowest_counter() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(temp.path().join("icon.png"), b"x").expect("write icon.png");
        fs::write(temp.path().join("icon.2.png"), b"x").expect("write icon.2.png");

        assert_eq!(unique_filename("icon.png", temp.path()), "icon.1.png");
    }

    #[test]
    fn test_unique_without_extension() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(temp.path().join("readme"), b"x").expect("write readme");

        assert_eq!(unique_filename("README", temp.path()), "readme.1");
    }

    #[test]
    fn test_multi_dot_names_keep_full_stem() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(temp.path().join("logo.dark.png"), b"x").expect("write logo.dark.png");

        assert_eq!(unique_filename("logo.dark.png", temp.path()), "logo.dark.1.png");
    }
}
