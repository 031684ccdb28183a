use regex::Regex;

/// A file name split at its last dot.
///
/// Dotfiles are no exception: `.bashrc` has an empty base name and the
/// extension `bashrc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub base: &'a str,
    pub extension: Option<&'a str>,
}

impl<'a> NameParts<'a> {
    pub fn split(name: &'a str) -> Self {
        match name.rfind('.') {
            None => Self {
                base: name,
                extension: None,
            },
            Some(idx) => Self {
                base: &name[..idx],
                extension: Some(&name[idx + 1..]),
            },
        }
    }

    /// Put a base name and an optional extension back together
    pub fn join(base: &str, extension: Option<&str>) -> String {
        match extension {
            Some(ext) => format!("{}.{}", base, ext),
            None => base.to_string(),
        }
    }
}

/// Result of applying the pattern to one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The base name does not match
    NoMatch,
    /// The substitution produced the same name
    Unchanged,
    /// The substitution left nothing usable of the name
    Blank,
    Renamed(String),
}

/// Replace every match of `pattern` in the base name of `name`.
///
/// The extension is never touched. With `skip_if_blank`, a base name that
/// ends up empty or whitespace only yields [`Substitution::Blank`]; an empty
/// full name is always blank.
pub fn substitute(
    name: &str,
    pattern: &Regex,
    replacement: &str,
    skip_if_blank: bool,
) -> Substitution {
    let parts = NameParts::split(name);

    if !pattern.is_match(parts.base) {
        return Substitution::NoMatch;
    }

    let new_base = pattern.replace_all(parts.base, replacement);

    if skip_if_blank && new_base.trim().is_empty() {
        return Substitution::Blank;
    }

    let new_name = NameParts::join(&new_base, parts.extension);

    if new_name.is_empty() {
        return Substitution::Blank;
    }

    if new_name == name {
        return Substitution::Unchanged;
    }

    Substitution::Renamed(new_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_split_with_extension() {
        let parts = NameParts::split("report.final.pdf");
        assert_eq!(parts.base, "report.final");
        assert_eq!(parts.extension, Some("pdf"));
    }

    #[test]
    fn test_split_without_extension() {
        let parts = NameParts::split("Makefile");
        assert_eq!(parts.base, "Makefile");
        assert_eq!(parts.extension, None);
    }

    #[test]
    fn test_split_dotfile() {
        let parts = NameParts::split(".bashrc");
        assert_eq!(parts.base, "");
        assert_eq!(parts.extension, Some("bashrc"));
    }

    #[test]
    fn test_dotfile_extension_is_not_matched() {
        assert_eq!(
            substitute(".hidden1", &re("1"), "", true),
            Substitution::NoMatch
        );
        assert_eq!(
            substitute(".config.old1", &re("1"), "", true),
            Substitution::NoMatch
        );
        assert_eq!(
            substitute("1.hidden", &re("1"), "x", true),
            Substitution::Renamed("x.hidden".to_string())
        );
    }

    #[test]
    fn test_split_trailing_dot() {
        let parts = NameParts::split("notes.");
        assert_eq!(parts.base, "notes");
        assert_eq!(parts.extension, Some(""));
        assert_eq!(NameParts::join(parts.base, parts.extension), "notes.");
    }

    #[test]
    fn test_substitute_digits() {
        assert_eq!(
            substitute("1t2e3s4t5.txt", &re("[0-9]"), "_", true),
            Substitution::Renamed("_t_e_s_t_.txt".to_string())
        );
    }

    #[test]
    fn test_extension_is_not_rewritten() {
        assert_eq!(
            substitute("mp3.mp3", &re("mp3"), "song", true),
            Substitution::Renamed("song.mp3".to_string())
        );
    }

    #[test]
    fn test_no_trailing_dot_without_extension() {
        assert_eq!(
            substitute("README1", &re("1"), "", true),
            Substitution::Renamed("README".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            substitute("report.pdf", &re("xyz"), "", true),
            Substitution::NoMatch
        );
    }

    #[test]
    fn test_unchanged() {
        assert_eq!(
            substitute("abc.txt", &re("b"), "b", true),
            Substitution::Unchanged
        );
    }

    #[test]
    fn test_capture_groups() {
        assert_eq!(
            substitute("IMG_2024.jpg", &re(r"IMG_(\d+)"), "photo-${1}", true),
            Substitution::Renamed("photo-2024.jpg".to_string())
        );
    }

    #[test]
    fn test_blank_guard() {
        assert_eq!(
            substitute("2024.txt", &re(r"\d"), "", true),
            Substitution::Blank
        );
        assert_eq!(
            substitute("2024.txt", &re(r"\d"), " ", true),
            Substitution::Blank
        );
    }

    #[test]
    fn test_blank_allowed() {
        assert_eq!(
            substitute("2024.txt", &re(r"\d"), "", false),
            Substitution::Renamed(".txt".to_string())
        );
    }

    #[test]
    fn test_empty_name_is_always_blank() {
        assert_eq!(
            substitute("2024", &re(r"\d"), "", false),
            Substitution::Blank
        );
    }
}
