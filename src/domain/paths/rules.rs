//! Platform-specific path validity rules.
//!
//! Pure functions only; nothing here touches the filesystem. These tables
//! back every [`PathStrategy`](super::PathStrategy) variant.

/// Validity constraints for one platform flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRules {
    /// Canonical path separator.
    pub separator: char,
    /// Alternate separator accepted on input and rewritten by normalization.
    pub alt_separator: Option<char>,
    /// Characters forbidden in addition to control characters.
    pub extra_forbidden: &'static [char],
    /// Whether descendant checks compare case-insensitively.
    pub case_insensitive: bool,
}

/// Rules for Unix-style paths. Also used by the platform-agnostic strategy.
pub const UNIX_RULES: PlatformRules = PlatformRules {
    separator: '/',
    alt_separator: None,
    extra_forbidden: &[],
    case_insensitive: false,
};

/// Rules for Windows-style paths.
pub const WINDOWS_RULES: PlatformRules = PlatformRules {
    separator: '\\',
    alt_separator: Some('/'),
    extra_forbidden: &['<', '>', ':', '"', '|', '?', '*'],
    case_insensitive: true,
};

fn is_separator(c: char, rules: &PlatformRules) -> bool {
    c == rules.separator || rules.alt_separator == Some(c)
}

/// True if any separator-delimited segment equals `..`.
pub fn has_traversal_segment(path: &str, rules: &PlatformRules) -> bool {
    path.split(|c| is_separator(c, rules)).any(|segment| segment == "..")
}

/// True if the canonical separator appears doubled.
pub fn has_doubled_separator(path: &str, rules: &PlatformRules) -> bool {
    let doubled: String = [rules.separator, rules.separator].iter().collect();
    path.contains(&doubled)
}

/// First forbidden character in `path`, if any.
///
/// Control characters (0x00-0x1F) are forbidden everywhere; the platform
/// table may add more. The drive-colon in a Windows prefix like `C:` is
/// exempt from the forbidden set.
pub fn forbidden_character(path: &str, rules: &PlatformRules) -> Option<char> {
    for (index, c) in path.char_indices() {
        if c.is_control() {
            return Some(c);
        }
        if c == ':' && index == 1 && has_drive_prefix(path) {
            continue;
        }
        if rules.extra_forbidden.contains(&c) {
            return Some(c);
        }
    }
    None
}

/// Rewrite alternate separators to the canonical one and collapse runs of
/// the canonical separator. `..` segments pass through untouched.
pub fn canonicalize_separators(path: &str, rules: &PlatformRules) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for c in path.chars() {
        if is_separator(c, rules) {
            if !previous_was_separator {
                out.push(rules.separator);
            }
            previous_was_separator = true;
        } else {
            out.push(c);
            previous_was_separator = false;
        }
    }
    out
}

/// True if `path` is absolute under the given rules.
pub fn is_absolute(path: &str, rules: &PlatformRules) -> bool {
    match path.chars().next() {
        Some(c) if is_separator(c, rules) => true,
        Some(_) => rules.alt_separator.is_some() && has_drive_prefix(path),
        None => false,
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic()
    )
}
