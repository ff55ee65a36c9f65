//! Filename transforms
//!
//! Pure string/path helpers: suffix swapping, `BASE_flyN` parsing and the
//! `.~tmp` naming convention for in-progress writes. Nothing here touches disk;
//! the write-then-rename itself belongs to the caller.

use crate::error::ConfigError;
use crate::layout::names::stem_without_suffix;
use std::path::{Path, PathBuf};

/// Marker inserted before the final extension of an in-progress file
pub const TEMP_MARKER: &str = ".~tmp";

const FLY_MARKER: &str = "_fly";

/// Replace any known policy suffix of `filename` with `to_suffix`.
///
/// `"E_fly1_tracked.csv"` + `"_scored.csv"` -> `"E_fly1_scored.csv"`. Without a
/// known suffix the extension is dropped before appending.
pub fn swap_suffix(filename: &str, to_suffix: &str) -> String {
    format!("{}{}", stem_without_suffix(filename), to_suffix)
}

/// Split a `BASE_flyN` stem into `(BASE, Some(N))`.
///
/// The final extension is dropped first. Anything that does not end in
/// `_fly<integer>` comes back unchanged with `None`; this never fails.
pub fn parse_base_fly(stem: &str) -> (String, Option<i64>) {
    let s = Path::new(stem)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some((head, tail)) = s.rsplit_once(FLY_MARKER) {
        if let Ok(fly) = tail.parse::<i64>() {
            return (head.to_string(), Some(fly));
        }
    }
    (s, None)
}

/// Temp name for `final_path`: `a/b.csv` -> `a/b.~tmp.csv`, `a/b` -> `a/b.~tmp`
pub fn temp_path(final_path: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
    let path = final_path.as_ref();
    let name = path
        .file_name()
        .ok_or_else(|| ConfigError::NoFileName(path.to_path_buf()))?
        .to_string_lossy();

    let temp_name = match split_extension(&name) {
        Some((stem, ext)) => format!("{stem}{TEMP_MARKER}.{ext}"),
        None => format!("{name}{TEMP_MARKER}"),
    };
    Ok(path.with_file_name(temp_name))
}

/// Whether `path` follows the temp naming convention
pub fn is_temp_path(path: impl AsRef<Path>) -> bool {
    strip_temp_marker(path.as_ref()).is_some()
}

/// Final path of a temp file; non-temp paths come back unchanged
pub fn final_from_temp(temp: impl AsRef<Path>) -> PathBuf {
    let path = temp.as_ref();
    match strip_temp_marker(path) {
        Some(name) => path.with_file_name(name),
        None => path.to_path_buf(),
    }
}

fn strip_temp_marker(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();

    if let Some((stem, ext)) = split_extension(&name) {
        if let Some(original) = stem.strip_suffix(TEMP_MARKER) {
            return Some(format!("{original}.{ext}"));
        }
    }
    name.strip_suffix(TEMP_MARKER)
        .filter(|original| !original.is_empty())
        .map(str::to_string)
}

/// `(stem, extension)` split at the last dot. Leading-dot names and names
/// ending in a dot have no extension.
fn split_extension(name: &str) -> Option<(&str, &str)> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_suffix() {
        assert_eq!(swap_suffix("E_fly1_tracked.csv", "_scored.csv"), "E_fly1_scored.csv");
        assert_eq!(
            swap_suffix("/x/E_fly1_sleap.csv", "_pose.csv"),
            "E_fly1_pose.csv"
        );
        assert_eq!(swap_suffix("E_fly1.txt", "_pose.csv"), "E_fly1_pose.csv");
    }

    #[test]
    fn test_parse_base_fly() {
        assert_eq!(parse_base_fly("Exp1_fly3"), ("Exp1".to_string(), Some(3)));
        assert_eq!(parse_base_fly("Exp1"), ("Exp1".to_string(), None));
        assert_eq!(parse_base_fly("Exp_fly1_fly12"), ("Exp_fly1".to_string(), Some(12)));
    }

    #[test]
    fn test_parse_base_fly_signed_and_large() {
        assert_eq!(parse_base_fly("Exp1_fly-2"), ("Exp1".to_string(), Some(-2)));
        assert_eq!(
            parse_base_fly("Exp1_fly4294967296"),
            ("Exp1".to_string(), Some(4_294_967_296))
        );
        assert_eq!(parse_base_fly("Exp1_fly07.csv"), ("Exp1".to_string(), Some(7)));
    }

    #[test]
    fn test_parse_base_fly_malformed_tail() {
        assert_eq!(parse_base_fly("Exp1_flyX"), ("Exp1_flyX".to_string(), None));
        assert_eq!(parse_base_fly("Exp1_fly"), ("Exp1_fly".to_string(), None));
        // Only the extension is dropped, so a policy suffix leaves a non-numeric tail.
        assert_eq!(
            parse_base_fly("Exp1_fly12_tracked.csv"),
            ("Exp1_fly12_tracked".to_string(), None)
        );
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(temp_path("a/b.csv").unwrap(), PathBuf::from("a/b.~tmp.csv"));
        assert_eq!(temp_path("a/b").unwrap(), PathBuf::from("a/b.~tmp"));
        assert_eq!(temp_path("a/b.tar.gz").unwrap(), PathBuf::from("a/b.tar.~tmp.gz"));
        assert!(matches!(temp_path("/"), Err(ConfigError::NoFileName(_))));
    }

    #[test]
    fn test_temp_round_trip() {
        for p in [
            "a/b.csv",
            "a/b",
            "/abs/E_fly1_tracked.csv",
            ".hidden",
            "b.",
            "b.~tmp",
            "a/b.~tmp.csv",
            "REPORT_ERROR.csv",
        ] {
            let temp = temp_path(p).unwrap();
            assert!(is_temp_path(&temp), "{}", temp.display());
            assert_eq!(final_from_temp(&temp), PathBuf::from(p), "{p}");
        }
    }

    #[test]
    fn test_non_temp_paths() {
        for p in ["a/b.csv", "a/b", "E_fly1_tracked.csv", "tmp.csv", "x.tmp"] {
            assert!(!is_temp_path(p), "{p}");
            assert_eq!(final_from_temp(p), PathBuf::from(p));
        }
    }
}
