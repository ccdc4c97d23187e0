//! Scheme downloads and print links.
//!
//! A term is downloaded as `<child>-<term>.json`. A print link carries the
//! same snapshot as a URL-safe base64 string so it can be handed to
//! `ks2 print --data`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

use ks2_core::scheme::PrintableScheme;

#[derive(Debug, Error)]
pub enum PrintLinkError {
    #[error("print data is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("print data is not a scheme snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// `<child>-<term>` with path separators in the name replaced, so the
/// result is always a single path component.
pub fn file_stem(scheme: &PrintableScheme) -> String {
    let name: String = scheme
        .child_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{}-{}", name, scheme.term)
}

/// File name offered for a downloaded term, e.g. `Ada-Term 1.json`.
pub fn download_file_name(scheme: &PrintableScheme) -> String {
    format!("{}.json", file_stem(scheme))
}

/// Write a term snapshot as pretty JSON into `dir`, returning the file path.
pub fn write_download(scheme: &PrintableScheme, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(download_file_name(scheme));
    let json = serde_json::to_string_pretty(scheme)?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "scheme download written");
    Ok(path)
}

/// Load a previously downloaded term snapshot.
pub fn load_download(path: &Path) -> Result<PrintableScheme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let scheme = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(scheme)
}

pub fn encode_print_param(scheme: &PrintableScheme) -> Result<String, PrintLinkError> {
    let json = serde_json::to_vec(scheme)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_print_param(data: &str) -> Result<PrintableScheme, PrintLinkError> {
    let bytes = URL_SAFE_NO_PAD.decode(data.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ks2_core::model::ChildProfile;
    use ks2_core::scheme::{generate, ScheduleConfig};

    fn make_scheme(name: &str) -> PrintableScheme {
        let profile = ChildProfile::new(name, "Year 6");
        let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let terms = generate(&profile, &ScheduleConfig::starting(start));
        PrintableScheme::new(&profile, &terms[1])
    }

    #[test]
    fn file_name_is_child_and_term() {
        assert_eq!(download_file_name(&make_scheme("Ada")), "Ada-Term 2.json");
        assert_eq!(download_file_name(&make_scheme("A/B")), "A-B-Term 2.json");
    }

    #[test]
    fn download_is_pretty_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let scheme = make_scheme("Ada");
        let path = write_download(&scheme, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("Ada-Term 2.json"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"childName\": \"Ada\""));
        assert_eq!(load_download(&path).unwrap(), scheme);
    }

    #[test]
    fn print_param_is_url_safe() {
        let scheme = make_scheme("Zoë & \"friends\"?");
        let encoded = encode_print_param(&scheme).unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(decode_print_param(&encoded).unwrap(), scheme);
    }

    #[test]
    fn bad_print_param_is_rejected() {
        assert!(matches!(
            decode_print_param("%%%"),
            Err(PrintLinkError::Encoding(_))
        ));
        let not_a_scheme = URL_SAFE_NO_PAD.encode(b"{\"weeks\": 3}");
        assert!(matches!(
            decode_print_param(&not_a_scheme),
            Err(PrintLinkError::Snapshot(_))
        ));
    }
}
