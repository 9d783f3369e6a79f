use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{FormatError, NotifierError};

/// Exact number of characters in a webhook credential.
pub const CREDENTIAL_LENGTH: usize = 44;

const FIRST_SEPARATOR: usize = 9;
const SECOND_SEPARATOR: usize = 19;

/// The secret path segment of a Slack incoming webhook,
/// shaped like `TXXXXXXXX/BXXXXXXXX/<token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validate a raw credential string.
    ///
    /// Length is checked first, then the separator at index 9, then the one
    /// at index 19. Positions count characters, not bytes.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let chars: Vec<char> = raw.chars().collect();

        if chars.len() != CREDENTIAL_LENGTH {
            return Err(FormatError::BadLength { len: chars.len() });
        }
        if chars[FIRST_SEPARATOR] != '/' {
            return Err(FormatError::FirstSeparator);
        }
        if chars[SECOND_SEPARATOR] != '/' {
            return Err(FormatError::SecondSeparator);
        }

        Ok(Self(raw.to_owned()))
    }

    /// Read and validate the credential stored on the first line of `path`.
    pub fn load(path: &Path) -> Result<Self, NotifierError> {
        if !path.is_file() {
            return Err(NotifierError::MissingCredentials {
                path: path.to_path_buf(),
            });
        }

        let io_err = |source| NotifierError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut line = String::new();
        BufReader::new(File::open(path).map_err(io_err)?)
            .read_line(&mut line)
            .map_err(io_err)?;

        let credential = Self::parse(line.trim_end()).map_err(|source| NotifierError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded webhook credentials");
        Ok(credential)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Credential {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Only the workspace/channel prefix is shown; the token stays out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(SECOND_SEPARATOR + 1).collect();
        write!(f, "Credential({prefix}***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = "T00000000/B11111111/abcdefghijklmnopqrstuvwx";

    fn write_credentials(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn accepts_well_formed_credential() {
        let credential = Credential::parse(VALID).unwrap();
        assert_eq!(credential.as_str(), VALID);
        assert_eq!(VALID.parse::<Credential>().unwrap(), credential);
    }

    #[test]
    fn rejects_wrong_lengths() {
        for raw in ["", "T00000000/B11111111/", format!("{VALID}x").as_str(), &VALID[..43]] {
            assert_matches!(
                Credential::parse(raw),
                Err(FormatError::BadLength { len }) if len == raw.chars().count()
            );
        }
    }

    #[test]
    fn rejects_misplaced_first_separator() {
        let raw = "T000000000B11111111/abcdefghijklmnopqrstuvwx";
        assert_eq!(raw.len(), CREDENTIAL_LENGTH);
        assert_eq!(Credential::parse(raw), Err(FormatError::FirstSeparator));
    }

    #[test]
    fn rejects_misplaced_second_separator() {
        let raw = "T00000000/B111111111abcdefghijklmnopqrstuvwx";
        assert_eq!(raw.len(), CREDENTIAL_LENGTH);
        assert_eq!(Credential::parse(raw), Err(FormatError::SecondSeparator));
    }

    #[test]
    fn length_is_checked_before_separators() {
        // Both separators are missing too, but length wins.
        assert_matches!(
            Credential::parse("no slashes here"),
            Err(FormatError::BadLength { len: 15 })
        );
        // With both separators wrong the first one is reported.
        let raw = "x".repeat(CREDENTIAL_LENGTH);
        assert_eq!(Credential::parse(&raw), Err(FormatError::FirstSeparator));
    }

    #[test]
    fn length_counts_characters() {
        // 44 characters but more than 44 bytes.
        let raw = "T00000000/B11111111/ééééééééééééééééééééééé!";
        assert_eq!(raw.chars().count(), CREDENTIAL_LENGTH);
        assert!(Credential::parse(raw).is_ok());
    }

    #[test]
    fn load_reads_first_line_only() {
        let file = write_credentials(&format!("{VALID}\nsecond line\n"));
        let credential = Credential::load(file.path()).unwrap();
        assert_eq!(credential.as_str(), VALID);
    }

    #[test]
    fn load_strips_trailing_whitespace() {
        let file = write_credentials(&format!("{VALID}  \r\n"));
        assert_eq!(Credential::load(file.path()).unwrap().as_str(), VALID);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slack.credentials");
        assert_matches!(
            Credential::load(&path),
            Err(NotifierError::MissingCredentials { path: p }) if p == path
        );
    }

    #[test]
    fn load_directory_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            Credential::load(dir.path()),
            Err(NotifierError::MissingCredentials { .. })
        );
    }

    #[test]
    fn load_empty_file_is_bad_length() {
        let file = write_credentials("");
        let err = Credential::load(file.path()).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::BadLength { len: 0 }));
    }

    #[test]
    fn load_non_utf8_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd, b'\n']).unwrap();
        assert_matches!(
            Credential::load(file.path()),
            Err(NotifierError::Io { path, .. }) if path == file.path()
        );
    }

    #[test]
    fn debug_hides_token() {
        let credential = Credential::parse(VALID).unwrap();
        let shown = format!("{credential:?}");
        assert_eq!(shown, "Credential(T00000000/B11111111/***)");
        assert!(!shown.contains("abcdef"));
    }
}
