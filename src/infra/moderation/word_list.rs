use crate::core::moderation::StoreError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the banned-word list: a JSON array of lowercase strings.
///
/// An absent file just means an empty blocklist. A file that exists but does
/// not parse is an error; main treats that as fatal so a typo in the file is
/// noticed instead of running with no filter.
pub fn load_bad_words(path: impl AsRef<Path>) -> Result<Vec<String>, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_empty_list() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_owned();
        drop(tmp);

        assert!(load_bad_words(path).unwrap().is_empty());
    }

    #[test]
    fn test_loads_json_array() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"["spamword", "badword"]"#).unwrap();

        let words = load_bad_words(tmp.path()).unwrap();
        assert_eq!(words, vec!["spamword", "badword"]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "not json at all").unwrap();

        assert!(load_bad_words(tmp.path()).is_err());
    }
}
