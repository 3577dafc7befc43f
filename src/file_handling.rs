//! Loading seed notes from YAML.
//!
//! A seed file is a list of title/body pairs:
//!
//! ```yaml
//! - title: "Groceries"
//!   body: "eggs, milk"
//! - title: "Call"
//!   body: "the dentist"
//! ```

use std::fs::File;

use log::debug;

use crate::error::{Error, Result};
use crate::note::NoteSeed;

fn get_reader(path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::seed_file_error(path.to_string(), e))
}

/// Reads seed notes from the YAML file at `seed_path`, keeping file order.
///
/// An empty list is allowed and gives a session with no notes.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not contain a list of
/// `title`/`body` entries.
pub fn get_seed_notes(seed_path: &str) -> Result<Vec<NoteSeed>> {
    let reader = get_reader(seed_path)?;

    // This can't be shortcut with ? as the serde error needs the path attached
    let parsing_result: serde_yaml::Result<Vec<NoteSeed>> = serde_yaml::from_reader(reader);

    let seeds = parsing_result.map_err(|e| Error::yaml_error(seed_path.to_string(), e))?;
    debug!("Loaded {} seed notes from `{}`", seeds.len(), seed_path);

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_seed_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_get_seed_notes_valid_yaml() {
        let temp_file = write_seed_file(
            r#"
- title: "First"
  body: "one"
- title: ""
  body: "no title"
"#,
        );

        let seeds = get_seed_notes(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            seeds,
            vec![NoteSeed::new("First", "one"), NoteSeed::new("", "no title")]
        );
    }

    #[test]
    fn test_get_seed_notes_empty_list() {
        let temp_file = write_seed_file("[]");
        let seeds = get_seed_notes(temp_file.path().to_str().unwrap()).unwrap();
        assert!(seeds.is_empty());
    }

    #[test]
    fn test_get_seed_notes_missing_field() {
        let temp_file = write_seed_file("- title: \"only a title\"\n");
        let result = get_seed_notes(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_seed_notes_invalid_yaml() {
        let temp_file = write_seed_file("invalid: yaml: content: [");
        let result = get_seed_notes(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_seed_notes_file_not_found() {
        let result = get_seed_notes("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::SeedFile { .. })));
    }
}
