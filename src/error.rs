use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("STDIO error: {}", .0)]
    Io(#[from] std::io::Error),

    #[error("Input was closed.")]
    InputClosed,

    #[error("IO error with seed notes file at path `{}`: {}", .path, .original)]
    SeedFile {
        path: String,
        original: std::io::Error,
    },

    #[error("Error reading seed notes file at `{}`: {}", .path, .original)]
    Yaml {
        path: String,
        original: serde_yaml::Error,
    },
}

impl Error {
    pub fn seed_file_error(path: String, original: std::io::Error) -> Self {
        Self::SeedFile { path, original }
    }

    pub fn yaml_error(path: String, original: serde_yaml::Error) -> Self {
        Self::Yaml { path, original }
    }
}
