use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SumbenchError {
    #[error("Iterations must be at least 1 (an average over zero repetitions is undefined)")]
    ZeroIterations,

    #[error("Array size {size} is too large (maximum {max})")]
    SizeTooLarge { size: usize, max: usize },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}
