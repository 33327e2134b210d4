use newton_cotes::InvalidArgument;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("could not read run config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse run config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
