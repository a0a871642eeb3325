use basket_kernel::InvalidConfiguration;

/// Errors while producing basket markup.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error(transparent)]
    Config(#[from] InvalidConfiguration),

    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}
