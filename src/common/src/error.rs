use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// The console has no more input. Ends the program normally.
    #[error("console input closed")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
