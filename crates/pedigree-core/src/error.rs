pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Can't find a person with id: {id}")]
    NotFound { id: String },

    #[error("Invalid view configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid genealogical record: {message}")]
    InvalidRecord { message: String },

    #[error("Record JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
