use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid navigation config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate navigation id {id} (entries \"{first}\" and \"{second}\")")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },
}
