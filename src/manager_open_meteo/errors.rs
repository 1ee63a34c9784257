use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenMeteoError {
    #[error("http request error: {0}")]
    Request(String),
    #[error("json document error: {0}")]
    Document(String),
}

impl From<ureq::Error> for OpenMeteoError {
    fn from(e: ureq::Error) -> OpenMeteoError {
        OpenMeteoError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for OpenMeteoError {
    fn from(e: serde_json::Error) -> OpenMeteoError {
        OpenMeteoError::Document(e.to_string())
    }
}
