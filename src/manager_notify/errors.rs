use thiserror::Error;
use crate::manager_mail::errors::MailError;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("desktop notification error: {0}")]
    Desktop(String),
    #[error(transparent)]
    Mail(#[from] MailError),
}
