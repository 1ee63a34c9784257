pub mod errors;

use std::time::Duration;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;
use crate::config::MailParameters;
use crate::manager_mail::errors::MailError;
use crate::manager_notify::errors::NotifyError;
use crate::manager_notify::{alert_message, Notifier, ALERT_TITLE};

pub struct Mail {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl Mail {
    /// Returns a new instance of the Mail struct
    ///
    /// # Arguments
    ///
    /// * 'config' - smtp relay, credentials and addresses
    pub fn new(config: &MailParameters) -> Result<Self, MailError> {
        let credentials = Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());

        let mailer = SmtpTransport::relay(&config.smtp_endpoint)?
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(30)))
            .build();

        Ok(
            Self {
                mailer,
                from: config.from.parse::<Mailbox>()?,
                to: config.to.parse::<Mailbox>()?,
            }
        )
    }

    /// Sends a mail with the given subject and body
    ///
    /// # Arguments
    ///
    /// * 'subject' - the subject of the mail
    /// * 'body' - the body of the mail
    pub fn send_mail(&self, subject: String, body: String) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.mailer.send(&email)?;
        info!("alert mail sent to {}", self.to);

        Ok(())
    }
}

impl Notifier for Mail {
    fn present(&self, amount_cm: f64) -> Result<(), NotifyError> {
        Ok(self.send_mail(ALERT_TITLE.to_string(), alert_message(amount_cm))?)
    }
}
