//! Outbound mail transport using lettre

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use tracing::info;

use crate::config::EmailConfig;
use crate::error::TransportError;

/// Hands a finished message to the mail provider.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), TransportError>;
}

/// SMTP transport built once from configuration.
///
/// No connection pool: every send opens its own connection and closes it.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let builder = if config.smtp_secure {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP transport using implicit TLS"
            );
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else if config.has_credentials() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP transport using STARTTLS"
            );
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, unauthenticated connection with opportunistic STARTTLS (e.g., MailDev)"
            );
            let tls = TlsParameters::new(config.smtp_host.clone())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .tls(Tls::Opportunistic(tls))
        };

        let builder = builder.port(config.smtp_port);
        let builder = if config.has_credentials() {
            builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
        } else {
            builder
        };

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: Message) -> Result<(), TransportError> {
        self.mailer
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| TransportError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
        net::TcpListener,
    };

    fn ping() -> Message {
        Message::builder()
            .from("studio@example.com".parse().unwrap())
            .to("studio@example.com".parse().unwrap())
            .subject("ping")
            .body("ping".to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_builds_for_each_security_mode() {
        let mut config = EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            ..Default::default()
        };
        assert!(SmtpMailer::new(&config).is_ok());

        config.smtp_username = "studio@example.com".to_string();
        config.smtp_password = "secret".to_string();
        assert!(SmtpMailer::new(&config).is_ok());

        config.smtp_secure = true;
        config.smtp_port = 465;
        assert!(SmtpMailer::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_transport_error() {
        let config = EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1,
            ..Default::default()
        };
        let mailer = SmtpMailer::new(&config).unwrap();

        let err = mailer.send(ping()).await.unwrap_err();
        assert!(!err.0.is_empty());
    }

    #[tokio::test]
    async fn test_unauthenticated_transport_upgrades_when_offered() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        // Minimal SMTP peer: greets, offers STARTTLS, then reports the next command.
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read, mut write) = stream.into_split();
            let mut lines = BufReader::new(read).lines();

            write.write_all(b"220 localhost ESMTP\r\n").await.unwrap();
            let _ehlo = lines.next_line().await.unwrap();
            write
                .write_all(b"250-localhost\r\n250 STARTTLS\r\n")
                .await
                .unwrap();

            let command = lines.next_line().await.unwrap().unwrap_or_default();
            let _ = write.write_all(b"454 TLS not available\r\n").await;

            command
        });

        let config = EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: port,
            ..Default::default()
        };
        let mailer = SmtpMailer::new(&config).unwrap();
        let _ = mailer.send(ping()).await;

        assert_eq!(server.await.unwrap(), "STARTTLS");
    }
}
