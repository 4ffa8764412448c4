use std::error;
use std::fmt;
use std::path::Path;
use std::process::ExitStatus;

use axum_server::tls_rustls::RustlsConfig;
use tokio::process::Command;

pub const CERT_FILE: &str = "./cert.pem";
pub const KEY_FILE: &str = "./key.pem";

#[derive(Debug)]
pub enum TlsSetupError {
    Io(std::io::Error),
    OpensslFailed(ExitStatus),
    CertGeneration(rcgen::Error),
}

impl error::Error for TlsSetupError {}

impl fmt::Display for TlsSetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TlsSetupError::Io(e) => write!(f, "TLS setup io error: {}", e),
            TlsSetupError::OpensslFailed(status) => {
                write!(f, "openssl exited with {}", status)
            }
            TlsSetupError::CertGeneration(e) => {
                write!(f, "certificate generation error: {}", e)
            }
        }
    }
}

impl From<std::io::Error> for TlsSetupError {
    fn from(e: std::io::Error) -> Self {
        TlsSetupError::Io(e)
    }
}

impl From<rcgen::Error> for TlsSetupError {
    fn from(e: rcgen::Error) -> Self {
        TlsSetupError::CertGeneration(e)
    }
}

/// Loads `cert.pem`/`key.pem`, invoking the `openssl` binary to create them
/// first when either is missing.
pub async fn openssl_config() -> Result<RustlsConfig, TlsSetupError> {
    if !(Path::new(CERT_FILE).exists() && Path::new(KEY_FILE).exists()) {
        log::info!("Creating self-signed certificate via openssl...");
        let status = Command::new("openssl")
            .args([
                "req",
                "-x509",
                "-newkey",
                "rsa:4096",
                "-keyout",
                KEY_FILE,
                "-out",
                CERT_FILE,
                "-days",
                "365",
                "-nodes",
                "-subj",
                "/C=IN/ST=Uttarakhand/L=Dehradun/O=NurseTracker/CN=localhost",
            ])
            .status()
            .await?;

        if !status.success() {
            return Err(TlsSetupError::OpensslFailed(status));
        }
    }

    Ok(RustlsConfig::from_pem_file(CERT_FILE, KEY_FILE).await?)
}

/// Self-signed certificate generated in-process. Good enough for local
/// testing; browsers will still warn about the unknown issuer.
pub async fn generated_config() -> Result<RustlsConfig, TlsSetupError> {
    let certified = rcgen::generate_simple_self_signed(vec![
        "localhost".to_owned(),
        "127.0.0.1".to_owned(),
    ])?;

    let cert_pem = certified.cert.pem();
    let key_pem = certified.key_pair.serialize_pem();

    Ok(RustlsConfig::from_pem(cert_pem.into_bytes(), key_pem.into_bytes()).await?)
}
