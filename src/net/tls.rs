//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

/// File name the private key is read from.
pub const KEY_FILE: &str = "private.key";
/// File name the certificate is read from.
pub const CERT_FILE: &str = "public.cert";

/// Load TLS credentials from the fixed file names inside `dir`.
///
/// Any missing or malformed file fails the load; there is no fallback
/// transport.
pub async fn load_credentials(dir: &Path) -> Result<RustlsConfig, std::io::Error> {
    let key_path = dir.join(KEY_FILE);
    let cert_path = dir.join(CERT_FILE);

    if !key_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Private key file not found: {}", key_path.display()),
        ));
    }
    if !cert_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Certificate file not found: {}", cert_path.display()),
        ));
    }

    // Reject key files that hold no PEM private key up front; the
    // resulting rustls error would otherwise point at the handshake.
    let mut reader = BufReader::new(File::open(&key_path)?);
    if rustls_pemfile::private_key(&mut reader)?.is_none() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("No private key found in {}", key_path.display()),
        ));
    }

    RustlsConfig::from_pem_file(cert_path, key_path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_credentials(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn key_file_without_a_key_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(KEY_FILE), "not a pem file").unwrap();
        std::fs::write(dir.path().join(CERT_FILE), "not a pem file").unwrap();
        let err = load_credentials(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn bundled_fixture_pair_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        assert!(load_credentials(&dir).await.is_ok());
    }
}
