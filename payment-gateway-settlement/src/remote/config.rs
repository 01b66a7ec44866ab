use std::path::PathBuf;
use std::time::Duration;

pub const SANDBOX_BASE_URL: &str = "https://cdpj-sandbox.partners.uatinter.co";
pub const PRODUCTION_BASE_URL: &str = "https://cdpj.partners.bancointer.com.br";

pub const CERTIFICATE_FILE: &str = "Sandbox_InterAPI_Certificado.crt";
pub const KEY_FILE: &str = "Sandbox_InterAPI_Chave.key";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankEnvironment {
    Sandbox,
    Production,
}

impl BankEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            BankEnvironment::Sandbox => SANDBOX_BASE_URL,
            BankEnvironment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Everything the provider needs to reach the bank.
#[derive(Clone)]
pub struct RemoteBankConfig {
    /// Without trailing slash.
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub certificate_path: PathBuf,
    pub key_path: PathBuf,
    pub timeout: Duration,
}

impl RemoteBankConfig {
    /// Configuration for `environment`, with the certificate pair expected
    /// under `tls_path` and the default timeout.
    pub fn new(
        environment: BankEnvironment,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tls_path: impl Into<PathBuf>,
    ) -> Self {
        let tls_path = tls_path.into();
        Self {
            base_url: environment.base_url().to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            certificate_path: tls_path.join(CERTIFICATE_FILE),
            key_path: tls_path.join(KEY_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_certificate(mut self, certificate_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        self.certificate_path = certificate_path.into();
        self.key_path = key_path.into();
        self
    }
}

impl std::fmt::Debug for RemoteBankConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteBankConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("certificate_path", &self.certificate_path)
            .field("key_path", &self.key_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}
