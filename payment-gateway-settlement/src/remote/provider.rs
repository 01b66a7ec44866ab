use async_trait::async_trait;
use payment_gateway_api::{
    PaymentRequest, PaymentResponse, SettlementError, SettlementOutcome, SettlementProvider,
};
use reqwest::{Client, Identity, Response};
use rust_decimal::Decimal;
use tracing::instrument;

use super::config::RemoteBankConfig;
use super::wire::{BoletoRequest, BoletoResponse, TokenRequest, TokenResponse, BOLETO_PATH, TOKEN_PATH};

/// Issues bank slips through the bank's OAuth2 + mTLS API.
///
/// The client certificate is read from disk and a fresh HTTP client is built on
/// every call, so a rotated certificate is picked up without a restart. Tokens
/// are not cached.
pub struct RemoteBankProvider {
    config: RemoteBankConfig,
}

impl RemoteBankProvider {
    pub fn new(config: RemoteBankConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RemoteBankConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn load_identity(&self) -> Result<Identity, SettlementError> {
        let mut pem = std::fs::read(&self.config.certificate_path).map_err(|e| {
            SettlementError::Certificate(format!(
                "{}: {e}",
                self.config.certificate_path.display()
            ))
        })?;
        let key = std::fs::read(&self.config.key_path).map_err(|e| {
            SettlementError::Certificate(format!("{}: {e}", self.config.key_path.display()))
        })?;
        pem.push(b'\n');
        pem.extend_from_slice(&key);

        Identity::from_pem(&pem).map_err(|e| SettlementError::Certificate(e.to_string()))
    }

    fn build_client(&self) -> Result<Client, SettlementError> {
        let identity = self.load_identity()?;
        Client::builder()
            .identity(identity)
            .timeout(self.config.timeout)
            .connect_timeout(self.config.timeout)
            .build()
            .map_err(|e| SettlementError::Certificate(format!("failed to build HTTP client: {e}")))
    }

    fn map_send_error(endpoint: &str, err: reqwest::Error) -> SettlementError {
        if err.is_timeout() {
            SettlementError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            SettlementError::Transport {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        }
    }

    async fn read_body(endpoint: &str, response: Response) -> Result<String, SettlementError> {
        response
            .text()
            .await
            .map_err(|e| Self::map_send_error(endpoint, e))
    }

    #[instrument(skip(self, client), err)]
    async fn fetch_token(&self, client: &Client) -> Result<String, SettlementError> {
        let endpoint = self.endpoint(TOKEN_PATH);
        let form = TokenRequest::client_credentials(&self.config.client_id, &self.config.client_secret);

        let response = client
            .post(&endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&endpoint, e))?;

        let status = response.status();
        let body = Self::read_body(&endpoint, response).await?;
        tracing::debug!(status = status.as_u16(), "token response received");

        if status.as_u16() >= 400 {
            tracing::warn!(status = status.as_u16(), "token request failed");
            return Err(SettlementError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SettlementError::Decode {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(token_type = %token.token_type, expires_in = token.expires_in, "access token obtained");

        Ok(token.access_token)
    }

    #[instrument(skip(self, client, token, boleto), fields(reference = %boleto.seu_numero), err)]
    async fn issue_boleto(
        &self,
        client: &Client,
        token: &str,
        boleto: &BoletoRequest,
    ) -> Result<BoletoResponse, SettlementError> {
        let endpoint = self.endpoint(BOLETO_PATH);

        let response = client
            .post(&endpoint)
            .bearer_auth(token)
            .json(boleto)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&endpoint, e))?;

        let status = response.status();
        let body = Self::read_body(&endpoint, response).await?;
        tracing::debug!(status = status.as_u16(), %body, "issuance response received");

        if status.as_u16() >= 400 {
            tracing::error!(status = status.as_u16(), "boleto issuance failed");
            return Err(SettlementError::Upstream {
                reference: boleto.seu_numero.clone(),
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(BoletoResponse {
                codigo_solicitacao: None,
            });
        }
        serde_json::from_str(&body).map_err(|e| SettlementError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl SettlementProvider for RemoteBankProvider {
    #[instrument(skip(self, request), fields(reference = ?request.reference))]
    async fn create_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentResponse, SettlementError> {
        if request.amount <= Decimal::ZERO {
            return Err(SettlementError::InvalidRequest(
                "amount must be greater than zero".to_string(),
            ));
        }
        let boleto = BoletoRequest::from_payment_request(&request)?;

        let client = self.build_client()?;
        let token = self.fetch_token(&client).await?;
        let created = self.issue_boleto(&client, &token, &boleto).await?;

        let id = match created.codigo_solicitacao {
            Some(code) => code,
            None => {
                tracing::warn!("issuance response carried no request code, using reference");
                boleto.seu_numero.clone()
            }
        };
        tracing::info!(%id, "boleto issued");

        Ok(PaymentResponse {
            id,
            status: SettlementOutcome::Pending,
            redirect_url: None,
            document_url: None,
        })
    }
}
