//! Request and response bodies of the bank API.

use payment_gateway_api::{PaymentRequest, SettlementError};
use serde::{Deserialize, Serialize};

pub const TOKEN_PATH: &str = "/oauth/v2/token";
pub const BOLETO_PATH: &str = "/cobranca/v3/cobrancas";

/// Scope requested on every token exchange.
pub const TOKEN_SCOPE: &str = "cob.write cob.read cobv.write cobv.read lotecobv.write lotecobv.read pix.write pix.read webhook.write webhook.read payloadlocation.write payloadlocation.read boleto-cobranca.read boleto-cobranca.write extrato.read pagamento-pix.write pagamento-pix.read extrato-usend.read pagamento-boleto.read pagamento-boleto.write pagamento-darf.write pagamento-lote.write pagamento-lote.read webhook-banking.read webhook-banking.write";

pub const PERSON_TYPE_INDIVIDUAL: &str = "FISICA";
pub const SCHEDULE_DAYS: u32 = 60;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub scope: &'static str,
}

impl<'a> TokenRequest<'a> {
    pub fn client_credentials(client_id: &'a str, client_secret: &'a str) -> Self {
        Self {
            grant_type: "client_credentials",
            client_id,
            client_secret,
            scope: TOKEN_SCOPE,
        }
    }
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagador {
    pub cpf_cnpj: String,
    pub tipo_pessoa: String,
    pub nome: String,
    pub endereco: String,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
    pub bairro: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoRequest {
    pub seu_numero: String,
    pub valor_nominal: String,
    pub data_emissao: String,
    pub data_vencimento: String,
    pub pagador: Pagador,
    pub num_dias_agenda: u32,
}

impl BoletoRequest {
    /// Builds the issuance body, failing when the request lacks a reference,
    /// a payer or a due date.
    pub fn from_payment_request(request: &PaymentRequest) -> Result<Self, SettlementError> {
        let reference = request
            .reference
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| SettlementError::InvalidRequest("missing reference".to_string()))?;
        let payer = request
            .customer
            .payer
            .as_ref()
            .ok_or_else(|| SettlementError::InvalidRequest("missing payer".to_string()))?;
        let due_date = request
            .due_date
            .ok_or_else(|| SettlementError::InvalidRequest("missing due date".to_string()))?;

        Ok(Self {
            seu_numero: reference.to_string(),
            valor_nominal: format!("{:.2}", request.amount),
            data_emissao: request.issue_date.format(DATE_FORMAT).to_string(),
            data_vencimento: due_date.format(DATE_FORMAT).to_string(),
            pagador: Pagador {
                cpf_cnpj: payer.tax_id.clone(),
                tipo_pessoa: PERSON_TYPE_INDIVIDUAL.to_string(),
                nome: payer.name.clone(),
                endereco: payer.address.clone(),
                cidade: payer.city.clone(),
                uf: payer.state.clone(),
                cep: payer.zip_code.clone(),
                bairro: payer.district.clone(),
            },
            num_dias_agenda: SCHEDULE_DAYS,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoResponse {
    pub codigo_solicitacao: Option<String>,
}
