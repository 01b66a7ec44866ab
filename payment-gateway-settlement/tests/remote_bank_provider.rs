//! Exercises `RemoteBankProvider` against wiremock servers standing in for the
//! bank. The mock servers speak plain HTTP; the client identity is still
//! loaded from the PEM fixtures on every call.

use chrono::{NaiveDate, Utc};
use payment_gateway_api::{
    CustomerInfo, Payer, PaymentMethod, PaymentRequest, SettlementError, SettlementOutcome,
    SettlementProvider,
};
use payment_gateway_settlement::remote::wire::TOKEN_SCOPE;
use payment_gateway_settlement::{BankEnvironment, RemoteBankConfig, RemoteBankProvider};
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn provider(server: &MockServer) -> RemoteBankProvider {
    let config = RemoteBankConfig::new(BankEnvironment::Sandbox, "client-id", "client-secret", "unused")
        .with_base_url(server.uri())
        .with_certificate(fixture("client.crt"), fixture("client.key"))
        .with_timeout(Duration::from_secs(5));
    RemoteBankProvider::new(config)
}

fn boleto_request() -> PaymentRequest {
    let now = Utc::now();
    PaymentRequest {
        amount: dec!(150),
        currency: "BRL".to_string(),
        description: "Monthly fee".to_string(),
        method: PaymentMethod::Boleto,
        customer: CustomerInfo {
            name: "Maria Lima".to_string(),
            email: "maria@example.com".to_string(),
            tax_id: "98765432100".to_string(),
            payer: Some(Payer {
                id: Uuid::new_v4(),
                name: "Maria Lima".to_string(),
                tax_id: "98765432100".to_string(),
                email: "maria@example.com".to_string(),
                phone: "21988887777".to_string(),
                address: "Av. Atlantica".to_string(),
                number: "500".to_string(),
                district: "Copacabana".to_string(),
                city: "Rio de Janeiro".to_string(),
                state: "RJ".to_string(),
                zip_code: "22010000".to_string(),
                created_at: now,
                updated_at: now,
            }),
        },
        metadata: HashMap::new(),
        reference: Some("INV-2025-0001".to_string()),
        issue_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 15),
    }
}

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-id"))
        .and(body_string_contains("client_secret=client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-123",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn issues_boleto_with_bearer_token() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/cobranca/v3/cobrancas"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(serde_json::json!({
            "seuNumero": "INV-2025-0001",
            "valorNominal": "150.00",
            "dataEmissao": "2025-04-01",
            "dataVencimento": "2025-04-15",
            "pagador": {
                "cpfCnpj": "98765432100",
                "tipoPessoa": "FISICA",
                "nome": "Maria Lima",
                "endereco": "Av. Atlantica",
                "cidade": "Rio de Janeiro",
                "uf": "RJ",
                "cep": "22010000",
                "bairro": "Copacabana"
            },
            "numDiasAgenda": 60
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "codigoSolicitacao": "0b7c9a5e-remote"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider(&server)
        .create_payment(boleto_request())
        .await
        .expect("issuance succeeds");

    assert_eq!(response.id, "0b7c9a5e-remote");
    assert_eq!(response.status, SettlementOutcome::Pending);
}

#[tokio::test]
async fn token_request_carries_fixed_scope() {
    let server = MockServer::start().await;
    let encoded_scope = format!("scope={}", TOKEN_SCOPE.replace(' ', "+"));

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(body_string_contains(encoded_scope.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-scope",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/cobranca/v3/cobrancas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "codigoSolicitacao": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server)
        .create_payment(boleto_request())
        .await
        .expect("issuance succeeds");
}

#[tokio::test]
async fn token_failure_aborts_before_issuance() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid client"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/cobranca/v3/cobrancas"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider(&server)
        .create_payment(boleto_request())
        .await
        .expect_err("token failure");

    assert!(matches!(err, SettlementError::Authentication { status: 401, .. }));
    assert_eq!(err.to_string(), "token request failed with status: 401");
}

#[tokio::test]
async fn issuance_failure_embeds_reference_status_and_body() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/cobranca/v3/cobrancas"))
        .respond_with(ResponseTemplate::new(422).set_body_string("{\"title\":\"cep invalido\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server)
        .create_payment(boleto_request())
        .await
        .expect_err("issuance failure");

    match &err {
        SettlementError::Upstream {
            reference,
            status,
            body,
        } => {
            assert_eq!(reference, "INV-2025-0001");
            assert_eq!(*status, 422);
            assert!(body.contains("cep invalido"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("INV-2025-0001"));
    assert!(message.contains("422"));
    assert!(message.contains("cep invalido"));
}

#[tokio::test]
async fn malformed_certificate_aborts_before_any_request() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;

    let broken = std::env::temp_dir().join(format!("broken-{}.crt", Uuid::new_v4()));
    std::fs::write(&broken, "-----BEGIN CERTIFICATE-----\nnot base64\n-----END CERTIFICATE-----\n")
        .expect("write fixture");

    let config = RemoteBankConfig::new(BankEnvironment::Sandbox, "client-id", "client-secret", "unused")
        .with_base_url(server.uri())
        .with_certificate(&broken, &broken);
    let err = RemoteBankProvider::new(config)
        .create_payment(boleto_request())
        .await
        .expect_err("certificate failure");

    let _ = std::fs::remove_file(&broken);
    assert!(matches!(err, SettlementError::Certificate(_)));
}

#[tokio::test]
async fn missing_certificate_file_is_certificate_error() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;

    let config = RemoteBankConfig::new(BankEnvironment::Sandbox, "client-id", "client-secret", "/nonexistent/")
        .with_base_url(server.uri());
    let err = RemoteBankProvider::new(config)
        .create_payment(boleto_request())
        .await
        .expect_err("certificate failure");

    assert!(matches!(err, SettlementError::Certificate(_)));
}

#[tokio::test]
async fn missing_payer_fails_before_io() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;

    let mut request = boleto_request();
    request.customer.payer = None;

    let err = provider(&server)
        .create_payment(request)
        .await
        .expect_err("validation failure");
    assert!(matches!(err, SettlementError::InvalidRequest(_)));
}

#[tokio::test]
async fn slow_bank_is_a_timeout_not_a_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(serde_json::json!({ "access_token": "late" })),
        )
        .mount(&server)
        .await;

    let config = RemoteBankConfig::new(BankEnvironment::Sandbox, "client-id", "client-secret", "unused")
        .with_base_url(server.uri())
        .with_certificate(fixture("client.crt"), fixture("client.key"))
        .with_timeout(Duration::from_millis(200));
    let err = RemoteBankProvider::new(config)
        .create_payment(boleto_request())
        .await
        .expect_err("timeout");

    assert!(matches!(err, SettlementError::Timeout { .. }));
}
