#[cfg(test)]
pub mod test_utils {
    use chrono::{NaiveDate, Utc};
    use payment_gateway_api::{CreditCard, Invoice, NewInvoice, Payer, PaymentMethod};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    pub fn create_test_card_invoice(account_id: Uuid, amount: Decimal) -> Invoice {
        Invoice::new(NewInvoice {
            account_id,
            amount,
            description: "Test card invoice".to_string(),
            payment_type: PaymentMethod::Card,
            card: Some(CreditCard {
                number: "4111111111111111".to_string(),
                cvv: "123".to_string(),
                expiry_month: 12,
                expiry_year: 2030,
                cardholder_name: "Test Holder".to_string(),
            }),
            due_date: None,
            reference: None,
            payer: None,
        })
        .expect("valid test invoice")
    }

    pub fn create_test_boleto_invoice(account_id: Uuid, amount: Decimal) -> Invoice {
        let now = Utc::now();
        Invoice::new(NewInvoice {
            account_id,
            amount,
            description: "Test boleto invoice".to_string(),
            payment_type: PaymentMethod::Boleto,
            card: None,
            due_date: NaiveDate::from_ymd_opt(2030, 6, 30),
            reference: Some(format!("REF-{}", Uuid::new_v4().simple())),
            payer: Some(Payer {
                id: Uuid::new_v4(),
                name: "Test Payer".to_string(),
                tax_id: "12345678909".to_string(),
                email: "payer@example.com".to_string(),
                phone: "11999990000".to_string(),
                address: "Rua Teste".to_string(),
                number: "100".to_string(),
                district: "Centro".to_string(),
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: "01001000".to_string(),
                created_at: now,
                updated_at: now,
            }),
        })
        .expect("valid test invoice")
    }
}
