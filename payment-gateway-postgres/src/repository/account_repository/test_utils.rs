#[cfg(test)]
pub mod test_utils {
    use payment_gateway_api::Account;
    use uuid::Uuid;

    /// Builds an account with a unique email so reruns against the same
    /// database never collide.
    pub fn create_test_account(name: &str) -> Account {
        let suffix = Uuid::new_v4().simple().to_string();
        Account::new(name, &format!("{}-{}@example.com", name.to_lowercase(), suffix))
    }
}
