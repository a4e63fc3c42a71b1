//! # Commit-Reveal Registration Flows
//!
//! The two-step rental: `requestDomain` places a salted commitment,
//! `registerDomain` reveals the name and pays the rent. Covers the happy
//! path plus every way the reveal can be refused: missing, foreign or
//! lapsed commitments, short durations, underpayment, and names that
//! fail validation at reveal time.

#[cfg(test)]
mod tests {
    use crate::support::{dev_accounts, dev_signers, salt, spawn_dev_chain, MIN_DURATION};
    use registry_client::prelude::CallOptions;
    use registry_contract::prelude::{generate_secret, rent_price, RegistryEvent};
    use registry_types::DispatchError;

    fn module_error_name(status: &registry_node::prelude::TxStatus) -> String {
        match status.dispatch_error.as_ref().expect("dispatch error") {
            DispatchError::Module(module) => module.name.clone(),
            other => panic!("expected a module error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn commit_then_reveal_rents_the_name() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let (alice, _, _) = dev_accounts();

        let (status, price) = chain
            .register(&alice_signer, "casa", &salt(1), MIN_DURATION)
            .await;
        assert!(status.is_success());
        assert_eq!(price, rent_price("casa", MIN_DURATION));

        let registered = status
            .events
            .iter()
            .find_map(|e| match e {
                RegistryEvent::DomainRegistered { owner, price, .. } => Some((*owner, *price)),
                _ => None,
            })
            .expect("DomainRegistered event");
        assert_eq!(registered, (alice, price));
    }

    #[tokio::test]
    async fn reveal_without_commitment_is_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();
        let price = rent_price("casa", MIN_DURATION);

        let status = chain
            .contract
            .tx(
                "registerDomain",
                &("casa".to_string(), salt(2), MIN_DURATION, String::new()),
                &options,
                price,
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        assert!(!status.is_success());
        assert_eq!(module_error_name(&status), "CommitmentNotFound");
    }

    #[tokio::test]
    async fn reveal_by_another_account_is_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, bob_signer, _) = dev_signers();
        let options = CallOptions::default();

        let secret = generate_secret("casa", &salt(3));
        let status = chain
            .contract
            .tx("requestDomain", &(secret,), &options, 0)
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();
        assert!(status.is_success());

        // Bob saw the commitment but cannot use it.
        let price = rent_price("casa", MIN_DURATION);
        let status = chain
            .contract
            .tx(
                "registerDomain",
                &("casa".to_string(), salt(3), MIN_DURATION, String::new()),
                &options,
                price,
            )
            .unwrap()
            .sign_and_send(&bob_signer)
            .await
            .unwrap();

        assert_eq!(module_error_name(&status), "CommitmentForeign");
    }

    #[tokio::test]
    async fn reveal_after_the_reserve_window_is_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();
        let window = chain.config.registry_config.reserve_window;

        let secret = generate_secret("casa", &salt(4));
        chain
            .contract
            .tx("requestDomain", &(secret,), &options, 0)
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        let start = chain.config.start_time;
        chain.set_time(start + window + 60_000).await;

        let price = rent_price("casa", MIN_DURATION);
        let status = chain
            .contract
            .tx(
                "registerDomain",
                &("casa".to_string(), salt(4), MIN_DURATION, String::new()),
                &options,
                price,
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        assert_eq!(module_error_name(&status), "CommitmentExpired");
    }

    #[tokio::test]
    async fn short_duration_and_underpayment_are_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        let secret = generate_secret("casa", &salt(5));
        chain
            .contract
            .tx("requestDomain", &(secret,), &options, 0)
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        let status = chain
            .contract
            .tx(
                "registerDomain",
                &("casa".to_string(), salt(5), MIN_DURATION - 1, String::new()),
                &options,
                rent_price("casa", MIN_DURATION - 1),
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();
        assert_eq!(module_error_name(&status), "DurationTooShort");

        // The commitment survives a failed reveal; underpay next.
        let price = rent_price("casa", MIN_DURATION);
        let status = chain
            .contract
            .tx(
                "registerDomain",
                &("casa".to_string(), salt(5), MIN_DURATION, String::new()),
                &options,
                price - 1,
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();
        assert_eq!(module_error_name(&status), "InsufficientPayment");
    }

    #[tokio::test]
    async fn invalid_names_are_refused_at_reveal() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        for bad in ["", "Casa", "-casa", "casa-", "ca_sa"] {
            let secret = generate_secret(bad, &salt(6));
            let status = chain
                .contract
                .tx("requestDomain", &(secret,), &options, 0)
                .unwrap()
                .sign_and_send(&alice_signer)
                .await
                .unwrap();
            assert!(status.is_success());

            let status = chain
                .contract
                .tx(
                    "registerDomain",
                    &(bad.to_string(), salt(6), MIN_DURATION, String::new()),
                    &options,
                    rent_price(bad, MIN_DURATION).max(1),
                )
                .unwrap()
                .sign_and_send(&alice_signer)
                .await
                .unwrap();
            assert_eq!(module_error_name(&status), "InvalidDomain");
        }
    }

    #[tokio::test]
    async fn live_name_cannot_be_taken_again() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, bob_signer, _) = dev_signers();

        let (status, _) = chain
            .register(&alice_signer, "casa", &salt(7), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let (status, _) = chain
            .register(&bob_signer, "casa", &salt(8), MIN_DURATION)
            .await;
        assert_eq!(module_error_name(&status), "DomainTaken");
    }

    #[tokio::test]
    async fn live_commitment_cannot_be_displaced() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, bob_signer, _) = dev_signers();
        let options = CallOptions::default();
        let secret = generate_secret("casa", &salt(9));

        chain
            .contract
            .tx("requestDomain", &(secret,), &options, 0)
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        let status = chain
            .contract
            .tx("requestDomain", &(secret,), &options, 0)
            .unwrap()
            .sign_and_send(&bob_signer)
            .await
            .unwrap();
        assert_eq!(module_error_name(&status), "CommitmentTaken");
    }
}
