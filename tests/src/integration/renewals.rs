//! # Renewal Flows
//!
//! Extending a live rental: expiry moves out by the paid duration, only
//! the owner may renew, and a lapsed rental has to go back through the
//! commit-reveal path instead.

#[cfg(test)]
mod tests {
    use crate::support::{dev_accounts, dev_signers, salt, spawn_dev_chain, MIN_DURATION};
    use registry_client::prelude::CallOptions;
    use registry_contract::prelude::{rent_price, ContractError, DomainData, RegistryEvent};
    use registry_types::DispatchError;

    async fn domain_data(
        chain: &crate::support::TestChain,
        domain: &str,
    ) -> DomainData {
        let (alice, _, _) = dev_accounts();
        let data: Result<DomainData, ContractError> = chain
            .contract
            .query(
                &alice,
                "getDomainData",
                &(domain.to_string(),),
                &CallOptions::default(),
            )
            .await
            .unwrap();
        data.unwrap()
    }

    #[tokio::test]
    async fn renewal_extends_the_expiry_by_the_paid_duration() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        let (status, _) = chain
            .register(&alice_signer, "casa", &salt(1), MIN_DURATION)
            .await;
        assert!(status.is_success());
        let before = domain_data(&chain, "casa").await;

        let added = rent_price("casa", MIN_DURATION);
        let status = chain
            .contract
            .tx(
                "renewDomain",
                &("casa".to_string(), MIN_DURATION),
                &options,
                added,
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();
        assert!(status.is_success());
        assert!(status.events.iter().any(|e| matches!(
            e,
            RegistryEvent::DomainRenewed { added: a, .. } if *a == added
        )));

        let after = domain_data(&chain, "casa").await;
        assert_eq!(after.expiration_date, before.expiration_date + MIN_DURATION);
    }

    #[tokio::test]
    async fn only_the_owner_can_renew() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, bob_signer, _) = dev_signers();
        let options = CallOptions::default();

        let (status, _) = chain
            .register(&alice_signer, "casa", &salt(2), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let status = chain
            .contract
            .tx(
                "renewDomain",
                &("casa".to_string(), MIN_DURATION),
                &options,
                rent_price("casa", MIN_DURATION),
            )
            .unwrap()
            .sign_and_send(&bob_signer)
            .await
            .unwrap();

        match status.dispatch_error {
            Some(DispatchError::Module(module)) => assert_eq!(module.name, "NotOwner"),
            other => panic!("expected NotOwner, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lapsed_rental_cannot_be_renewed() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        let (status, _) = chain
            .register(&alice_signer, "casa", &salt(3), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let expiry = domain_data(&chain, "casa").await.expiration_date;
        chain.set_time(expiry + 1).await;

        let status = chain
            .contract
            .tx(
                "renewDomain",
                &("casa".to_string(), MIN_DURATION),
                &options,
                rent_price("casa", MIN_DURATION),
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        match status.dispatch_error {
            Some(DispatchError::Module(module)) => assert_eq!(module.name, "DomainNotFound"),
            other => panic!("expected DomainNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn underpaid_renewal_is_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        let (status, _) = chain
            .register(&alice_signer, "casa", &salt(4), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let status = chain
            .contract
            .tx(
                "renewDomain",
                &("casa".to_string(), MIN_DURATION),
                &options,
                rent_price("casa", MIN_DURATION) - 1,
            )
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();

        match status.dispatch_error {
            Some(DispatchError::Module(module)) => {
                assert_eq!(module.name, "InsufficientPayment");
            }
            other => panic!("expected InsufficientPayment, got {other:?}"),
        }
    }
}
