//! # Refund Flows
//!
//! Rent is locked in the contract for the life of a rental and paid back
//! to the former owner when the name is cleared: through `claimRefund`,
//! through a third-party `releaseDomain`, or implicitly when someone else
//! registers over a lapsed name. The chain view mirrors the locked rent
//! as reserved balance.

#[cfg(test)]
mod tests {
    use crate::support::{dev_accounts, dev_signers, salt, spawn_dev_chain, MIN_DURATION};
    use registry_client::prelude::CallOptions;
    use registry_contract::prelude::{ContractError, DomainData, RegistryEvent};
    use registry_node::config::DEV_ENDOWMENT;
    use registry_types::DispatchError;

    async fn expiry_of(chain: &crate::support::TestChain, domain: &str) -> u128 {
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
        data.unwrap().expiration_date
    }

    #[tokio::test]
    async fn claim_refund_returns_the_locked_rent() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let (alice, _, _) = dev_accounts();
        let options = CallOptions::default();

        let (status, price) = chain
            .register(&alice_signer, "casa", &salt(1), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let held = chain.api.account(&alice).await.unwrap();
        assert_eq!(held.free, DEV_ENDOWMENT - price);
        assert_eq!(held.reserved, price);

        let expiry = expiry_of(&chain, "casa").await;
        chain.set_time(expiry + 1).await;

        let status = chain
            .contract
            .tx("claimRefund", &("casa".to_string(),), &options, 0)
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();
        assert!(status.is_success());
        assert!(status.events.iter().any(|e| matches!(
            e,
            RegistryEvent::RefundClaimed { who, amount, .. }
                if *who == alice && *amount == price
        )));

        let after = chain.api.account(&alice).await.unwrap();
        assert_eq!(after.free, DEV_ENDOWMENT);
        assert_eq!(after.reserved, 0);
    }

    #[tokio::test]
    async fn anyone_can_release_and_the_owner_is_refunded() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, bob_signer, _) = dev_signers();
        let (alice, _, _) = dev_accounts();
        let options = CallOptions::default();

        let (status, price) = chain
            .register(&alice_signer, "casa", &salt(2), MIN_DURATION)
            .await;
        assert!(status.is_success());
        assert_eq!(chain.api.account(&alice).await.unwrap().reserved, price);

        let expiry = expiry_of(&chain, "casa").await;
        chain.set_time(expiry + 1).await;

        let status = chain
            .contract
            .tx("releaseDomain", &("casa".to_string(),), &options, 0)
            .unwrap()
            .sign_and_send(&bob_signer)
            .await
            .unwrap();
        assert!(status.is_success());
        assert!(status.events.iter().any(|e| matches!(
            e,
            RegistryEvent::DomainReleased { previous_owner, .. } if *previous_owner == alice
        )));

        let after = chain.api.account(&alice).await.unwrap();
        assert_eq!(after.free, DEV_ENDOWMENT);
        assert_eq!(after.reserved, 0);
    }

    #[tokio::test]
    async fn registering_over_a_lapsed_name_refunds_the_old_owner() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, bob_signer, _) = dev_signers();
        let (alice, bob, _) = dev_accounts();

        let (status, alice_price) = chain
            .register(&alice_signer, "casa", &salt(3), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let expiry = expiry_of(&chain, "casa").await;
        chain.set_time(expiry + 1).await;

        let (status, bob_price) = chain
            .register(&bob_signer, "casa", &salt(4), MIN_DURATION)
            .await;
        assert!(status.is_success());

        // Alice got her rent back in the same block bob took over.
        let alice_info = chain.api.account(&alice).await.unwrap();
        assert_eq!(alice_info.free, DEV_ENDOWMENT);
        assert_eq!(alice_info.reserved, 0);

        let bob_info = chain.api.account(&bob).await.unwrap();
        assert_eq!(bob_info.free, DEV_ENDOWMENT - bob_price);
        assert_eq!(bob_info.reserved, bob_price);
        assert_eq!(alice_price, bob_price);
    }

    #[tokio::test]
    async fn refund_before_expiry_is_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        let (status, _) = chain
            .register(&alice_signer, "casa", &salt(5), MIN_DURATION)
            .await;
        assert!(status.is_success());

        for label in ["claimRefund", "releaseDomain"] {
            let status = chain
                .contract
                .tx(label, &("casa".to_string(),), &options, 0)
                .unwrap()
                .sign_and_send(&alice_signer)
                .await
                .unwrap();
            match status.dispatch_error {
                Some(DispatchError::Module(module)) => assert_eq!(module.name, "NotExpired"),
                other => panic!("expected NotExpired, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn refund_of_an_unknown_name_is_refused() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let options = CallOptions::default();

        let status = chain
            .contract
            .tx("claimRefund", &("nothing-here".to_string(),), &options, 0)
            .unwrap()
            .sign_and_send(&alice_signer)
            .await
            .unwrap();
        match status.dispatch_error {
            Some(DispatchError::Module(module)) => assert_eq!(module.name, "NothingToRefund"),
            other => panic!("expected NothingToRefund, got {other:?}"),
        }
    }
}
