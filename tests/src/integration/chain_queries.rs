//! # Chain Query Flows
//!
//! The read surface a client leans on before it ever touches the
//! contract: chain identity at connect time, header lookups, single and
//! multi account queries, and historical balances pinned to a parent
//! block hash.

#[cfg(test)]
mod tests {
    use crate::support::{dev_accounts, dev_signers, salt, spawn_dev_chain, MIN_DURATION};
    use registry_node::config::DEV_ENDOWMENT;
    use registry_types::Hash;

    #[tokio::test]
    async fn connect_reports_dev_chain_identity() {
        let chain = spawn_dev_chain().await;
        let props = chain.api.properties();
        assert_eq!(props.chain_name, "registry-dev");
        assert_eq!(props.token_decimals, 12);
    }

    #[tokio::test]
    async fn genesis_header_links_from_zero() {
        let chain = spawn_dev_chain().await;
        let head = chain.api.chain_get_header().await.unwrap();
        assert_eq!(head.number, 0);
        assert_eq!(head.parent_hash, Hash::ZERO);
    }

    #[tokio::test]
    async fn dev_accounts_start_with_the_endowment() {
        let chain = spawn_dev_chain().await;
        let (alice, bob, charlie) = dev_accounts();

        let info = chain.api.account(&alice).await.unwrap();
        assert_eq!(info.free, DEV_ENDOWMENT);
        assert_eq!(info.nonce, 0);

        let infos = chain.api.account_multi(&[alice, bob, charlie]).await.unwrap();
        assert_eq!(infos.len(), 3);
        assert!(infos.iter().all(|i| i.free == DEV_ENDOWMENT));
    }

    #[tokio::test]
    async fn each_extrinsic_seals_one_block() {
        let chain = spawn_dev_chain().await;
        let (alice, _, _) = dev_signers();

        let (status, _) = chain
            .register(&alice, "blocks-demo", &salt(1), MIN_DURATION)
            .await;
        assert!(status.is_success());

        // requestDomain and registerDomain each sealed a block.
        let head = chain.api.chain_get_header().await.unwrap();
        assert_eq!(head.number, 2);
        assert_eq!(head.hash, status.in_block);

        let parent = chain.api.at(head.parent_hash).header().await.unwrap();
        assert_eq!(parent.number, 1);
    }

    #[tokio::test]
    async fn balance_at_parent_block_predates_the_rent() {
        let chain = spawn_dev_chain().await;
        let (alice_signer, _, _) = dev_signers();
        let (alice, _, _) = dev_accounts();

        let (status, price) = chain
            .register(&alice_signer, "history-demo", &salt(2), MIN_DURATION)
            .await;
        assert!(status.is_success());

        let head = chain.api.chain_get_header().await.unwrap();
        let now = chain.api.account(&alice).await.unwrap();
        assert_eq!(now.free, DEV_ENDOWMENT - price);
        assert_eq!(now.reserved, price);

        // The parent block holds the ledger before the reveal paid rent.
        let before = chain.api.at(head.parent_hash).account(&alice).await.unwrap();
        assert_eq!(before.free, DEV_ENDOWMENT);
        assert_eq!(before.reserved, 0);
        assert_eq!(before.nonce, 1);
    }

    #[tokio::test]
    async fn unknown_block_hash_is_rejected() {
        let chain = spawn_dev_chain().await;
        let (alice, _, _) = dev_accounts();
        let bogus = Hash::new([0xAB; 32]);
        let err = chain.api.at(bogus).account(&alice).await.unwrap_err();
        assert!(err.to_string().contains("unknown block"));
    }
}
