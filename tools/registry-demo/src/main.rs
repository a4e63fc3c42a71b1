//! Registry demo: a linear walk through the deployed domain registry.
//!
//! Spawns a dev node, connects the client, prints chain and balance
//! queries, then runs the full commit-reveal registration, renewal,
//! expiry and refund flow.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use registry_client::prelude::*;
use registry_contract::prelude::{ContractError, DomainData};
use registry_node::config::DEV_CONTRACT_ADDRESS;
use registry_node::prelude::{Node, NodeConfig, RpcRequest, RpcResponse, TxStatus};
use registry_types::{AccountId, Balance, Hash, Moment};

/// Registry demo: drives the domain registry end to end.
#[derive(Parser, Debug)]
#[command(name = "registry-demo")]
#[command(about = "Manual demo against an embedded registry dev node")]
struct Args {
    /// Path to the contract metadata JSON.
    #[arg(short, long, default_value = "contract-metadata/domain_registry.json")]
    metadata: String,

    /// Domain name to register during the lifecycle walk.
    #[arg(short, long, default_value = "demo-domain")]
    domain: String,

    /// Rental duration in milliseconds (defaults to 60 days).
    #[arg(long, default_value = "5184000000")]
    duration: u128,
}

#[tokio::main]
async fn main() -> Result<()> {
    registry_telemetry::init_from_env().context("telemetry init")?;
    let args = Args::parse();

    // Spawn the dev node and connect to its endpoint.
    let config = NodeConfig::dev();
    let handle = Node::spawn(config);
    let api = Api::connect(handle).await?;
    info!(chain = %api.properties().chain_name, "connected to dev node");

    let alice = AccountId::alice();
    let bob = AccountId::bob();

    // Latest header.
    let header = api.chain_get_header().await?;
    println!("last header hash {}", header.hash.to_hex());

    // Single and multi balance queries.
    let balance = api.account(&alice).await?;
    println!("Alice's balance is {}", balance.free);

    let balances = api.account_multi(&[alice, bob]).await?;
    println!(
        "Current balances for Alice and Bob are {} and {}",
        balances[0].free, balances[1].free
    );

    // Contract queries through the metadata.
    let metadata = ContractMetadata::from_file(&args.metadata)
        .with_context(|| format!("loading {}", args.metadata))?;
    let contract = Contract::new(&api, metadata, DEV_CONTRACT_ADDRESS);
    let options = CallOptions::default();

    let data: Result<DomainData, ContractError> = contract
        .query(&alice, "getDomainData", &("test".to_string(),), &options)
        .await?;
    println!("getDomainData(\"test\") -> {:?}", data?);

    let price: Result<Balance, ContractError> = contract
        .query(
            &bob,
            "rentPrice",
            &("othertest".to_string(), 10_000_000_000u128),
            &options,
        )
        .await?;
    println!("rentPrice(\"othertest\", 10000000000) -> {}", price?);

    // Full lifecycle walk.
    lifecycle(&api, &contract, &args).await?;

    // Historical balance at the parent of the new best block.
    let header = api.chain_get_header().await?;
    let at_parent = api.at(header.parent_hash).account(&alice).await?;
    println!(
        "Alice's balance at {} was {}",
        header.parent_hash.to_hex(),
        at_parent.free
    );

    Ok(())
}

/// Commit-reveal registration, renewal, expiry and refund for one name.
async fn lifecycle(api: &Api, contract: &Contract, args: &Args) -> Result<()> {
    let alice = AccountId::alice();
    let signer = Signer::alice();
    let options = CallOptions::default();
    let salt = Hash::new([0x5A; 32]);

    // Commit.
    let secret: Result<Hash, ContractError> = contract
        .query(
            &alice,
            "generateSecret",
            &(args.domain.clone(), salt),
            &options,
        )
        .await?;
    let secret = secret?;
    info!(%secret, "secret generated");

    let status = contract
        .tx("requestDomain", &(secret,), &options, 0)?
        .sign_and_send(&signer)
        .await?;
    report("requestDomain", &status)?;

    // Reveal, paying the quoted rent.
    let price: Result<Balance, ContractError> = contract
        .query(
            &alice,
            "rentPrice",
            &(args.domain.clone(), args.duration),
            &options,
        )
        .await?;
    let price = price?;
    info!(price, "rent quoted");

    let status = contract
        .tx(
            "registerDomain",
            &(
                args.domain.clone(),
                salt,
                args.duration,
                "demo metadata".to_string(),
            ),
            &options,
            price,
        )?
        .sign_and_send(&signer)
        .await?;
    report("registerDomain", &status)?;

    let data: Result<DomainData, ContractError> = contract
        .query(&alice, "getDomainData", &(args.domain.clone(),), &options)
        .await?;
    let data = data?;
    println!(
        "registered: owner {} expires {} metadata {:?}",
        data.owner, data.expiration_date, data.metadata
    );

    // Renew for the same duration again.
    let status = contract
        .tx(
            "renewDomain",
            &(args.domain.clone(), args.duration),
            &options,
            price,
        )?
        .sign_and_send(&signer)
        .await?;
    report("renewDomain", &status)?;

    // Jump past expiry using the dev timestamp facility, then claim the
    // locked rent back.
    let expiry = {
        let data: Result<DomainData, ContractError> = contract
            .query(&alice, "getDomainData", &(args.domain.clone(),), &options)
            .await?;
        data?.expiration_date
    };
    advance_time(api, expiry + 1).await?;

    let status = contract
        .tx("claimRefund", &(args.domain.clone(),), &options, 0)?
        .sign_and_send(&signer)
        .await?;
    report("claimRefund", &status)?;

    let refunded = api.account(&alice).await?;
    println!("after refund, Alice's free balance is {}", refunded.free);
    Ok(())
}

fn report(label: &str, status: &TxStatus) -> Result<()> {
    if let Some(error) = &status.dispatch_error {
        // Module errors carry the section.Name: docs rendering.
        bail!("{label} failed: {error}");
    }
    println!(
        "{label}: in block {} with {} event(s)",
        status.in_block.to_hex(),
        status.events.len()
    );
    Ok(())
}

async fn advance_time(api: &Api, now: Moment) -> Result<()> {
    match api
        .handle()
        .call(RpcRequest::DevSetTimestamp { now })
        .await?
    {
        RpcResponse::Timestamp(at) => {
            info!(at, "chain time advanced");
            Ok(())
        }
        other => bail!("unexpected response: {other:?}"),
    }
}
