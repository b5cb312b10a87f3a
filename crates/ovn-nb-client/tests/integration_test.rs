//! Integration tests for the OVN northbound client
//!
//! These tests require a live OVN northbound database and `ovn-nbctl` on the
//! PATH; they are ignored by default.

use ovn_nb_client::{NbClientTrait, NbctlClient};

#[tokio::test]
#[ignore] // Requires a live OVN northbound database
async fn resolves_cluster_router() {
    let nb = NbctlClient::new("ovn-nbctl");

    let router = nb.cluster_router().await.expect("cluster router tagged");
    println!("cluster router: {router}");
}

#[tokio::test]
#[ignore] // Requires a live OVN northbound database
async fn switch_upsert_is_idempotent() {
    let nb = NbctlClient::new("ovn-nbctl");

    nb.ensure_switch("it-node", "10.99.0.0/24", "10.99.0.1/24")
        .await
        .expect("first ensure_switch");
    nb.ensure_switch("it-node", "10.99.0.0/24", "10.99.0.1/24")
        .await
        .expect("second ensure_switch");
}
