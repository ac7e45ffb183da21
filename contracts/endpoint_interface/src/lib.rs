#![no_std]

use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Bridge endpoint interface.
/// The token hands every outbound transfer to the endpoint after burning the
/// local amount. `amount_sd` is expressed in shared decimals; `peer` is the
/// trusted token contract on `dst_chain_id` and `to` the remote recipient.
#[contractclient(name = "BridgeEndpointClient")]
pub trait BridgeEndpoint {
    fn send(
        env: Env,
        sender: Address,
        dst_chain_id: u32,
        peer: BytesN<32>,
        to: BytesN<32>,
        amount_sd: u64,
    );
}

/// Inbound side of the bridge.
/// Endpoints deliver verified packets to the token through `credit`, which
/// returns the amount credited in local decimals.
#[contractclient(name = "OftReceiverClient")]
pub trait OftReceiver {
    fn credit(
        env: Env,
        src_chain_id: u32,
        src_peer: BytesN<32>,
        to: Address,
        amount_sd: u64,
    ) -> i128;
}
