#![no_std]

use cygnus_endpoint_interface::{BridgeEndpoint, OftReceiverClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutboundPacket {
    pub sender: Address,
    pub dst_chain_id: u32,
    pub peer: BytesN<32>,
    pub to: BytesN<32>,
    pub amount_sd: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    SentCount,
    LastSent,
}

#[contract]
pub struct MockEndpoint;

#[contractimpl]
impl BridgeEndpoint for MockEndpoint {
    fn send(
        env: Env,
        sender: Address,
        dst_chain_id: u32,
        peer: BytesN<32>,
        to: BytesN<32>,
        amount_sd: u64,
    ) {
        sender.require_auth();

        let count: u32 = env.storage().instance().get(&DataKey::SentCount).unwrap_or(0);
        env.storage().instance().set(&DataKey::SentCount, &(count + 1));
        env.storage().instance().set(
            &DataKey::LastSent,
            &OutboundPacket { sender, dst_chain_id, peer, to, amount_sd },
        );
    }
}

#[contractimpl]
impl MockEndpoint {
    /// Plays the relayer: hands an inbound packet to `token` as if it had
    /// been verified on `src_chain_id`.
    pub fn deliver(
        env: Env,
        token: Address,
        src_chain_id: u32,
        src_peer: BytesN<32>,
        to: Address,
        amount_sd: u64,
    ) -> i128 {
        OftReceiverClient::new(&env, &token).credit(&src_chain_id, &src_peer, &to, &amount_sd)
    }

    pub fn sent_count(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::SentCount).unwrap_or(0)
    }

    pub fn last_sent(env: Env) -> Option<OutboundPacket> {
        env.storage().instance().get(&DataKey::LastSent)
    }
}
