use soroban_sdk::{symbol_short, Address, BytesN, Env};

/// Contract-specific notifications. Standard token events (`transfer`,
/// `approve`, `mint`, `burn`) go through `soroban_token_sdk::TokenUtils`.
pub struct CygEvents;

impl CygEvents {
    /// Emits a `pillars` event when the minting authority is assigned.
    ///
    /// Topics: `("pillars",)`
    /// Data:   `(previous, new)`
    pub fn pillars_set(env: &Env, previous: &Option<Address>, new: &Address) {
        env.events()
            .publish((symbol_short!("pillars"),), (previous.clone(), new.clone()));
    }

    /// Topics: `("owner", previous)`
    /// Data:   `new_owner`
    pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
        env.events().publish((symbol_short!("owner"), previous), new_owner.clone());
    }

    /// Topics: `("peer_set", chain_id)`
    /// Data:   `peer`
    pub fn peer_set(env: &Env, chain_id: u32, peer: &BytesN<32>) {
        env.events().publish((symbol_short!("peer_set"), chain_id), peer.clone());
    }

    /// Emits an `oft_send` event after the local amount was burned and handed
    /// to the endpoint.
    ///
    /// Topics: `("oft_send", from, dst_chain_id)`
    /// Data:   `(to, amount_ld)`
    pub fn oft_send(env: &Env, from: &Address, dst_chain_id: u32, to: &BytesN<32>, amount_ld: i128) {
        env.events().publish(
            (symbol_short!("oft_send"), from, dst_chain_id),
            (to.clone(), amount_ld),
        );
    }

    /// Topics: `("oft_recv", to, src_chain_id)`
    /// Data:   `amount_ld`
    pub fn oft_receive(env: &Env, to: &Address, src_chain_id: u32, amount_ld: i128) {
        env.events().publish((symbol_short!("oft_recv"), to, src_chain_id), amount_ld);
    }
}
