use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub participant: Address,
    pub amount: i128,
    pub total_staked: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub principal: i128,
    pub reward: i128,
    pub total_staked: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolFundedEvent {
    pub funder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipEvent {
    pub current_owner: Address,
    pub candidate: Address,
}

pub fn publish_initialized(env: &Env, owner: Address, asset: Address) {
    env.events()
        .publish((symbol_short!("INIT"),), InitializedEvent { owner, asset });
}

pub fn publish_staked(env: &Env, participant: Address, amount: i128, total_staked: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone()),
        StakedEvent {
            participant,
            amount,
            total_staked,
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    participant: Address,
    principal: i128,
    reward: i128,
    total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), participant.clone()),
        WithdrawnEvent {
            participant,
            principal,
            reward,
            total_staked,
        },
    );
}

pub fn publish_emergency_withdrawn(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), owner.clone()),
        EmergencyWithdrawnEvent { owner, amount },
    );
}

pub fn publish_pool_funded(env: &Env, funder: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("POOL_FND"), funder.clone()),
        PoolFundedEvent { funder, amount },
    );
}

pub fn publish_ownership_proposed(env: &Env, current_owner: Address, candidate: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone(), candidate.clone()),
        OwnershipEvent {
            current_owner,
            candidate,
        },
    );
}

pub fn publish_ownership_accepted(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), previous_owner.clone(), new_owner.clone()),
        OwnershipEvent {
            current_owner: previous_owner,
            candidate: new_owner,
        },
    );
}

pub fn publish_ownership_cancelled(env: &Env, current_owner: Address, candidate: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), current_owner.clone(), candidate.clone()),
        OwnershipEvent {
            current_owner,
            candidate,
        },
    );
}
