#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};
use staking_ledger::{rewards, StakingLedgerContract, StakingLedgerContractClient};

const PARTICIPANTS: usize = 4;
const MAX_OPS: usize = 64;
const START: u64 = 1_700_000_000;
const BALANCE: i128 = 1_000_000_000_000_000;

#[derive(Arbitrary, Debug)]
enum Op {
    Stake { who: u8, amount: u32 },
    Withdraw { who: u8 },
    Advance { hours: u16 },
    Fund { amount: u32 },
    Sweep,
}

fuzz_target!(|ops: Vec<Op>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let owner = Address::generate(&env);
    let asset = env
        .register_stellar_asset_contract_v2(owner.clone())
        .address();
    let minter = token::StellarAssetClient::new(&env, &asset);

    let contract_id = env.register(StakingLedgerContract, ());
    let client = StakingLedgerContractClient::new(&env, &contract_id);
    client.initialize(&owner, &asset);

    let participants: Vec<Address> = (0..PARTICIPANTS)
        .map(|_| {
            let p = Address::generate(&env);
            minter.mint(&p, &BALANCE);
            p
        })
        .collect();
    let funder = Address::generate(&env);
    minter.mint(&funder, &BALANCE);

    for op in ops.iter().take(MAX_OPS) {
        match op {
            Op::Stake { who, amount } => {
                let p = &participants[*who as usize % PARTICIPANTS];
                let was_active = client.get_stake_info(p).active;
                let result = client.try_stake(p, &i128::from(*amount));
                if result.is_ok() {
                    assert!(!was_active, "second active stake accepted");
                    assert!(*amount > 0, "zero stake accepted");
                }
            }
            Op::Withdraw { who } => {
                let p = &participants[*who as usize % PARTICIPANTS];
                let before = client.get_stake_info(p);
                let now = env.ledger().timestamp();
                if let Ok(Ok(payout)) = client.try_withdraw(p) {
                    assert!(before.active);
                    assert!(now.saturating_sub(before.start_time) >= rewards::MIN_STAKING_PERIOD);
                    assert_eq!(payout, before.amount + before.amount * 10 / 1_000);
                    assert!(!client.get_stake_info(p).active);
                } else {
                    assert_eq!(client.get_stake_info(p), before);
                }
            }
            Op::Advance { hours } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + u64::from(*hours) * 3_600);
            }
            Op::Fund { amount } => {
                let result = client.try_fund_pool(&funder, &i128::from(*amount));
                assert_eq!(result.is_ok(), *amount > 0, "pool funding of {} mishandled", amount);
            }
            Op::Sweep => {
                client.emergency_withdraw(&owner);
            }
        }

        let active_sum: i128 = participants
            .iter()
            .map(|p| client.get_stake_info(p))
            .filter(|r| r.active)
            .map(|r| r.amount)
            .sum();
        assert_eq!(client.get_total_staked(), active_sum);
    }
});
