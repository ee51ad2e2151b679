// Scripted walkthrough of one simulated session against a synthetic clock.

use ilham_core::alerts::AlertDirection;
use ilham_core::governance::VoteChoice;
use ilham_core::session::Session;
use std::env;

fn main() {
    let mut seed: u64 = 7;
    let mut ticks: u64 = 15;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                seed = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .expect("--seed takes a u64");
            }
            "--ticks" => {
                ticks = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .expect("--ticks takes a u64");
            }
            _ => {
                eprintln!("unknown arg {}", arg);
                return;
            }
        }
    }

    let mut session = Session::new(seed);
    let mut now_ms: u64 = 1_700_000_000_000;

    let address = session.connect().expect("connect");
    println!("connected: {}", address);

    session.airdrop_sol(now_ms);
    session.airdrop_sol(now_ms);
    session.swap_sol_to_token(0.5, now_ms).expect("swap");
    session.mint_tokens(500, now_ms).expect("mint");
    session.stake_tokens(200, now_ms).expect("stake");
    session.add_alert(0.045, AlertDirection::Below).expect("add alert");
    session.provide_liquidity(0.5, 100).expect("provide liquidity");

    // One tick per simulated second.
    for _ in 0..ticks {
        now_ms += 1_000;
        let report = session.tick(now_ms);
        for id in &report.triggered_alerts {
            println!("price alert {} fired at {:.4}", id, report.price);
        }
        if report.can_claim_reward {
            if let Some(id) = session.claim_rewards(now_ms) {
                println!("claimed staking reward ({})", id);
            }
        }
    }

    session.vote("1", VoteChoice::For).expect("vote");
    if let Ok((shares, fees)) = session.withdraw_liquidity() {
        println!("withdrew {:.2} LP shares (+{:.4} ILHAM fees)", shares, fees);
    }

    let ledger = session.ledger();
    println!(
        "SOL {:.2} | ILHAM {} | staked {} | price {:.4}",
        ledger.sol_balance(),
        ledger.token_balance(),
        ledger.staked_balance(),
        session.price()
    );

    let log: Vec<_> = ledger.transactions().collect();
    println!("{}", serde_json::to_string_pretty(&log).expect("render log"));
}
