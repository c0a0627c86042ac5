//! Platform lifecycle example.
//!
//! Demonstrates configuring the platform from TOML, creating a pair,
//! seeding liquidity, swapping with slippage protection, pausing, changing
//! the fee rate and withdrawing.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_pairs=debug cargo run --example platform_lifecycle
//! ```

use hydra_pairs::domain::{AccountId, Amount, AssetId, BasisPoints, Holder, Shares, SwapDirection};
use hydra_pairs::engine::Engine;
use hydra_pairs::error::AmmError;
use hydra_pairs::ledger::InMemoryLedger;
use hydra_pairs::platform::PlatformSettings;
use hydra_pairs::requests::{
    AddLiquidity, CreatePair, RemoveLiquidity, SetPause, Swap, UpdateFeeRate,
};
use tracing_subscriber::EnvFilter;

const SETTINGS: &str = r#"
fee_rate_bps  = 250
base_asset    = "0x0101010101010101010101010101010101010101010101010101010101010101"
fee_collector = "0xfefefefefefefefefefefefefefefefefefefefefefefefefefefefefefefefe"
admin         = "0xadadadadadadadadadadadadadadadadadadadadadadadadadadadadadadadad"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant-product pair lifecycle ===\n");

    // ── 1. Configure the platform ──────────────────────────────────────
    let settings = PlatformSettings::from_toml_str(SETTINGS)?;
    let engine = Engine::new(InMemoryLedger::new());
    engine.configure_platform(&settings)?;
    println!("Protocol fee: {}", settings.fee_rate());

    let admin = settings.admin();
    let collector = settings.fee_collector();
    let usdc = settings.base_asset();
    let weth = AssetId::from_bytes([2u8; 32]);
    let lp = AccountId::from_bytes([0xa1; 32]);
    let trader = AccountId::from_bytes([0xb0; 32]);

    // ── 2. Fund accounts and create the pair ───────────────────────────
    engine.ledger().credit(lp, usdc, Amount::new(5_000_000_000))?;
    engine.ledger().credit(lp, weth, Amount::new(5_000_000_000))?;
    engine.ledger().credit(trader, usdc, Amount::new(100_000_000))?;

    let key = engine.create_pair(&CreatePair::new(usdc, weth)?)?.key();
    println!("Pair created: {}", key);

    // ── 3. Seed liquidity ──────────────────────────────────────────────
    let deposit = engine.add_liquidity(&AddLiquidity::new(
        lp,
        key,
        Amount::new(1_000_000_000),
        Amount::new(1_000_000_000),
    )?)?;
    println!("\n--- Seed deposit ---");
    println!("  Shares minted: {}", deposit.shares_minted());

    // ── 4. Swap with a too-tight minimum, then re-quote ────────────────
    let amount_in = Amount::new(10_000_000);
    let tight = Swap::new(trader, key, amount_in, Amount::new(9_700_000), SwapDirection::AToB)?;
    match engine.swap(&tight) {
        Err(AmmError::SlippageExceeded { actual, minimum }) => {
            println!("\nSwap rejected: would receive {actual}, wanted {minimum}");
        }
        other => println!("\nUnexpected result: {other:?}"),
    }

    let quote = engine.quote_swap(&key, amount_in, Amount::ZERO, SwapDirection::AToB)?;
    let swap = Swap::new(trader, key, amount_in, quote.amount_out(), SwapDirection::AToB)?;
    let executed = engine.swap(&swap)?;
    println!("\n--- Swap: sell {amount_in} USDC ---");
    println!("  Protocol fee: {}", executed.protocol_fee());
    println!("  Net input:    {}", executed.amount_in_net());
    println!("  Amount out:   {}", executed.amount_out());

    // ── 5. Pause, then resume at a lower fee ───────────────────────────
    engine.set_pause(&SetPause::new(admin, true))?;
    let again = Swap::new(trader, key, Amount::new(1_000), Amount::ZERO, SwapDirection::AToB)?;
    println!("\nWhile paused: {:?}", engine.swap(&again).err());
    engine.update_fee_rate(&UpdateFeeRate::new(admin, BasisPoints::new(30))?)?;
    engine.set_pause(&SetPause::new(admin, false))?;
    let after = engine.swap(&again)?;
    println!("After resume at 30bp, fee on 1000: {}", after.protocol_fee());

    // ── 6. Withdraw everything ─────────────────────────────────────────
    let shares = engine.ledger().share_balance(key, lp);
    let withdrawal = engine.remove_liquidity(&RemoveLiquidity::new(
        lp,
        key,
        shares,
        Amount::ZERO,
        Amount::ZERO,
    )?)?;
    println!("\n--- Withdraw {shares} shares ---");
    println!("  USDC out: {}", withdrawal.amount_a());
    println!("  WETH out: {}", withdrawal.amount_b());

    let pair = engine.pair(&key)?;
    assert_eq!(pair.total_shares(), Shares::ZERO);
    assert_eq!(
        engine.ledger().holder_balance(Holder::Pool(key), usdc),
        Amount::ZERO
    );

    // ── 7. Platform record ─────────────────────────────────────────────
    let record = engine.platform().snapshot()?;
    println!("\n--- Platform ---");
    println!("  Swaps:        {}", record.stats().swap_count());
    println!("  USDC volume:  {}", record.stats().volume(&usdc));
    println!("  USDC fees:    {}", record.stats().fees(&usdc));
    println!("  Pause count:  {}", record.pause_count());
    println!(
        "  Collector:    {}",
        engine.ledger().balance(collector, usdc)
    );

    Ok(())
}
