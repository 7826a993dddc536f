//! Price ↔ tick ↔ sqrt price walkthrough.
//!
//! Maps a handful of prices to their Q64.96 sqrt prices and ticks, then
//! shows the tick's own sqrt price, its derived price, and where it lands
//! on the grid of a 0.30% pool.
//!
//! # Run
//!
//! ```bash
//! cargo run --example price_ticks
//! cargo run --example price_ticks --features fixed-point
//! ```

use hydra_tickmath::config::TickSpacing;
use hydra_tickmath::domain::{Price, Rounding};
use hydra_tickmath::math::{
    get_sqrt_ratio_at_tick, price_at_tick, price_to_sqrt_ratio, price_to_tick,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tick Math ===\n");

    let prices = [4545.0, 5000.0, 5500.0];

    // ── 1. Price → tick ─────────────────────────────────────────────────
    for p in prices {
        let tick = price_to_tick(Price::new(p)?)?;
        println!("tick at {p}: {}", tick.get());
    }
    println!();

    // ── 2. Price → Q64.96 sqrt price ────────────────────────────────────
    for p in prices {
        let sqrt = price_to_sqrt_ratio(Price::new(p)?)?;
        println!("q64.96({p}): {sqrt}");
    }

    // ── 3. Tick → sqrt price → derived price ───────────────────────────
    //    The tick's sqrt price is the floor of the encoded price.
    let spacing = TickSpacing::SIXTY;
    println!("\nGrid: {spacing}");
    for p in prices {
        let price = Price::new(p)?;
        let tick = price_to_tick(price)?;
        let at_tick = get_sqrt_ratio_at_tick(tick.get())?;
        let lower = spacing.align(tick, Rounding::Down)?;
        let upper = spacing.align(tick, Rounding::Up)?;

        println!("  price {p}");
        println!("    {tick}, sqrt price {at_tick}");
        println!("    price at tick: {:.6}", price_at_tick(tick).get());
        println!("    usable range:  [{}, {}]", lower.get(), upper.get());

        #[cfg(feature = "fixed-point")]
        println!("    as U64F64:     {}", at_tick.to_fixed());
    }

    // ── 4. Bounds ───────────────────────────────────────────────────────
    println!("\nUsable ticks with {spacing}: {}", spacing.max_ticks());
    match price_to_tick(Price::new(1e-40)?) {
        Ok(tick) => println!("price 1e-40 maps to {tick}"),
        Err(e) => println!("price 1e-40 rejected: {e}"),
    }

    Ok(())
}
