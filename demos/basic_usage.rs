// ============================================================================
// Basic Usage Example
// ============================================================================

use ledger_int::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Ledger Int Example ===\n");

    // Amounts with 18 decimal places of precision
    let supply = Int::with_decimal(21_000_000, 18);
    let reward = Int::with_decimal(625, 16);
    println!("Supply: {}", format_grouped(&supply.to_string()).unwrap());
    println!("Reward: {}", format_grouped(&reward.to_string()).unwrap());

    // Checked arithmetic on untrusted input
    println!("\n=== Checked Arithmetic ===");
    let inputs = [
        "1000",
        "0xff",
        "-42",
        "not a number",
        "115792089237316195423570985008687907853269984665640564039457584007913129639936",
    ];
    let mut total = Int::zero();
    for input in inputs {
        match input.parse::<Int>() {
            Ok(amount) => match total.checked_add(&amount) {
                Ok(sum) => {
                    println!("  + {:>6} -> {}", input, sum);
                    total = sum;
                },
                Err(err) => println!("  rejected {}: {}", input, err),
            },
            Err(err) if err.is_out_of_range() => println!("  rejected (out of range): {}", err),
            Err(err) => println!("  rejected: {}", err),
        }
    }

    let per_account = total.checked_quo(&Int::from(3)).unwrap();
    let dust = total.checked_mod(&Int::from(3)).unwrap();
    println!("Split 3 ways: {} each, {} left over", per_account, dust);
    println!("Divide by zero: {:?}", total.checked_quo(&Int::zero()));

    // Encodings
    println!("\n=== Encodings ===");
    println!("Text:   {}", reward.marshal_text());
    println!("Wire:   {:?}", reward.marshal());
    println!("Zero:   {:?}", Int::zero().marshal());
    println!("JSON:   {}", serde_json::to_string(&reward).unwrap());

    let empty = NullableInt::unmarshal(&[]).unwrap();
    println!("Empty payload -> {} (nil: {})", empty, empty.is_nil());
}
