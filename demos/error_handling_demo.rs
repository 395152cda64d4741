// demos/error_handling_demo.rs
use bsm_greeks::analytics::bs_analytic;
use bsm_greeks::error::PricingError;
use bsm_greeks::models::{OptionField, OptionParameters, OptionType};
use bsm_greeks::sweep::{sweep, SweepAxis};

fn main() {
    println!("Error Handling Demo for bsm-greeks");
    println!("==================================\n");

    // Test 1: Zero volatility
    println!("1. Testing zero volatility...");
    match OptionParameters::new(30.0, 50.0, 0.01, 0.1, 0.0, OptionType::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Negative spot passed straight to the engine
    println!("\n2. Testing negative spot price...");
    let bad_spot = OptionParameters {
        spot_price: -30.0,
        ..Default::default()
    };
    match bs_analytic::delta(&bad_spot) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: A sweep that runs into expiry
    println!("\n3. Testing time sweep that reaches T = 0...");
    let axis = SweepAxis::new(OptionField::TimeToExpiry, vec![0.3, 0.2, 0.1, 0.0, -0.1]);
    match sweep(&OptionParameters::default(), &axis) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Unknown option type label from a UI
    println!("\n4. Testing option type mapping...");
    for label in ["Call", "p", "straddle"] {
        match label.parse::<OptionType>() {
            Ok(t) => println!("   ✓ '{}' -> {}", label, t),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }

    // Test 5: Error type matching
    println!("\n5. Testing error type matching...");
    let bad_strike = OptionParameters {
        strike_price: 0.0,
        ..Default::default()
    };
    match bs_analytic::greeks(&bad_strike) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::InvalidParameter { field, value, constraint }) => {
            println!("   ✓ Caught InvalidParameter: {} = {} ({})", field, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
