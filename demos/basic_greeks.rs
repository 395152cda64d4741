// demos/basic_greeks.rs
use bsm_greeks::analytics::bs_analytic;
use bsm_greeks::models::{OptionField, OptionParameters, OptionType, DAYS_PER_YEAR};
use bsm_greeks::output;
use bsm_greeks::sweep::{par_sweep, sweep, SweepAxis};
use bsm_greeks::{Metric, MetricSet};

fn main() {
    println!("bsm-greeks demo");
    println!("===============\n");

    // Dashboard defaults: S=30, K=50, r=3%, 250 days, sigma=30%
    let base = OptionParameters::default();

    println!("1. Single valuation (call and put)");
    for option_type in [OptionType::Call, OptionType::Put] {
        let params = base.with_option_type(option_type);
        let g = bs_analytic::greeks(&params).expect("Valid parameters");
        println!(
            "   {:<4} price={:.4} delta={:.4} gamma={:.4} theta={:.5} vega={:.4} rho={:.4}",
            option_type, g.price, g.delta, g.gamma, g.theta, g.vega, g.rho
        );
    }

    let call = bs_analytic::price(&base).expect("Valid parameters");
    let put = bs_analytic::price(&base.with_option_type(OptionType::Put)).expect("Valid parameters");
    let parity = base.spot_price - base.strike_price * (-base.risk_free_rate * base.time_to_expiry).exp();
    println!("   put-call parity: C - P = {:.8}, S - K*e^(-rT) = {:.8}", call - put, parity);

    println!("\n2. Time decay toward expiry (every 50th day)");
    let axis = SweepAxis::days_to_expiry(250);
    let decay = sweep(&base, &axis).expect("Valid sweep");
    for (t, g) in decay.points().step_by(50) {
        println!(
            "   {:>5.0} days  price={:.4}  theta={:.5}",
            t * DAYS_PER_YEAR,
            g.price,
            g.theta
        );
    }

    println!("\n3. Parallel spot sweep");
    let spot_axis = SweepAxis::preset(OptionField::SpotPrice, &base).expect("Valid axis");
    let spot = par_sweep(&base, &spot_axis).expect("Valid sweep");
    let deltas = spot.series(Metric::Delta);
    println!(
        "   delta from {:.4} at S={} to {:.4} at S={}",
        deltas[0],
        spot.values()[0],
        deltas[deltas.len() - 1],
        spot.values()[spot.len() - 1]
    );

    match output::write_sweep_to_csv("spot_sweep.csv", &spot, MetricSet::PRICE | MetricSet::DELTA | MetricSet::GAMMA) {
        Ok(_) => println!("   series written to spot_sweep.csv"),
        Err(e) => eprintln!("Error writing sweep data: {}", e),
    }
}
