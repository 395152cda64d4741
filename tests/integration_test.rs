// tests/integration_test.rs
use bsm_greeks::analytics::bs_analytic;
use bsm_greeks::config::SweepConfig;
use bsm_greeks::error::PricingError;
use bsm_greeks::models::{years_from_days, OptionField, OptionParameters, OptionType};
use bsm_greeks::output;
use bsm_greeks::sweep::{par_sweep, sweep, SweepAxis};
use bsm_greeks::{Metric, MetricSet};

#[test]
fn test_time_sweep_keeps_descending_order() {
    let base = OptionParameters::default();
    let axis = SweepAxis::days_to_expiry(250);
    let result = sweep(&base, &axis).expect("Valid sweep");

    assert_eq!(result.len(), 250);
    assert_eq!(result.values(), axis.values.as_slice());
    for (i, (t, g)) in result.points().enumerate() {
        let days = 250 - i;
        assert_eq!(t, years_from_days(days as f64));
        let expected = bs_analytic::price(&base.with_days_to_expiry(days as f64)).unwrap();
        assert_eq!(g.price, expected, "price misaligned at day {}", days);
    }

    // OTM call loses value as expiry approaches
    let prices = result.price();
    assert!(prices[0] > prices[prices.len() - 1]);
}

#[test]
fn test_time_sweep_fails_atomically_at_expiry() {
    let base = OptionParameters::default();
    let values: Vec<f64> = (-2..=5).rev().map(|d| years_from_days(d as f64)).collect();
    let axis = SweepAxis::new(OptionField::TimeToExpiry, values);

    let err = sweep(&base, &axis).unwrap_err();
    match &err {
        PricingError::InvalidSweepPoint {
            field,
            index,
            value,
            source,
        } => {
            assert_eq!(*field, OptionField::TimeToExpiry);
            assert_eq!(*index, 5);
            assert_eq!(*value, 0.0);
            assert!(matches!(
                **source,
                PricingError::InvalidParameter {
                    field: OptionField::TimeToExpiry,
                    ..
                }
            ));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(par_sweep(&base, &axis).unwrap_err(), err);
}

#[test]
fn test_every_field_can_be_swept() {
    let base = OptionParameters::default().with_option_type(OptionType::Put);

    for field in OptionField::ALL {
        let axis = SweepAxis::preset(field, &base).expect("Preset axes are valid");
        let result = sweep(&base, &axis).expect("Preset axes are valid");
        assert_eq!(result.field(), field);
        assert_eq!(result.len(), axis.len());

        for (i, &x) in axis.values.iter().enumerate() {
            let expected = bs_analytic::greeks(&base.with_value(field, x)).unwrap();
            assert_eq!(result.get(i), Some(expected));
        }
    }
}

#[test]
fn test_parallel_sweep_matches_serial() {
    let base = OptionParameters::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call).unwrap();
    let axis = SweepAxis::linspace(OptionField::Volatility, 0.01, 1.5, 10_000).unwrap();

    let serial = sweep(&base, &axis).unwrap();
    let parallel = par_sweep(&base, &axis).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn test_rate_sweep_moves_rho_and_price() {
    let base = OptionParameters::default();
    let axis = SweepAxis::preset(OptionField::RiskFreeRate, &base).unwrap();
    let result = sweep(&base, &axis).unwrap();

    let price = result.series(Metric::Price);
    let rho = result.series(Metric::Rho);
    assert!(price.windows(2).all(|w| w[1] > w[0]), "call price should rise with rates");
    assert!(rho.iter().all(|&r| r > 0.0));
}

#[test]
fn test_config_driven_sweep_to_csv() {
    let text = r#"
        metrics = ["price", "delta"]

        [base]
        spot_price = 100.0
        strike_price = 100.0
        risk_free_rate = 0.05
        time_to_expiry = 1.0
        volatility = 0.2

        [sweep]
        field = "strike_price"
        values = [90.0, 100.0, 110.0]
    "#;
    let config = SweepConfig::from_toml_str(text).unwrap();
    config.validate().unwrap();
    let axis = config.axis().unwrap().unwrap();
    let result = sweep(&config.base, &axis).unwrap();

    let mut buf = Vec::new();
    output::write_sweep(&mut buf, &result, config.metric_set()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(config.metric_set(), MetricSet::PRICE | MetricSet::DELTA);
    assert_eq!(rows[0], "strike_price,price,delta");
    assert_eq!(rows.len(), 4);
    let atm_price: f64 = rows[2].split(',').nth(1).unwrap().parse().unwrap();
    assert!((atm_price - 10.450583572185565).abs() < 1e-8);
}

#[test]
fn test_sweep_result_serializes_series() {
    let base = OptionParameters::default();
    let axis = SweepAxis::new(OptionField::SpotPrice, vec![25.0, 35.0]);
    let result = sweep(&base, &axis).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["axis"]["field"], "spot_price");
    assert_eq!(json["price"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(json["delta"][1].as_f64(), Some(result.delta()[1]));
}
