// File: crates/gascost/tests/convert.rs
// Purpose: The Ether axis conversion is the inverse of the Euro axis conversion.

use gascost::{EurEth, EUR_IN_ETH};
use gascost_chart::AxisConversion;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn default_rate() {
    assert_eq!(EurEth::default().eur_in_eth, EUR_IN_ETH);
    assert_eq!(EUR_IN_ETH, 1668.0);
}

#[test]
fn one_ether_is_the_rate() {
    let c = EurEth::default();
    assert_eq!(c.eth2eur(1.0), 1668.0);
    assert_eq!(c.eur2eth(1668.0), 1.0);
    assert_eq!(c.eur2eth(0.0), 0.0);
}

#[test]
fn conversions_are_mutual_inverses() {
    let c = EurEth::default();
    for v in [0.0, 1e-9, 0.25, 1.0, 3.7, 14.0, 1668.0, 123_456.789, -2.5] {
        assert!(close(c.eth2eur(c.eur2eth(v)), v), "eth2eur(eur2eth({v}))");
        assert!(close(c.eur2eth(c.eth2eur(v)), v), "eur2eth(eth2eur({v}))");
    }
}

#[test]
fn axis_conversion_uses_the_same_functions() {
    let c = EurEth::new(2000.0);
    assert_eq!(c.forward(14.0), c.eur2eth(14.0));
    assert_eq!(c.inverse(0.007), c.eth2eur(0.007));
}
