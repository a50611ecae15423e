// File: crates/gascost/src/convert.rs
// Summary: EUR <-> ETH unit conversion backing the secondary (Ether) axis.

use gascost_chart::AxisConversion;

/// Default EUR price of one Ether.
pub const EUR_IN_ETH: f64 = 1668.0;

/// Fixed exchange rate between the chart currency and Ether.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EurEth {
    /// EUR per ETH; finite and positive.
    pub eur_in_eth: f64,
}

impl EurEth {
    pub fn new(eur_in_eth: f64) -> Self {
        Self { eur_in_eth }
    }

    pub fn eur2eth(&self, eur: f64) -> f64 {
        eur / self.eur_in_eth
    }

    pub fn eth2eur(&self, eth: f64) -> f64 {
        self.eur_in_eth * eth
    }
}

impl Default for EurEth {
    fn default() -> Self {
        Self::new(EUR_IN_ETH)
    }
}

impl AxisConversion for EurEth {
    fn forward(&self, v: f64) -> f64 {
        self.eur2eth(v)
    }

    fn inverse(&self, v: f64) -> f64 {
        self.eth2eur(v)
    }
}
