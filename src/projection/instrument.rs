//! Instrument regimes: how contributions are posted and how often growth compounds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Savings instrument being projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    /// Systematic Investment Plan: monthly deposits, monthly compounding
    Sip,
    /// Recurring Deposit: monthly deposits, quarterly compounding
    Rd,
    /// Fixed Deposit: one annualized lump sum, annual compounding
    Fd,
}

impl InstrumentType {
    pub const ALL: [InstrumentType; 3] = [InstrumentType::Sip, InstrumentType::Rd, InstrumentType::Fd];

    /// Deposit schedule and compounding frequency for this instrument
    pub fn terms(&self) -> InstrumentTerms {
        match self {
            InstrumentType::Sip => InstrumentTerms {
                deposit: DepositSchedule::Monthly,
                compounding: Compounding::Monthly,
            },
            InstrumentType::Rd => InstrumentTerms {
                deposit: DepositSchedule::Monthly,
                compounding: Compounding::Quarterly,
            },
            InstrumentType::Fd => InstrumentTerms {
                deposit: DepositSchedule::AnnualLumpSum,
                compounding: Compounding::Annual,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstrumentType::Sip => "SIP",
            InstrumentType::Rd => "RD",
            InstrumentType::Fd => "FD",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstrumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sip" => Ok(InstrumentType::Sip),
            "rd" => Ok(InstrumentType::Rd),
            "fd" => Ok(InstrumentType::Fd),
            other => Err(format!("Unknown instrument type: {}", other)),
        }
    }
}

/// When contributions are posted into the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositSchedule {
    /// The monthly contribution every month
    Monthly,
    /// Twelve months of contributions deposited once, in month 1
    AnnualLumpSum,
}

impl DepositSchedule {
    /// Amount posted in `month` (1-indexed)
    pub fn amount_for_month(&self, month: u32, monthly_contribution: f64) -> f64 {
        match self {
            DepositSchedule::Monthly => monthly_contribution,
            DepositSchedule::AnnualLumpSum if month == 1 => monthly_contribution * 12.0,
            DepositSchedule::AnnualLumpSum => 0.0,
        }
    }
}

/// Compounding frequency. All instruments share the same nominal annual rate;
/// each frequency uses the equivalent rate for its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compounding {
    Monthly,
    Quarterly,
    /// Full nominal annual rate once every 12 months
    Annual,
}

impl Compounding {
    /// Length of one compounding period in months
    pub fn period_months(&self) -> u32 {
        match self {
            Compounding::Monthly => 1,
            Compounding::Quarterly => 3,
            Compounding::Annual => 12,
        }
    }

    /// Rate applied at the end of each period for a given annual rate (decimal)
    pub fn period_rate(&self, annual_rate: f64) -> f64 {
        match self {
            Compounding::Monthly => (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0,
            Compounding::Quarterly => (1.0 + annual_rate).powf(1.0 / 4.0) - 1.0,
            Compounding::Annual => annual_rate,
        }
    }

    /// Whether growth is applied at the end of `month` (1-indexed)
    pub fn applies_in(&self, month: u32) -> bool {
        month % self.period_months() == 0
    }
}

/// Deposit schedule and compounding pair carried by each instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentTerms {
    pub deposit: DepositSchedule,
    pub compounding: Compounding,
}
