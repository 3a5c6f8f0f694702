//! Tax configuration model and related types.
//!
//! This module defines the [`TaxConfiguration`] struct and [`TaxType`] enum
//! describing the tax regime applied to an invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of GST applied to an invoice.
///
/// CGST+SGST and IGST are mutually exclusive on one invoice: the split
/// applies to intra-state transactions, IGST to inter-state ones. The
/// variant is authoritative; rates stored for the other kind are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxType {
    /// Intra-state transaction: the CGST+SGST split applies.
    #[serde(rename = "CGST")]
    Cgst,
    /// Inter-state transaction: IGST applies.
    #[serde(rename = "IGST")]
    Igst,
    /// No GST applies to this invoice.
    None,
}

/// The tax regime applied to one invoice.
///
/// Rates are percentages. A rate left absent on the wire defaults to zero,
/// and rates for a tax kind not matching `tax_type` are treated as zero
/// regardless of their stored value. The fuel surcharge is not a GST-gated
/// rate: it applies to the taxable base whenever it is non-zero.
///
/// # Example
///
/// ```
/// use invoice_engine::models::{TaxConfiguration, TaxType};
/// use rust_decimal::Decimal;
///
/// let tax = TaxConfiguration::cgst(Decimal::from(9), Decimal::from(9));
/// assert_eq!(tax.tax_type, TaxType::Cgst);
/// assert_eq!(tax.igst_rate, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    /// Which kind of GST applies.
    #[serde(rename = "type")]
    pub tax_type: TaxType,
    /// CGST percentage; effective only when `tax_type` is [`TaxType::Cgst`].
    #[serde(default)]
    pub cgst_rate: Decimal,
    /// SGST percentage; effective only when `tax_type` is [`TaxType::Cgst`].
    #[serde(default)]
    pub sgst_rate: Decimal,
    /// IGST percentage; effective only when `tax_type` is [`TaxType::Igst`].
    #[serde(default)]
    pub igst_rate: Decimal,
    /// Fuel surcharge percentage, applied independently of `tax_type`.
    #[serde(default)]
    pub fuel_surcharge_rate: Decimal,
}

impl TaxConfiguration {
    /// Creates an intra-state configuration with the given CGST and SGST
    /// percentages.
    pub fn cgst(cgst_rate: Decimal, sgst_rate: Decimal) -> Self {
        Self {
            tax_type: TaxType::Cgst,
            cgst_rate,
            sgst_rate,
            igst_rate: Decimal::ZERO,
            fuel_surcharge_rate: Decimal::ZERO,
        }
    }

    /// Creates an inter-state configuration with the given IGST percentage.
    pub fn igst(igst_rate: Decimal) -> Self {
        Self {
            tax_type: TaxType::Igst,
            cgst_rate: Decimal::ZERO,
            sgst_rate: Decimal::ZERO,
            igst_rate,
            fuel_surcharge_rate: Decimal::ZERO,
        }
    }

    /// Creates a configuration with no GST.
    pub fn none() -> Self {
        Self {
            tax_type: TaxType::None,
            cgst_rate: Decimal::ZERO,
            sgst_rate: Decimal::ZERO,
            igst_rate: Decimal::ZERO,
            fuel_surcharge_rate: Decimal::ZERO,
        }
    }

    /// Returns the configuration with the fuel surcharge percentage set.
    pub fn with_fuel_surcharge(mut self, rate: Decimal) -> Self {
        self.fuel_surcharge_rate = rate;
        self
    }
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self::none()
    }
}
