//! Payment status resolution
//!
//! Derives a booking's [`PaymentStatus`] and pending balance from its total
//! and what has been paid. Pure and deterministic.
//!
//! | Paid | Status |
//! |------|--------|
//! | `0` | Pending |
//! | `0 < paid < total` | Partial |
//! | `paid >= total` | Paid |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::PaymentStatus;
use thiserror::Error;

use super::money::{MONEY_TOLERANCE, is_valid_amount, round_dp, to_decimal, to_f64};

/// Rejections from [`resolve`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("Total amount must be greater than 0, got {0}")]
    NonPositiveTotal(f64),

    #[error("Advance amount cannot be negative, got {0}")]
    NegativeAdvance(f64),

    #[error("Advance amount {advance} cannot be greater than total amount {total}")]
    InvalidAdvance { total: f64, advance: f64 },
}

/// Outcome of resolving a total against what was paid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub status: PaymentStatus,
    pub pending: f64,
}

/// Resolve status and pending balance for a total and an advance
///
/// An advance larger than the total is rejected instead of producing a
/// negative pending balance.
pub fn resolve(total: f64, advance: f64) -> Result<Resolution, ResolveError> {
    if !is_valid_amount(total) {
        return Err(ResolveError::NonPositiveTotal(total));
    }
    if !is_valid_amount(advance) || advance < 0.0 {
        return Err(ResolveError::NegativeAdvance(advance));
    }

    // Positivity holds for the stored, rounded total
    let total_dec = round_dec(total);
    if total_dec <= Decimal::ZERO {
        return Err(ResolveError::NonPositiveTotal(total));
    }
    let advance_dec = round_dec(advance);
    if advance_dec > total_dec {
        return Err(ResolveError::InvalidAdvance { total, advance });
    }

    Ok(classify(total_dec, advance_dec))
}

/// Resolve against the recorded payments of a booking
pub fn resolve_paid(
    total: f64,
    payments: impl IntoIterator<Item = f64>,
) -> Result<Resolution, ResolveError> {
    let paid: Decimal = payments.into_iter().map(to_decimal).sum();
    resolve(total, to_f64(paid))
}

fn round_dec(value: f64) -> Decimal {
    round_dp(to_decimal(value))
}

fn classify(total: Decimal, paid: Decimal) -> Resolution {
    let pending = (total - paid).max(Decimal::ZERO);

    let status = if pending < MONEY_TOLERANCE {
        PaymentStatus::Paid
    } else if paid > Decimal::ZERO {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Pending
    };

    let pending = if status == PaymentStatus::Paid {
        Decimal::ZERO
    } else {
        pending
    };

    Resolution {
        status,
        pending: to_f64(pending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pending() {
        let r = resolve(1000.0, 0.0).unwrap();
        assert_eq!(r.status, PaymentStatus::Pending);
        assert_eq!(r.pending, 1000.0);
    }

    #[test]
    fn test_resolve_partial() {
        let r = resolve(1000.0, 400.0).unwrap();
        assert_eq!(r.status, PaymentStatus::Partial);
        assert_eq!(r.pending, 600.0);
    }

    #[test]
    fn test_resolve_paid() {
        let r = resolve(1000.0, 1000.0).unwrap();
        assert_eq!(r.status, PaymentStatus::Paid);
        assert_eq!(r.pending, 0.0);
    }

    #[test]
    fn test_resolve_rejects_advance_over_total() {
        let err = resolve(1000.0, 1200.0).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidAdvance {
                total: 1000.0,
                advance: 1200.0
            }
        );
    }

    #[test]
    fn test_resolve_rejects_negative_advance() {
        assert_eq!(
            resolve(1000.0, -1.0).unwrap_err(),
            ResolveError::NegativeAdvance(-1.0)
        );
    }

    #[test]
    fn test_resolve_rejects_non_positive_total() {
        assert_eq!(
            resolve(0.0, 0.0).unwrap_err(),
            ResolveError::NonPositiveTotal(0.0)
        );
        assert!(matches!(
            resolve(f64::NAN, 0.0),
            Err(ResolveError::NonPositiveTotal(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_sub_cent_total() {
        assert_eq!(
            resolve(0.004, 0.0).unwrap_err(),
            ResolveError::NonPositiveTotal(0.004)
        );
        assert!(resolve_paid(0.001, []).is_err());

        // Half a cent rounds up to a chargeable amount
        let r = resolve(0.005, 0.0).unwrap();
        assert_eq!(r.pending, 0.01);
    }

    #[test]
    fn test_resolve_fractional_amounts() {
        let r = resolve(2999.99, 999.99).unwrap();
        assert_eq!(r.status, PaymentStatus::Partial);
        assert_eq!(r.pending, 2000.0);
    }

    #[test]
    fn test_resolve_paid_sums_payments() {
        let r = resolve_paid(2000.0, [500.0, 700.0]).unwrap();
        assert_eq!(r.status, PaymentStatus::Partial);
        assert_eq!(r.pending, 800.0);

        let r = resolve_paid(2000.0, [500.0, 1500.0]).unwrap();
        assert_eq!(r.status, PaymentStatus::Paid);

        let r = resolve_paid(2000.0, []).unwrap();
        assert_eq!(r.status, PaymentStatus::Pending);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        assert_eq!(resolve(1500.0, 300.0), resolve(1500.0, 300.0));
    }
}
