use serde::{Deserialize, Serialize};

// ── RoundingMode ──────────────────────────────────────────────────────────────

/// How a value that lies exactly halfway between two tenths is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Banker's rounding: ties go to the even neighbour (`0.25 → 0.2`).
    #[default]
    HalfEven,
    /// Ties go away from zero (`0.25 → 0.3`, `-0.25 → -0.3`).
    HalfAwayFromZero,
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::HalfEven => write!(f, "half-even"),
            RoundingMode::HalfAwayFromZero => write!(f, "half-away-from-zero"),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Round the exact rational `numerator / denominator` to one decimal place.
///
/// The division is carried out on integers scaled by ten, so the tie case is
/// detected exactly instead of through a binary floating point approximation.
/// `denominator` must be positive.
///
/// # Examples
///
/// ```
/// use stats_core::rounding::{round_ratio_to_tenths, RoundingMode};
///
/// assert_eq!(round_ratio_to_tenths(1, 4, RoundingMode::HalfEven), 0.2);
/// assert_eq!(round_ratio_to_tenths(1, 4, RoundingMode::HalfAwayFromZero), 0.3);
/// assert_eq!(round_ratio_to_tenths(10, 3, RoundingMode::HalfEven), 3.3);
/// ```
pub fn round_ratio_to_tenths(numerator: i128, denominator: i128, mode: RoundingMode) -> f64 {
    debug_assert!(denominator > 0, "denominator must be positive");
    let tenths = round_div(numerator * 10, denominator, mode);
    tenths as f64 / 10.0
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Integer division `n / d` (with `d > 0`) rounded to the nearest integer.
fn round_div(n: i128, d: i128, mode: RoundingMode) -> i128 {
    let quotient = n.div_euclid(d);
    let remainder = n.rem_euclid(d);
    let twice = remainder * 2;

    if twice < d {
        return quotient;
    }
    if twice > d {
        return quotient + 1;
    }

    // Exactly halfway between `quotient` and `quotient + 1`.
    match mode {
        RoundingMode::HalfEven => {
            if quotient.rem_euclid(2) == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
        RoundingMode::HalfAwayFromZero => {
            if quotient >= 0 {
                quotient + 1
            } else {
                quotient
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
