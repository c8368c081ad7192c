//! Input validation using Validation to accumulate every violation.

use crate::puzzle::error::{InputViolation, QuantityRole};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result type of every input check
pub type InputCheck = Validation<(), NonEmptyVec<InputViolation>>;

/// Check the raw puzzle lists, accumulating ALL violations.
///
/// A length mismatch is reported alone, since per-container checks cannot
/// line the lists up.
pub fn validate_input(capacities: &[u32], initial: &[u32], target: &[u32]) -> InputCheck {
    if capacities.len() != initial.len() || capacities.len() != target.len() {
        return Validation::fail(InputViolation::LengthMismatch {
            capacities: capacities.len(),
            initial: initial.len(),
            target: target.len(),
        });
    }

    let mut checks: Vec<InputCheck> = Vec::with_capacity(capacities.len() * 3);

    for (index, &capacity) in capacities.iter().enumerate() {
        checks.push(check_capacity(index, capacity));
        checks.push(check_quantity(
            index,
            QuantityRole::Initial,
            initial[index],
            capacity,
        ));
        checks.push(check_quantity(
            index,
            QuantityRole::Target,
            target[index],
            capacity,
        ));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_capacity(index: usize, capacity: u32) -> InputCheck {
    if capacity == 0 {
        Validation::fail(InputViolation::ZeroCapacity { index })
    } else {
        Validation::success(())
    }
}

fn check_quantity(index: usize, role: QuantityRole, quantity: u32, capacity: u32) -> InputCheck {
    if quantity > capacity {
        Validation::fail(InputViolation::QuantityExceedsCapacity {
            index,
            role,
            quantity,
            capacity,
        })
    } else {
        Validation::success(())
    }
}
