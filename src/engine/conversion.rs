//! Fine to coarse size-unit conversion.

use super::distribution::SizeDistribution;
use crate::core::types::SizeCode;

/// Re-bucket a fine distribution onto the coarse grid (twice `fine_step`).
///
/// Sizes already on the coarse grid keep their full quantity. Sizes between
/// two coarse points give exactly half to each neighbor, so the total is
/// conserved. A coarse bucket inherits the simulated flag of any contributor.
pub fn to_coarse(fine: &SizeDistribution, fine_step: SizeCode) -> SizeDistribution {
    let coarse_step = fine_step * 2;
    let mut coarse = SizeDistribution::new();

    for (size, bucket) in fine.iter() {
        if size.rem_euclid(coarse_step) == 0 {
            coarse.add_bucket(size, bucket.quantity, bucket.simulated);
        } else {
            let half = bucket.quantity / 2.0;
            coarse.add_bucket(size - fine_step, half, bucket.simulated);
            coarse.add_bucket(size + fine_step, half, bucket.simulated);
        }
    }

    coarse
}
