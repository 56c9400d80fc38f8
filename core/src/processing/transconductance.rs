use crate::interface::Sweep;
use crate::math::derivative::StableDerivative;
use crate::prelude::TransferResult;

/// gm = dI/dVg over the whole sweep and each leg.
pub fn transconductance(vg: &Sweep, current: &Sweep) -> TransferResult<Sweep> {
    Ok(Sweep::new(
        StableDerivative::differentiate(current.raw.view(), vg.raw.view())?,
        StableDerivative::differentiate(current.forward.view(), vg.forward.view())?,
        StableDerivative::differentiate(current.reverse.view(), vg.reverse.view())?,
    ))
}
