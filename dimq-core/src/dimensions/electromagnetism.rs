//! Electrical dimensions derived from current and the mechanical dimensions.

use crate::base::{Current, Time};
use crate::mechanics::Power;
use crate::{DivDim, MulDim};

/// Electric charge (T·I).
pub type Charge = MulDim<Current, Time>;
/// Voltage, or electric potential difference (M·L²·T⁻³·I⁻¹).
pub type Voltage = DivDim<Power, Current>;
/// Electrical resistance (M·L²·T⁻³·I⁻²).
pub type Resistance = DivDim<Voltage, Current>;
/// Capacitance (M⁻¹·L⁻²·T⁴·I²).
pub type Capacitance = DivDim<Charge, Voltage>;
