//! Thermal and chemical dimensions.

use crate::base::{AmountOfSubstance, Mass, Temperature};
use crate::mechanics::{Energy, Volume};
use crate::DivDim;

/// Entropy (M·L²·T⁻²·Θ⁻¹).
pub type Entropy = DivDim<Energy, Temperature>;
/// Heat capacity of a body; same exponents as [`Entropy`].
pub type HeatCapacity = DivDim<Energy, Temperature>;
/// Specific heat capacity (L²·T⁻²·Θ⁻¹).
pub type SpecificHeatCapacity = DivDim<Entropy, Mass>;
/// Molar mass (M·N⁻¹).
pub type MolarMass = DivDim<Mass, AmountOfSubstance>;
/// Amount concentration (L⁻³·N).
pub type Concentration = DivDim<AmountOfSubstance, Volume>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Quantity};
    use approx::assert_relative_eq;

    #[test]
    fn named_exponents() {
        assert_eq!(Entropy::EXPONENTS, [1, 2, -2, 0, -1, 0, 0]);
        assert_eq!(HeatCapacity::EXPONENTS, Entropy::EXPONENTS);
        assert_eq!(SpecificHeatCapacity::EXPONENTS, [0, 2, -2, 0, -1, 0, 0]);
        assert_eq!(MolarMass::EXPONENTS, [1, 0, 0, 0, 0, 0, -1]);
        assert_eq!(Concentration::EXPONENTS, [0, -3, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn heat_to_warm_water() {
        let c: Quantity<SpecificHeatCapacity> = Quantity::new(4186.0);
        let m: Quantity<Mass> = Quantity::new(2.0);
        let dt: Quantity<Temperature> = Quantity::new(10.0);
        let q: Quantity<Energy> = c * m * dt;
        assert_relative_eq!(q.value(), 83_720.0, max_relative = 1e-12);
    }

    #[test]
    fn heat_capacity_is_specific_heat_times_mass() {
        let c: Quantity<SpecificHeatCapacity> = Quantity::new(4186.0);
        let m: Quantity<Mass> = Quantity::new(0.5);
        let body: Quantity<HeatCapacity> = c * m;
        let entropy: Quantity<Entropy> = body;
        assert_relative_eq!(entropy.value(), 2093.0, max_relative = 1e-12);
    }

    #[test]
    fn moles_from_mass() {
        let m: Quantity<Mass> = Quantity::new(0.036);
        let molar: Quantity<MolarMass> = Quantity::new(0.018);
        let n: Quantity<AmountOfSubstance> = m / molar;
        assert_relative_eq!(n.value(), 2.0, max_relative = 1e-12);
    }
}
