//! Naming dimensions that aren't predefined, with `dim!` and with `MulDim`/`DivDim`.

use dimq::{dim, Acceleration, DivDim, Dimension, Length, Quantity, Time};

/// Rate of change of acceleration.
type Jerk = DivDim<Acceleration, Time>;

/// Same thing, spelled out.
type JerkByHand = dim!(length = 1, time = -3);

fn main() {
    assert_eq!(<Jerk as Dimension>::EXPONENTS, <JerkByHand as Dimension>::EXPONENTS);

    let a: Quantity<Acceleration> = Quantity::new(12.0);
    let j: Quantity<JerkByHand> = a / Quantity::<Time>::new(4.0);
    let same: Quantity<Jerk> = j;
    assert_eq!(same.value(), 3.0);

    // Exponents can be read back at run time.
    for axis in dimq::BaseDimension::ALL {
        let e = Jerk::exponent(axis);
        if e != 0 {
            println!("{}^{}", axis.name(), e);
        }
    }

    let side: Quantity<Length> = (Quantity::<Length>::new(3.0).squared() + Quantity::<Length>::new(4.0).squared()).sqrt();
    assert_eq!(side.value(), 5.0);
}
