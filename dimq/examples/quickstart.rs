//! Minimal end-to-end example: same-dimension addition and a derived velocity (length / time).

use dimq::{Length, Quantity, Time, Velocity};

fn main() {
    let len1 = Quantity::<Length, f32>::new(10.23);
    let len2 = Quantity::<Length, f32>::new(5.0);
    assert!(((len1 + len2).value() - 15.23).abs() < 1e-5);

    let d = Quantity::<Length>::new(1_000.0);
    let t = Quantity::<Time>::new(100.0);
    let v: Quantity<Velocity> = d / t;
    assert!((v.value() - 10.0).abs() < 1e-12);
    assert_eq!(v.dimension(), [0, 1, -1, 0, 0, 0, 0]);
}
