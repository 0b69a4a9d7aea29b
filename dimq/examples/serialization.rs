//! Examples of serializing and deserializing quantities.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use dimq::{Energy, Length, Quantity, Velocity};
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    // Bare values: the dimension lives in the type only.
    let distance = Quantity::<Length>::new(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("1. Length → JSON: {}", json);
    let back: Quantity<Length> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, distance);

    // Value plus exponents, checked on the way back in.
    #[derive(Serialize, Deserialize, Debug)]
    struct Runner {
        #[serde(with = "dimq::serde_with_dimension")]
        speed: Quantity<Velocity>,
        budget: Quantity<Energy>,
    }

    let runner = Runner {
        speed: Quantity::new(3.5),
        budget: Quantity::new(1.0e6),
    };
    let json = serde_json::to_string_pretty(&runner).unwrap();
    println!("2. Struct with dimension metadata:\n{}", json);

    let restored: Runner = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.speed, runner.speed);

    let wrong = r#"{"speed":{"value":1.0,"dimension":[0,1,0,0,0,0,0]},"budget":0.0}"#;
    let err = serde_json::from_str::<Runner>(wrong).unwrap_err();
    println!("3. Foreign dimension rejected: {}", err);
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
