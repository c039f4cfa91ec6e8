#![no_main]

use libfuzzer_sys::fuzz_target;
use pinecone_math::Vector3;

fuzz_target!(|vectors: (Vector3, Vector3)| {
    let (a, b) = vectors;
    if !(a.is_finite() && b.is_finite()) || a.norm_squared() > 1e12 || b.norm_squared() > 1e12 {
        return;
    }

    let normalized = a.normalized();
    assert!(normalized == Vector3::zeros() || (normalized.norm() - 1.0).abs() < 1e-4);

    let angle = a.angle_to(&b).degrees();
    assert!((0.0..=180.001).contains(&angle));

    assert_eq!(a.cross(&b), -b.cross(&a));
    assert_eq!(a.lerp(&b, 2.0), a.lerp(&b, 1.0));
});
