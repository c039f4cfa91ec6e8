#![no_main]

use libfuzzer_sys::fuzz_target;
use pinecone_math::{Quaternion, Vector3};

fuzz_target!(|input: (Vector3, f32, Vector3)| {
    let (axis, angle, vector) = input;
    if !(axis.is_finite() && angle.is_finite() && vector.is_finite())
        || !(1e-3..1e6).contains(&axis.norm())
        || vector.norm() > 1e3
    {
        return;
    }

    let rotation = Quaternion::from_axis_angle(&axis, angle);
    assert!((rotation.norm() - 1.0).abs() < 1e-4);

    let rotated = rotation.rotate_vector(&vector);
    assert!((rotated.norm() - vector.norm()).abs() < 1e-2);

    let restored = rotation.inverse().rotate_vector(&rotated);
    assert!((restored - vector).norm() < 1e-2);
});
