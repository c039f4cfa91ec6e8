#![no_main]

use libfuzzer_sys::fuzz_target;
use pinecone_math::{Quaternion, Vector2, Vector3, interop};

fuzz_target!(|components: Vec<f32>| {
    match interop::from_components::<Vector3>(&components) {
        Ok(records) => assert_eq!(records.len() * 3, components.len()),
        Err(_) => assert_ne!(components.len() % 3, 0),
    }

    if let Ok(records) = interop::from_components::<Vector2>(&components) {
        assert_eq!(interop::as_components(records).len(), components.len());
    }

    if let Ok(records) = interop::from_components::<Quaternion>(&components) {
        for (record, chunk) in records.iter().zip(components.chunks_exact(4)) {
            assert_eq!(record.w.to_bits(), chunk[0].to_bits());
            assert_eq!(record.to_vector4().w.to_bits(), chunk[0].to_bits());
        }
    }
});
