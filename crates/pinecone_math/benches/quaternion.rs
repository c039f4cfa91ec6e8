use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pinecone_math::{Quaternion, Vector3};

fn mul_quaternion(c: &mut Criterion) {
    let a = Quaternion::from_axis_angle(&Vector3::unit_x(), 0.3);
    let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0), -1.2);
    c.bench_function("mul_quaternion", |b| b.iter(|| black_box(a) * black_box(q)));
}

fn invert_quaternion(c: &mut Criterion) {
    let q = Quaternion::new(2.0, -1.0, 0.5, 3.0);
    c.bench_function("invert_quaternion", |b| b.iter(|| black_box(q).inverse()));
}

fn quaternion_from_euler_angles(c: &mut Criterion) {
    let angles = Vector3::new(0.3, -1.1, 2.0);
    c.bench_function("quaternion_from_euler_angles", |b| {
        b.iter(|| Quaternion::from_euler_angles(&black_box(angles)))
    });
}

fn rotate_vector3(c: &mut Criterion) {
    let rotation = Quaternion::from_euler_angles(&Vector3::new(0.3, -1.1, 2.0));
    let v = Vector3::new(1.0, 2.0, 3.0);
    c.bench_function("rotate_vector3", |b| {
        b.iter(|| black_box(rotation).rotate_vector(&black_box(v)))
    });
}

criterion_group!(
    benches,
    mul_quaternion,
    invert_quaternion,
    quaternion_from_euler_angles,
    rotate_vector3,
);
criterion_main!(benches);
