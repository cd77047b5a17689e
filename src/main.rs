use cayley_dickson::{abs, associator, inv, lift, sample_unit, Value, H, O, S};
use rand::prelude::*;
use std::f64::consts::PI;

// A point in 3-space.
#[derive(Clone, Copy, Debug)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
}

// Raises a point into the imaginary part of a quaternion.
fn raise(p: Point) -> H {
    H::new_quaternion(0.0, p.x, p.y, p.z)
}

// Rotates p by the quaternion `by`, scaling by `scale`.
fn rotate(p: Point, by: H, scale: f64) -> Point {
    let mut by = by;
    let len = abs(by);
    if len != scale {
        by = by.scale(scale.sqrt() / len);
    }

    let pp = by * raise(p) * by.conj();
    let e = pp.elems();
    Point { x: e[1], y: e[2], z: e[3] }
}

fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    // Clear negative zero so the table reads cleanly
    if r == 0.0 { 0.0 } else { r }
}

fn main() {
    println!("=== Quaternion Rotation: 120 degrees about [1, 1, 1] ===");

    let alpha = 2.0 * PI / 3.0;
    let mut q = raise(Point { x: 1.0, y: 1.0, z: 1.0 });
    q = q.scale((alpha / 2.0).sin() / abs(q));
    q = q + lift::<H>((alpha / 2.0).cos());
    println!("Rotor: {}", q);

    let corners = [
        Point { x: 0.0, y: 0.0, z: 0.0 },
        Point { x: 0.0, y: 0.0, z: 1.0 },
        Point { x: 0.0, y: 1.0, z: 0.0 },
        Point { x: 0.0, y: 1.0, z: 1.0 },
        Point { x: 1.0, y: 0.0, z: 0.0 },
        Point { x: 1.0, y: 0.0, z: 1.0 },
        Point { x: 1.0, y: 1.0, z: 0.0 },
        Point { x: 1.0, y: 1.0, z: 1.0 },
    ];
    for (i, p) in corners.iter().enumerate() {
        let pp = rotate(*p, q, 1.0);
        println!(
            "{} ({}, {}, {}) -> ({}, {}, {})",
            i,
            p.x,
            p.y,
            p.z,
            round2(pp.x),
            round2(pp.y),
            round2(pp.z)
        );
    }

    println!("\n=== Associativity Loss Up The Tower ===");
    let mut rng = StdRng::seed_from_u64(0x1337);

    let (x, y, z): (H, H, H) = (
        sample_unit(&mut rng),
        sample_unit(&mut rng),
        sample_unit(&mut rng),
    );
    println!("Quaternion |[x, y, z]| = {:e}", abs(associator(x, y, z)));

    let (x, y, z): (O, O, O) = (
        sample_unit(&mut rng),
        sample_unit(&mut rng),
        sample_unit(&mut rng),
    );
    println!("Octonion   |[x, y, z]| = {:e}", abs(associator(x, y, z)));

    let (x, y, z): (S, S, S) = (
        sample_unit(&mut rng),
        sample_unit(&mut rng),
        sample_unit(&mut rng),
    );
    println!("Sedenion   |[x, y, z]| = {:e}", abs(associator(x, y, z)));

    println!("\n=== Sedenion Zero Divisor ===");
    let mut a = [0.0; 16];
    a[3] = 1.0;
    a[10] = 1.0;
    let mut b = [0.0; 16];
    b[6] = 1.0;
    b[15] = -1.0;
    match (S::from_elems(&a), S::from_elems(&b)) {
        (Ok(a), Ok(b)) => {
            println!("a = {}", a);
            println!("b = {}", b);
            println!("a * b = {}", a * b);
            println!("|a| |b| = {}, |a b| = {}", abs(a) * abs(b), abs(a * b));
            println!("a * inv(a) = {}", a * inv(a));
        }
        (Err(e), _) | (_, Err(e)) => println!("[FAIL] {}", e),
    }
}
