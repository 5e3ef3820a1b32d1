// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging to see rejected run-time constructions:
//   cargo run --example basic_usage --features logging

use fixed_vector::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    fixed_vector::logging::init();

    println!("=== Fixed Vector Example ===\n");

    // Kinematics: advance a point along its velocity
    let position = Vector3d::new([0.0, 0.0, 10.0]);
    let velocity = Vector3d::new([3.0, 4.0, 0.0]);
    let dt = 0.25;

    let next = position + velocity * dt;
    println!("position:  {}", position);
    println!("velocity:  {}", velocity);
    println!("speed:     {:.3}", velocity.length());
    println!("next:      {}", next);
    println!("next (2dp) {:.2}\n", next);

    // Surface normal from two edges
    let edge_a = Vector3d::new([1.0, 0.0, 0.0]);
    let edge_b = Vector3d::new([0.0, 1.0, 0.0]);
    let normal = edge_a.cross(&edge_b);
    println!("normal:    {}", normal);
    println!("edge_a . normal = {}", edge_a * normal);
    if let Some(angle) = edge_a.angle_between(&edge_b) {
        println!("angle:     {:.4} rad\n", angle);
    }

    // Integer grid coordinates
    let cell = FixedVector::new([2i32, -1]);
    println!("cell:      {}", cell);
    println!("cell * 3:  {}\n", cell * 3);

    // Run-time input is checked
    let parsed: Vec<f64> = "1.5 2.5".split(' ').filter_map(|s| s.parse().ok()).collect();
    match Vector3d::from_slice(&parsed) {
        Ok(v) => println!("parsed:    {}", v),
        Err(e) => println!("rejected:  {}", e),
    }

    let wide = FixedVector::new([1.0, 0.0, 0.0, 0.0]);
    match wide.try_cross(&wide) {
        Ok(v) => println!("cross:     {}", v),
        Err(e) => println!("rejected:  {}", e),
    }
}
