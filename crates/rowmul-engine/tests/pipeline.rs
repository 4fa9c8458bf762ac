//! End-to-end pipeline: read operands from disk, multiply in parallel,
//! persist the product, read it back.

use ndarray::Array2;
use rowmul_engine::Coordinator;
use rowmul_matrix::io::{read_matrix, write_matrix};
use tempfile::TempDir;

#[test]
fn test_file_round_trip_through_engine() {
    let dir = TempDir::new().unwrap();
    let a_path = dir.path().join("a.txt");
    let b_path = dir.path().join("b.txt");
    let c_path = dir.path().join("c.txt");

    std::fs::write(&a_path, "1 2\n3 4\n").unwrap();
    std::fs::write(&b_path, "5 6\n7 8\n").unwrap();

    let a = read_matrix(&a_path).unwrap();
    let b = read_matrix(&b_path).unwrap();
    let c = Coordinator::new(2).run(&a, &b).unwrap();
    write_matrix(&c_path, &c).unwrap();

    let reloaded = read_matrix(&c_path).unwrap();
    assert_eq!(reloaded, ndarray::array![[19.0, 22.0], [43.0, 50.0]]);
}

#[test]
fn test_ones_pipeline_one_worker_per_row() {
    let dir = TempDir::new().unwrap();
    let a_path = dir.path().join("ones_a.txt");
    let b_path = dir.path().join("ones_b.txt");

    std::fs::write(&a_path, "1 1\n1 1\n1 1\n").unwrap();
    std::fs::write(&b_path, "1 1 1 1\n1 1 1 1\n").unwrap();

    let a = read_matrix(&a_path).unwrap();
    let b = read_matrix(&b_path).unwrap();
    let c = Coordinator::new(3).run(&a, &b).unwrap();
    assert_eq!(c, Array2::from_elem((3, 4), 2.0));
}
