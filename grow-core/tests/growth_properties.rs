use grow_core::branch::Branch;
use grow_core::config::{Config, UniformRange};
use grow_core::driver::{Budget, Driver};
use grow_core::geometry::{inside_disk, segments_intersect};
use grow_core::sampler::RandomSampler;
use grow_core::tree::Tree;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn grown_tree(seed: u64, calls: usize) -> Tree {
    let cfg = Config::default();
    let mut src = RandomSampler::new(&cfg, StdRng::seed_from_u64(seed)).unwrap();
    let mut tree = Tree::with_vertical_root(0.7, cfg.disk_radius).unwrap();
    for _ in 0..calls {
        tree.grow(&mut src).unwrap();
    }
    tree
}

fn assert_invariants(tree: &Tree) {
    let b = tree.branches();
    for br in b {
        assert!(inside_disk(br.tip(), tree.disk_radius()), "tip outside: {br}");
    }
    // Each branch was checked against everything before it on insertion.
    for later in 1..b.len() {
        for earlier in 0..later {
            assert!(
                !segments_intersect(b[later].base(), b[later].tip(), b[earlier].base(), b[earlier].tip()),
                "{} crosses {}",
                b[later],
                b[earlier]
            );
        }
    }
}

#[test]
fn same_seed_gives_identical_branch_sequence() {
    let a = grown_tree(2024, 300);
    let b = grown_tree(2024, 300);
    assert_eq!(a.branches(), b.branches());
}

#[test]
fn different_seeds_diverge() {
    let a = grown_tree(1, 50);
    let b = grown_tree(2, 50);
    assert_ne!(a.branches(), b.branches());
}

#[test]
fn root_of_any_valid_length_fits_radius_at_least_as_long() {
    for i in 0..=10 {
        let length = 0.5 + 0.05 * f64::from(i);
        let tree = Tree::with_vertical_root(length, length).unwrap();
        assert!(inside_disk(tree.root().tip(), length));
        assert!(Tree::with_vertical_root(length, 5.0).is_ok());
    }
}

#[test]
fn child_counts_sum_to_non_root_branches() {
    let tree = grown_tree(9, 400);
    let total: u32 = tree.branches().iter().map(Branch::child_count).sum();
    assert_eq!(total as usize, tree.len() - 1);
}

#[test]
fn five_hundred_successful_grows_give_501_branches() {
    let cfg = Config::default();
    let mut src = RandomSampler::new(&cfg, StdRng::seed_from_u64(77)).unwrap();
    let mut tree = Tree::with_vertical_root(0.7, 5.0).unwrap();

    let mut successes = 0;
    let mut calls = 0;
    while successes < 500 {
        calls += 1;
        assert!(calls < 5_000, "disk saturated before 500 branches");
        if tree.grow(&mut src).unwrap().is_some() {
            successes += 1;
        }
    }

    assert_eq!(tree.len(), 501);
    assert_invariants(&tree);
}

#[test]
fn driver_output_respects_invariants() {
    let cfg = Config::default();
    let mut src = RandomSampler::new(&cfg, StdRng::seed_from_u64(123)).unwrap();
    let mut tree = Tree::with_vertical_root(0.7, cfg.disk_radius).unwrap();

    let report = Driver::new(Budget::iterations(600))
        .unwrap()
        .run(&mut tree, &mut src)
        .unwrap();

    assert_eq!(tree.len() as u64, 1 + report.accepted);
    assert_invariants(&tree);
}

#[test]
fn growth_is_a_no_op_when_nothing_fits() {
    // Every child is at least 4 long but must land within 1.5 of the origin.
    let mut cfg = Config::default();
    cfg.disk_radius = 1.5;
    cfg.length = UniformRange::new(4.0, 5.0);
    let mut src = RandomSampler::new(&cfg, StdRng::seed_from_u64(4)).unwrap();
    let mut tree = Tree::with_vertical_root(1.0, cfg.disk_radius).unwrap();

    let report = Driver::new(Budget::iterations(100))
        .unwrap()
        .run(&mut tree, &mut src)
        .unwrap();

    assert_eq!(report.accepted, 0);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root().child_count(), 0);
}
