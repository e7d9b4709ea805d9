//! Shared DAG fixtures for the search and runner tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use adversarial_search::{
    Evaluation, Player,
    games::{DagState, GameDag},
};

/// Terminal evaluations from `(node, p1, p2)` triples
pub fn evals(pairs: &[(usize, f64, f64)]) -> BTreeMap<usize, Evaluation> {
    pairs
        .iter()
        .map(|&(node, p1, p2)| (node, Evaluation::new(p1, p2)))
        .collect()
}

/// `n` x `n` adjacency matrix with the given edges
pub fn matrix(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![false; n]; n];
    for &(from, to) in edges {
        matrix[from][to] = true;
    }
    matrix
}

/// Two-level DAG: 0 -> {1, 2}, 1 -> {3, 4}, 2 -> {5, 6}
///
/// Node 1 backs up min(-1, -2) = -2 and node 2 backs up min(-3, -4) = -4, so
/// player one's best action is 1 with value -2.
pub fn two_level_dag() -> GameDag {
    GameDag::new(
        matrix(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]),
        DagState::new(0, Player::One),
        evals(&[(3, -1.0, 1.0), (4, -2.0, 2.0), (5, -3.0, 3.0), (6, -4.0, 4.0)]),
    )
    .unwrap()
}

/// Thirteen-node DAG: root with three children of three leaves each
///
/// Backed-up values are -5, 2 and -16 for nodes 1, 2 and 3; the best action
/// is 2 with value 2.
pub fn branching_dag() -> GameDag {
    let mut edges = Vec::new();
    for child in 1..=3 {
        edges.push((0, child));
        for leaf in 0..3 {
            edges.push((child, 1 + 3 * child + leaf));
        }
    }
    GameDag::new(
        matrix(13, &edges),
        DagState::new(0, Player::One),
        evals(&[
            (4, -1.0, 1.0),
            (5, -4.0, 4.0),
            (6, -5.0, 5.0),
            (7, 2.0, -2.0),
            (8, 3.0, -3.0),
            (9, 8.0, -8.0),
            (10, -16.0, 16.0),
            (11, -3.0, 3.0),
            (12, -16.0, 16.0),
        ]),
    )
    .unwrap()
}

/// DAG from an upper-triangular edge mask: node `i` links to `j > i` when
/// `mask[i][j]` is set, nodes without edges are terminal and score
/// `(values[i], -values[i])`
pub fn dag_from_mask(mask: &[Vec<bool>], values: &[i32]) -> GameDag {
    let n = mask.len();
    let matrix: Vec<Vec<bool>> = (0..n)
        .map(|i| (0..n).map(|j| j > i && mask[i][j]).collect())
        .collect();
    let terminals = (0..n)
        .filter(|&i| !matrix[i].iter().any(|&edge| edge))
        .map(|i| (i, Evaluation::new(values[i] as f64, -values[i] as f64)))
        .collect();
    GameDag::new(matrix, DagState::new(0, Player::One), terminals).unwrap()
}
