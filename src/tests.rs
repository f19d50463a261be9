use crate::{
    board::{BoardSize, Square},
    network::{AdjacencyIndex, MoveGraph},
    search::{
        extract::extract_cycle,
        knights_tour,
        relaxation::{Convergence, Relaxation, DEFAULT_MAX_ITERATIONS},
        SearchConfig, TourError,
    },
};

fn squares(coords: &[(u16, u16)]) -> Vec<Square> {
    coords.iter().map(|&(col, row)| Square::new(col, row)).collect()
}

/// A closed knight's tour of the 6x6 board, starting from the origin.
pub(crate) fn six_by_six_tour() -> Vec<Square> {
    squares(&[
        (0, 0),
        (1, 2),
        (2, 4),
        (0, 5),
        (1, 3),
        (0, 1),
        (2, 0),
        (4, 1),
        (5, 3),
        (4, 5),
        (3, 3),
        (5, 2),
        (3, 1),
        (5, 0),
        (4, 2),
        (5, 4),
        (3, 5),
        (1, 4),
        (0, 2),
        (1, 0),
        (2, 2),
        (3, 4),
        (5, 5),
        (4, 3),
        (5, 1),
        (3, 0),
        (1, 1),
        (0, 3),
        (1, 5),
        (2, 3),
        (0, 4),
        (2, 5),
        (4, 4),
        (3, 2),
        (4, 0),
        (2, 1),
    ])
}

/// Two disjoint 4-cycles of the 4x4 board, the first going through the origin.
pub(crate) fn four_by_four_cycles() -> (Vec<Square>, Vec<Square>) {
    (
        squares(&[(0, 0), (1, 2), (3, 3), (2, 1)]),
        squares(&[(0, 1), (2, 0), (3, 2), (1, 3)]),
    )
}

#[test]
fn relaxation_from_tour_yields_tour() {
    let graph = MoveGraph::build(BoardSize::new(6, 6).unwrap());
    let adjacency = AdjacencyIndex::build(&graph);
    let activation = graph.activation_of_cycle(&six_by_six_tour()).unwrap();

    let mut relaxation = Relaxation::from_activation(activation);
    assert!(matches!(
        relaxation.relax(&graph, &adjacency, DEFAULT_MAX_ITERATIONS),
        Convergence::TwoRegular { .. }
    ));
    let tour = extract_cycle(&graph, relaxation.activation()).unwrap();
    assert_eq!(tour.path(), six_by_six_tour());
}

#[test]
fn every_index_appears_once() {
    let outcome = SearchConfig::new()
        .with_workers(1)
        .with_seed(6)
        .with_max_trials(10_000)
        .run(BoardSize::new(6, 6).unwrap())
        .unwrap();
    let tour = outcome.tour().unwrap();

    let mut indices: Vec<u32> = tour.rows().flatten().copied().collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..36).collect::<Vec<_>>());
}

#[test]
fn rectangular_board() {
    let outcome = SearchConfig::new()
        .with_workers(1)
        .with_seed(12)
        .with_max_trials(50_000)
        .run(BoardSize::new(3, 10).unwrap())
        .unwrap();
    let tour = outcome.tour().unwrap();
    assert!(tour.is_closed_knights_tour());
    assert_eq!(tour.rows().count(), 10);
}

#[test]
fn entry_point_terminates() {
    let (tour, rate) = knights_tour(6, 6).unwrap();
    assert!(tour.is_closed_knights_tour());
    assert!(rate.as_f64() > 0. && rate.as_f64() <= 1.);

    assert_eq!(
        knights_tour(1, 1),
        Err(TourError::DegenerateBoard(BoardSize::new(1, 1).unwrap()))
    );
    assert_eq!(
        knights_tour(5, 5),
        Err(TourError::NoClosedTour(BoardSize::new(5, 5).unwrap()))
    );
}
