//! Perft (path count) tests for move generation.

use crate::board::{GameState, Rules, START_LAYOUT};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    layout: &'static str,
    friendly_hop: bool,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        layout: START_LAYOUT,
        friendly_hop: false,
        depths: &[(1, 7), (2, 49)],
    },
    TestPosition {
        name: "Initial Position (friendly hop)",
        layout: START_LAYOUT,
        friendly_hop: true,
        depths: &[(1, 13)],
    },
    TestPosition {
        name: "Lone Men",
        layout: "......../......../......../......../......../......../..b...../.w...... w",
        friendly_hop: false,
        depths: &[(1, 2), (2, 2)],
    },
    TestPosition {
        name: "Centre King",
        layout: "......../......../......../...W..../......../......../......../.b...... w",
        friendly_hop: false,
        depths: &[(1, 4), (2, 0)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let rules = Rules::standard().with_friendly_hop(position.friendly_hop);
        let game = GameState::from_layout(position.layout, rules).unwrap();

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = game.perft(depth);
            let duration = start.elapsed();

            println!("  Depth {}: {} nodes in {:?}", depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_perft_depth_zero() {
    assert_eq!(GameState::new().perft(0), 1);
}
