use crate::{
    Cell, Error, Fill, Grid, Selector, Status, create_grid,
    engine::{live_neighbors, neighbors, next_generation, next_status, toggle_cell_state},
};
use itertools::Itertools;
use std::str::FromStr;

const BLOCK: &str = "
    ......
    ......
    ..oo..
    ..oo..
    ......
    ......";

const BLINKER: [&str; 3] = [
    "
    .....
    .....
    .ooo.
    .....
    .....",
    "
    .....
    ..o..
    ..o..
    ..o..
    .....",
    "
    .....
    .....
    .ooo.
    .....
    .....",
];

const GLIDER: [&str; 5] = [
    "
    .o....
    ..o...
    ooo...
    ......
    ......",
    "
    ......
    o.o...
    .oo...
    .o....
    ......",
    "
    ......
    ..o...
    o.o...
    .oo...
    ......",
    "
    ......
    .o....
    ..oo..
    .oo...
    ......",
    "
    ......
    ..o...
    ...o..
    .ooo..
    ......",
];

fn grid(s: &str) -> Grid {
    Grid::from_str(s).unwrap()
}

fn sel(x: isize, y: isize) -> Selector {
    Selector::new(x, y)
}

mod create {
    use super::*;

    #[test]
    fn test_filled_is_dead() {
        for (width, height) in [(1, 1), (3, 7), (10, 10), (64, 2)] {
            let g = create_grid(width, height, true).unwrap();
            assert_eq!((g.width(), g.height()), (width, height));
            assert!(g.rows().iter().all(|row| row.len() == width));
            assert!(g.rows().iter().flatten().all(|cell| *cell == Cell::dead()));
            assert_eq!(g.population(), 0);
        }
    }

    #[test]
    fn test_reserve_is_unpopulated() {
        let mut g = create_grid(4, 3, false).unwrap();
        assert_eq!((g.width(), g.height()), (4, 3));
        assert!(!g.is_populated());
        assert_eq!(g.get(sel(0, 0)), None);
        assert_eq!(
            next_generation(&g),
            Err(Error::MalformedGrid {
                row: 0,
                expected: 4,
                actual: 0
            })
        );

        g.populate(|s| if s.x == s.y { Cell::alive() } else { Cell::dead() });
        assert!(g.is_populated());
        assert_eq!(g.population(), 3);
    }

    #[test]
    fn test_default_fill() {
        assert_eq!(Fill::default(), Fill::Dead);
        assert_eq!(Fill::from(true), Fill::Dead);
        assert_eq!(Fill::from(false), Fill::Reserve);
    }

    #[test]
    fn test_zero_rows_has_no_width() {
        let g = create_grid(5, 0, true).unwrap();
        assert_eq!((g.width(), g.height()), (0, 0));
        let g = create_grid(0, 3, true).unwrap();
        assert_eq!((g.width(), g.height()), (0, 3));
    }

    #[test]
    fn test_oversized() {
        assert_eq!(
            create_grid(usize::MAX, 2, true),
            Err(Error::InvalidDimension {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![vec![Cell::dead(); 3], vec![Cell::dead(); 2]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(Error::MalformedGrid {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
        assert!(matches!(
            Grid::from_str("ooo\no"),
            Err(Error::MalformedGrid { row: 1, .. })
        ));
    }
}

mod pattern {
    use super::*;

    #[test]
    fn test_display() {
        let g = grid(
            "
            o..
            .o.",
        );
        assert_eq!(g.to_string(), "o..\n.o.");
        assert_eq!(grid(&g.to_string()), g);
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(
            Grid::from_str("o.\n.x"),
            Err(Error::UnexpectedChar {
                line: 1,
                column: 1,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_place_clips() {
        let mut g = create_grid(4, 4, true).unwrap();
        g.place(&grid("oo\noo"), sel(3, 3));
        assert_eq!(g.population(), 1);
        assert!(g[sel(3, 3)].is_alive());
        g.place(&grid("o.o"), sel(-1, 0));
        assert_eq!(g.population(), 2);
        assert!(g[sel(1, 0)].is_alive());
    }
}

mod neighbors {
    use super::*;

    const NUMBERED: &str = "
        o.o
        .o.
        oo.";

    fn statuses(g: &Grid, s: Selector) -> Vec<bool> {
        neighbors(g, s).unwrap().map(|cell| cell.is_alive()).collect()
    }

    #[test]
    fn test_interior_order() {
        let g = grid(NUMBERED);
        assert_eq!(
            statuses(&g, sel(1, 1)),
            [true, false, true, false, false, true, true, false]
        );
    }

    #[test]
    fn test_corners_and_edges_omit() {
        let g = grid(NUMBERED);
        // right, below, below-right
        assert_eq!(statuses(&g, sel(0, 0)), [false, false, true]);
        // above-left, above, left
        assert_eq!(statuses(&g, sel(2, 2)), [true, false, true]);
        // left, right, below-left, below, below-right
        assert_eq!(statuses(&g, sel(1, 0)), [true, true, false, true, false]);
        // above, above-right, right, below, below-right
        assert_eq!(statuses(&g, sel(0, 1)), [true, false, true, true, true]);
    }

    #[test]
    fn test_single_row_and_column() {
        let g = grid("ooo");
        assert_eq!(statuses(&g, sel(1, 0)), [true, true]);
        let g = grid("o\no\no");
        assert_eq!(statuses(&g, sel(0, 1)), [true, true]);
        let g = grid("o");
        assert_eq!(statuses(&g, sel(0, 0)), Vec::<bool>::new());
    }

    #[test]
    fn test_live_count() {
        let g = grid(NUMBERED);
        assert_eq!(live_neighbors(&g, sel(1, 1)), Ok(4));
        assert_eq!(live_neighbors(&g, sel(0, 0)), Ok(1));
    }

    #[test]
    fn test_selector_out_of_bounds() {
        let g = grid(NUMBERED);
        for s in [sel(-1, 0), sel(0, -1), sel(3, 0), sel(0, 3)] {
            assert!(matches!(neighbors(&g, s), Err(Error::OutOfBounds { .. })));
        }
    }
}

mod rule {
    use super::*;

    #[test]
    fn test_table() {
        for live in 0..=8 {
            let survives = matches!(live, 2 | 3);
            let born = live == 3;
            assert_eq!(
                next_status(Status::Alive, live) == Status::Alive,
                survives,
                "alive with {live}"
            );
            assert_eq!(
                next_status(Status::Dead, live) == Status::Alive,
                born,
                "dead with {live}"
            );
        }
    }
}

mod generation {
    use super::*;

    #[test]
    fn test_block() {
        // Block is constant.
        let g = grid(BLOCK);
        assert_eq!(next_generation(&g).unwrap(), g);
    }

    #[test]
    fn test_blinker() {
        // Blinker blinks with period 2.
        for (a, b) in BLINKER.into_iter().tuple_windows() {
            assert_eq!(next_generation(&grid(a)).unwrap(), grid(b));
        }
    }

    #[test]
    fn test_glider() {
        for (a, b) in GLIDER.into_iter().tuple_windows() {
            assert_eq!(next_generation(&grid(a)).unwrap(), grid(b));
        }
    }

    #[test]
    fn test_corner_dies() {
        let mut g = create_grid(4, 3, true).unwrap();
        toggle_cell_state(&mut g, sel(0, 0)).unwrap();
        let next = next_generation(&g).unwrap();
        assert_eq!(next, create_grid(4, 3, true).unwrap());
    }

    #[test]
    fn test_block_in_corner() {
        // Neighbours past the edge do not count, so a corner block stays put.
        let g = grid(
            "
            oo.
            oo.
            ...",
        );
        assert_eq!(next_generation(&g).unwrap(), g);
    }

    #[test]
    fn test_pure() {
        let g = grid(GLIDER[0]);
        let before = g.clone();
        let a = next_generation(&g).unwrap();
        let b = next_generation(&g).unwrap();
        assert_eq!(g, before);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        let g = create_grid(0, 0, true).unwrap();
        let next = next_generation(&g).unwrap();
        assert_eq!((next.width(), next.height()), (0, 0));
        let g = Grid::from_rows(vec![]).unwrap();
        assert_eq!(next_generation(&g).unwrap(), g);
    }

    #[test]
    fn test_glider_settles_at_wall() {
        // With no wrap-around the glider hits the floor and settles into a block.
        let mut g = grid(GLIDER[0]);
        for _ in 0..32 {
            g = next_generation(&g).unwrap();
        }
        let expected = grid(
            "
            ......
            ......
            ......
            ...oo.
            ...oo.",
        );
        assert_eq!(g, expected);
    }
}

mod toggle {
    use super::*;

    #[test]
    fn test_flips_only_target() {
        let original = grid(BLOCK);
        let mut g = original.clone();
        toggle_cell_state(&mut g, sel(2, 2)).unwrap();
        assert_eq!(g[sel(2, 2)].status, Status::Dead);
        let changed = g
            .cells()
            .zip(original.cells())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((s, _), _)| s)
            .collect_vec();
        assert_eq!(changed, [sel(2, 2)]);

        toggle_cell_state(&mut g, sel(2, 2)).unwrap();
        assert_eq!(g, original);
    }

    #[test]
    fn test_dead_to_alive() {
        let mut g = create_grid(2, 2, true).unwrap();
        toggle_cell_state(&mut g, sel(1, 0)).unwrap();
        assert_eq!(g.to_string(), ".o\n..");
    }

    #[test]
    fn test_out_of_bounds() {
        let mut g = grid(BLOCK);
        let before = g.clone();
        assert_eq!(
            toggle_cell_state(&mut g, sel(6, 0)),
            Err(Error::OutOfBounds {
                x: 6,
                y: 0,
                width: 6,
                height: 6
            })
        );
        assert!(toggle_cell_state(&mut g, sel(0, -1)).is_err());
        assert_eq!(g, before);
    }
}
