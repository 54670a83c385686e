#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::board::Board;
    use crate::cell::{Options, Turn};
    use crate::location::AXIS;
    use crate::parse::ParseError;
    use crate::shape::Shape;
    use crate::solution::Solution;
    use crate::solver::{initial_options, propagate, Signal};

    const PUZZLE_166: &str = "1C1C11
 CCC11
CC  C1
S331S1
CCSCCS
C11S1S
S 133S
S SSC3
3C331S
CC11CS
 CC143
 CC1C1
";

    #[test]
    fn rotation_shifts_the_nibble() {
        assert_eq!(Shape::DEAD_END.rotate(Turn::ALL[0]), Shape::DEAD_END);
        assert_eq!(Shape::DEAD_END.rotate(Turn::ALL[1]), Shape::of(0x2));
        assert_eq!(Shape::DEAD_END.rotate(Turn::ALL[3]), Shape::of(0x8));
        assert_eq!(Shape::CORNER.rotate(Turn::ALL[3]), Shape::of(0x9));
        assert_eq!(Shape::STRAIGHT.rotate(Turn::ALL[1]), Shape::of(0xa));
        assert_eq!(Shape::TEE.rotate(Turn::ALL[1]), Shape::of(0xe));
        assert_eq!(Shape::CROSS.rotate(Turn::ALL[2]), Shape::CROSS);
    }

    #[test]
    fn flip_reverses_perspective() {
        assert_eq!(Shape::DEAD_END.flip(), Shape::of(0x4));
        assert_eq!(Shape::CORNER.flip(), Shape::of(0xc));
        assert_eq!(Shape::STRAIGHT.flip(), Shape::STRAIGHT);
        assert_eq!(Shape::of(0xe).flip(), Shape::of(0xb));
    }

    #[test]
    fn fanout_unions_allowed_rotations() {
        for shape in [Shape::DEAD_END, Shape::CORNER, Shape::STRAIGHT, Shape::TEE] {
            for bits in [0x1, 0x5, 0x9, 0xa, 0xf] {
                let options = Options::of(bits);
                let mut union = 0;
                for turn in options.turns() {
                    union |= shape.rotate(turn).code();
                }
                assert_eq!(shape.fanout(options).code(), union);
            }
        }

        assert_eq!(Shape::CORNER.fanout(Options::of(0x5)).code(), 0xf);
        assert_eq!(Shape::DEAD_END.fanout(Options::of(0x3)).code(), 0x3);
    }

    #[test]
    fn symmetry_narrows_initial_options() {
        assert_eq!(Shape::EMPTY.symmetry_options(), Options::of(0x1));
        assert_eq!(Shape::CROSS.symmetry_options(), Options::of(0x1));
        assert_eq!(Shape::STRAIGHT.symmetry_options(), Options::of(0x3));
        assert_eq!(Shape::of(0xa).symmetry_options(), Options::of(0x3));
        // The dead end is not halfturn-symmetric, so it keeps all four.
        assert_eq!(Shape::DEAD_END.symmetry_options(), Options::of(0xf));
        assert_eq!(Shape::CORNER.symmetry_options(), Options::of(0xf));
        assert_eq!(Shape::TEE.symmetry_options(), Options::of(0xf));
    }

    #[test]
    fn parse_prints_back_canonically() {
        let board = Board::parse("1cc1\n1cc1").unwrap();
        assert_eq!(board.to_string(), "1CC1\n1CC1\n");
        assert_eq!(Board::parse(PUZZLE_166).unwrap().to_string(), PUZZLE_166);
    }

    #[test]
    fn parse_rejects_out_of_bounds_pieces() {
        let too_wide = " ".repeat(AXIS - 2) + "1";
        assert_eq!(
            Board::parse(&too_wide),
            Err(ParseError::OutOfBounds { piece: '1', x: AXIS - 1, y: 1 })
        );

        let too_tall = "\n".repeat(AXIS - 2) + "C";
        assert_eq!(
            Board::parse(&too_tall),
            Err(ParseError::OutOfBounds { piece: 'C', x: 1, y: AXIS - 1 })
        );
    }

    #[test]
    fn strict_mode_rejects_unknown_characters() {
        assert_eq!(Board::parse_strict("1x"), Err(ParseError::Unrecognized('x')));
        // The tolerant parser skips the character without advancing.
        assert_eq!(Board::parse("1x1").unwrap(), Board::parse("11").unwrap());
    }

    #[test]
    fn empty_input_has_exactly_the_empty_solution() {
        for input in ["", "    \n\n      "] {
            let solutions = Board::parse(input).unwrap().solutions();
            assert_eq!(solutions.len(), 1);
            assert_eq!(solutions[0].to_string(), "");
        }
    }

    #[test]
    fn unsolvable_boards_yield_nothing() {
        assert!(Board::parse("1").unwrap().solutions().is_empty());
        assert!(Board::parse("1sssss").unwrap().solutions().is_empty());
    }

    #[test]
    fn lone_dead_end_contradicts_in_propagation() {
        let board = Board::parse("1").unwrap();
        let mut options = initial_options(&board);
        assert!(!propagate(&board, &mut options));
    }

    #[test]
    fn propagation_is_idempotent_at_the_fixed_point() {
        let board = Board::parse(PUZZLE_166).unwrap();
        let mut options = initial_options(&board);
        assert!(propagate(&board, &mut options));
        let settled = options.clone();
        assert!(propagate(&board, &mut options));
        assert_eq!(options, settled);
    }

    #[test]
    fn corner_block_closes_into_a_loop() {
        let solutions = Board::parse("cc\ncc").unwrap().solutions();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].to_string(), "╭──╮\n│  │\n╰──╯");
    }

    #[test]
    fn ambiguous_board_has_both_pairings() {
        let rendered = Board::parse("1cc1\n1cc1")
            .unwrap()
            .solutions()
            .iter()
            .map(Solution::to_string)
            .sorted()
            .collect_vec();

        let expected = [
            "╶──╮  ╭──╴
   │  │
╶──╯  ╰──╴",
            "╷  ╭──╮  ╷
│  │  │  │
╵  ╰──╯  ╵",
        ]
        .iter()
        .map(|rendering| rendering.to_string())
        .sorted()
        .collect_vec();

        assert_eq!(rendered, expected);
    }

    #[test]
    fn consumer_stop_halts_after_the_first_solution() {
        let board = Board::parse("1cc1\n1cc1").unwrap();
        let mut delivered = 0;
        board.solve(&mut |_: &Solution| {
            delivered += 1;
            Signal::Stop
        });
        assert_eq!(delivered, 1);
    }

    #[test]
    fn three_sub_loop_board_solves_uniquely() {
        let board = Board::parse(
            "11  11
CC11CC
C4SS4C
 1  1
C3333C
11CC11",
        )
        .unwrap();

        let solutions = board.solutions();
        assert_eq!(solutions.len(), 1);
        assert_eq!(
            solutions[0].to_string(),
            "╶──╴        ╶──╴

╭──╮  ╶──╴  ╭──╮
│  │        │  │
╰──┼────────┼──╯
   │        │
   ╵        ╵

╭──┬──┬──┬──┬──╮
│  │  │  │  │  │
╵  ╵  ╰──╯  ╵  ╵"
        );
    }

    #[test]
    fn puzzle_166_solves_uniquely() {
        let solutions = Board::parse(PUZZLE_166).unwrap().solutions();
        assert_eq!(solutions.len(), 1);
        assert_eq!(
            solutions[0].to_string(),
            "╶──╮  ╷  ╭──╴  ╷
   │  │  │     │
   ╰──╯  ╰──╴  ╵

╭──╮        ╭──╴
│  │        │
│  ├──┬──╴  │  ╷
│  │  │     │  │
╰──╯  │  ╭──╯  │
      │  │     │
╭──╴  ╵  │  ╷  │
│        │  │  │
│     ╷  ├──┤  │
│     │  │  │  │
│     │  │  ╰──┤
│     │  │     │
├──╮  ├──┴──╴  │
│  │  │        │
╰──╯  ╵  ╶──╮  │
            │  │
   ╭──╮  ╶──┼──┤
   │  │     │  │
   ╰──╯  ╶──╯  ╵"
        );
    }

    #[test]
    fn solutions_place_rotations_of_the_parsed_pieces() {
        let board = Board::parse("1cc1\n1cc1").unwrap();
        let solutions = board.solutions();
        assert!(!solutions.is_empty());
        for solution in solutions {
            // Unsolving recovers each cell's stub mask; the canonical
            // rendering collapses rotations, so the piece layout must match.
            assert_eq!(solution.unsolve().to_string(), board.to_string());
        }
    }

    #[test]
    fn unsolve_round_trips_through_the_solver() {
        let mut rng = StdRng::seed_from_u64(0x1f10_0b5e);
        for _ in 0..24 {
            let mut solution = Solution::default();
            for (x, y) in (0..AXIS - 3).cartesian_product(0..AXIS - 2) {
                solution.set_horizontal(x, y, rng.gen());
            }
            for (x, y) in (0..AXIS - 2).cartesian_product(0..AXIS - 3) {
                solution.set_vertical(x, y, rng.gen());
            }

            let mut found = false;
            solution.unsolve().solve(&mut |candidate: &Solution| {
                if *candidate == solution {
                    found = true;
                    Signal::Stop
                } else {
                    Signal::Continue
                }
            });
            assert!(found);
        }
    }
}
