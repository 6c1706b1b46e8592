//! Grid collision, commit and row removal.

use proptest::prelude::*;

use blockfall::core::Grid;
use blockfall::types::{Block, Color};

fn block(x: i16, y: i16) -> Block {
    Block::new(x, y, Color::Red)
}

#[test]
fn walls_floor_and_settled_cells_collide() {
    let mut grid = Grid::new(10, 20);
    grid.set(3, 10, Some(Color::Blue));

    assert!(grid.collides(&[block(-1, 5)]));
    assert!(grid.collides(&[block(10, 5)]));
    assert!(grid.collides(&[block(0, 20)]));
    assert!(grid.collides(&[block(3, 10)]));

    assert!(!grid.collides(&[block(0, 0), block(9, 19), block(3, 9)]));
}

#[test]
fn spawn_buffer_only_checks_the_side_walls() {
    let mut grid = Grid::new(4, 4);
    for x in 0..4 {
        grid.set(x, 0, Some(Color::Green));
    }
    assert!(!grid.collides(&[block(0, -1), block(3, -4)]));
    assert!(grid.collides(&[block(-1, -1)]));
    assert!(grid.collides(&[block(4, -2)]));
}

#[test]
fn collides_is_read_only() {
    let grid = Grid::new(6, 6);
    let before = grid.clone();
    assert!(grid.collides(&[block(2, 2), block(7, 2)]));
    assert_eq!(grid, before);
}

#[test]
fn commit_then_clear_a_single_row() {
    let mut grid = Grid::new(4, 5);
    grid.set(2, 3, Some(Color::Yellow));

    let row: Vec<Block> = (0..4).map(|x| block(x, 4)).collect();
    grid.commit_blocks(&row);
    assert_eq!(grid.full_rows(), vec![4]);

    grid.remove_row(4);
    assert!(grid.full_rows().is_empty());
    assert_eq!(grid.get(2, 4), Some(Some(Color::Yellow)));
    assert_eq!(grid.occupied_count(), 1);
    assert!(grid.row(0).iter().all(Option::is_none));
}

#[test]
fn commit_records_the_block_colors() {
    let mut grid = Grid::new(4, 4);
    grid.commit_blocks(&[Block::new(0, 3, Color::Cyan), Block::new(1, 3, Color::Orange)]);
    assert_eq!(
        grid.occupied_blocks(),
        vec![Block::new(0, 3, Color::Cyan), Block::new(1, 3, Color::Orange)]
    );
}

#[test]
#[should_panic(expected = "occupied")]
fn commit_onto_an_occupied_cell_panics() {
    let mut grid = Grid::new(4, 4);
    grid.commit_blocks(&[block(1, 1)]);
    grid.commit_blocks(&[block(1, 1)]);
}

#[test]
#[should_panic(expected = "outside")]
fn commit_into_the_spawn_buffer_panics() {
    let mut grid = Grid::new(4, 4);
    grid.commit_blocks(&[block(1, -1)]);
}

#[test]
fn end_game_needs_a_block_above_the_field() {
    assert!(Grid::is_end_game(&[block(0, 0), block(0, -1)]));
    assert!(!Grid::is_end_game(&[block(0, 0), block(0, 1)]));
    assert!(!Grid::is_end_game(&[]));
}

#[test]
#[should_panic(expected = "at least 1x1")]
fn zero_sized_grid_is_rejected() {
    let _ = Grid::new(0, 20);
}

proptest! {
    #[test]
    fn remove_row_shifts_exactly_the_rows_above(
        occupied in prop::collection::vec(any::<bool>(), 5 * 6),
        target in 0usize..6,
    ) {
        let (w, h) = (5i16, 6i16);
        let mut grid = Grid::new(w as u16, h as u16);
        for (i, &filled) in occupied.iter().enumerate() {
            if filled {
                grid.set(i as i16 % w, i as i16 / w, Some(Color::Purple));
            }
        }
        let before = grid.clone();

        grid.remove_row(target);

        for y in 0..h {
            for x in 0..w {
                let expected = if y as usize > target {
                    before.get(x, y)
                } else if y == 0 {
                    Some(None)
                } else {
                    before.get(x, y - 1)
                };
                prop_assert_eq!(grid.get(x, y), expected);
            }
        }
    }

    #[test]
    fn full_rows_are_ascending_and_full(
        occupied in prop::collection::vec(prop::bool::weighted(0.8), 4 * 8),
    ) {
        let mut grid = Grid::new(4, 8);
        for (i, &filled) in occupied.iter().enumerate() {
            if filled {
                grid.set((i % 4) as i16, (i / 4) as i16, Some(Color::Green));
            }
        }
        let rows = grid.full_rows();
        prop_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        for y in 0..8 {
            prop_assert_eq!(rows.contains(&y), grid.row(y).iter().all(Option::is_some));
        }
    }
}
