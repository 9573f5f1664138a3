// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::{BTreeMap, HashMap};
use crate::grid::{Dir, Pos};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tile {
	Open,
	Wall,
}

#[derive(Clone, Copy)]
enum Step {
	Forward(usize),
	TurnLeft,
	TurnRight,
}

/// Crossing the edge of one cube face lands on another: leaving `from_face`
/// in a given direction arrives on face `.0` traveling `.1`, with the edge
/// coordinate order flipped when `.2`.
type Seam = (usize, Dir, bool);

/// Seams of the six-face net with faces 0 and 3-5 in one column, indexed by
/// face and then [`Dir::ALL`] order; `None` marks net-adjacent edges.
const TALL_NET_SEAMS: [[Option<Seam>; 4]; 6] = [
	[Some((5, Dir::Right, false)), None, Some((3, Dir::Right, true)), None],
	[Some((5, Dir::Up, false)), Some((2, Dir::Left, false)), None, Some((4, Dir::Left, true))],
	[None, None, Some((3, Dir::Down, false)), Some((1, Dir::Up, false))],
	[Some((2, Dir::Right, false)), None, Some((0, Dir::Right, true)), None],
	[None, Some((5, Dir::Left, false)), None, Some((1, Dir::Left, true))],
	[None, Some((1, Dir::Down, false)), Some((0, Dir::Down, false)), Some((4, Dir::Up, false))],
];

/// Seams of the wide, zigzagging six-face net from the worked example.
const WIDE_NET_SEAMS: [[Option<Seam>; 4]; 6] = [
	[Some((1, Dir::Down, true)), None, Some((2, Dir::Down, false)), Some((5, Dir::Left, true))],
	[Some((0, Dir::Down, true)), Some((4, Dir::Up, true)), Some((5, Dir::Up, true)), None],
	[Some((0, Dir::Right, false)), Some((4, Dir::Right, true)), None, None],
	[None, None, None, Some((5, Dir::Down, true))],
	[None, Some((1, Dir::Up, true)), Some((2, Dir::Up, true)), None],
	[Some((3, Dir::Left, true)), Some((1, Dir::Right, true)), None, Some((0, Dir::Left, true))],
];

fn dir_index(dir: Dir) -> usize {
	Dir::ALL.iter().position(|&d| d == dir).unwrap()
}

fn facing_value(dir: Dir) -> usize {
	match dir {
		Dir::Right => 0,
		Dir::Down => 1,
		Dir::Left => 2,
		Dir::Up => 3,
	}
}

struct Board {
	/// Sparse, ordered by `(y, x)`, so iteration is in reading order.
	tiles: BTreeMap<Pos, Tile>,
	path: Vec<Step>,
}

/// Where a step from each tile in each direction leads, wrapping included.
type Links = HashMap<(Pos, Dir), (Pos, Dir)>;

impl Board {
	fn start(&self) -> Pos {
		self.tiles.iter()
			.find(|&(_, &tile)| tile == Tile::Open)
			.map(|(&pos, _)| pos)
			.unwrap_or_else(|| panic!("No open tile"))
	}

	/// Part one wrapping: walking off the board re-enters from the
	/// opposite side of the same row or column.
	fn edge_wrapped_links(&self) -> Links {
		let mut links = HashMap::new();
		for &pos in self.tiles.keys() {
			for dir in Dir::ALL {
				let mut next = pos + dir.delta();
				if !self.tiles.contains_key(&next) {
					next = pos;
					loop {
						let back = next + dir.opposite().delta();
						if !self.tiles.contains_key(&back) { break }
						next = back;
					}
				}
				links.insert((pos, dir), (next, dir));
			}
		}
		links
	}

	fn edge_len(&self) -> i32 {
		let edge = (1..).find(|edge| edge * edge * 6 >= self.tiles.len()).unwrap();
		if edge * edge * 6 != self.tiles.len() { panic!("Tiles do not cover a cube") }
		edge as i32
	}

	/// Part two wrapping: the net folds into a cube, and walking off a face
	/// continues on the adjoining face.
	fn cube_links(&self) -> Links {
		let edge = self.edge_len();

		let mut faces: Vec<Pos> = vec![];
		let mut face_ids: HashMap<Pos, usize> = HashMap::new();
		for &pos in self.tiles.keys() {
			let block = Pos::new(pos.y.div_euclid(edge), pos.x.div_euclid(edge));
			face_ids.entry(block).or_insert_with(|| {
				faces.push(block);
				faces.len() - 1
			});
		}
		if faces.len() != 6 { panic!("Expected 6 faces, found {}", faces.len()) }

		let seams = if faces[3].y == faces[0].y + 2 { &TALL_NET_SEAMS } else { &WIDE_NET_SEAMS };

		let mut links = HashMap::new();
		for &pos in self.tiles.keys() {
			for dir in Dir::ALL {
				let next = pos + dir.delta();
				if self.tiles.contains_key(&next) {
					links.insert((pos, dir), (next, dir));
					continue;
				}

				let block = Pos::new(pos.y.div_euclid(edge), pos.x.div_euclid(edge));
				let (to_face, in_dir, reversed) = seams[face_ids[&block]][dir_index(dir)]
					.unwrap_or_else(|| panic!("No seam off face {} going {dir:?}", face_ids[&block]));

				let along = match dir {
					Dir::Up | Dir::Down => pos.x.rem_euclid(edge),
					Dir::Left | Dir::Right => pos.y.rem_euclid(edge),
				};
				let along = if reversed { edge - 1 - along } else { along };
				let local = match in_dir {
					Dir::Down => Pos::new(0, along),
					Dir::Up => Pos::new(edge - 1, along),
					Dir::Right => Pos::new(along, 0),
					Dir::Left => Pos::new(along, edge - 1),
				};
				let origin = faces[to_face];
				links.insert((pos, dir),
					(Pos::new(origin.y * edge + local.y, origin.x * edge + local.x), in_dir));
			}
		}
		links
	}

	fn final_password(&self, links: &Links) -> usize {
		let (mut pos, mut dir) = (self.start(), Dir::Right);
		for &step in &self.path {
			match step {
				Step::TurnLeft => dir = dir.turned_left(),
				Step::TurnRight => dir = dir.turned_right(),
				Step::Forward(num) => for _ in 0..num {
					let &(next, next_dir) = links.get(&(pos, dir))
						.unwrap_or_else(|| panic!("No link from {pos:?} going {dir:?}"));
					if self.tiles[&next] == Tile::Wall { break }
					pos = next;
					dir = next_dir;
				}
			}
		}
		1000 * (pos.y as usize + 1) + 4 * (pos.x as usize + 1) + facing_value(dir)
	}
}


fn input_board_from_str(s: &str) -> Board {
	s.parse().unwrap()
}

fn input_board() -> Board {
	input_board_from_str(include_str!("day22.txt"))
}


fn part1_impl(input_board: Board) -> usize {
	let links = input_board.edge_wrapped_links();
	input_board.final_password(&links)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_board())
}


fn part2_impl(input_board: Board) -> usize {
	let links = input_board.cube_links();
	input_board.final_password(&links)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_board())
}


mod parsing {
	use std::{collections::BTreeMap, num::ParseIntError, str::FromStr};
	use super::{Board, Pos, Step, Tile};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BoardError {
		NoPath,
		InvalidTile { line: usize, column: usize, found: char },
		PathNum { source: ParseIntError },
		PathByte { column: usize, found: char },
		Empty,
	}

	fn try_path_from_str(s: &str) -> Result<Vec<Step>, BoardError> {
		let mut path = vec![];
		let mut num_start = None;
		for (c, byte) in s.bytes().enumerate() {
			match byte {
				b'0'..=b'9' => num_start = num_start.or(Some(c)),
				b'L' | b'R' => {
					if let Some(start) = num_start.take() {
						path.push(Step::Forward(s[start..c].parse()
							.map_err(|e| BoardError::PathNum { source: e })?));
					}
					path.push(if byte == b'L' { Step::TurnLeft } else { Step::TurnRight });
				}
				_ => return Err(BoardError::PathByte { column: c + 1, found: byte as char }),
			}
		}
		if let Some(start) = num_start {
			path.push(Step::Forward(s[start..].parse()
				.map_err(|e| BoardError::PathNum { source: e })?));
		}
		Ok(path)
	}

	impl FromStr for Board {
		type Err = BoardError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (tiles_str, path_str) = s.split_once("\n\n").ok_or(BoardError::NoPath)?;

			let mut tiles = BTreeMap::new();
			for (l, line) in tiles_str.lines().enumerate() {
				for (c, byte) in line.bytes().enumerate() {
					let tile = match byte {
						b' ' => continue,
						b'.' => Tile::Open,
						b'#' => Tile::Wall,
						_ => return Err(BoardError::InvalidTile {
							line: l + 1, column: c + 1, found: byte as char }),
					};
					tiles.insert(Pos::new(l as i32, c as i32), tile);
				}
			}
			if tiles.is_empty() { return Err(BoardError::Empty) }

			let path = try_path_from_str(path_str.trim_end())?;
			Ok(Board { tiles, path })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn example_board() -> Board {
		input_board_from_str(include_str!("day22.txt"))
	}

	#[test]
	fn wrapping() {
		let board = example_board();
		assert_eq!(board.start(), Pos::new(0, 8));

		let links = board.edge_wrapped_links();
		assert_eq!(links.len(), board.tiles.len() * 4);
		// Column 8 runs the full height of the board
		assert_eq!(links[&(Pos::new(0, 8), Dir::Up)], (Pos::new(11, 8), Dir::Up));
		assert_eq!(links[&(Pos::new(5, 11), Dir::Right)], (Pos::new(5, 0), Dir::Right));
	}

	#[test]
	fn folding() {
		let board = example_board();
		let links = board.cube_links();
		assert_eq!(links.len(), board.tiles.len() * 4);
		// The two worked folds: off the right of face 3 onto face 5, and
		// off the bottom of face 4 onto face 1 (arriving upside down)
		assert_eq!(links[&(Pos::new(5, 11), Dir::Right)], (Pos::new(8, 14), Dir::Down));
		assert_eq!(links[&(Pos::new(11, 10), Dir::Down)], (Pos::new(7, 1), Dir::Up));
		// Every seam is a bijection: following a link backwards returns
		for (&(pos, dir), &(next, next_dir)) in &links {
			assert_eq!(links[&(next, next_dir.opposite())], (pos, dir.opposite()));
		}
	}

	#[test]
	fn folding_tall_net() {
		// Smallest instance of the other net layout: edge 2, all open
		let board = input_board_from_str(indoc::indoc! { "
			  ....
			  ....
			  ..
			  ..
			....
			....
			..
			..

			1
		" });
		let links = board.cube_links();
		assert_eq!(links.len(), board.tiles.len() * 4);
		// Off the top of face 0 onto the left of face 5, and off the left
		// of face 3 onto the left of face 0 (flipped)
		assert_eq!(links[&(Pos::new(0, 2), Dir::Up)], (Pos::new(6, 0), Dir::Right));
		assert_eq!(links[&(Pos::new(4, 0), Dir::Left)], (Pos::new(1, 2), Dir::Right));
		for (&(pos, dir), &(next, next_dir)) in &links {
			assert_eq!(links[&(next, next_dir.opposite())], (pos, dir.opposite()));
		}
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(example_board()), 6032);
		assert_eq!(part1(), 6032);
		assert_eq!(part2_impl(example_board()), 5031);
		assert_eq!(part2(), 5031);
	}
}
