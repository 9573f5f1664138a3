// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::VecDeque;
use itertools::Itertools as _;
use crate::grid::{self, Dir, Pos};

struct Grove {
	elves: Vec<Pos>,
}

fn adjacent(pos: Pos) -> [Pos; 8] {
	[
		pos + Pos::new(-1, -1), pos + Pos::new(-1, 0), pos + Pos::new(-1, 1),
		pos + Pos::new(0, -1), pos + Pos::new(0, 1),
		pos + Pos::new(1, -1), pos + Pos::new(1, 0), pos + Pos::new(1, 1),
	]
}

/// The three squares an elf must find clear to propose moving toward `dir`.
fn scanned(pos: Pos, dir: Dir) -> [Pos; 3] {
	let ahead = pos + dir.delta();
	match dir {
		Dir::Up | Dir::Down => [ahead + Pos::new(0, -1), ahead, ahead + Pos::new(0, 1)],
		Dir::Left | Dir::Right => [ahead + Pos::new(-1, 0), ahead, ahead + Pos::new(1, 0)],
	}
}

/// Runs rounds of the spreading dance until `done` says so; returns the
/// round count and the final positions.
fn spread(mut elves: Vec<Pos>, mut done: impl FnMut(usize, usize) -> bool) -> (usize, Vec<Pos>) {
	let mut rules: VecDeque<Dir> = [Dir::Up, Dir::Down, Dir::Left, Dir::Right].into();
	let mut round = 0;
	loop {
		round += 1;
		let moved = grid::synchronous_step(&mut elves, |occupied, pos| {
			if adjacent(pos).iter().all(|p| !occupied.contains(p)) { return None }
			rules.iter()
				.find(|&&dir| scanned(pos, dir).iter().all(|p| !occupied.contains(p)))
				.map(|&dir| pos + dir.delta())
		});
		rules.rotate_left(1);
		if done(round, moved) { return (round, elves) }
	}
}


fn input_grove_from_str(s: &str) -> Grove {
	s.parse().unwrap()
}

fn input_grove() -> Grove {
	input_grove_from_str(include_str!("day23.txt"))
}


fn part1_impl(input_grove: Grove) -> usize {
	let (_, elves) = spread(input_grove.elves, |round, _| round == 10);
	let (min_y, max_y) = elves.iter().map(|pos| pos.y).minmax().into_option().unwrap();
	let (min_x, max_x) = elves.iter().map(|pos| pos.x).minmax().into_option().unwrap();
	(max_y - min_y + 1) as usize * (max_x - min_x + 1) as usize - elves.len()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_grove())
}


fn part2_impl(input_grove: Grove) -> usize {
	let (round, _) = spread(input_grove.elves, |_, moved| moved == 0);
	round
}

pub(crate) fn part2() -> usize {
	part2_impl(input_grove())
}


#[cfg(LOGGING)]
impl std::fmt::Display for Grove {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		use itertools::Itertools as _;
		let occupied: std::collections::HashSet<Pos> = self.elves.iter().copied().collect();
		let (min_y, max_y) = self.elves.iter().map(|pos| pos.y).minmax().into_option().unwrap();
		let (min_x, max_x) = self.elves.iter().map(|pos| pos.x).minmax().into_option().unwrap();
		for y in min_y..=max_y {
			for x in min_x..=max_x {
				f.write_str(if occupied.contains(&Pos::new(y, x)) { "#" } else { "." })?;
			}
			f.write_str("\n")?;
		}
		Ok(())
	}
}


mod parsing {
	use std::str::FromStr;
	use super::{Grove, Pos};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GroveError {
		InvalidSquare { line: usize, column: usize, found: char },
		Empty,
	}

	impl FromStr for Grove {
		type Err = GroveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut elves = vec![];
			for (l, line) in s.lines().enumerate() {
				for (c, byte) in line.bytes().enumerate() {
					match byte {
						b'#' => elves.push(Pos::new(l as i32, c as i32)),
						b'.' => (),
						_ => return Err(GroveError::InvalidSquare {
							line: l + 1, column: c + 1, found: byte as char }),
					}
				}
			}
			if elves.is_empty() { return Err(GroveError::Empty) }
			Ok(Grove { elves })
		}
	}
}


#[cfg(test)]
mod tests {
	use std::collections::HashSet;
	use super::*;

	const SMALL_INPUT: &str = indoc::indoc! { "
		.....
		..##.
		..#..
		.....
		..##.
		.....
	" };

	const INPUT: &str = indoc::indoc! { "
		....#..
		..###.#
		#...#.#
		.#...##
		#.###..
		##.#.##
		.#..#..
	" };

	#[test]
	fn small_rounds() {
		let grove = input_grove_from_str(SMALL_INPUT);
		// The five elves come to rest after three rounds
		let (round, elves) = spread(grove.elves, |_, moved| moved == 0);
		assert_eq!(round, 4);
		let occupied: HashSet<Pos> = elves.into_iter().collect();
		let expected: HashSet<Pos> = [(0, 2), (1, 4), (2, 0), (3, 4), (5, 2)].iter()
			.map(|&(y, x)| Pos::new(y, x))
			.collect();
		assert_eq!(occupied, expected);
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_grove_from_str(INPUT)), 110);
		assert_eq!(part1(), 110);
		assert_eq!(part2_impl(input_grove_from_str(INPUT)), 20);
		assert_eq!(part2(), 20);
	}
}
