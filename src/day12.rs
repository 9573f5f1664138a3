// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::HashMap;
use crate::grid::{self, Dir, Pos};

struct Heightmap {
	/// Sparse so that ragged maps work; heights run 0 (`a`) through 25 (`z`).
	heights: HashMap<Pos, u8>,
	start: Pos,
	end: Pos,
}

impl Heightmap {
	/// Squares reachable from `pos` by climbing at most one unit up.
	fn reachable_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		let height = self.heights[&pos];
		Dir::ALL.into_iter()
			.map(move |dir| pos + dir.delta())
			.filter(move |p| self.heights.get(p).map_or(false, |&h| h <= height + 1))
	}

	fn fewest_steps(&self, sources: impl IntoIterator<Item = Pos>) -> usize {
		grid::shortest_path(sources, |&pos| self.reachable_neighbors(pos), |&pos| pos == self.end)
			.unwrap_or_else(|| panic!("Could not reach the end"))
	}
}


fn input_heightmap_from_str(s: &str) -> Heightmap {
	s.parse().unwrap()
}

fn input_heightmap() -> Heightmap {
	input_heightmap_from_str(include_str!("day12.txt"))
}


fn part1_impl(input_heightmap: Heightmap) -> usize {
	input_heightmap.fewest_steps([input_heightmap.start])
}

pub(crate) fn part1() -> usize {
	part1_impl(input_heightmap())
}


fn part2_impl(input_heightmap: Heightmap) -> usize {
	let sources: Vec<Pos> = input_heightmap.heights.iter()
		.filter(|&(_, &height)| height == 0)
		.map(|(&pos, _)| pos)
		.collect();
	input_heightmap.fewest_steps(sources)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_heightmap())
}


mod parsing {
	use std::{collections::HashMap, str::FromStr};
	use super::{Heightmap, Pos};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HeightmapError {
		InvalidSquare { line: usize, column: usize, found: char },
		DuplicateMarker { line: usize, column: usize, found: char },
		NoStart,
		NoEnd,
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = HashMap::new();
			let (mut start, mut end) = (None, None);
			for (l, line) in s.lines().enumerate() {
				for (c, byte) in line.bytes().enumerate() {
					let pos = Pos::new(l as i32, c as i32);
					let height = match byte {
						b'a'..=b'z' => byte - b'a',
						b'S' if start.is_none() => { start = Some(pos); 0 }
						b'E' if end.is_none() => { end = Some(pos); 25 }
						b'S' | b'E' => return Err(HeightmapError::DuplicateMarker {
							line: l + 1, column: c + 1, found: byte as char }),
						_ => return Err(HeightmapError::InvalidSquare {
							line: l + 1, column: c + 1, found: byte as char }),
					};
					heights.insert(pos, height);
				}
			}
			let start = start.ok_or(HeightmapError::NoStart)?;
			let end = end.ok_or(HeightmapError::NoEnd)?;
			Ok(Heightmap { heights, start, end })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_heightmap_from_str(INPUT)), 31);
		assert_eq!(part1(), 31);
		assert_eq!(part2_impl(input_heightmap_from_str(INPUT)), 29);
		assert_eq!(part2(), 29);
	}

	#[test]
	fn multi_source() {
		// Seeding every lowest square at once matches the minimum over
		// separate searches from each.
		let heightmap = input_heightmap_from_str(INPUT);
		let min = heightmap.heights.iter()
			.filter(|&(_, &height)| height == 0)
			.filter_map(|(&pos, _)| grid::shortest_path([pos],
				|&p| heightmap.reachable_neighbors(p), |&p| p == heightmap.end))
			.min();
		assert_eq!(min, Some(part2_impl(input_heightmap_from_str(INPUT))));
	}
}
