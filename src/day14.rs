// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::HashSet;
use crate::grid::Pos;

const SOURCE: Pos = Pos::new(0, 500);

struct Cave {
	rock: HashSet<Pos>,
}

impl Cave {
	fn max_y(&self) -> i32 {
		self.rock.iter()
			.map(|pos| pos.y)
			.max()
			.unwrap_or_else(|| panic!("No rock"))
	}

	/// Pours grains from [`SOURCE`] until one meets `escaped` or the source
	/// itself clogs up; returns how many came to rest. An infinite floor at
	/// `floor_y` blocks falling grains when given.
	fn pour(&self, floor_y: Option<i32>, mut escaped: impl FnMut(Pos) -> bool) -> usize {
		let mut occupied = self.rock.clone();
		let mut grains = 0;
		while !occupied.contains(&SOURCE) {
			let mut grain = SOURCE;
			'fall: loop {
				if escaped(grain) { return grains }
				for delta in [Pos::new(1, 0), Pos::new(1, -1), Pos::new(1, 1)] {
					let below = grain + delta;
					if Some(below.y) == floor_y || occupied.contains(&below) { continue }
					grain = below;
					continue 'fall;
				}
				break;
			}
			occupied.insert(grain);
			grains += 1;
		}
		grains
	}
}


fn input_cave_from_str(s: &str) -> Cave {
	s.parse().unwrap()
}

fn input_cave() -> Cave {
	input_cave_from_str(include_str!("day14.txt"))
}


fn part1_impl(input_cave: Cave) -> usize {
	let max_y = input_cave.max_y();
	input_cave.pour(None, |grain| grain.y > max_y)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_cave())
}


fn part2_impl(input_cave: Cave) -> usize {
	let floor_y = input_cave.max_y() + 2;
	input_cave.pour(Some(floor_y), |_| false)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_cave())
}


mod parsing {
	use std::{collections::HashSet, num::ParseIntError, str::FromStr};
	use super::{Cave, Pos};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CaveError {
		Format { line: usize, found: String },
		Coord { line: usize, source: ParseIntError },
		Diagonal { line: usize, from: Pos, to: Pos },
		Empty,
	}

	fn try_point_from_str(s: &str, l: usize) -> Result<Pos, CaveError> {
		let (x, y) = s.split_once(',')
			.ok_or_else(|| CaveError::Format { line: l + 1, found: s.to_owned() })?;
		let parse = |s: &str| s.parse()
			.map_err(|e| CaveError::Coord { line: l + 1, source: e });
		Ok(Pos::new(parse(y)?, parse(x)?))
	}

	impl FromStr for Cave {
		type Err = CaveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut rock = HashSet::new();
			for (l, line) in s.lines().enumerate() {
				let mut prev: Option<Pos> = None;
				for point in line.split(" -> ") {
					let point = try_point_from_str(point, l)?;
					if let Some(prev) = prev {
						if prev.y != point.y && prev.x != point.x {
							return Err(CaveError::Diagonal { line: l + 1, from: prev, to: point });
						}
						for y in prev.y.min(point.y)..=prev.y.max(point.y) {
							for x in prev.x.min(point.x)..=prev.x.max(point.x) {
								rock.insert(Pos::new(y, x));
							}
						}
					}
					prev = Some(point);
				}
				if prev.is_none() {
					return Err(CaveError::Format { line: l + 1, found: line.to_owned() });
				}
			}
			if rock.is_empty() { return Err(CaveError::Empty) }
			Ok(Cave { rock })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };

	#[test]
	fn structures() {
		let cave = input_cave_from_str(INPUT);
		assert_eq!(cave.rock.len(), 20);
		assert_eq!(cave.max_y(), 9);
		assert!(cave.rock.contains(&Pos::new(6, 497)));
		assert!("498,4 -> 499,5".parse::<Cave>().is_err());
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_cave_from_str(INPUT)), 24);
		assert_eq!(part1(), 24);
		assert_eq!(part2_impl(input_cave_from_str(INPUT)), 93);
		assert_eq!(part2(), 93);
	}
}
