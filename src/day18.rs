// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::HashSet;
use crate::grid::{self, Vec3};

struct Droplet {
	cubes: HashSet<Vec3>,
}

impl Droplet {
	fn surface_area(&self) -> usize {
		self.cubes.iter()
			.map(|&cube| Vec3::ADJACENT.iter()
				.filter(|&&delta| !self.cubes.contains(&(cube + delta)))
				.count())
			.sum()
	}

	fn exterior_surface_area(&self) -> usize {
		let (min, max) = self.bounds();
		// Steam expands through a one-cube margin around the droplet
		let min = min + Vec3::new(-1, -1, -1);
		let max = max + Vec3::new(1, 1, 1);
		let in_bounds = move |v: Vec3| (min.x..=max.x).contains(&v.x)
			&& (min.y..=max.y).contains(&v.y)
			&& (min.z..=max.z).contains(&v.z);

		let exterior = grid::distances([min], |&cube: &Vec3| Vec3::ADJACENT.into_iter()
			.map(move |delta| cube + delta)
			.filter(|&v| in_bounds(v) && !self.cubes.contains(&v))
			.collect::<Vec<_>>());

		self.cubes.iter()
			.map(|&cube| Vec3::ADJACENT.iter()
				.filter(|&&delta| exterior.contains_key(&(cube + delta)))
				.count())
			.sum()
	}

	fn bounds(&self) -> (Vec3, Vec3) {
		self.cubes.iter().fold(
			(Vec3::new(i32::MAX, i32::MAX, i32::MAX), Vec3::new(i32::MIN, i32::MIN, i32::MIN)),
			|(min, max), &cube| (
				Vec3::new(min.x.min(cube.x), min.y.min(cube.y), min.z.min(cube.z)),
				Vec3::new(max.x.max(cube.x), max.y.max(cube.y), max.z.max(cube.z)),
			))
	}
}


fn input_droplet_from_str(s: &str) -> Droplet {
	s.parse().unwrap()
}

fn input_droplet() -> Droplet {
	input_droplet_from_str(include_str!("day18.txt"))
}


fn part1_impl(input_droplet: Droplet) -> usize {
	input_droplet.surface_area()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_droplet())
}


fn part2_impl(input_droplet: Droplet) -> usize {
	input_droplet.exterior_surface_area()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_droplet())
}


mod parsing {
	use std::{collections::HashSet, num::ParseIntError, str::FromStr};
	use super::{Droplet, Vec3};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DropletError {
		Format { line: usize, found: String },
		Coord { line: usize, source: ParseIntError },
		Empty,
	}

	impl FromStr for Droplet {
		type Err = DropletError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let cubes = s.lines()
				.enumerate()
				.map(|(l, line)| {
					let mut coords = line.split(',');
					let mut coord = || {
						let coord = coords.next()
							.ok_or_else(|| DropletError::Format {
								line: l + 1, found: line.to_owned() })?;
						coord.parse()
							.map_err(|e| DropletError::Coord { line: l + 1, source: e })
					};
					let cube = Vec3::new(coord()?, coord()?, coord()?);
					if coords.next().is_some() {
						return Err(DropletError::Format { line: l + 1, found: line.to_owned() });
					}
					Ok(cube)
				})
				.collect::<Result<HashSet<_>, _>>()?;
			if cubes.is_empty() { return Err(DropletError::Empty) }
			Ok(Droplet { cubes })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		2,2,2
		1,2,2
		3,2,2
		2,1,2
		2,3,2
		2,2,1
		2,2,3
		2,2,4
		2,2,6
		1,2,5
		3,2,5
		2,1,5
		2,3,5
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_droplet_from_str("1,1,1\n2,1,1\n")), 10);
		assert_eq!(part1_impl(input_droplet_from_str(INPUT)), 64);
		assert_eq!(part1(), 64);
		assert_eq!(part2_impl(input_droplet_from_str(INPUT)), 58);
		assert_eq!(part2(), 58);
	}
}
