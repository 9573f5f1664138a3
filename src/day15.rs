// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use itertools::Itertools as _;
use crate::grid::Pos;

struct Sensor {
	pos: Pos,
	beacon: Pos,
}

impl Sensor {
	fn radius(&self) -> u32 {
		self.pos.manhattan_dist(self.beacon)
	}
}

/// The coverage of `row` as merged, ascending, inclusive `(start, end)`
/// ranges; adjacent ranges coalesce.
fn row_coverage(sensors: &[Sensor], row: i32) -> Vec<(i32, i32)> {
	let ranges = sensors.iter()
		.filter_map(|sensor| {
			let slack = sensor.radius() as i32 - (sensor.pos.y - row).abs();
			(slack >= 0).then(|| (sensor.pos.x - slack, sensor.pos.x + slack))
		})
		.sorted();

	let mut merged: Vec<(i32, i32)> = vec![];
	for (start, end) in ranges {
		match merged.last_mut() {
			Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
			_ => merged.push((start, end)),
		}
	}
	merged
}


fn input_sensors_from_str(s: &str) -> Vec<Sensor> {
	parsing::try_sensors_from_str(s).unwrap()
}

fn input_sensors() -> Vec<Sensor> {
	input_sensors_from_str(include_str!("day15.txt"))
}


fn part1_impl<const ROW: i32>(input_sensors: Vec<Sensor>) -> usize {
	let coverage = row_coverage(&input_sensors, ROW);
	let covered: usize = coverage.iter()
		.map(|&(start, end)| (end - start + 1) as usize)
		.sum();
	let beacons = input_sensors.iter()
		.map(|sensor| sensor.beacon)
		.filter(|beacon| beacon.y == ROW
			&& coverage.iter().any(|&(start, end)| (start..=end).contains(&beacon.x)))
		.unique()
		.count();
	covered - beacons
}

pub(crate) fn part1() -> usize {
	part1_impl::<10>(input_sensors())
}


fn part2_impl<const BOUND: i32>(input_sensors: Vec<Sensor>) -> u64 {
	for y in 0..=BOUND {
		let mut x = 0;
		for &(start, end) in &row_coverage(&input_sensors, y) {
			if end < 0 { continue }
			if start > x { break }
			x = x.max(end + 1);
			if x > BOUND { break }
		}
		if x <= BOUND {
			return x as u64 * 4_000_000 + y as u64;
		}
	}
	panic!("No position for the distress beacon")
}

pub(crate) fn part2() -> u64 {
	part2_impl::<20>(input_sensors())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Pos, Sensor};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SensorError {
		Format { line: usize, found: String },
		Coord { line: usize, source: ParseIntError },
	}

	pub(super) fn try_sensors_from_str(s: &str) -> Result<Vec<Sensor>, SensorError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let format_err = || SensorError::Format { line: l + 1, found: line.to_owned() };
				let parse = |s: &str| s.parse()
					.map_err(|e| SensorError::Coord { line: l + 1, source: e });

				let rest = line.strip_prefix("Sensor at x=").ok_or_else(format_err)?;
				let (sensor_x, rest) = rest.split_once(", y=").ok_or_else(format_err)?;
				let (sensor_y, rest) = rest.split_once(": closest beacon is at x=")
					.ok_or_else(format_err)?;
				let (beacon_x, beacon_y) = rest.split_once(", y=").ok_or_else(format_err)?;

				Ok(Sensor {
					pos: Pos::new(parse(sensor_y)?, parse(sensor_x)?),
					beacon: Pos::new(parse(beacon_y)?, parse(beacon_x)?),
				})
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sensor at x=2, y=18: closest beacon is at x=-2, y=15
		Sensor at x=9, y=16: closest beacon is at x=10, y=16
		Sensor at x=13, y=2: closest beacon is at x=15, y=3
		Sensor at x=12, y=14: closest beacon is at x=10, y=16
		Sensor at x=10, y=20: closest beacon is at x=10, y=16
		Sensor at x=14, y=17: closest beacon is at x=10, y=16
		Sensor at x=8, y=7: closest beacon is at x=2, y=10
		Sensor at x=2, y=0: closest beacon is at x=2, y=10
		Sensor at x=0, y=11: closest beacon is at x=2, y=10
		Sensor at x=20, y=14: closest beacon is at x=25, y=17
		Sensor at x=17, y=20: closest beacon is at x=21, y=22
		Sensor at x=16, y=7: closest beacon is at x=15, y=3
		Sensor at x=14, y=3: closest beacon is at x=15, y=3
		Sensor at x=20, y=1: closest beacon is at x=15, y=3
	" };

	#[test]
	fn coverage() {
		let sensors = input_sensors_from_str(INPUT);
		assert_eq!(sensors[6].radius(), 9);
		// Row 10 is covered in one contiguous stretch
		assert_eq!(row_coverage(&sensors, 10), [(-2, 24)]);
		// Row 11 has the single gap at x=14
		assert_eq!(row_coverage(&sensors, 11), [(-3, 13), (15, 25)]);
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl::<10>(input_sensors_from_str(INPUT)), 26);
		assert_eq!(part1(), 26);
		assert_eq!(part2_impl::<20>(input_sensors_from_str(INPUT)), 56000011);
		assert_eq!(part2(), 56000011);
	}
}
