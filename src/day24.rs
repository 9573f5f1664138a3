// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::HashSet;
use crate::grid::{self, Dir, Pos};

struct Basin {
	/// Walled dimensions; the interior is `1..height - 1` by `1..width - 1`.
	height: i32,
	width: i32,
	blizzards: Vec<(Pos, Dir)>,
}

impl Basin {
	fn entrance(&self) -> Pos {
		Pos::new(0, 1)
	}

	fn exit(&self) -> Pos {
		Pos::new(self.height - 1, self.width - 2)
	}
}

/// Blizzard occupancy per minute, grown lazily; blizzards wrap around the
/// basin interior and never enter the entrance or exit squares.
struct Forecast {
	height: i32,
	width: i32,
	minutes: Vec<(Vec<(Pos, Dir)>, HashSet<Pos>)>,
}

impl Forecast {
	fn new(basin: &Basin) -> Self {
		let occupied = basin.blizzards.iter().map(|&(pos, _)| pos).collect();
		Forecast {
			height: basin.height,
			width: basin.width,
			minutes: vec![(basin.blizzards.clone(), occupied)],
		}
	}

	fn occupied(&mut self, minute: usize) -> &HashSet<Pos> {
		while self.minutes.len() <= minute {
			let (last, _) = self.minutes.last().unwrap();
			let next: Vec<(Pos, Dir)> = last.iter()
				.map(|&(pos, dir)| {
					let mut pos = pos + dir.delta();
					if pos.y == 0 { pos.y = self.height - 2 }
					else if pos.y == self.height - 1 { pos.y = 1 }
					if pos.x == 0 { pos.x = self.width - 2 }
					else if pos.x == self.width - 1 { pos.x = 1 }
					(pos, dir)
				})
				.collect();
			let occupied = next.iter().map(|&(pos, _)| pos).collect();
			self.minutes.push((next, occupied));
		}
		&self.minutes[minute].1
	}
}

/// Fewest minutes to get from `from` to `to`, setting out at `start_minute`.
fn crossing(basin: &Basin, forecast: &mut Forecast, from: Pos, to: Pos, start_minute: usize) -> usize {
	let in_bounds = |pos: Pos| pos == basin.entrance() || pos == basin.exit()
		|| (1..basin.height - 1).contains(&pos.y) && (1..basin.width - 1).contains(&pos.x);
	grid::shortest_path([(from, start_minute)],
		|&(pos, minute): &(Pos, usize)| {
			let minute = minute + 1;
			let occupied = forecast.occupied(minute);
			Dir::ALL.iter()
				.map(|dir| pos + dir.delta())
				.chain(std::iter::once(pos))
				.filter(|&next| in_bounds(next) && !occupied.contains(&next))
				.map(|next| (next, minute))
				.collect::<Vec<_>>()
		},
		|&(pos, _)| pos == to)
		.unwrap_or_else(|| panic!("Could not cross the basin"))
}


fn input_basin_from_str(s: &str) -> Basin {
	s.parse().unwrap()
}

fn input_basin() -> Basin {
	input_basin_from_str(include_str!("day24.txt"))
}


fn part1_impl(input_basin: Basin) -> usize {
	let mut forecast = Forecast::new(&input_basin);
	crossing(&input_basin, &mut forecast, input_basin.entrance(), input_basin.exit(), 0)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_basin())
}


fn part2_impl(input_basin: Basin) -> usize {
	let mut forecast = Forecast::new(&input_basin);
	let (entrance, exit) = (input_basin.entrance(), input_basin.exit());
	let there = crossing(&input_basin, &mut forecast, entrance, exit, 0);
	let back = there + crossing(&input_basin, &mut forecast, exit, entrance, there);
	back + crossing(&input_basin, &mut forecast, entrance, exit, back)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_basin())
}


#[cfg(LOGGING)]
impl std::fmt::Display for Basin {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for y in 0..self.height {
			for x in 0..self.width {
				let pos = Pos::new(y, x);
				let blizzards: Vec<Dir> = self.blizzards.iter()
					.filter(|&&(p, _)| p == pos)
					.map(|&(_, dir)| dir)
					.collect();
				let square = match (blizzards.len(), blizzards.first()) {
					_ if pos == self.entrance() || pos == self.exit() => '.',
					_ if pos.y == 0 || pos.y == self.height - 1
						|| pos.x == 0 || pos.x == self.width - 1 => '#',
					(0, _) => '.',
					(1, Some(Dir::Up)) => '^',
					(1, Some(Dir::Down)) => 'v',
					(1, Some(Dir::Left)) => '<',
					(1, Some(Dir::Right)) => '>',
					(n, _) => char::from_digit(n.min(9) as u32, 10).unwrap(),
				};
				write!(f, "{square}")?;
			}
			f.write_str("\n")?;
		}
		Ok(())
	}
}


mod parsing {
	use std::str::FromStr;
	use super::{Basin, Dir, Pos};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BasinError {
		TooSmall,
		UnevenRow { line: usize, len: usize, width: usize },
		InvalidSquare { line: usize, column: usize, found: char },
	}

	impl FromStr for Basin {
		type Err = BasinError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut blizzards = vec![];
			let (mut height, mut width) = (0, 0);
			for (l, line) in s.lines().enumerate() {
				if l == 0 {
					width = line.len() as i32;
				} else if line.len() as i32 != width {
					return Err(BasinError::UnevenRow {
						line: l + 1, len: line.len(), width: width as usize });
				}
				height = l as i32 + 1;
				for (c, byte) in line.bytes().enumerate() {
					let dir = match byte {
						b'#' | b'.' => continue,
						b'^' => Dir::Up,
						b'v' => Dir::Down,
						b'<' => Dir::Left,
						b'>' => Dir::Right,
						_ => return Err(BasinError::InvalidSquare {
							line: l + 1, column: c + 1, found: byte as char }),
					};
					blizzards.push((Pos::new(l as i32, c as i32), dir));
				}
			}
			if height < 3 || width < 3 { return Err(BasinError::TooSmall) }
			Ok(Basin { height, width, blizzards })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const SIMPLE_INPUT: &str = indoc::indoc! { "
		#.#####
		#.....#
		#>....#
		#.....#
		#...v.#
		#.....#
		#####.#
	" };

	const INPUT: &str = indoc::indoc! { "
		#.######
		#>>.<^<#
		#.<..<<#
		#>v.><>#
		#<^v^^>#
		######.#
	" };

	#[test]
	fn forecasting() {
		let basin = input_basin_from_str(SIMPLE_INPUT);
		let mut forecast = Forecast::new(&basin);
		assert!(forecast.occupied(1).contains(&Pos::new(2, 2)));
		assert!(forecast.occupied(1).contains(&Pos::new(5, 4)));
		// Both blizzards wrap around to where they started
		let fifth_minute = forecast.occupied(5).clone();
		assert_eq!(&fifth_minute, forecast.occupied(0));
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_basin_from_str(SIMPLE_INPUT)), 10);
		assert_eq!(part1_impl(input_basin_from_str(INPUT)), 18);
		assert_eq!(part1(), 18);
		assert_eq!(part2_impl(input_basin_from_str(INPUT)), 54);
		assert_eq!(part2(), 54);
	}
}
