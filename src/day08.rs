// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Forest {
	/// Row-major tree heights, `stride` per row.
	heights: Vec<u8>,
	stride: usize,
}

impl Forest {
	fn rows(&self) -> usize {
		self.heights.len() / self.stride
	}

	fn height(&self, y: usize, x: usize) -> u8 {
		self.heights[y * self.stride + x]
	}

	/// The four runs of heights away from `(y, x)`, nearest tree first.
	fn sightlines(&self, y: usize, x: usize) -> [Vec<u8>; 4] {
		[
			(0..y).rev().map(|dy| self.height(dy, x)).collect(),
			(y + 1..self.rows()).map(|dy| self.height(dy, x)).collect(),
			(0..x).rev().map(|dx| self.height(y, dx)).collect(),
			(x + 1..self.stride).map(|dx| self.height(y, dx)).collect(),
		]
	}

	fn is_visible(&self, y: usize, x: usize) -> bool {
		let height = self.height(y, x);
		self.sightlines(y, x).iter()
			.any(|line| line.iter().all(|&tree| tree < height))
	}

	fn scenic_score(&self, y: usize, x: usize) -> usize {
		let height = self.height(y, x);
		self.sightlines(y, x).iter()
			.map(|line| line.iter()
				.position(|&tree| tree >= height)
				.map_or(line.len(), |blocked| blocked + 1))
			.product()
	}
}


fn input_forest_from_str(s: &str) -> Forest {
	s.parse().unwrap()
}

fn input_forest() -> Forest {
	input_forest_from_str(include_str!("day08.txt"))
}


fn part1_impl(input_forest: Forest) -> usize {
	(0..input_forest.rows())
		.flat_map(|y| (0..input_forest.stride).map(move |x| (y, x)))
		.filter(|&(y, x)| input_forest.is_visible(y, x))
		.count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_forest())
}


fn part2_impl(input_forest: Forest) -> usize {
	(0..input_forest.rows())
		.flat_map(|y| (0..input_forest.stride).map(move |x| (y, x)))
		.map(|(y, x)| input_forest.scenic_score(y, x))
		.max()
		.unwrap_or_else(|| panic!("Empty forest"))
}

pub(crate) fn part2() -> usize {
	part2_impl(input_forest())
}


mod parsing {
	use std::str::FromStr;
	use super::Forest;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ForestError {
		Empty,
		UnevenRow { line: usize, len: usize, stride: usize },
		InvalidHeight { line: usize, column: usize, found: char },
	}

	impl FromStr for Forest {
		type Err = ForestError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut stride = 0;
			for (l, line) in s.lines().enumerate() {
				if l == 0 {
					stride = line.len();
					if stride == 0 { return Err(ForestError::Empty) }
				} else if line.len() != stride {
					return Err(ForestError::UnevenRow { line: l + 1, len: line.len(), stride });
				}
				for (c, byte) in line.bytes().enumerate() {
					match byte {
						b'0'..=b'9' => heights.push(byte - b'0'),
						_ => return Err(ForestError::InvalidHeight {
							line: l + 1, column: c + 1, found: byte as char }),
					}
				}
			}
			if heights.is_empty() { return Err(ForestError::Empty) }
			Ok(Forest { heights, stride })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35353
	" };
	assert_eq!(part1_impl(input_forest_from_str(INPUT)), 21);
	assert_eq!(part1(), 21);
	assert_eq!(input_forest_from_str(INPUT).scenic_score(3, 2), 8);
	assert_eq!(part2_impl(input_forest_from_str(INPUT)), 8);
	assert_eq!(part2(), 8);
}
