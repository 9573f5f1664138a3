// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::ops::RangeInclusive;

struct Pair([RangeInclusive<u32>; 2]);

impl Pair {
	fn fully_contained(&self) -> bool {
		let [first, second] = &self.0;
		first.contains(second.start()) && first.contains(second.end())
			|| second.contains(first.start()) && second.contains(first.end())
	}

	fn overlapping(&self) -> bool {
		let [first, second] = &self.0;
		first.start() <= second.end() && second.start() <= first.end()
	}
}


fn input_pairs_from_str(s: &str) -> Vec<Pair> {
	parsing::try_pairs_from_str(s).unwrap()
}

fn input_pairs() -> Vec<Pair> {
	input_pairs_from_str(include_str!("day04.txt"))
}


fn part1_impl(input_pairs: Vec<Pair>) -> usize {
	input_pairs.iter().filter(|pair| pair.fully_contained()).count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_pairs())
}


fn part2_impl(input_pairs: Vec<Pair>) -> usize {
	input_pairs.iter().filter(|pair| pair.overlapping()).count()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_pairs())
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive};
	use super::Pair;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairError {
		Format { line: usize },
		Section { line: usize, source: ParseIntError },
	}

	fn try_range_from_str(s: &str, line: usize) -> Result<RangeInclusive<u32>, PairError> {
		let (start, end) = s.split_once('-').ok_or(PairError::Format { line })?;
		let parse = |s: &str| s.parse().map_err(|e| PairError::Section { line, source: e });
		Ok(parse(start)?..=parse(end)?)
	}

	impl Pair {
		fn try_from_line(line: &str, l: usize) -> Result<Self, PairError> {
			let (first, second) = line.split_once(',').ok_or(PairError::Format { line: l })?;
			Ok(Pair([try_range_from_str(first, l)?, try_range_from_str(second, l)?]))
		}
	}

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<Pair>, PairError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| Pair::try_from_line(line, l + 1))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1_impl(input_pairs_from_str(INPUT)), 2);
	assert_eq!(part1(), 2);
	assert_eq!(part2_impl(input_pairs_from_str(INPUT)), 4);
	assert_eq!(part2(), 4);
}
