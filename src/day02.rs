// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
	Rock,
	Paper,
	Scissors,
}

impl Shape {
	fn score(self) -> u64 {
		match self {
			Shape::Rock => 1,
			Shape::Paper => 2,
			Shape::Scissors => 3,
		}
	}

	fn beats(self) -> Shape {
		match self {
			Shape::Rock => Shape::Scissors,
			Shape::Paper => Shape::Rock,
			Shape::Scissors => Shape::Paper,
		}
	}

	fn beaten_by(self) -> Shape {
		match self {
			Shape::Rock => Shape::Paper,
			Shape::Paper => Shape::Scissors,
			Shape::Scissors => Shape::Rock,
		}
	}
}

/// Second column of the strategy guide; what it stands for depends on the part.
#[derive(Clone, Copy)]
enum Response {
	X,
	Y,
	Z,
}

struct Round {
	theirs: Shape,
	response: Response,
}

impl Round {
	fn score(theirs: Shape, ours: Shape) -> u64 {
		ours.score() + if ours == theirs { 3 }
			else if ours.beats() == theirs { 6 }
			else { 0 }
	}
}


fn input_rounds_from_str(s: &str) -> Vec<Round> {
	parsing::try_rounds_from_str(s).unwrap()
}

fn input_rounds() -> Vec<Round> {
	input_rounds_from_str(include_str!("day02.txt"))
}


fn part1_impl(input_rounds: Vec<Round>) -> u64 {
	input_rounds.iter()
		.map(|round| {
			let ours = match round.response {
				Response::X => Shape::Rock,
				Response::Y => Shape::Paper,
				Response::Z => Shape::Scissors,
			};
			Round::score(round.theirs, ours)
		})
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_rounds())
}


fn part2_impl(input_rounds: Vec<Round>) -> u64 {
	input_rounds.iter()
		.map(|round| {
			let ours = match round.response {
				Response::X => round.theirs.beats(),
				Response::Y => round.theirs,
				Response::Z => round.theirs.beaten_by(),
			};
			Round::score(round.theirs, ours)
		})
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_rounds())
}


mod parsing {
	use super::{Response, Round, Shape};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RoundError { line: usize, found: String }

	pub(super) fn try_rounds_from_str(s: &str) -> Result<Vec<Round>, RoundError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let err = || RoundError { line: l + 1, found: line.to_owned() };
				let (theirs, response) = line.split_once(' ').ok_or_else(err)?;
				let theirs = match theirs {
					"A" => Shape::Rock,
					"B" => Shape::Paper,
					"C" => Shape::Scissors,
					_ => return Err(err()),
				};
				let response = match response {
					"X" => Response::X,
					"Y" => Response::Y,
					"Z" => Response::Z,
					_ => return Err(err()),
				};
				Ok(Round { theirs, response })
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1_impl(input_rounds_from_str(INPUT)), 15);
	assert_eq!(part1(), 15);
	assert_eq!(part2_impl(input_rounds_from_str(INPUT)), 12);
	assert_eq!(part2(), 12);
}
