// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Move {
	num: usize,
	/// Zero-based stack indices.
	from: usize,
	to: usize,
}

struct Dock {
	/// Bottom-up stacks of crate labels.
	stacks: Vec<Vec<char>>,
	moves: Vec<Move>,
}

impl Dock {
	fn tops(&self) -> String {
		self.stacks.iter()
			.map(|stack| stack.last()
				.unwrap_or_else(|| panic!("Empty stack")))
			.collect()
	}
}


fn input_dock_from_str(s: &str) -> Dock {
	s.parse().unwrap()
}

fn input_dock() -> Dock {
	input_dock_from_str(include_str!("day05.txt"))
}


fn part1_impl(mut input_dock: Dock) -> String {
	for r#move in std::mem::take(&mut input_dock.moves) {
		for _ in 0..r#move.num {
			let krate = input_dock.stacks[r#move.from].pop()
				.unwrap_or_else(|| panic!("Moving from empty stack {}", r#move.from + 1));
			input_dock.stacks[r#move.to].push(krate);
		}
	}
	input_dock.tops()
}

pub(crate) fn part1() -> String {
	part1_impl(input_dock())
}


fn part2_impl(mut input_dock: Dock) -> String {
	for r#move in std::mem::take(&mut input_dock.moves) {
		let from = &mut input_dock.stacks[r#move.from];
		if from.len() < r#move.num {
			panic!("Moving {} crates from stack {} of {}", r#move.num, r#move.from + 1, from.len());
		}
		let batch = from.split_off(from.len() - r#move.num);
		input_dock.stacks[r#move.to].extend(batch);
	}
	input_dock.tops()
}

pub(crate) fn part2() -> String {
	part2_impl(input_dock())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dock, Move};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DockError {
		NoMoves,
		NoLabels,
		InvalidCrate { line: usize, column: usize, found: char },
		MoveFormat { line: usize },
		MoveNum { line: usize, source: ParseIntError },
		MoveStack { line: usize, found: usize },
	}

	fn try_move_from_line(line: &str, l: usize, num_stacks: usize) -> Result<Move, DockError> {
		let format_err = || DockError::MoveFormat { line: l };
		let rest = line.strip_prefix("move ").ok_or_else(format_err)?;
		let (num, rest) = rest.split_once(" from ").ok_or_else(format_err)?;
		let (from, to) = rest.split_once(" to ").ok_or_else(format_err)?;
		let parse = |s: &str| s.parse::<usize>()
			.map_err(|e| DockError::MoveNum { line: l, source: e });
		let stack = |s: &str| parse(s).and_then(|n| if (1..=num_stacks).contains(&n) {
			Ok(n - 1)
		} else {
			Err(DockError::MoveStack { line: l, found: n })
		});
		Ok(Move { num: parse(num)?, from: stack(from)?, to: stack(to)? })
	}

	impl FromStr for Dock {
		type Err = DockError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (drawing, moves) = s.split_once("\n\n").ok_or(DockError::NoMoves)?;

			let mut drawing_lines = drawing.lines().rev();
			let labels = drawing_lines.next().ok_or(DockError::NoLabels)?;
			let num_stacks = labels.split_whitespace().count();
			if num_stacks == 0 { return Err(DockError::NoLabels) }

			let mut stacks = vec![vec![]; num_stacks];
			let num_drawing_lines = drawing.lines().count();
			for (l, line) in drawing_lines.enumerate() {
				for (i, stack) in stacks.iter_mut().enumerate() {
					let column = 1 + 4 * i;
					match line.as_bytes().get(column) {
						Some(label @ b'A'..=b'Z') => stack.push(*label as char),
						Some(b' ') | None => (),
						Some(&found) => return Err(DockError::InvalidCrate {
							line: num_drawing_lines - 1 - l, column: column + 1, found: found as char }),
					}
				}
			}

			let moves = moves.lines()
				.enumerate()
				.map(|(l, line)| try_move_from_line(line, num_drawing_lines + 2 + l, num_stacks))
				.collect::<Result<_, _>>()?;

			Ok(Dock { stacks, moves })
		}
	}
}


#[test]
fn tests() {
	// The drawing’s trailing spaces rule out `indoc`; the committed input
	// is the example anyway.
	assert_eq!(part1(), "CMZ");
	assert_eq!(part2(), "MCD");
}
