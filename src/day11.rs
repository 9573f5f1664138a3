// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Operation {
	Add(u64),
	Mul(u64),
	Square,
}

impl Operation {
	fn apply(self, old: u64) -> u64 {
		match self {
			Operation::Add(addend) => old + addend,
			Operation::Mul(factor) => old * factor,
			Operation::Square => old * old,
		}
	}
}

struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	divisor: u64,
	if_true: usize,
	if_false: usize,
}

fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relieve: impl Fn(u64) -> u64) -> u64 {
	let mut inspections = vec![0u64; monkeys.len()];
	for _ in 0..rounds {
		for i in 0..monkeys.len() {
			for item in std::mem::take(&mut monkeys[i].items) {
				inspections[i] += 1;
				let worry = relieve(monkeys[i].operation.apply(item));
				let target = if worry % monkeys[i].divisor == 0 { monkeys[i].if_true }
					else { monkeys[i].if_false };
				monkeys[target].items.push(worry);
			}
		}
	}

	use itertools::Itertools as _;
	inspections.into_iter().sorted().rev().take(2).product()
}


fn input_monkeys_from_str(s: &str) -> Vec<Monkey> {
	parsing::try_monkeys_from_str(s).unwrap()
}

fn input_monkeys() -> Vec<Monkey> {
	input_monkeys_from_str(include_str!("day11.txt"))
}


fn part1_impl(input_monkeys: Vec<Monkey>) -> u64 {
	monkey_business(input_monkeys, 20, |worry| worry / 3)
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_monkeys())
}


fn part2_impl(input_monkeys: Vec<Monkey>) -> u64 {
	// Worry levels only matter modulo the divisors’ least common multiple.
	let lcm = input_monkeys.iter()
		.fold(1, |lcm, monkey| num_integer::lcm(lcm, monkey.divisor));
	monkey_business(input_monkeys, 10_000, |worry| worry % lcm)
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_monkeys())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Monkey, Operation};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeysError {
		Format { monkey: usize, line: usize, found: String },
		Num { monkey: usize, line: usize, source: ParseIntError },
	}

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeysError> {
		s.split("\n\n")
			.enumerate()
			.map(|(m, block)| try_monkey_from_str(block, m))
			.collect()
	}

	fn try_monkey_from_str(s: &str, m: usize) -> Result<Monkey, MonkeysError> {
		let mut lines = s.lines().enumerate();
		let mut expect = |prefix: &str| {
			let (l, line) = lines.next().unwrap_or((0, ""));
			line.strip_prefix(prefix)
				.ok_or_else(|| MonkeysError::Format {
					monkey: m, line: l + 1, found: line.to_owned() })
				.map(|rest| (l, rest))
		};

		_ = expect("Monkey ")?;

		let (l, items) = expect("  Starting items: ")?;
		let items = items.split(", ")
			.map(|item| item.parse()
				.map_err(|e| MonkeysError::Num { monkey: m, line: l + 1, source: e }))
			.collect::<Result<_, _>>()?;

		let (l, operation) = expect("  Operation: new = old ")?;
		let operation = match operation.split_once(' ') {
			Some(("*", "old")) => Operation::Square,
			Some(("*", factor)) => Operation::Mul(factor.parse()
				.map_err(|e| MonkeysError::Num { monkey: m, line: l + 1, source: e })?),
			Some(("+", addend)) => Operation::Add(addend.parse()
				.map_err(|e| MonkeysError::Num { monkey: m, line: l + 1, source: e })?),
			_ => return Err(MonkeysError::Format {
				monkey: m, line: l + 1, found: operation.to_owned() }),
		};

		let num = |(l, s): (usize, &str)| -> Result<u64, MonkeysError> { s.parse()
			.map_err(|e| MonkeysError::Num { monkey: m, line: l + 1, source: e }) };
		let divisor = num(expect("  Test: divisible by ")?)?;
		let if_true = num(expect("    If true: throw to monkey ")?)? as usize;
		let if_false = num(expect("    If false: throw to monkey ")?)? as usize;

		Ok(Monkey { items, operation, divisor, if_true, if_false })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_monkeys_from_str(INPUT)), 10605);
		assert_eq!(part1(), 10605);
		assert_eq!(part2_impl(input_monkeys_from_str(INPUT)), 2713310158);
		assert_eq!(part2(), 2713310158);
	}

	#[test]
	fn single_round() {
		let monkeys = input_monkeys_from_str(INPUT);
		assert_eq!(monkeys[0].divisor, 23);
		assert_eq!((monkeys[0].if_true, monkeys[0].if_false), (2, 3));
		assert_eq!(monkeys[0].operation.apply(79), 1501);
		// Inspections after one round are [2, 4, 3, 5]
		assert_eq!(monkey_business(monkeys, 1, |worry| worry / 3), 20);
	}
}
