// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const DECRYPTION_KEY: i64 = 811_589_153;

/// Mixes by shuffling indices into the original file, so duplicate values
/// keep their identities.
fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
	let mut order: Vec<usize> = (0..numbers.len()).collect();
	for _ in 0..rounds {
		for (i, &number) in numbers.iter().enumerate() {
			let idx = order.iter()
				.position(|&o| o == i)
				.unwrap_or_else(|| panic!("Lost number at original index {i}"));
			order.remove(idx);
			let new_idx = (idx as i64 + number).rem_euclid(order.len() as i64) as usize;
			order.insert(new_idx, i);
		}
	}
	order.into_iter().map(|i| numbers[i]).collect()
}

fn grove_coordinates(mixed: &[i64]) -> i64 {
	let zero = mixed.iter()
		.position(|&number| number == 0)
		.unwrap_or_else(|| panic!("No zero in the file"));
	[1000, 2000, 3000].into_iter()
		.map(|offset: usize| mixed[(zero + offset) % mixed.len()])
		.sum()
}


fn input_numbers_from_str(s: &str) -> Vec<i64> {
	parsing::try_numbers_from_str(s).unwrap()
}

fn input_numbers() -> Vec<i64> {
	input_numbers_from_str(include_str!("day20.txt"))
}


fn part1_impl(input_numbers: Vec<i64>) -> i64 {
	grove_coordinates(&mix(&input_numbers, 1))
}

pub(crate) fn part1() -> i64 {
	part1_impl(input_numbers())
}


fn part2_impl(input_numbers: Vec<i64>) -> i64 {
	let numbers: Vec<i64> = input_numbers.iter()
		.map(|number| number * DECRYPTION_KEY)
		.collect();
	grove_coordinates(&mix(&numbers, 10))
}

pub(crate) fn part2() -> i64 {
	part2_impl(input_numbers())
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct NumbersError { line: usize, source: ParseIntError }

	pub(super) fn try_numbers_from_str(s: &str) -> Result<Vec<i64>, NumbersError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| NumbersError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1
		2
		-3
		3
		-2
		0
		4
	" };

	#[test]
	fn mixing() {
		let mixed = mix(&input_numbers_from_str(INPUT), 1);
		// The mixed file is circular; anchor it on the zero
		let zero = mixed.iter().position(|&n| n == 0).unwrap();
		let rotated: Vec<i64> = (0..mixed.len()).map(|i| mixed[(zero + i) % mixed.len()]).collect();
		assert_eq!(rotated, [0, 3, -2, 1, 2, -3, 4]);
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_numbers_from_str(INPUT)), 3);
		assert_eq!(part1(), 3);
		assert_eq!(part2_impl(input_numbers_from_str(INPUT)), 1623178306);
		assert_eq!(part2(), 1623178306);
	}
}
