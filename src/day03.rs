// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Rucksacks = Vec<String>;

fn priority(item: u8) -> u64 {
	match item {
		b'a'..=b'z' => (item - b'a') as u64 + 1,
		b'A'..=b'Z' => (item - b'A') as u64 + 27,
		_ => panic!("Invalid item type {:?}", item as char),
	}
}


fn input_rucksacks_from_str(s: &str) -> Rucksacks {
	parsing::try_rucksacks_from_str(s).unwrap()
}

fn input_rucksacks() -> Rucksacks {
	input_rucksacks_from_str(include_str!("day03.txt"))
}


fn part1_impl(input_rucksacks: Rucksacks) -> u64 {
	input_rucksacks.iter()
		.map(|rucksack| {
			let (left, right) = rucksack.as_bytes().split_at(rucksack.len() / 2);
			let shared = left.iter()
				.copied()
				.find(|item| right.contains(item))
				.unwrap_or_else(|| panic!("No shared item type in {rucksack:?}"));
			priority(shared)
		})
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_rucksacks())
}


fn part2_impl(input_rucksacks: Rucksacks) -> u64 {
	use itertools::Itertools as _;
	input_rucksacks.iter()
		.tuples()
		.map(|(first, second, third)| {
			let badge = first.bytes()
				.find(|item| second.as_bytes().contains(item)
					&& third.as_bytes().contains(item))
				.unwrap_or_else(|| panic!("No badge in group starting at {first:?}"));
			priority(badge)
		})
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_rucksacks())
}


mod parsing {
	use super::Rucksacks;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksacksError {
		InvalidItem { line: usize, column: usize, found: char },
		OddLen { line: usize, len: usize },
	}

	pub(super) fn try_rucksacks_from_str(s: &str) -> Result<Rucksacks, RucksacksError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				if let Some(c) = line.chars().position(|c| !c.is_ascii_alphabetic()) {
					return Err(RucksacksError::InvalidItem {
						line: l + 1, column: c + 1, found: line.chars().nth(c).unwrap() });
				}
				if line.len() % 2 != 0 {
					return Err(RucksacksError::OddLen { line: l + 1, len: line.len() });
				}
				Ok(line.to_owned())
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(part1_impl(input_rucksacks_from_str(INPUT)), 157);
	assert_eq!(part1(), 157);
	assert_eq!(part2_impl(input_rucksacks_from_str(INPUT)), 70);
	assert_eq!(part2(), 70);
}
