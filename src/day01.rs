// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Inventories = Vec<Vec<u64>>;


fn input_inventories_from_str(s: &str) -> Inventories {
	parsing::try_inventories_from_str(s).unwrap()
}

fn input_inventories() -> Inventories {
	input_inventories_from_str(include_str!("day01.txt"))
}


fn part1_impl(input_inventories: Inventories) -> u64 {
	input_inventories.iter()
		.map(|inventory| inventory.iter().sum())
		.max()
		.unwrap_or_else(|| panic!("No inventories"))
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_inventories())
}


fn part2_impl(input_inventories: Inventories) -> u64 {
	use itertools::Itertools as _;
	input_inventories.iter()
		.map(|inventory| inventory.iter().sum::<u64>())
		.sorted()
		.rev()
		.take(3)
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_inventories())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Inventories;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct InventoriesError { line: usize, source: ParseIntError }

	pub(super) fn try_inventories_from_str(s: &str) -> Result<Inventories, InventoriesError> {
		let mut inventories = vec![vec![]];
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() {
				if !inventories.last().unwrap().is_empty() { inventories.push(vec![]) }
			} else {
				let calories = line.parse()
					.map_err(|e| InventoriesError { line: l + 1, source: e })?;
				inventories.last_mut().unwrap().push(calories);
			}
		}
		if inventories.last().unwrap().is_empty() { inventories.pop(); }
		Ok(inventories)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	assert_eq!(part1_impl(input_inventories_from_str(INPUT)), 24000);
	assert_eq!(part1(), 24000);
	assert_eq!(part2_impl(input_inventories_from_str(INPUT)), 45000);
	assert_eq!(part2(), 45000);
}
