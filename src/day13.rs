// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::cmp::Ordering;

#[derive(Clone, Debug)]
enum Packet {
	Int(u32),
	List(Vec<Packet>),
}

impl Packet {
	/// A lone integer compares as a one-element list.
	fn as_slice(&self) -> &[Packet] {
		match self {
			Packet::List(list) => list,
			int => std::slice::from_ref(int),
		}
	}
}

impl Ord for Packet {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Packet::Int(left), Packet::Int(right)) => left.cmp(right),
			(left, right) => left.as_slice().cmp(right.as_slice()),
		}
	}
}

impl PartialOrd for Packet {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Packet {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}

impl Eq for Packet {}


fn input_pairs_from_str(s: &str) -> Vec<[Packet; 2]> {
	parsing::try_pairs_from_str(s).unwrap()
}

fn input_pairs() -> Vec<[Packet; 2]> {
	input_pairs_from_str(include_str!("day13.txt"))
}


fn part1_impl(input_pairs: Vec<[Packet; 2]>) -> usize {
	input_pairs.iter()
		.enumerate()
		.filter(|(_, [left, right])| left < right)
		.map(|(i, _)| i + 1)
		.sum()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_pairs())
}


fn part2_impl(input_pairs: Vec<[Packet; 2]>) -> usize {
	let dividers = [2, 6].map(|int|
		Packet::List(vec![Packet::List(vec![Packet::Int(int)])]));
	let mut packets: Vec<&Packet> = input_pairs.iter().flatten().collect();
	packets.extend(&dividers);
	packets.sort();
	dividers.iter()
		.map(|divider| 1 + packets.iter()
			.position(|&packet| packet == divider)
			.unwrap_or_else(|| panic!("Lost a divider packet")))
		.product()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_pairs())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Packet;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PacketError {
		NoList,
		UnmatchedBracket { column: usize },
		TrailingBytes { column: usize },
		InvalidByte { column: usize, found: char },
		Int { column: usize, source: ParseIntError },
	}

	impl FromStr for Packet {
		type Err = PacketError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let bytes = s.as_bytes();
			let mut stack: Vec<Vec<Packet>> = vec![];
			let mut i = 0;
			while i < bytes.len() {
				match bytes[i] {
					b'[' => stack.push(vec![]),
					b']' => {
						let list = Packet::List(stack.pop()
							.ok_or(PacketError::UnmatchedBracket { column: i + 1 })?);
						match stack.last_mut() {
							Some(parent) => parent.push(list),
							None => return if i + 1 == bytes.len() { Ok(list) }
								else { Err(PacketError::TrailingBytes { column: i + 2 }) },
						}
					}
					b',' => (),
					b'0'..=b'9' => {
						let start = i;
						while bytes.get(i + 1).map_or(false, u8::is_ascii_digit) { i += 1 }
						let int = s[start..=i].parse()
							.map_err(|e| PacketError::Int { column: start + 1, source: e })?;
						stack.last_mut()
							.ok_or(PacketError::NoList)?
							.push(Packet::Int(int));
					}
					found => return Err(PacketError::InvalidByte {
						column: i + 1, found: found as char }),
				}
				i += 1;
			}
			Err(if stack.is_empty() { PacketError::NoList }
				else { PacketError::UnmatchedBracket { column: bytes.len() } })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairsError {
		Pair { pair: usize },
		Packet { line: usize, source: PacketError },
	}

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<[Packet; 2]>, PairsError> {
		s.split("\n\n")
			.enumerate()
			.map(|(p, block)| {
				let mut lines = block.lines();
				let mut packet = |offset| lines.next()
					.ok_or(PairsError::Pair { pair: p + 1 })?
					.parse()
					.map_err(|e| PairsError::Packet { line: 3 * p + offset, source: e });
				let pair = [packet(1)?, packet(2)?];
				if lines.next().is_some() { return Err(PairsError::Pair { pair: p + 1 }) }
				Ok(pair)
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		[1,1,3,1,1]
		[1,1,5,1,1]

		[[1],[2,3,4]]
		[[1],4]

		[9]
		[[8,7,6]]

		[[4,4],4,4]
		[[4,4],4,4,4]

		[7,7,7,7]
		[7,7,7]

		[]
		[3]

		[[[]]]
		[[]]

		[1,[2,[3,[4,[5,6,7]]]],8,9]
		[1,[2,[3,[4,[5,6,0]]]],8,9]
	" };

	#[test]
	fn ordering() {
		let packet = |s: &str| s.parse::<Packet>().unwrap();
		assert!(packet("[1,1,3,1,1]") < packet("[1,1,5,1,1]"));
		assert!(packet("[9]") > packet("[[8,7,6]]"));
		assert!(packet("[7,7,7,7]") > packet("[7,7,7]"));
		assert!(packet("[]") < packet("[3]"));
		assert_eq!(packet("[1]"), packet("[[1]]"));
		assert!("[1,2".parse::<Packet>().is_err());
		assert!("[1]]".parse::<Packet>().is_err());
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_pairs_from_str(INPUT)), 13);
		assert_eq!(part1(), 13);
		assert_eq!(part2_impl(input_pairs_from_str(INPUT)), 140);
		assert_eq!(part2(), 140);
	}
}
