// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn find_marker(signal: &[u8], len: usize) -> usize {
	signal.windows(len)
		.position(|window| window.iter().enumerate()
			.all(|(i, byte)| !window[..i].contains(byte)))
		.map(|pos| pos + len)
		.unwrap_or_else(|| panic!("No marker of {len} distinct bytes"))
}


fn input_signal_from_str(s: &str) -> &[u8] {
	parsing::try_signal_from_str(s).unwrap()
}

fn input_signal() -> &'static [u8] {
	input_signal_from_str(include_str!("day06.txt"))
}


fn part1_impl(input_signal: &[u8]) -> usize {
	find_marker(input_signal, 4)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_signal())
}


fn part2_impl(input_signal: &[u8]) -> usize {
	find_marker(input_signal, 14)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_signal())
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SignalError {
		Empty,
		InvalidByte { column: usize, found: char },
	}

	pub(super) fn try_signal_from_str(s: &str) -> Result<&[u8], SignalError> {
		let signal = s.lines().next().ok_or(SignalError::Empty)?;
		if signal.is_empty() { return Err(SignalError::Empty) }
		if let Some(c) = signal.bytes().position(|b| !b.is_ascii_lowercase()) {
			return Err(SignalError::InvalidByte {
				column: c + 1, found: signal.as_bytes()[c] as char });
		}
		Ok(signal.as_bytes())
	}
}


#[test]
fn tests() {
	for (signal, marker4, marker14) in [
		("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
		("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
		("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
		("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
		("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
	] {
		assert_eq!(part1_impl(input_signal_from_str(signal)), marker4);
		assert_eq!(part2_impl(input_signal_from_str(signal)), marker14);
	}
	assert_eq!(part1(), 7);
	assert_eq!(part2(), 19);
}
