// Copyright (c) 2022 Bastiaan Marinus van de Weerd


mod grid;


/// Prints a pass/fail marker for `found` against the known answer for the
/// committed (example) input, then the value itself.
fn check(day: &str, part: usize, found: impl std::fmt::Display, expected: impl std::fmt::Display) {
	let (found, expected) = (found.to_string(), expected.to_string());
	if found == expected {
		println!("\u{1f7e2} {day}, part {part}: {found}");
	} else {
		println!("\u{1f534} {day}, part {part}: expected {expected} but found {found}");
	}
}

macro_rules! days {
	( $( $num:tt => ( $part1:expr, $part2:expr ) ),+ $(,)? ) => { paste::paste! {
		$( mod [<day $num>]; )+

		fn main() {
			$(
				let day = concat!("day", stringify!($num));
				check(day, 1, [<day $num>]::part1(), $part1);
				check(day, 2, [<day $num>]::part2(), $part2);
			)+
		}
	} }
}

days! {
	01 => (24000, 45000),
	02 => (15, 12),
	03 => (157, 70),
	04 => (2, 4),
	05 => ("CMZ", "MCD"),
	06 => (7, 19),
	07 => (95437, 24933642),
	08 => (21, 8),
	10 => (13140, indoc::indoc! { "
		##..##..##..##..##..##..##..##..##..##..
		###...###...###...###...###...###...###.
		####....####....####....####....####....
		#####.....#####.....#####.....#####.....
		######......######......######......####
		#######.......#######.......#######.....
	" }.trim_end()),
	11 => (10605, 2713310158u64),
	12 => (31, 29),
	13 => (13, 140),
	14 => (24, 93),
	15 => (26, 56000011),
	17 => (3068, 1514285714288u64),
	18 => (64, 58),
	20 => (3, 1623178306),
	22 => (6032, 5031),
	23 => (110, 20),
	24 => (18, 54),
}
