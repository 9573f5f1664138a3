// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Instr {
	Noop,
	Addx(i64),
}

/// The value of register X during each cycle, starting from cycle 1.
fn x_values(instrs: &[Instr]) -> Vec<i64> {
	let mut values = vec![];
	let mut x = 1;
	for instr in instrs {
		match instr {
			Instr::Noop => values.push(x),
			Instr::Addx(addend) => {
				values.push(x);
				values.push(x);
				x += addend;
			}
		}
	}
	values
}


fn input_instrs_from_str(s: &str) -> Vec<Instr> {
	parsing::try_instrs_from_str(s).unwrap()
}

fn input_instrs() -> Vec<Instr> {
	input_instrs_from_str(include_str!("day10.txt"))
}


fn part1_impl(input_instrs: Vec<Instr>) -> i64 {
	let values = x_values(&input_instrs);
	(20..=220).step_by(40)
		.map(|cycle| cycle as i64 * values[cycle - 1])
		.sum()
}

pub(crate) fn part1() -> i64 {
	part1_impl(input_instrs())
}


fn part2_impl(input_instrs: Vec<Instr>) -> String {
	let values = x_values(&input_instrs);
	let mut screen = String::with_capacity(41 * 6);
	for (cycle, x) in values.iter().enumerate().take(240) {
		if cycle > 0 && cycle % 40 == 0 { screen.push('\n') }
		let pixel = (cycle % 40) as i64;
		screen.push(if x.abs_diff(pixel) <= 1 { '#' } else { '.' });
	}
	screen
}

pub(crate) fn part2() -> String {
	part2_impl(input_instrs())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Instr;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InstrError {
		Opcode { line: usize, found: String },
		Addend { line: usize, source: ParseIntError },
	}

	pub(super) fn try_instrs_from_str(s: &str) -> Result<Vec<Instr>, InstrError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| match line {
				"noop" => Ok(Instr::Noop),
				_ => match line.strip_prefix("addx ") {
					Some(addend) => addend.parse()
						.map(Instr::Addx)
						.map_err(|e| InstrError::Addend { line: l + 1, source: e }),
					None => Err(InstrError::Opcode { line: l + 1, found: line.to_owned() }),
				}
			})
			.collect()
	}
}


#[test]
fn tests() {
	let small = input_instrs_from_str("noop\naddx 3\naddx -5\n");
	assert_eq!(x_values(&small), [1, 1, 1, 4, 4]);
	assert_eq!(part1(), 13140);
	assert_eq!(part2(), indoc::indoc! { "
		##..##..##..##..##..##..##..##..##..##..
		###...###...###...###...###...###...###.
		####....####....####....####....####....
		#####.....#####.....#####.....#####.....
		######......######......######......####
		#######.......#######.......#######.....
	" }.trim_end());
}
