// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::collections::HashMap;

#[derive(Clone, Copy)]
enum Jet {
	Left,
	Right,
}

/// Rock shapes as bottom-up bitmap rows; bit `x` of a row is the column
/// `x` tiles right of the shape’s left edge.
#[derive(Clone, Copy)]
struct Rock {
	rows: [u8; 4],
	width: usize,
	height: usize,
}

const ROCKS: [Rock; 5] = [
	Rock { rows: [0b1111, 0, 0, 0], width: 4, height: 1 },
	Rock { rows: [0b010, 0b111, 0b010, 0], width: 3, height: 3 },
	Rock { rows: [0b111, 0b100, 0b100, 0], width: 3, height: 3 },
	Rock { rows: [0b1, 0b1, 0b1, 0b1], width: 1, height: 4 },
	Rock { rows: [0b11, 0b11, 0, 0], width: 2, height: 2 },
];

const WELL_WIDTH: usize = 7;

/// Filled rows of the well, bottom-up; the topmost row is never empty.
type Well = Vec<u8>;

fn fits(well: &Well, rock: Rock, x: usize, y: usize) -> bool {
	(0..rock.height).all(|r| match well.get(y + r) {
		Some(row) => row & (rock.rows[r] << x) == 0,
		None => true,
	})
}

fn drop_rock(well: &mut Well, rock: Rock, jets: &[Jet], jet_idx: &mut usize) {
	let mut x = 2usize;
	let mut y = well.len() + 3;
	loop {
		let jet = jets[*jet_idx % jets.len()];
		*jet_idx += 1;
		let jetted_x = match jet {
			Jet::Left => x.checked_sub(1),
			Jet::Right => (x + rock.width < WELL_WIDTH).then(|| x + 1),
		};
		if let Some(jetted_x) = jetted_x {
			if fits(well, rock, jetted_x, y) { x = jetted_x }
		}
		if y > 0 && fits(well, rock, x, y - 1) { y -= 1 } else { break }
	}

	if well.len() < y + rock.height { well.resize(y + rock.height, 0) }
	for r in 0..rock.height {
		well[y + r] |= rock.rows[r] << x;
	}
	while well.last() == Some(&0) { well.pop(); }
}

/// Depth of the topmost filled tile in each column, saturating at 255;
/// together with the upcoming rock and jet this keys repeated states.
fn relief(well: &Well) -> [u8; WELL_WIDTH] {
	std::array::from_fn(|col| well.iter().rev()
		.position(|row| row & 1 << col != 0)
		.map_or(u8::MAX, |depth| depth.min(255) as u8))
}

fn tower_height(jets: &[Jet], num_rocks: u64) -> u64 {
	let mut well: Well = vec![];
	let mut jet_idx = 0;
	let mut seen: HashMap<([u8; WELL_WIDTH], usize, usize), (u64, u64)> = HashMap::new();
	let mut jumped = false;
	let mut skipped_height = 0;

	let mut dropped = 0;
	while dropped < num_rocks {
		let rock_idx = (dropped % ROCKS.len() as u64) as usize;
		drop_rock(&mut well, ROCKS[rock_idx], jets, &mut jet_idx);
		dropped += 1;

		if !jumped {
			let key = (relief(&well), (dropped % ROCKS.len() as u64) as usize, jet_idx % jets.len());
			if let Some(&(prev_dropped, prev_height)) = seen.get(&key) {
				let cycle = dropped - prev_dropped;
				let cycles = (num_rocks - dropped) / cycle;
				skipped_height = cycles * (well.len() as u64 - prev_height);
				dropped += cycles * cycle;
				jumped = true;
			} else {
				seen.insert(key, (dropped, well.len() as u64));
			}
		}
	}

	well.len() as u64 + skipped_height
}


fn input_jets_from_str(s: &str) -> Vec<Jet> {
	parsing::try_jets_from_str(s).unwrap()
}

fn input_jets() -> Vec<Jet> {
	input_jets_from_str(include_str!("day17.txt"))
}


fn part1_impl(input_jets: Vec<Jet>) -> u64 {
	tower_height(&input_jets, 2022)
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_jets())
}


fn part2_impl(input_jets: Vec<Jet>) -> u64 {
	tower_height(&input_jets, 1_000_000_000_000)
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_jets())
}


mod parsing {
	use super::Jet;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum JetsError {
		Empty,
		InvalidByte { column: usize, found: char },
	}

	pub(super) fn try_jets_from_str(s: &str) -> Result<Vec<Jet>, JetsError> {
		let line = s.lines().next().ok_or(JetsError::Empty)?;
		if line.is_empty() { return Err(JetsError::Empty) }
		line.bytes()
			.enumerate()
			.map(|(c, byte)| match byte {
				b'<' => Ok(Jet::Left),
				b'>' => Ok(Jet::Right),
				_ => Err(JetsError::InvalidByte { column: c + 1, found: byte as char }),
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

	#[test]
	fn dropping() {
		let jets = input_jets_from_str(INPUT);
		let mut well = vec![];
		let mut jet_idx = 0;
		drop_rock(&mut well, ROCKS[0], &jets, &mut jet_idx);
		assert_eq!(well, [0b0111100]);
		drop_rock(&mut well, ROCKS[1], &jets, &mut jet_idx);
		assert_eq!(well.len(), 4);
		assert_eq!(tower_height(&jets, 10), 17);
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(input_jets_from_str(INPUT)), 3068);
		assert_eq!(part1(), 3068);
		assert_eq!(part2_impl(input_jets_from_str(INPUT)), 1514285714288);
		assert_eq!(part2(), 1514285714288);
	}
}
