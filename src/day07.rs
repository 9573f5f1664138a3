// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const TOTAL_SPACE: u64 = 70_000_000;
const NEEDED_SPACE: u64 = 30_000_000;

#[derive(Default)]
struct Dir {
	parent: Option<usize>,
	subdirs: Vec<(String, usize)>,
	files_size: u64,
}

/// Flat arena of directories; index 0 is the root, and every directory’s
/// index is greater than its parent’s.
struct Filesystem {
	dirs: Vec<Dir>,
}

impl Filesystem {
	/// Total size of each directory, indexed like `dirs`. Children are
	/// accumulated back-to-front, so each total is complete before it is
	/// folded into its parent’s.
	fn dir_sizes(&self) -> Vec<u64> {
		let mut sizes = vec![0; self.dirs.len()];
		for (i, dir) in self.dirs.iter().enumerate().rev() {
			sizes[i] += dir.files_size;
			if let Some(parent) = dir.parent {
				let size = sizes[i];
				sizes[parent] += size;
			}
		}
		sizes
	}
}


fn input_filesystem_from_str(s: &str) -> Filesystem {
	s.parse().unwrap()
}

fn input_filesystem() -> Filesystem {
	input_filesystem_from_str(include_str!("day07.txt"))
}


fn part1_impl(input_filesystem: Filesystem) -> u64 {
	input_filesystem.dir_sizes().into_iter()
		.filter(|&size| size <= 100_000)
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_filesystem())
}


fn part2_impl(input_filesystem: Filesystem) -> u64 {
	let sizes = input_filesystem.dir_sizes();
	let unused = TOTAL_SPACE - sizes[0];
	sizes.iter()
		.copied()
		.filter(|&size| unused + size >= NEEDED_SPACE)
		.min()
		.unwrap_or_else(|| panic!("No directory frees up enough space"))
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_filesystem())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, Filesystem};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum FilesystemError {
		Command { line: usize, found: String },
		Entry { line: usize, found: String },
		FileSize { line: usize, source: ParseIntError },
		RootParent { line: usize },
	}

	impl Filesystem {
		fn subdir(&mut self, parent: usize, name: &str) -> usize {
			if let Some(&(_, index)) = self.dirs[parent].subdirs.iter()
					.find(|(subdir, _)| subdir == name) {
				return index;
			}
			let index = self.dirs.len();
			self.dirs.push(Dir { parent: Some(parent), ..Dir::default() });
			self.dirs[parent].subdirs.push((name.to_owned(), index));
			index
		}
	}

	impl FromStr for Filesystem {
		type Err = FilesystemError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut filesystem = Filesystem { dirs: vec![Dir::default()] };
			let mut cwd = 0;
			let mut listing = false;
			for (l, line) in s.lines().enumerate() {
				if let Some(command) = line.strip_prefix("$ ") {
					listing = false;
					match command {
						"cd /" => cwd = 0,
						"cd .." => cwd = filesystem.dirs[cwd].parent
							.ok_or(FilesystemError::RootParent { line: l + 1 })?,
						"ls" => listing = true,
						_ => match command.strip_prefix("cd ") {
							Some(name) => cwd = filesystem.subdir(cwd, name),
							None => return Err(FilesystemError::Command {
								line: l + 1, found: command.to_owned() }),
						}
					}
				} else if listing {
					if let Some(name) = line.strip_prefix("dir ") {
						filesystem.subdir(cwd, name);
					} else {
						let (size, _name) = line.split_once(' ')
							.ok_or_else(|| FilesystemError::Entry {
								line: l + 1, found: line.to_owned() })?;
						let size: u64 = size.parse()
							.map_err(|e| FilesystemError::FileSize { line: l + 1, source: e })?;
						filesystem.dirs[cwd].files_size += size;
					}
				} else {
					return Err(FilesystemError::Entry { line: l + 1, found: line.to_owned() });
				}
			}
			Ok(filesystem)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };
	let sizes = input_filesystem_from_str(INPUT).dir_sizes();
	assert_eq!(sizes[0], 48381165);
	assert_eq!(part1_impl(input_filesystem_from_str(INPUT)), 95437);
	assert_eq!(part1(), 95437);
	assert_eq!(part2_impl(input_filesystem_from_str(INPUT)), 24933642);
	assert_eq!(part2(), 24933642);
}
