// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! The bits shared between days: 2D/3D integer vectors, the four cardinal
//! directions, and the frontier search & simulation-tick loops that several
//! puzzles reimplement on top of them.

use std::{
	cmp::Reverse,
	collections::{BinaryHeap, HashMap, HashSet},
	hash::Hash,
	ops::{Add, Sub},
};


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub(crate) struct Pos {
	pub(crate) y: i32,
	pub(crate) x: i32,
}

impl Pos {
	pub(crate) const fn new(y: i32, x: i32) -> Self {
		Pos { y, x }
	}

	pub(crate) fn manhattan_dist(self, other: Pos) -> u32 {
		self.y.abs_diff(other.y) + self.x.abs_diff(other.x)
	}
}

impl Add for Pos {
	type Output = Pos;
	fn add(self, rhs: Pos) -> Pos {
		Pos { y: self.y + rhs.y, x: self.x + rhs.x }
	}
}

impl Sub for Pos {
	type Output = Pos;
	fn sub(self, rhs: Pos) -> Pos {
		Pos { y: self.y - rhs.y, x: self.x - rhs.x }
	}
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Dir {
	Up,
	Down,
	Left,
	Right,
}

impl Dir {
	pub(crate) const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

	pub(crate) fn delta(self) -> Pos {
		match self {
			Dir::Up => Pos::new(-1, 0),
			Dir::Down => Pos::new(1, 0),
			Dir::Left => Pos::new(0, -1),
			Dir::Right => Pos::new(0, 1),
		}
	}

	pub(crate) fn turned_right(self) -> Dir {
		match self {
			Dir::Up => Dir::Right,
			Dir::Right => Dir::Down,
			Dir::Down => Dir::Left,
			Dir::Left => Dir::Up,
		}
	}

	pub(crate) fn turned_left(self) -> Dir {
		match self {
			Dir::Up => Dir::Left,
			Dir::Left => Dir::Down,
			Dir::Down => Dir::Right,
			Dir::Right => Dir::Up,
		}
	}

	pub(crate) fn opposite(self) -> Dir {
		match self {
			Dir::Up => Dir::Down,
			Dir::Down => Dir::Up,
			Dir::Left => Dir::Right,
			Dir::Right => Dir::Left,
		}
	}
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub(crate) struct Vec3 {
	pub(crate) x: i32,
	pub(crate) y: i32,
	pub(crate) z: i32,
}

impl Vec3 {
	pub(crate) const fn new(x: i32, y: i32, z: i32) -> Self {
		Vec3 { x, y, z }
	}

	pub(crate) const ADJACENT: [Vec3; 6] = [
		Vec3::new(-1, 0, 0),
		Vec3::new(1, 0, 0),
		Vec3::new(0, -1, 0),
		Vec3::new(0, 1, 0),
		Vec3::new(0, 0, -1),
		Vec3::new(0, 0, 1),
	];

	pub(crate) fn manhattan_dist(self, other: Vec3) -> u32 {
		self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
	}
}

impl Add for Vec3 {
	type Output = Vec3;
	fn add(self, rhs: Vec3) -> Vec3 {
		Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
	}
}


/// Uniform-weight Dijkstra from (possibly several) `sources`: the frontier
/// orders `(distance, vertex)` tuples, and the first time a vertex is popped
/// it is settled with its final distance. Returns the distance at which
/// `is_target` first matched a settled vertex, or `None` once the frontier
/// drains without a match.
pub(crate) fn shortest_path<V, N>(
	sources: impl IntoIterator<Item = V>,
	mut neighbors: impl FnMut(&V) -> N,
	mut is_target: impl FnMut(&V) -> bool,
) -> Option<usize>
where
	V: Clone + Eq + Ord + Hash,
	N: IntoIterator<Item = V>,
{
	let mut frontier = BinaryHeap::new();
	for source in sources {
		frontier.push(Reverse((0, source)));
	}

	let mut settled = HashSet::new();
	while let Some(Reverse((dist, vertex))) = frontier.pop() {
		if !settled.insert(vertex.clone()) { continue }
		if is_target(&vertex) { return Some(dist) }
		for next in neighbors(&vertex) {
			if !settled.contains(&next) {
				frontier.push(Reverse((dist + 1, next)));
			}
		}
	}
	None
}

/// Like [`shortest_path`], but drains the frontier and returns the distance
/// of every reached vertex.
pub(crate) fn distances<V, N>(
	sources: impl IntoIterator<Item = V>,
	mut neighbors: impl FnMut(&V) -> N,
) -> HashMap<V, usize>
where
	V: Clone + Eq + Ord + Hash,
	N: IntoIterator<Item = V>,
{
	let mut frontier = BinaryHeap::new();
	for source in sources {
		frontier.push(Reverse((0, source)));
	}

	let mut dists = HashMap::new();
	while let Some(Reverse((dist, vertex))) = frontier.pop() {
		if dists.contains_key(&vertex) { continue }
		dists.insert(vertex.clone(), dist);
		for next in neighbors(&vertex) {
			if !dists.contains_key(&next) {
				frontier.push(Reverse((dist + 1, next)));
			}
		}
	}
	dists
}


/// Advances a set of mutually exclusive occupants one tick: every proposal
/// reads only the start-of-tick occupancy, proposals sharing a destination
/// are all rejected, and the surviving moves are committed simultaneously.
/// Returns how many entities moved; termination is the caller's business.
pub(crate) fn synchronous_step(
	positions: &mut [Pos],
	mut propose: impl FnMut(&HashSet<Pos>, Pos) -> Option<Pos>,
) -> usize {
	let occupied: HashSet<Pos> = positions.iter().copied().collect();
	let proposals: Vec<Option<Pos>> = positions.iter()
		.map(|&pos| propose(&occupied, pos))
		.collect();

	let mut claims: HashMap<Pos, usize> = HashMap::new();
	for &dest in proposals.iter().flatten() {
		*claims.entry(dest).or_insert(0) += 1;
	}

	let mut moved = 0;
	for (pos, proposal) in positions.iter_mut().zip(proposals) {
		if let Some(dest) = proposal {
			if claims[&dest] == 1 {
				*pos = dest;
				moved += 1;
			}
		}
	}
	moved
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn primitives() {
		assert_eq!(Pos::new(2, 3) + Dir::Up.delta(), Pos::new(1, 3));
		assert_eq!(Pos::new(5, 5) - Pos::new(2, 3), Pos::new(3, 2));
		assert_eq!(Pos::new(0, 0).manhattan_dist(Pos::new(-2, 3)), 5);
		assert_eq!(Vec3::new(1, 2, 3).manhattan_dist(Vec3::new(3, 0, 3)), 4);
		for dir in Dir::ALL {
			assert_eq!(dir.opposite().opposite(), dir);
			assert_eq!(dir.turned_left().turned_right(), dir);
			assert_eq!(dir.turned_right().turned_right(), dir.opposite());
			assert_eq!(dir.delta() + dir.opposite().delta(), Pos::new(0, 0));
		}
	}

	#[test]
	fn search() {
		// Unit steps on an open 4-by-4 square
		let neighbors = |&pos: &Pos| Dir::ALL.into_iter()
			.map(move |dir| pos + dir.delta())
			.filter(|p| (0..4).contains(&p.y) && (0..4).contains(&p.x))
			.collect::<Vec<_>>();
		let corner = Pos::new(3, 3);

		assert_eq!(shortest_path([Pos::new(0, 0)], neighbors, |&p| p == corner), Some(6));

		let first = distances([Pos::new(0, 0)], neighbors);
		assert_eq!(first.len(), 16);
		assert_eq!(first[&Pos::new(3, 0)], 3);
		assert_eq!(first, distances([Pos::new(0, 0)], neighbors));

		// Multi-source seeding equals the minimum over single sources
		let sources = [Pos::new(0, 3), Pos::new(2, 1)];
		let multi = shortest_path(sources, neighbors, |&p| p == corner);
		let min = sources.into_iter()
			.filter_map(|s| shortest_path([s], neighbors, |&p| p == corner))
			.min();
		assert_eq!(multi, min);
		assert_eq!(multi, Some(3));

		assert_eq!(shortest_path([Pos::new(0, 0)], neighbors, |&p| p == Pos::new(9, 9)), None);
	}

	#[test]
	fn collisions() {
		// Two entities claiming the same destination both stay put
		let mut positions = [Pos::new(0, 0), Pos::new(0, 2)];
		let moved = synchronous_step(&mut positions, |_, _| Some(Pos::new(0, 1)));
		assert_eq!(moved, 0);
		assert_eq!(positions, [Pos::new(0, 0), Pos::new(0, 2)]);

		// A lone claim commits
		let moved = synchronous_step(&mut positions, |_, pos| (pos.x == 0).then_some(Pos::new(0, 1)));
		assert_eq!(moved, 1);
		assert_eq!(positions, [Pos::new(0, 1), Pos::new(0, 2)]);
	}
}
