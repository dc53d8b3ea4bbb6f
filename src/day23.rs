// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const HALLWAY_LEN: usize = 11;
const ENERGY: [usize; 4] = [1, 10, 100, 1000];

fn door(room: usize) -> usize {
	2 + 2 * room
}

fn is_door(pos: usize) -> bool {
	(2..=8).contains(&pos) && pos % 2 == 0
}


/// Amphipods are their kind's index (A through D). Rooms list their slots
/// from the hallway down.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(Debug))]
struct Burrow {
	hallway: [Option<u8>; HALLWAY_LEN],
	rooms: [Vec<Option<u8>>; 4],
}

impl Burrow {
	fn is_organized(&self) -> bool {
		self.rooms.iter().enumerate()
			.all(|(r, room)| room.iter().all(|&a| a == Some(r as u8)))
	}

	fn is_hallway_clear(&self, from: usize, to: usize) -> bool {
		let (lo, hi) = if from < to { (from + 1, to) } else { (to, from - 1) };
		self.hallway[lo..=hi].iter().all(Option::is_none)
	}

	/// Every legal single move with its energy cost.
	fn moves(&self) -> Vec<(usize, Burrow)> {
		let mut moves = Vec::new();

		// Hallway to own room, only once it holds no strangers
		for (pos, &amphipod) in self.hallway.iter().enumerate() {
			let Some(kind) = amphipod else { continue };
			let room = &self.rooms[kind as usize];
			if room.iter().any(|&a| a.is_some() && a != Some(kind)) { continue }
			let Some(slot) = room.iter().rposition(Option::is_none) else { continue };
			let door = door(kind as usize);
			if !self.is_hallway_clear(pos, door) { continue }

			let mut next = self.clone();
			next.hallway[pos] = None;
			next.rooms[kind as usize][slot] = Some(kind);
			moves.push(((pos.abs_diff(door) + slot + 1) * ENERGY[kind as usize], next));
		}

		// Room to any reachable hallway spot not outside a door
		for (r, room) in self.rooms.iter().enumerate() {
			let Some(slot) = room.iter().position(Option::is_some) else { continue };
			if room[slot..].iter().all(|&a| a == Some(r as u8)) { continue }
			let Some(kind) = room[slot] else { continue };
			let door = door(r);
			let left = (0..door).rev().take_while(|&pos| self.hallway[pos].is_none());
			let right = (door + 1..HALLWAY_LEN).take_while(|&pos| self.hallway[pos].is_none());
			for pos in left.chain(right).filter(|&pos| !is_door(pos)) {
				let mut next = self.clone();
				next.rooms[r][slot] = None;
				next.hallway[pos] = Some(kind);
				moves.push(((slot + 1 + pos.abs_diff(door)) * ENERGY[kind as usize], next));
			}
		}

		moves
	}

	fn least_energy_to_organize(&self) -> Option<usize> {
		use std::{cmp::Ordering, collections::{BinaryHeap, HashMap}};

		// Dijkstra

		#[derive(PartialEq, Eq)]
		struct State { energy: usize, burrow: Burrow }

		impl Ord for State {
			fn cmp(&self, other: &Self) -> Ordering {
				other.energy.cmp(&self.energy)
					.then_with(|| self.burrow.cmp(&other.burrow))
			}
		}

		impl PartialOrd for State {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		let mut best = HashMap::from([(self.clone(), 0)]);
		let mut heap = BinaryHeap::from([State { energy: 0, burrow: self.clone() }]);

		while let Some(State { energy, burrow }) = heap.pop() {
			if burrow.is_organized() { return Some(energy) }
			if best.get(&burrow).map_or(false, |&e| energy > e) { continue }
			for (cost, next) in burrow.moves() {
				let next_energy = energy + cost;
				if best.get(&next).map_or(true, |&e| next_energy < e) {
					best.insert(next.clone(), next_energy);
					heap.push(State { energy: next_energy, burrow: next });
				}
			}
		}
		None
	}

	/// Inserts the folded-away lines below the first row of each room.
	fn unfolded(&self) -> Burrow {
		const FOLDED: [[u8; 4]; 2] = [[3, 2, 1, 0], [3, 1, 0, 2]];
		let mut unfolded = self.clone();
		for (r, room) in unfolded.rooms.iter_mut().enumerate() {
			let at = room.len().min(1);
			room.splice(at..at, FOLDED.iter().map(|row| Some(row[r])));
		}
		unfolded
	}
}


fn input_burrow(input: &str) -> Burrow {
	parsing::try_burrow_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	input_burrow(input).least_energy_to_organize().unwrap()
}


pub(crate) fn part2(input: &str) -> usize {
	input_burrow(input).unfolded().least_energy_to_organize().unwrap()
}


mod parsing {
	use super::{Burrow, HALLWAY_LEN};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BurrowError {
		Wall { line: usize },
		Hallway,
		Room { line: usize },
		Depth,
	}

	fn try_space(c: char) -> Option<Option<u8>> {
		match c {
			'.' => Some(None),
			'A'..='D' => Some(Some(c as u8 - b'A')),
			_ => None,
		}
	}

	pub(super) fn try_burrow_from_str(s: &str) -> Result<Burrow, BurrowError> {
		use BurrowError::*;
		let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty()).enumerate();

		if !matches!(lines.next(), Some((_, line)) if line.chars().all(|c| c == '#')) {
			return Err(Wall { line: 1 })
		}

		let hallway = lines.next()
			.and_then(|(_, line)| line.strip_prefix('#')?.strip_suffix('#'))
			.filter(|spaces| spaces.len() == HALLWAY_LEN)
			.ok_or(Hallway)?;
		let mut hallway_spaces = [None; HALLWAY_LEN];
		for (space, c) in hallway_spaces.iter_mut().zip(hallway.chars()) {
			*space = try_space(c).ok_or(Hallway)?;
		}

		let mut rooms: [Vec<Option<u8>>; 4] = Default::default();
		for (l, line) in lines {
			let spaces = line.split('#').filter(|s| !s.is_empty()).collect::<Vec<_>>();
			if spaces.is_empty() { continue }
			if spaces.len() != 4 { return Err(Room { line: l + 1 }) }
			for (room, space) in rooms.iter_mut().zip(spaces) {
				let mut chars = space.chars();
				let (Some(c), None) = (chars.next(), chars.next()) else { return Err(Room { line: l + 1 }) };
				room.push(try_space(c).ok_or(Room { line: l + 1 })?);
			}
		}
		if rooms[0].is_empty() { return Err(Depth) }

		Ok(Burrow { hallway: hallway_spaces, rooms })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#############
		#...........#
		###B#C#B#D###
		  #A#D#C#A#
		  #########
	" };
	let burrow = input_burrow(INPUT);
	assert_eq!(burrow.rooms, [vec![Some(1), Some(0)], vec![Some(2), Some(3)], vec![Some(1), Some(2)], vec![Some(3), Some(0)]]);
	assert!(!burrow.is_organized());
	assert_eq!(burrow.moves().len(), 4 * 7);
	assert_eq!(burrow.unfolded().rooms[0], [Some(1), Some(3), Some(3), Some(0)]);
	assert_eq!(burrow.unfolded().rooms[3], [Some(3), Some(0), Some(2), Some(0)]);

	const ORGANIZED: &str = "#############\n#...........#\n###A#B#C#D###\n  #A#B#C#D#\n  #########\n";
	assert_eq!(part1(ORGANIZED), 0);

	const ONE_STEP: &str = "#############\n#.........A.#\n###.#B#C#D###\n  #A#B#C#D#\n  #########\n";
	assert_eq!(part1(ONE_STEP), 8);

	assert_eq!(part1(INPUT), 12521);
	assert_eq!(part2(INPUT), 44169);
}
