// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const TRACK_LEN: u32 = 10;

fn advance(pos: u32, steps: u32) -> u32 {
	(pos - 1 + steps) % TRACK_LEN + 1
}


struct DeterministicDie { next: u32, rolls: u32 }

impl DeterministicDie {
	fn roll(&mut self) -> u32 {
		let value = self.next;
		self.next = self.next % 100 + 1;
		self.rolls += 1;
		value
	}
}

/// Plays to 1000 and returns the losing score times the number of rolls.
fn practice_game(start: [u32; 2]) -> u32 {
	let mut die = DeterministicDie { next: 1, rolls: 0 };
	let (mut pos, mut scores) = (start, [0; 2]);
	let mut player = 0;
	loop {
		let steps = die.roll() + die.roll() + die.roll();
		pos[player] = advance(pos[player], steps);
		scores[player] += pos[player];
		if scores[player] >= 1000 { return scores[1 - player] * die.rolls }
		player = 1 - player;
	}
}


/// Ways three rolls of a three-sided die add up to 3 through 9.
const QUANTUM_ROLLS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

type Turn = ([u32; 2], [u32; 2]);

/// Counts universes won by the player about to move and by the other
/// player, from positions and scores both listed mover first.
fn quantum_wins(turn: Turn, memo: &mut HashMap<Turn, [u64; 2]>) -> [u64; 2] {
	if let Some(&wins) = memo.get(&turn) { return wins }
	let ([pos, other_pos], [score, other_score]) = turn;
	let mut wins = [0; 2];
	for (steps, ways) in QUANTUM_ROLLS {
		let pos = advance(pos, steps);
		let score = score + pos;
		if score >= 21 {
			wins[0] += ways;
		} else {
			let [other_wins, own_wins] = quantum_wins(([other_pos, pos], [other_score, score]), memo);
			wins[0] += ways * own_wins;
			wins[1] += ways * other_wins;
		}
	}
	memo.insert(turn, wins);
	wins
}


fn input_start(input: &str) -> [u32; 2] {
	parsing::try_start_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u32 {
	practice_game(input_start(input))
}


pub(crate) fn part2(input: &str) -> u64 {
	let wins = quantum_wins((input_start(input), [0; 2]), &mut HashMap::new());
	wins[0].max(wins[1])
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StartError {
		Player(usize),
		Position { player: usize },
	}

	pub(super) fn try_start_from_str(s: &str) -> Result<[u32; 2], StartError> {
		let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
		let mut start = [0; 2];
		for (p, pos) in start.iter_mut().enumerate() {
			let line = lines.next().ok_or(StartError::Player(p + 1))?;
			let value = line.strip_prefix(&format!("Player {} starting position: ", p + 1))
				.ok_or(StartError::Player(p + 1))?;
			*pos = value.parse().ok()
				.filter(|v| (1..=10).contains(v))
				.ok_or(StartError::Position { player: p + 1 })?;
		}
		Ok(start)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Player 1 starting position: 4
		Player 2 starting position: 8
	" };
	assert_eq!(input_start(INPUT), [4, 8]);
	assert_eq!(advance(7, 5), 2);
	assert_eq!(advance(10, 10), 10);
	assert_eq!(part1(INPUT), 739_785);
	let wins = quantum_wins(([4, 8], [0; 2]), &mut HashMap::new());
	assert_eq!(wins, [444_356_092_776_315, 341_960_390_180_808]);
	assert_eq!(part2(INPUT), 444_356_092_776_315);
}
