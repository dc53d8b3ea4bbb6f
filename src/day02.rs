// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Command {
	Forward(i64),
	Down(i64),
	Up(i64),
}

#[derive(Default)]
struct Submarine {
	position: i64,
	depth: i64,
	aim: i64,
}

impl Submarine {
	fn steer(&mut self, command: Command) {
		use Command::*;
		match command {
			Forward(n) => self.position += n,
			Down(n) => self.depth += n,
			Up(n) => self.depth -= n,
		}
	}

	fn steer_with_aim(&mut self, command: Command) {
		use Command::*;
		match command {
			Forward(n) => {
				self.position += n;
				self.depth += self.aim * n;
			}
			Down(n) => self.aim += n,
			Up(n) => self.aim -= n,
		}
	}
}


fn input_commands(input: &str) -> impl Iterator<Item = Command> + '_ {
	parsing::try_commands_from_str(input).map(Result::unwrap)
}


fn part1and2_impl(input: &str, steer: fn(&mut Submarine, Command)) -> i64 {
	let mut submarine = Submarine::default();
	for command in input_commands(input) { steer(&mut submarine, command) }
	submarine.position * submarine.depth
}

pub(crate) fn part1(input: &str) -> i64 {
	part1and2_impl(input, Submarine::steer)
}

pub(crate) fn part2(input: &str) -> i64 {
	part1and2_impl(input, Submarine::steer_with_aim)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Command;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CommandError {
		Format,
		Unknown(String),
		Units(ParseIntError),
	}

	impl FromStr for Command {
		type Err = CommandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use {Command::*, CommandError::*};
			let (command, units) = s.split_once(' ').ok_or(Format)?;
			let units = units.trim().parse().map_err(Units)?;
			match command {
				"forward" => Ok(Forward(units)),
				"down" => Ok(Down(units)),
				"up" => Ok(Up(units)),
				_ => Err(Unknown(command.to_owned())),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct CommandsError { line: usize, source: CommandError }

	pub(super) fn try_commands_from_str(s: &str) -> impl Iterator<Item = Result<Command, CommandsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| CommandsError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };
	assert_eq!(input_commands(INPUT).next(), Some(Command::Forward(5)));
	assert!(matches!("sideways 3".parse::<Command>(), Err(parsing::CommandError::Unknown(_))));
	assert_eq!(part1(INPUT), 150);
	assert_eq!(part2(INPUT), 900);
}
