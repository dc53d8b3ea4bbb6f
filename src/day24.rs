// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Register { W, X, Y, Z }

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Operand {
	Register(Register),
	Literal(i64),
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Instruction {
	Inp(Register),
	Add(Register, Operand),
	Mul(Register, Operand),
	Div(Register, Operand),
	Mod(Register, Operand),
	Eql(Register, Operand),
}


#[allow(dead_code)]
#[derive(Debug)]
enum AluError {
	InputExhausted { pc: usize },
	DivisionByZero { pc: usize },
	InvalidModulo { pc: usize },
}

#[derive(Default)]
struct Alu([i64; 4]);

impl Alu {
	fn get(&self, register: Register) -> i64 {
		self.0[register as usize]
	}

	fn value(&self, operand: Operand) -> i64 {
		match operand {
			Operand::Register(register) => self.get(register),
			Operand::Literal(value) => value,
		}
	}

	fn run(&mut self, program: &[Instruction], mut input: impl Iterator<Item = i64>) -> Result<(), AluError> {
		use Instruction::*;
		for (pc, &instr) in program.iter().enumerate() {
			let (a, result) = match instr {
				Inp(a) => (a, input.next().ok_or(AluError::InputExhausted { pc })?),
				Add(a, b) => (a, self.get(a) + self.value(b)),
				Mul(a, b) => (a, self.get(a) * self.value(b)),
				Div(a, b) => match self.value(b) {
					0 => return Err(AluError::DivisionByZero { pc }),
					b => (a, self.get(a) / b),
				},
				Mod(a, b) => match (self.get(a), self.value(b)) {
					(value, b) if value < 0 || b <= 0 => return Err(AluError::InvalidModulo { pc }),
					(value, b) => (a, value % b),
				},
				Eql(a, b) => (a, (self.get(a) == self.value(b)) as i64),
			};
			self.0[a as usize] = result;
		}
		Ok(())
	}
}


/// The three literals by which the MONAD's per-digit blocks differ.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Block { div_z: i64, add_x: i64, add_y: i64 }

#[allow(dead_code)]
#[derive(Debug)]
enum MonadError {
	Block(usize),
	Unbalanced,
	Alu(AluError),
	Rejected(u64),
}

fn blocks(program: &[Instruction]) -> Result<Vec<Block>, MonadError> {
	use Instruction::{Add, Div, Inp};
	use Register::{W, X, Y, Z};
	use itertools::Itertools as _;

	let starts = program.iter().positions(|instr| matches!(instr, Inp(_))).collect::<Vec<_>>();
	starts.iter().enumerate()
		.map(|(i, &start)| {
			let end = starts.get(i + 1).copied().unwrap_or(program.len());
			let block = &program[start..end];
			let div_z = block.iter().find_map(|instr| match instr {
				Div(Z, Operand::Literal(v)) => Some(*v),
				_ => None,
			});
			let add_x = block.iter().find_map(|instr| match instr {
				Add(X, Operand::Literal(v)) => Some(*v),
				_ => None,
			});
			let add_y = block.iter().tuple_windows().find_map(|pair| match pair {
				(Add(Y, Operand::Register(W)), Add(Y, Operand::Literal(v))) => Some(*v),
				_ => None,
			});
			match (div_z, add_x, add_y) {
				(Some(div_z), Some(add_x), Some(add_y)) => Ok(Block { div_z, add_x, add_y }),
				_ => Err(MonadError::Block(i)),
			}
		})
		.collect()
}

/// Finds the largest or smallest model number the MONAD accepts. Blocks that
/// divide `z` by 26 pop the base-26 digit the matching earlier block pushed,
/// and only stay small if their digit equals the pushed digit plus that
/// block's `add_y` plus their own `add_x`.
fn model_number(program: &[Instruction], largest: bool) -> Result<u64, MonadError> {
	let blocks = blocks(program)?;
	let mut digits = vec![0_i64; blocks.len()];
	let mut stack = Vec::new();
	for (i, block) in blocks.iter().enumerate() {
		if block.div_z == 1 {
			stack.push((i, block.add_y));
			continue
		}
		let (j, add_y) = stack.pop().ok_or(MonadError::Unbalanced)?;
		let diff = add_y + block.add_x;
		if diff.abs() > 8 { return Err(MonadError::Unbalanced) }
		let (push, pop) = match (largest, diff >= 0) {
			(true, true) => (9 - diff, 9),
			(true, false) => (9, 9 + diff),
			(false, true) => (1, 1 + diff),
			(false, false) => (1 - diff, 1),
		};
		digits[j] = push;
		digits[i] = pop;
	}
	if !stack.is_empty() { return Err(MonadError::Unbalanced) }

	let mut alu = Alu::default();
	alu.run(program, digits.iter().copied()).map_err(MonadError::Alu)?;
	let number = digits.iter().fold(0, |n, &d| n * 10 + d as u64);
	if alu.get(Register::Z) != 0 { return Err(MonadError::Rejected(number)) }
	Ok(number)
}


fn input_program(input: &str) -> Vec<Instruction> {
	parsing::try_program_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	model_number(&input_program(input), true).unwrap()
}


pub(crate) fn part2(input: &str) -> u64 {
	model_number(&input_program(input), false).unwrap()
}


mod parsing {
	use std::str::FromStr;
	use super::{Instruction, Operand, Register};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InstructionError {
		Opcode,
		Register,
		Operand,
		Arity,
	}

	impl FromStr for Register {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"w" => Ok(Register::W),
				"x" => Ok(Register::X),
				"y" => Ok(Register::Y),
				"z" => Ok(Register::Z),
				_ => Err(InstructionError::Register),
			}
		}
	}

	impl FromStr for Operand {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			s.parse().map(Operand::Register)
				.or_else(|_| s.parse().map(Operand::Literal))
				.map_err(|_| InstructionError::Operand)
		}
	}

	impl FromStr for Instruction {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use Instruction::*;
			let mut words = s.split_whitespace();
			let opcode = words.next().ok_or(InstructionError::Opcode)?;
			let a = words.next().ok_or(InstructionError::Arity)?.parse()?;
			let instr = if opcode == "inp" {
				Inp(a)
			} else {
				let b = words.next().ok_or(InstructionError::Arity)?.parse()?;
				match opcode {
					"add" => Add(a, b),
					"mul" => Mul(a, b),
					"div" => Div(a, b),
					"mod" => Mod(a, b),
					"eql" => Eql(a, b),
					_ => return Err(InstructionError::Opcode),
				}
			};
			if words.next().is_some() { return Err(InstructionError::Arity) }
			Ok(instr)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ProgramError { line: usize, source: InstructionError }

	pub(super) fn try_program_from_str(s: &str) -> Result<Vec<Instruction>, ProgramError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| ProgramError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	fn run(program: &str, input: &[i64]) -> Alu {
		let mut alu = Alu::default();
		alu.run(&input_program(program), input.iter().copied()).unwrap();
		alu
	}

	assert_eq!(run("inp x\nmul x -1\n", &[7]).get(Register::X), -7);
	assert_eq!(run("inp z\ninp x\nmul z 3\neql z x\n", &[3, 9]).get(Register::Z), 1);
	assert_eq!(run("inp z\ninp x\nmul z 3\neql z x\n", &[3, 8]).get(Register::Z), 0);
	const BINARY: &str = indoc::indoc! { "
		inp w
		add z w
		mod z 2
		div w 2
		add y w
		mod y 2
		div w 2
		add x w
		mod x 2
		div w 2
		mod w 2
	" };
	assert_eq!(run(BINARY, &[13]).0, [1, 1, 0, 1]);
	assert!(matches!(Alu::default().run(&input_program("inp w\ninp x\n"), [1].into_iter()),
		Err(AluError::InputExhausted { pc: 1 })));
	assert!(matches!(Alu::default().run(&input_program("div x 0\n"), std::iter::empty()),
		Err(AluError::DivisionByZero { pc: 0 })));
	assert!(matches!(Alu::default().run(&input_program("add x -1\nmod x 5\n"), std::iter::empty()),
		Err(AluError::InvalidModulo { pc: 1 })));

	const LITERALS: [(i64, i64, i64); 14] = [
		(1, 15, 13), (1, 10, 16), (1, 12, 2), (1, 10, 8), (1, 14, 11), (26, -11, 6), (1, 10, 12),
		(26, -16, 2), (26, -9, 2), (1, 11, 15), (26, -8, 1), (26, -8, 10), (26, -10, 14), (26, -9, 10),
	];
	let monad = LITERALS.iter()
		.map(|(div_z, add_x, add_y)| indoc::formatdoc! { "
			inp w
			mul x 0
			add x z
			mod x 26
			div z {}
			add x {}
			eql x w
			eql x 0
			mul y 0
			add y 25
			mul y x
			add y 1
			mul z y
			mul y 0
			add y w
			add y {}
			mul y x
			add z y
		", div_z, add_x, add_y })
		.collect::<String>();

	let program = input_program(&monad);
	let blocks = blocks(&program).unwrap();
	assert_eq!(blocks.len(), 14);
	assert_eq!(blocks[5], Block { div_z: 26, add_x: -11, add_y: 6 });
	assert_eq!(part1(&monad), 53_999_995_829_399);
	assert_eq!(part2(&monad), 11_721_151_118_175);
}
