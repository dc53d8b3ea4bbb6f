// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Bracket { Round, Square, Curly, Angle }

impl Bracket {
	fn from_char(c: char) -> Option<(Self, bool)> {
		use Bracket::*;
		Some(match c {
			'(' => (Round, true), ')' => (Round, false),
			'[' => (Square, true), ']' => (Square, false),
			'{' => (Curly, true), '}' => (Curly, false),
			'<' => (Angle, true), '>' => (Angle, false),
			_ => return None,
		})
	}

	fn syntax_error_score(&self) -> u64 {
		use Bracket::*;
		match self { Round => 3, Square => 57, Curly => 1197, Angle => 25137 }
	}

	fn completion_score(&self) -> u64 {
		use Bracket::*;
		match self { Round => 1, Square => 2, Curly => 3, Angle => 4 }
	}
}

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Checked {
	/// The first closing bracket that does not match.
	Corrupted(Bracket),
	/// Brackets that are left open, innermost first.
	Incomplete(Vec<Bracket>),
}

fn check(line: &str) -> Checked {
	let mut open = Vec::new();
	for (bracket, opening) in line.chars().filter_map(Bracket::from_char) {
		if opening {
			open.push(bracket);
		} else if open.pop() != Some(bracket) {
			return Checked::Corrupted(bracket)
		}
	}
	open.reverse();
	Checked::Incomplete(open)
}


pub(crate) fn part1(input: &str) -> u64 {
	input.lines()
		.filter_map(|line| match check(line) {
			Checked::Corrupted(bracket) => Some(bracket.syntax_error_score()),
			_ => None,
		})
		.sum()
}


pub(crate) fn part2(input: &str) -> u64 {
	let mut scores = input.lines()
		.filter_map(|line| match check(line) {
			Checked::Incomplete(open) if !open.is_empty() => Some(open.iter()
				.fold(0, |acc, b| acc * 5 + b.completion_score())),
			_ => None,
		})
		.collect::<Vec<_>>();
	let mid = scores.len() / 2;
	*scores.select_nth_unstable(mid).1
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		[({(<(())[]>[[{[]{<()<>>
		[(()[<>])]({[<{<<[]>>(
		{([(<{}[<>[]}>{[]{[(<()>
		(((({<>}<{<{<>}{[]{[]{}
		[[<[([]))<([[{}[[()]]]
		[{[{({}]{}}([{[{{{}}([]
		{<[[]]>}<{[{[{[]{()[[[]
		[<(<(<(<{}))><([]([]()
		<{([([[(<>()){}]>(<<{{
		<{([{{}}[<[[[<>{}]]]>[]]
	" };
	use Bracket::*;
	assert_eq!(check("{([(<{}[<>[]}>{[]{[(<()>"), Checked::Corrupted(Curly));
	assert_eq!(check("[({(<(())[]>[[{[]{<()<>>").completion(), "}}]])})]");
	assert_eq!(part1(INPUT), 26397);
	assert_eq!(part2(INPUT), 288957);
}

#[cfg(test)]
impl Checked {
	fn completion(&self) -> String {
		use Bracket::*;
		match self {
			Checked::Incomplete(open) => open.iter()
				.map(|b| match b { Round => ')', Square => ']', Curly => '}', Angle => '>' })
				.collect(),
			Checked::Corrupted(_) => String::new(),
		}
	}
}
