// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod data;
mod ranges;

use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};


struct Answers(String, Option<String>);

macro_rules! solvers {
	( $( $day:literal ),+ ; $( $single_day:literal ),* ) => { paste::paste! {
		$( mod [<day $day>]; )+
		$( mod [<day $single_day>]; )*

		const DAYS: std::ops::RangeInclusive<u8> = 1..=25;

		fn solve(day: u8, input: &str) -> Option<Answers> {
			match day {
				$( $day => Some(Answers(
					[<day $day>]::part1(input).to_string(),
					Some([<day $day>]::part2(input).to_string()),
				)), )+
				$( $single_day => Some(Answers(
					[<day $single_day>]::part1(input).to_string(),
					None,
				)), )*
				_ => None,
			}
		}
	} }
}

solvers!(01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24; 25);


/// Answers for the default data set, recorded from earlier runs.
fn expected(day: u8) -> Option<(&'static str, Option<&'static str>)> {
	Some(match day {
		1 => ("1709", Some("1761")),
		2 => ("1813801", Some("1960569556")),
		3 => ("3969000", Some("4267809")),
		4 => ("67716", Some("1830")),
		5 => ("8060", Some("21577")),
		6 => ("353079", Some("1605400130036")),
		7 => ("352331", Some("99266250")),
		8 => ("321", Some("1028926")),
		9 => ("528", Some("920448")),
		10 => ("392139", Some("4001832844")),
		11 => ("1647", Some("348")),
		12 => ("5756", Some("144603")),
		13 => ("790", Some("PGHZBFJC")),
		14 => ("3342", Some("3776553567525")),
		15 => ("388", Some("2819")),
		16 => ("875", Some("1264857437203")),
		17 => ("5460", Some("3618")),
		18 => ("3935", Some("4669")),
		19 => ("451", Some("13184")),
		20 => ("5503", Some("19156")),
		21 => ("605070", None),
		_ => return None,
	})
}


#[derive(Debug, PartialEq, Eq)]
struct Args {
	devel: bool,
	day: Option<u8>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum ArgsError {
	#[error("unknown option `{0}`")]
	UnknownOption(String),
	#[error("invalid day `{0}` (expected 1 through 25)")]
	InvalidDay(String),
	#[error("unexpected argument `{0}`")]
	Unexpected(String),
}

impl Args {
	fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
		let mut parsed = Args { devel: false, day: None };
		for arg in args {
			match arg.as_str() {
				"-d" | "--devel" => parsed.devel = true,
				opt if opt.starts_with('-') => return Err(ArgsError::UnknownOption(arg)),
				_ if parsed.day.is_some() => return Err(ArgsError::Unexpected(arg)),
				day => {
					let day = day.trim_start_matches("day").parse::<u8>().ok()
						.filter(|d| DAYS.contains(d))
						.ok_or_else(|| ArgsError::InvalidDay(arg.clone()))?;
					parsed.day = Some(day);
				}
			}
		}
		Ok(parsed)
	}
}


enum Outcome {
	Ok,
	Fail,
	Unknown,
}

fn check(day: u8, answers: &Answers) -> Outcome {
	let Some((part1, part2)) = expected(day) else { return Outcome::Unknown };
	let part2_ok = match (part2, &answers.1) {
		(Some(expected), Some(actual)) => expected == actual,
		(None, _) => true,
		(Some(_), None) => false,
	};
	if part1 == answers.0 && part2_ok { Outcome::Ok } else { Outcome::Fail }
}

fn format_answers(answers: &Answers) -> String {
	match &answers.1 {
		Some(part2) => format!("{}, {part2}", answers.0),
		None => answers.0.clone(),
	}
}


fn main() -> anyhow::Result<()> {
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| "warn".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let args = Args::parse(std::env::args().skip(1))?;
	let data_dir = data::DataDir::from_env(args.devel);
	tracing::info!(dir = %data_dir.dir().display(), "using data directory");

	let days = match args.day {
		Some(day) => day..=day,
		None => DAYS,
	};
	for day in days {
		let input = match data_dir.read(day) {
			Ok(input) => input,
			Err(data::DataError::Missing { path }) => {
				println!("day{day}: no data ({})", path.display());
				continue
			}
			Err(err) => return Err(err.into()),
		};

		let span = tracing::info_span!("solve", day);
		let _enter = span.enter();
		let start = std::time::Instant::now();
		let Some(answers) = solve(day, &input) else { continue };
		tracing::info!(elapsed = ?start.elapsed(), "solved");

		match check(day, &answers) {
			Outcome::Ok => println!("day{day}: Ok   {}", format_answers(&answers)),
			Outcome::Unknown => println!("day{day}: ran  {}", format_answers(&answers)),
			Outcome::Fail => {
				let (part1, part2) = expected(day).unwrap_or_default();
				println!("day{day}: FAIL ({}) != expected ({part1}, {})",
					format_answers(&answers), part2.unwrap_or("?"));
			}
		}
	}

	Ok(())
}


#[test]
fn tests() {
	let args = |a: &[&str]| Args::parse(a.iter().map(|s| s.to_string()));
	assert_eq!(args(&[]), Ok(Args { devel: false, day: None }));
	assert_eq!(args(&["-d", "7"]), Ok(Args { devel: true, day: Some(7) }));
	assert_eq!(args(&["day12", "--devel"]), Ok(Args { devel: true, day: Some(12) }));
	assert_eq!(args(&["26"]), Err(ArgsError::InvalidDay("26".into())));
	assert_eq!(args(&["0"]), Err(ArgsError::InvalidDay("0".into())));
	assert_eq!(args(&["--fast"]), Err(ArgsError::UnknownOption("--fast".into())));
	assert_eq!(args(&["3", "4"]), Err(ArgsError::Unexpected("4".into())));

	assert!(matches!(check(13, &Answers("790".into(), Some("PGHZBFJC".into()))), Outcome::Ok));
	assert!(matches!(check(13, &Answers("790".into(), Some("PGHZBFJ?".into()))), Outcome::Fail));
	assert!(matches!(check(21, &Answers("605070".into(), Some("1".into()))), Outcome::Ok));
	assert!(matches!(check(25, &Answers("1".into(), None)), Outcome::Unknown));
	assert_eq!(format_answers(&Answers("1".into(), None)), "1");
	assert_eq!(format_answers(&Answers("1".into(), Some("2".into()))), "1, 2");

	assert_eq!(solve(1, "1\n2\n1\n3\n").map(|a| format_answers(&a)).as_deref(), Some("2, 1"));
}
