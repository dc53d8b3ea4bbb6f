// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Algorithm([bool; 512]);

/// A finite window onto an infinite image; every pixel outside of it has
/// the `background` value.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Image {
	pixels: Vec<bool>,
	width: usize,
	background: bool,
}

impl Image {
	fn height(&self) -> usize {
		self.pixels.len() / self.width.max(1)
	}

	fn pixel(&self, x: isize, y: isize) -> bool {
		if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height() {
			return self.background
		}
		self.pixels[y as usize * self.width + x as usize]
	}

	fn enhanced(&self, algorithm: &Algorithm) -> Image {
		// Pixels further out than one past the window only see background
		let (width, height) = (self.width + 2, self.height() + 2);
		let pixels = (0..height as isize)
			.flat_map(|y| (0..width as isize).map(move |x| (x - 1, y - 1)))
			.map(|(x, y)| {
				let index = (-1..=1)
					.flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
					.fold(0, |index, (dx, dy)| index << 1 | self.pixel(x + dx, y + dy) as usize);
				algorithm.0[index]
			})
			.collect();
		let background = algorithm.0[if self.background { 511 } else { 0 }];
		Image { pixels, width, background }
	}

	/// `None` when infinitely many pixels are lit.
	fn lit_count(&self) -> Option<usize> {
		(!self.background).then(|| self.pixels.iter().filter(|&&p| p).count())
	}
}


fn input_algorithm_and_image(input: &str) -> (Algorithm, Image) {
	parsing::try_algorithm_and_image_from_str(input).unwrap()
}


fn part1and2_impl<const STEPS: usize>(input: &str) -> usize {
	let (algorithm, mut image) = input_algorithm_and_image(input);
	for _ in 0..STEPS { image = image.enhanced(&algorithm) }
	image.lit_count().unwrap()
}

pub(crate) fn part1(input: &str) -> usize {
	part1and2_impl::<2>(input)
}

pub(crate) fn part2(input: &str) -> usize {
	part1and2_impl::<50>(input)
}


mod parsing {
	use super::{Algorithm, Image};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InputError {
		AlgorithmLength(usize),
		Separator,
		Width { line: usize },
		Pixel { line: usize, column: usize, found: char },
	}

	fn try_pixel(line: usize, column: usize, c: char) -> Result<bool, InputError> {
		match c {
			'#' => Ok(true),
			'.' => Ok(false),
			found => Err(InputError::Pixel { line, column, found }),
		}
	}

	pub(super) fn try_algorithm_and_image_from_str(s: &str) -> Result<(Algorithm, Image), InputError> {
		let mut lines = s.lines().map(str::trim).enumerate();

		let algorithm = lines.next().map(|(_, line)| line).unwrap_or_default();
		let algorithm = algorithm.chars().enumerate()
			.map(|(c, ch)| try_pixel(1, c + 1, ch))
			.collect::<Result<Vec<_>, _>>()?;
		let algorithm = Algorithm(algorithm.try_into()
			.map_err(|v: Vec<_>| InputError::AlgorithmLength(v.len()))?);

		if !matches!(lines.next(), Some((_, ""))) { return Err(InputError::Separator) }

		let mut pixels = Vec::new();
		let mut width = None;
		for (l, line) in lines.filter(|(_, line)| !line.is_empty()) {
			if *width.get_or_insert(line.len()) != line.len() {
				return Err(InputError::Width { line: l + 1 })
			}
			for (c, ch) in line.chars().enumerate() {
				pixels.push(try_pixel(l + 1, c + 1, ch)?);
			}
		}

		Ok((algorithm, Image { pixels, width: width.unwrap_or(0), background: false }))
	}
}


#[test]
fn tests() {
	fn input(rule: impl Fn(usize) -> bool, image: &str) -> String {
		let algorithm = (0..512).map(|n| if rule(n) { '#' } else { '.' }).collect::<String>();
		format!("{algorithm}\n\n{image}")
	}
	fn lit_counts(input: &str, steps: usize) -> Vec<Option<usize>> {
		let (algorithm, mut image) = input_algorithm_and_image(input);
		let mut counts = vec![image.lit_count()];
		for _ in 0..steps {
			image = image.enhanced(&algorithm);
			counts.push(image.lit_count());
		}
		counts
	}

	const DIAGONAL: &str = "#..\n.#.\n..#\n";
	let identity = input(|n| n & 0b000_010_000 != 0, DIAGONAL);
	assert_eq!(lit_counts(&identity, 2), [Some(3), Some(3), Some(3)]);
	assert_eq!(part1(&identity), 3);

	let inverting = input(|n| n & 0b000_010_000 == 0, DIAGONAL);
	assert_eq!(lit_counts(&inverting, 4), [Some(3), None, Some(3), None, Some(3)]);
	assert_eq!(part2(&inverting), 3);

	let dilating = input(|n| n != 0, "#\n");
	assert_eq!(lit_counts(&dilating, 2), [Some(1), Some(9), Some(25)]);
	assert_eq!(part1(&dilating), 25);

	let (algorithm, image) = input_algorithm_and_image(&identity);
	let enhanced = image.enhanced(&algorithm);
	assert_eq!((enhanced.width, enhanced.height()), (5, 5));
	assert!(enhanced.pixel(1, 1) && enhanced.pixel(3, 3) && !enhanced.pixel(0, 0));

	const INPUT: &str = indoc::indoc! { "
		..#.#..#####.#.#.#.###.##.....###.##.#..###.####..#####..#....#..#..##..###..######.###...####..#..#####..##..#.#####...##.#.#..#.##..#.#......#.###.######.###.####...#.##.##..#..#..#####.....#.#....###..#.##......#.....#..#..#..##..#...##.######.####.####.#.#...#.......#..#.#.#...####.##.#......#..#...##.#.##..#...##.#.##..###.#......#.#.......#.#.#.####.###.##...#.....####.#..#..#.##.#....##..#.####....##...##..#...#......#.#.......#.......##..####..#...#.#.#...##..#.#..###..#####........#..####......#..#

		#..#.
		#....
		##..#
		..#..
		..###
	" };
	assert_eq!(lit_counts(INPUT, 1)[0], Some(10));
	assert_eq!(part1(INPUT), 35);
	assert_eq!(part2(INPUT), 3351);
}
