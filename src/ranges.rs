// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


/// The overlap of two inclusive ranges, if any.
pub(crate) fn intersection(a: &RangeInclusive<i64>, b: &RangeInclusive<i64>) -> Option<RangeInclusive<i64>> {
	let (start, end) = (*a.start().max(b.start()), *a.end().min(b.end()));
	(start <= end).then_some(start..=end)
}

pub(crate) fn len(r: &RangeInclusive<i64>) -> u64 {
	if r.is_empty() { 0 } else { r.start().abs_diff(*r.end()) + 1 }
}


#[test]
fn tests() {
	assert_eq!(intersection(&(0..=10), &(5..=15)), Some(5..=10));
	assert_eq!(intersection(&(5..=15), &(0..=10)), Some(5..=10));
	assert_eq!(intersection(&(-3..=3), &(-1..=1)), Some(-1..=1));
	assert_eq!(intersection(&(0..=4), &(4..=9)), Some(4..=4));
	assert_eq!(intersection(&(0..=4), &(5..=9)), None);
	assert_eq!(len(&(-50..=50)), 101);
	assert_eq!(len(&(3..=3)), 1);
	#[allow(clippy::reversed_empty_ranges)]
	let empty = 4..=3;
	assert_eq!(len(&empty), 0);
}
