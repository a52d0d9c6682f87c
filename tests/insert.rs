use rand::{rngs::SmallRng, Rng, SeedableRng};
use sorted_search::{insert, insert_unique, Keyed};

const SEED: &'static [u8; 32] = b"testseedtestseedtestseedtestseed";

fn assert_sorted<T: Ord + std::fmt::Debug>(seq: &[T]) {
	for window in seq.windows(2) {
		assert!(window[0] <= window[1], "out of order: {:?}", window);
	}
}

#[test]
pub fn insert_into_empty_sequence() {
	let mut seq: Vec<i32> = Vec::new();

	assert_eq!(insert(&mut seq, 42, i32::cmp), 0);
	assert_eq!(seq, [42]);
}

#[test]
pub fn insert_keeps_the_sequence_sorted() {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut seq: Vec<u32> = Vec::new();

	for i in 0..300 {
		let value = rng.gen_range(0..1000);
		let index = insert(&mut seq, value, u32::cmp);

		assert_eq!(seq.len(), i + 1);
		assert_eq!(seq[index], value);
		assert_sorted(&seq);
	}
}

#[test]
pub fn duplicate_lands_after_the_existing_run() {
	let mut seq = vec![1, 3, 3, 3, 5, 7];

	assert_eq!(insert(&mut seq, 3, i32::cmp), 4);
	assert_eq!(seq, [1, 3, 3, 3, 3, 5, 7]);
}

#[test]
pub fn duplicates_keep_their_insertion_order() {
	let mut seq = vec![Keyed::new(1, "lo"), Keyed::new(9, "hi")];

	insert(&mut seq, Keyed::new(3, "a"), Keyed::cmp);
	insert(&mut seq, Keyed::new(3, "b"), Keyed::cmp);
	insert(&mut seq, Keyed::new(3, "c"), Keyed::cmp);

	let values: Vec<&str> = seq.iter().map(|item| item.value).collect();
	assert_eq!(values, ["lo", "a", "b", "c", "hi"]);
}

#[test]
pub fn duplicates_at_the_end_are_appended() {
	let mut seq = vec![Keyed::new(3, "a"), Keyed::new(3, "b")];

	assert_eq!(insert(&mut seq, Keyed::new(3, "c"), Keyed::cmp), 2);

	let values: Vec<&str> = seq.iter().map(|item| item.value).collect();
	assert_eq!(values, ["a", "b", "c"]);
}

#[test]
pub fn insert_unique_overwrites_an_equal_element() {
	let mut seq = vec![Keyed::new(1, "a"), Keyed::new(3, "b"), Keyed::new(5, "c")];

	assert_eq!(insert_unique(&mut seq, Keyed::new(3, "B"), Keyed::cmp), 1);
	assert_eq!(seq.len(), 3);
	assert_eq!(seq[1].value, "B");
}

#[test]
pub fn insert_unique_still_grows_for_a_new_key() {
	let mut seq = vec![Keyed::new(1, "a"), Keyed::new(5, "c")];

	assert_eq!(insert_unique(&mut seq, Keyed::new(3, "b"), Keyed::cmp), 1);
	assert_eq!(seq.len(), 3);
	assert_eq!(seq[1].value, "b");
}

#[test]
pub fn insert_at_both_ends() {
	let mut seq = vec![10, 20, 30];

	assert_eq!(insert(&mut seq, 5, i32::cmp), 0);
	assert_eq!(insert(&mut seq, 35, i32::cmp), 4);
	assert_eq!(seq, [5, 10, 20, 30, 35]);
}

#[test]
pub fn random_unique_inserts_behave_like_a_map() {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut seq: Vec<Keyed<u32, u32>> = Vec::new();

	for round in 0..500u32 {
		let key = rng.gen_range(0..100);
		insert_unique(&mut seq, Keyed::new(key, round), Keyed::cmp);

		assert!(seq.len() <= 100);
		for window in seq.windows(2) {
			assert!(window[0].key < window[1].key);
		}
	}
}
