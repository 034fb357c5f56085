mod common;

use proptest::prelude::*;

use twister::mersenne::mt19937::{Mt19937, N};

use common::take;

proptest! {
    #[test]
    fn same_seed_same_sequence(seed in any::<u32>(), count in 0_usize..2_000) {
        let mut a = Mt19937::new(seed);
        let mut b = Mt19937::new(seed);

        prop_assert_eq!(take(&mut a, count), take(&mut b, count));
    }

    #[test]
    fn index_stays_in_bounds(seed in any::<u32>(), count in 0_usize..3 * N) {
        let mut generator = Mt19937::new(seed);
        let _ = take(&mut generator, count);

        prop_assert_eq!(generator.state().len(), N);
        prop_assert!(generator.index() <= N);

        let expected = if count == 0 { N } else { (count - 1) % N + 1 };
        prop_assert_eq!(generator.index(), expected);
    }

    #[test]
    fn parts_restore_mid_stream(seed in any::<u32>(), skip in 0_usize..2 * N) {
        let mut generator = Mt19937::new(seed);
        let _ = take(&mut generator, skip);

        let mut restored = Mt19937::from_parts(*generator.state(), generator.index()).unwrap();
        prop_assert_eq!(take(&mut restored, N + 1), take(&mut generator, N + 1));
    }

    #[test]
    fn wide_seed_keeps_low_bits(seed in any::<u64>()) {
        prop_assert_eq!(Mt19937::from_wide_seed(seed), Mt19937::new(seed as u32));
    }
}
