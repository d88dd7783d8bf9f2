//! Property-based tests for the fill routine and engines

use proptest::prelude::*;
use unirand_core_rs::{fill_uniform_with, BufferedRng, DefaultRng, Mixer, RngEngine};

fn any_mixer() -> impl Strategy<Value = Mixer> {
    prop_oneof![
        Just(Mixer::WyHash),
        Just(Mixer::WyMum),
        Just(Mixer::Xxh3),
    ]
}

proptest! {
    #[test]
    fn prop_fill_f64_in_unit_interval(seed in any::<u64>(), len in 0usize..512, mixer in any_mixer()) {
        let mut buf = vec![0.0f64; len];
        fill_uniform_with(&mut buf, seed, mixer);
        for &v in &buf {
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn prop_fill_f32_in_unit_interval(seed in any::<u64>(), len in 0usize..512, mixer in any_mixer()) {
        let mut buf = vec![0.0f32; len];
        fill_uniform_with(&mut buf, seed, mixer);
        for &v in &buf {
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn prop_fill_deterministic(seed in any::<u64>(), len in 0usize..256, mixer in any_mixer()) {
        let mut a = vec![0.0f64; len];
        let mut b = vec![0.0f64; len];
        fill_uniform_with(&mut a, seed, mixer);
        fill_uniform_with(&mut b, seed, mixer);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_engine_deterministic(seed in any::<u64>(), draws in 1usize..200) {
        let mut rng1 = DefaultRng::new(seed);
        let mut rng2 = DefaultRng::new(seed);
        for _ in 0..draws {
            prop_assert_eq!(rng1.next(), rng2.next());
        }
    }

    #[test]
    fn prop_buffered_u64_equals_unbuffered(seed in any::<u64>(), draws in 1usize..100) {
        let mut buffered = BufferedRng::new(seed);
        let mut unbuffered = DefaultRng::new(seed);
        for _ in 0..draws {
            prop_assert_eq!(buffered.next(), unbuffered.next());
        }
    }

    #[test]
    fn prop_reseed_restarts_stream(seed in any::<u64>(), draws in 1usize..50) {
        let mut rng = RngEngine::<u32, 4>::new(seed);
        let first: Vec<u32> = (0..draws).map(|_| rng.next()).collect();
        rng.reseed(seed);
        let second: Vec<u32> = (0..draws).map(|_| rng.next()).collect();
        prop_assert_eq!(first, second);
    }
}
