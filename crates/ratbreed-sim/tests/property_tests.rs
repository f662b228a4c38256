//! Property-based tests for the breeding operators and the generation loop.

use proptest::prelude::*;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use ratbreed_sim::{
    SimulationConfig, SimulationSeed, breeding, fitness, mutation, sampling, selection,
    simulation::Simulation,
};

fn weights() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..100_000, 0..200)
}

proptest! {
    #[test]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn populate_count_and_bounds(
        count in 0usize..500,
        min in 0u64..1_000,
        span in 0u64..1_000,
        mode_frac in 0.0f64..=1.0,
        rng_seed in any::<u64>(),
    ) {
        let max = min + span;
        let mode = min + (span as f64 * mode_frac) as u64;
        let mut rng = Pcg32::seed_from_u64(rng_seed);
        let population = sampling::populate(count, min, max, mode, &mut rng).unwrap();
        prop_assert_eq!(population.len(), count);
        prop_assert!(population.iter().all(|w| (min..=max).contains(w)));
    }

    #[test]
    #[expect(clippy::cast_precision_loss)]
    fn fitness_is_mean_over_goal(population in weights(), goal in 1u64..100_000) {
        let result = fitness::fitness(&population, goal);
        match fitness::mean_weight(&population) {
            Some(mean) => prop_assert_eq!(result.unwrap(), mean / goal as f64),
            None => prop_assert!(result.is_err()),
        }
    }

    #[test]
    fn fitness_grows_with_heavier_rat(mut population in weights(), goal in 1u64..100_000) {
        prop_assume!(!population.is_empty());
        let before = fitness::fitness(&population, goal).unwrap();
        population[0] += 1;
        let after = fitness::fitness(&population, goal).unwrap();
        prop_assert!(after > before);
    }

    #[test]
    fn select_sizes_and_membership(population in weights(), retain in 0usize..100) {
        let selected = selection::select(&population, retain);
        let half = population.len() / 2;
        prop_assert_eq!(selected.females.len(), usize::min(retain / 2, half));
        prop_assert_eq!(selected.males.len(), usize::min(retain / 2, population.len() - half));
        for w in selected.males.iter().chain(&selected.females) {
            prop_assert!(population.contains(w));
        }
    }

    #[test]
    fn breed_count_and_litter_bounds(
        males in prop::collection::vec(0u64..10_000, 0..30),
        females in prop::collection::vec(0u64..10_000, 0..30),
        litter_size in 1usize..10,
        rng_seed in any::<u64>(),
    ) {
        let mut rng = Pcg32::seed_from_u64(rng_seed);
        let pups = breeding::breed(&males, &females, litter_size, &mut rng);
        prop_assert_eq!(pups.len(), litter_size * usize::min(males.len(), females.len()));

        // every litter fits between some male and some female
        for litter in pups.chunks(litter_size) {
            let low = *litter.iter().min().unwrap();
            let high = *litter.iter().max().unwrap();
            let fits = males.iter().any(|&m| {
                females
                    .iter()
                    .any(|&f| u64::min(m, f) <= low && high <= u64::max(m, f))
            });
            prop_assert!(fits);
        }
    }

    #[test]
    fn single_pair_litter_stays_between_parents(
        male in 0u64..100_000,
        female in 0u64..100_000,
        litter_size in 0usize..20,
        rng_seed in any::<u64>(),
    ) {
        let mut rng = Pcg32::seed_from_u64(rng_seed);
        let pups = breeding::breed(&[male], &[female], litter_size, &mut rng);
        prop_assert_eq!(pups.len(), litter_size);
        let parents = u64::min(male, female)..=u64::max(male, female);
        prop_assert!(pups.iter().all(|w| parents.contains(w)));
    }

    #[test]
    fn zero_odds_mutation_is_identity(pups in weights(), rng_seed in any::<u64>()) {
        let mut rng = Pcg32::seed_from_u64(rng_seed);
        prop_assert_eq!(mutation::mutate(&pups, 0.0, 0.5, 1.2, &mut rng).unwrap(), pups);
    }

    #[test]
    fn certain_mutation_changes_every_pup(
        pups in prop::collection::vec(1u64..100_000, 0..200),
        rng_seed in any::<u64>(),
    ) {
        let mut rng = Pcg32::seed_from_u64(rng_seed);
        let mutated = mutation::mutate(&pups, 1.0, 1.5, 2.5, &mut rng).unwrap();
        prop_assert_eq!(mutated.len(), pups.len());
        for (before, after) in pups.iter().zip(&mutated) {
            prop_assert_ne!(before, after);
        }
    }

    #[test]
    fn population_never_empties(
        num_rats in 1usize..40,
        litter_size in 0usize..6,
        mutate_odds in 0.0f64..1.0,
        generation_limit in 0usize..30,
        seed in any::<[u8; 16]>(),
    ) {
        let config = SimulationConfig {
            num_rats,
            litter_size,
            mutate_odds,
            generation_limit,
            ..SimulationConfig::default()
        };
        let mut simulation =
            Simulation::with_seed(config, SimulationSeed::from_bytes(seed)).unwrap();
        let retained = simulation.retain_count();
        let merged_size = retained + retained / 2 * litter_size;
        while let Some(record) = simulation.step().unwrap() {
            prop_assert!(record.average_weight.is_finite());
            prop_assert_eq!(simulation.population().len(), merged_size);
        }
        prop_assert_eq!(simulation.history().len(), simulation.generation());
        prop_assert!(!simulation.population().is_empty());
    }

    #[test]
    fn same_seed_same_history(seed in any::<[u8; 16]>()) {
        let config = SimulationConfig {
            generation_limit: 20,
            ..SimulationConfig::default()
        };
        let seed = SimulationSeed::from_bytes(seed);
        let a = Simulation::with_seed(config.clone(), seed).unwrap().run().unwrap();
        let b = Simulation::with_seed(config, seed).unwrap().run().unwrap();
        prop_assert_eq!(a.history, b.history);
    }
}
