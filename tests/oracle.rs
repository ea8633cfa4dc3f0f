//! Checks of solves on small random formulas against an exhaustive search.

use dpll_sat::{
    config::Config,
    context::Context,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};

use rand::{Rng, SeedableRng};

/// A formula of `clause_count` clauses over atoms `1..=atom_count`, each clause with between one and `max_size` literals.
fn random_formula(
    rng: &mut impl Rng,
    atom_count: u32,
    clause_count: usize,
    max_size: usize,
) -> Vec<CClause> {
    (0..clause_count)
        .map(|_| {
            let size = rng.random_range(1..=max_size);
            (0..size)
                .map(|_| {
                    let atom = rng.random_range(1..=atom_count) as i32;
                    match rng.random_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

/// Whether some valuation of atoms `1..=atom_count` satisfies every clause of `formula`.
fn brute_force(formula: &[CClause], atom_count: u32) -> bool {
    (0..(1_u32 << atom_count)).any(|bits| {
        let valuation = std::iter::once(None)
            .chain((0..atom_count).map(|atom| Some(bits & (1 << atom) != 0)))
            .collect::<Vec<_>>();
        formula.iter().all(|clause| clause.satisfied_by(&valuation))
    })
}

fn satisfies(formula: &[CClause], valuation: &CValuation) -> bool {
    formula.iter().all(|clause| clause.satisfied_by(valuation))
}

#[test]
fn verdicts_match_exhaustive_search() {
    let mut rng = MinimalPCG32::seed_from_u64(2024);
    let mut counts = [0, 0];

    for _ in 0..300 {
        let atom_count = rng.random_range(1..=10);
        let clause_count = rng.random_range(0..=(4 * atom_count as usize));
        let formula = random_formula(&mut rng, atom_count, clause_count, 3);

        let mut ctx = Context::from_clauses(Config::default(), formula.clone()).unwrap();
        let report = ctx.solve();

        match brute_force(&formula, atom_count) {
            true => {
                assert_eq!(report, Report::Satisfiable, "{formula:?}");
                assert!(satisfies(&formula, ctx.assignment()), "{formula:?}");
                counts[0] += 1;
            }
            false => {
                assert_eq!(report, Report::Unsatisfiable, "{formula:?}");
                counts[1] += 1;
            }
        }
    }

    // Some of each, else the check is weak.
    assert!(counts[0] > 0 && counts[1] > 0);
}

#[test]
fn models_only_value_atoms_of_the_formula() {
    let mut rng = MinimalPCG32::seed_from_u64(5);

    for _ in 0..100 {
        let formula = random_formula(&mut rng, 12, 30, 4);

        let mut ctx = Context::from_clauses(Config::default(), formula.clone()).unwrap();
        if ctx.solve() == Report::Satisfiable {
            assert!(satisfies(&formula, ctx.assignment()));
            for atom in ctx.assignment().keys() {
                assert!(formula.iter().any(|clause| clause.atoms().any(|a| a == *atom)));
            }
        }
    }
}

#[test]
fn seeds_agree_on_verdict() {
    let mut rng = MinimalPCG32::seed_from_u64(99);

    for _ in 0..50 {
        let formula = random_formula(&mut rng, 8, 34, 3);

        let verdicts = (0..6)
            .map(|seed| {
                let mut config = Config::default();
                config.seed.value = seed;

                let mut a = Context::from_clauses(config.clone(), formula.clone()).unwrap();
                let mut b = Context::from_clauses(config, formula.clone()).unwrap();

                let verdict = a.solve();
                assert_eq!(verdict, b.solve());
                assert_eq!(a.assignment(), b.assignment());

                // A second solve on the same context.
                assert_eq!(verdict, a.solve());
                verdict
            })
            .collect::<Vec<_>>();

        assert!(verdicts.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

#[test]
fn external_rng() {
    let formula = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3], vec![4, -4]];

    let mut config = Config::default();
    config.reseed.value = false;

    let mut ctx = dpll_sat::context::GenericContext::from_config_and_rng(
        config,
        MinimalPCG32::seed_from_u64(31),
    );
    for clause in &formula {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }

    for _ in 0..8 {
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert!(satisfies(&formula, ctx.assignment()));
    }
}

#[test]
fn abandoned_case_leaves_no_value() {
    // Taking 1 forces 5 and then both 3 and -3, so the first case conflicts.
    // Taking -1 forces 2, and either -5 or 3 completes the model.
    let formula = vec![vec![1, 2], vec![-1, 5], vec![-5, 3], vec![-1, -3], vec![2, 4]];
    let mut backtracked = 0;

    for seed in 0..32 {
        let mut config = Config::default();
        config.seed.value = seed;

        let mut ctx = Context::from_clauses(config.clone(), formula.clone()).unwrap();
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert!(satisfies(&formula, ctx.assignment()));

        if ctx.counters.backtracks == 0 {
            continue;
        }
        backtracked += 1;

        assert_eq!(ctx.assignment().len(), 3);
        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), Some(true));
        assert_ne!(ctx.value_of(5), Some(true));
        assert_eq!(ctx.value_of(4), None);

        // The model alone, without any case split, satisfies the formula.
        let mut replay = Context::from_clauses(config, formula.clone()).unwrap();
        for (atom, value) in ctx.assignment() {
            assert!(replay.propagate(CLiteral::new(*atom, *value)).is_ok());
        }
        assert!(replay.clause_db.is_empty());
    }

    assert!(backtracked > 0);
}
