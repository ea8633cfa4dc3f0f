use dpll_sat::{config::Config, context::Context, reports::Report};

mod basic {

    use dpll_sat::structures::clause::Clause;

    use super::*;

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_clauses(Config::default(), vec![]).unwrap();

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert!(ctx.assignment().is_empty());
        assert_eq!(ctx.metadata().atoms, 0);
        assert_eq!(ctx.metadata().clauses, 0);
    }

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(4).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.value_of(4), Some(true));
    }

    #[test]
    fn complementary_units() {
        let mut ctx = Context::from_clauses(Config::default(), vec![vec![3], vec![-3]]).unwrap();

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_clauses(Config::default(), vec![vec![1, 2], vec![-1]]).unwrap();

        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), Some(true));
        assert_eq!(ctx.assignment().len(), 2);
    }

    #[test]
    fn exclusive_pair() {
        let formula = vec![vec![1, 2], vec![-1, -2]];
        let mut ctx = Context::from_clauses(Config::default(), formula.clone()).unwrap();

        assert_eq!(ctx.solve(), Report::Satisfiable);
        for clause in &formula {
            assert!(clause.satisfied_by(ctx.assignment()));
        }
        assert_ne!(ctx.value_of(1), ctx.value_of(2));
    }

    #[test]
    fn conflict() {
        let formula = vec![vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]];
        let mut ctx = Context::from_clauses(Config::default(), formula).unwrap();

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert!(ctx.counters.conflicts > 0);
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_clauses(Config::default(), vec![vec![1, 2], vec![]]).unwrap();
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn duplicate_negations() {
        // Propagating 1 empties the first clause, without 1 and -1 both being units.
        let mut ctx = Context::from_clauses(Config::default(), vec![vec![-1, -1], vec![1]]).unwrap();
        assert_eq!(ctx.solve(), Report::Unsatisfiable);

        let mut ctx =
            Context::from_clauses(Config::default(), vec![vec![-1, -1, 2], vec![1, 1], vec![-2, 1]])
                .unwrap();
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.valuation_string(), "1 2");
    }

    #[test]
    fn metadata_from_first_clause() {
        let ctx = Context::from_clauses(Config::default(), vec![vec![1, 7], vec![2, 3, 4]]).unwrap();
        assert_eq!(ctx.metadata().atoms, 2);
        assert_eq!(ctx.metadata().clauses, 2);
    }

    #[test]
    fn zero_literal() {
        assert!(Context::from_clauses(Config::default(), vec![vec![1, 0]]).is_err());
    }

    #[test]
    fn literal_without_negation() {
        use dpll_sat::types::err::{BuildError, ErrorKind};

        assert_eq!(
            Context::from_clauses(Config::default(), vec![vec![1], vec![i32::MIN]]).err(),
            Some(ErrorKind::Build(BuildError::AtomLimit))
        );

        let mut ctx = Context::from_clauses(Config::default(), vec![vec![i32::MAX]]).unwrap();
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.value_of(i32::MAX.unsigned_abs()), Some(true));
    }

    #[test]
    fn repeated_solves() {
        let formula = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]];
        let mut ctx = Context::from_clauses(Config::default(), formula.clone()).unwrap();

        for _ in 0..4 {
            assert_eq!(ctx.solve(), Report::Satisfiable);
            assert!(formula.iter().all(|clause| clause.satisfied_by(ctx.assignment())));
        }
    }

    #[test]
    fn reset_restores_formula() {
        let formula = vec![vec![2, -1], vec![1, 3], vec![-3], vec![-2, -3, 1]];
        let mut ctx = Context::from_clauses(Config::default(), formula.clone()).unwrap();

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_ne!(ctx.clause_db.clauses(), formula.as_slice());

        ctx.reset();
        assert_eq!(ctx.clause_db.clauses(), formula.as_slice());
        assert!(ctx.assignment().is_empty());
        assert_eq!(ctx.report(), Report::Unknown);
    }

    #[test]
    fn addition_after_solve() {
        let mut ctx = Context::from_clauses(Config::default(), vec![vec![1, 2]]).unwrap();
        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert!(ctx.add_clause(vec![-1]).is_ok());
        assert!(ctx.add_clause(vec![-2]).is_ok());
        assert_eq!(ctx.clause_db.count(), 3);
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn dump_shows_current_formula() {
        let mut ctx = Context::from_clauses(Config::default(), vec![vec![1, 2], vec![-1, 3], vec![1]]).unwrap();
        assert_eq!(ctx.clause_db.to_string(), "1 2\n-1 3\n1\n");

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.clause_db.to_string(), "");
    }
}
