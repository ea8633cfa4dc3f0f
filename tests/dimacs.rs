use std::path::{Path, PathBuf};

use dpll_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::clause::Clause,
    types::err::{ErrorKind, ParseError},
};

fn cnf_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cnf")
        .join(name)
}

fn silent_formula_report(name: &str, config: &Config) -> Report {
    let mut ctx = match Context::from_dimacs_path(config.clone(), cnf_path(name)) {
        Ok(ctx) => ctx,
        Err(e) => panic!("{e:?}"),
    };
    ctx.solve()
}

mod files {
    use super::*;

    #[test]
    fn pigeonhole() {
        assert_eq!(
            silent_formula_report("php_3_2.cnf", &Config::default()),
            Report::Unsatisfiable
        );
    }

    #[test]
    fn uniform_random() {
        for seed in 0..4 {
            let mut config = Config::default();
            config.seed.value = seed;

            assert_eq!(
                silent_formula_report("random_3_12_sat.cnf", &config),
                Report::Satisfiable
            );
            assert_eq!(
                silent_formula_report("random_3_12_unsat.cnf", &config),
                Report::Unsatisfiable
            );
        }
    }

    #[test]
    fn metadata_is_declared() {
        let ctx = Context::from_dimacs_path(Config::default(), cnf_path("php_3_2.cnf")).unwrap();
        assert_eq!(ctx.metadata().atoms, 6);
        assert_eq!(ctx.metadata().clauses, 9);
    }

    #[test]
    fn model_satisfies_file() {
        let mut ctx =
            Context::from_dimacs_path(Config::default(), cnf_path("random_3_12_sat.cnf")).unwrap();
        let formula = ctx.clause_db.clauses().to_vec();

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert!(formula.iter().all(|clause| clause.satisfied_by(ctx.assignment())));
    }

    #[test]
    fn missing_file() {
        let result = Context::from_dimacs_path(Config::default(), cnf_path("missing.cnf"));
        assert!(matches!(result, Err(ErrorKind::Parse(ParseError::NoFile))));
    }
}

mod writing {
    use super::*;

    #[test]
    fn write_and_read() {
        let ctx =
            Context::from_dimacs_path(Config::default(), cnf_path("random_3_12_unsat.cnf")).unwrap();

        let mut buffer = Vec::default();
        assert!(ctx.clause_db.write_dimacs(&mut buffer).is_ok());

        let mut copy = Context::from_config(Config::default());
        assert!(copy.read_dimacs(buffer.as_slice()).is_ok());
        assert_eq!(copy.clause_db.clauses(), ctx.clause_db.clauses());
        assert_eq!(copy.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn dump_is_not_dimacs() {
        let ctx = Context::from_clauses(Config::default(), vec![vec![1, -2], vec![2]]).unwrap();
        let dump = ctx.clause_db.to_string();

        let mut copy = Context::from_config(Config::default());
        assert!(copy.read_dimacs(dump.as_bytes()).is_err());
    }
}
