use prop_witness::{config::Config, context::Context, reports::Report, types::err};

fn context_with(constants: &str, predicates: &str, true_atoms: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.read_constants(constants.as_bytes()).is_ok());
    assert!(ctx.read_predicates(predicates.as_bytes()).is_ok());
    assert!(ctx.read_interpretation(true_atoms.as_bytes()).is_ok());
    ctx
}

mod scenarios {

    use super::*;

    #[test]
    fn negated_false_fact() {
        let ctx = context_with("a", "P/1", "");

        let formula = ctx.parse_formula("not P(a)").expect("parse failure");
        assert!(ctx.is_well_formed(&formula));
        assert!(ctx.evaluate(&formula));
        assert_eq!(ctx.report(&formula), Ok(Report::True));
    }

    #[test]
    fn undeclared_predicate() {
        let ctx = context_with("a b", "P/1", "");

        let formula = ctx.parse_formula("[ P(a) and Q(b) ]").expect("parse failure");
        assert!(!ctx.is_well_formed(&formula));
        assert_eq!(
            ctx.check_formula(&formula),
            Err(err::ErrorKind::Syntax(err::SyntaxError::UnknownPredicate(
                "Q".to_string()
            )))
        );
        assert!(ctx.report(&formula).is_err());
    }

    #[test]
    fn contradiction() {
        let ctx = context_with("a", "P/1", "P(a)");

        let formula = ctx.parse_formula("[ P(a) and not P(a) ]").expect("parse failure");
        assert!(ctx.is_well_formed(&formula));
        assert!(!ctx.evaluate(&formula));
        assert_eq!(ctx.find_minimal_witness(&formula), Ok(None));
        assert_eq!(ctx.report(&formula), Ok(Report::Unsatisfiable));

        let ctx = context_with("a", "P/1", "");
        assert!(!ctx.evaluate(&formula));
        assert_eq!(ctx.find_minimal_witness(&formula), Ok(None));
    }

    #[test]
    fn disjunction_of_false_facts() {
        let ctx = context_with("a b", "P/1", "P(c)");

        let formula = ctx.parse_formula("[ P(a) or P(b) ]").expect("parse failure");
        assert!(ctx.is_well_formed(&formula));
        assert!(!ctx.evaluate(&formula));

        let witness = ctx
            .find_minimal_witness(&formula)
            .expect("search failure")
            .expect("no witness");
        assert_eq!(witness.atoms(), &["P(a)"]);
        assert_eq!(witness.truth(), 0b01);
        assert_eq!(witness.to_string(), "P(a)\n");

        assert_eq!(ctx.report(&formula), Ok(Report::Satisfiable));
    }

    #[test]
    fn missing_subformula() {
        let ctx = context_with("a", "P/1", "");

        assert!(matches!(
            ctx.parse_formula("[ P(a) and ]"),
            Err(err::ErrorKind::Parse(_))
        ));
    }
}

mod reports {

    use super::*;

    #[test]
    fn true_formula_skips_search() {
        let mut ctx = context_with("a", "P/1", "P(a)");
        assert!(ctx.config.atom_limit.set(0).is_ok());

        // One atom exceeds the limit, though as the formula is true no search is made.
        let formula = ctx.parse_formula("P(a)").expect("parse failure");
        assert_eq!(ctx.report(&formula), Ok(Report::True));

        let formula = ctx.parse_formula("not P(a)").expect("parse failure");
        assert_eq!(
            ctx.report(&formula),
            Err(err::ErrorKind::Witness(
                err::WitnessError::AtomCapacityExceeded { atoms: 1, limit: 0 }
            ))
        );
    }

    #[test]
    fn nullary_predicates() {
        let ctx = context_with("", "rain/0 wet/0", "rain");

        let formula = ctx
            .parse_formula("[ rain implies wet ]")
            .expect("parse failure");
        assert!(ctx.is_well_formed(&formula));
        assert!(!ctx.evaluate(&formula));

        let witness = ctx
            .find_minimal_witness(&formula)
            .expect("search failure")
            .expect("no witness");
        // Both atoms false satisfies the implication.
        assert!(witness.atoms().is_empty());
        assert_eq!(witness.to_string(), "");
    }

    #[test]
    fn biconditional() {
        let ctx = context_with("a b", "Likes/2", "Likes(a,b)");

        let formula = ctx
            .parse_formula("[ Likes(a,b) iff Likes(b,a) ]")
            .expect("parse failure");
        assert!(ctx.is_well_formed(&formula));
        assert!(!ctx.evaluate(&formula));
        assert_eq!(ctx.report(&formula), Ok(Report::Satisfiable));

        let witness = ctx
            .find_minimal_witness(&formula)
            .expect("search failure")
            .expect("no witness");
        assert!(witness.atoms().is_empty());
    }
}
