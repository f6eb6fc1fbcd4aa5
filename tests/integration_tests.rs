use satyr::parser::cnf_from_dimacs;
use satyr::{Args, Branching};

use std::path::PathBuf;

fn solve_instance(name: &str, branching: Branching, expected: bool) {
    let path = PathBuf::from(format!("tests/instances/{}.cnf", name));
    let cnf = cnf_from_dimacs(&path).unwrap();
    let args = Args::new(path, branching, false);
    let solution = satyr::solve(args).unwrap();
    assert_eq!(expected, solution.is_satisfiable());
    if let Some(interpretation) = solution.interpretation() {
        assert!(cnf.is_satisfied_by(interpretation));
    }
}

macro_rules! integration_tests {
    ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let filename = format!("tests/instances/{}.cnf", stringify!($name));
                let path = PathBuf::from(filename);
                let cnf = cnf_from_dimacs(&path).unwrap();
                let args = Args::new(path, Branching::MostOften, false);
                let solution = satyr::solve(args).unwrap();
                assert_eq!($value, solution.is_satisfiable());
                if let Some(interpretation) = solution.interpretation() {
                    assert!(cnf.is_satisfied_by(interpretation));
                }
            }
        )*
    }
}

integration_tests! {
    empty_formula: true,
    single_unit: true,
    contradictory_units: false,
    chain_implications: true,
    contains_empty_clause: false,
    tautology_only: true,
    pure_literals: true,
    pigeonhole_3_2: false,
    pigeonhole_4_3: false,
    random_3sat: true,
}

#[test]
fn every_heuristic_solves_the_pigeonhole() {
    for branching in [
        Branching::MostOften,
        Branching::MostEquilibrated,
        Branching::Mom,
        Branching::Jwos,
        Branching::Jwts,
        Branching::Dlcs,
        Branching::Dlis,
    ] {
        solve_instance("pigeonhole_4_3", branching, false);
    }
}

#[test]
fn every_heuristic_finds_a_model() {
    for branching in [
        Branching::MostOften,
        Branching::MostEquilibrated,
        Branching::Mom,
        Branching::Jwos,
        Branching::Jwts,
        Branching::Dlcs,
        Branching::Dlis,
    ] {
        solve_instance("random_3sat", branching, true);
    }
}

#[test]
fn missing_input_file_is_reported() {
    let args = Args::new(PathBuf::from("tests/instances/does_not_exist.cnf"), Branching::MostOften, false);
    assert!(satyr::solve(args).is_err());
}
