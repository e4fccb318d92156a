use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["test", "lines"])]
struct LineCounter;

impl AocParser for LineCounter {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LineCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for LineCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|line| line.len()).sum::<usize>().to_string())
    }
}

/// Scaffolded day: registered, nothing finished yet
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 0)]
#[aoc(year = 2016, day = 4)]
struct Scaffolded;

impl AocParser for Scaffolded {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

#[test]
fn test_plugins_are_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2016)
        .unwrap()
        .build();

    let info = registry.storage().get_info(2016, 3).unwrap();
    assert_eq!(info.parts, 2);
    let info = registry.storage().get_info(2016, 4).unwrap();
    assert_eq!(info.parts, 0);

    let mut solver = registry.create_solver(2016, 3, "ab\ncde").unwrap();
    assert_eq!(solver.year(), 2016);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.solve(1).unwrap().answer, "2");
    assert_eq!(solver.solve(2).unwrap().answer, "5");
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"lines"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 3));
    assert!(!registry.storage().contains(2016, 4));
    assert!(matches!(
        registry.create_solver(2016, 4, ""),
        Err(SolverError::NotFound(2016, 4))
    ));
}

#[test]
fn test_scaffolded_day_rejects_every_part() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2016, 4, "anything").unwrap();
    assert!(matches!(solver.solve(1), Err(SolveError::PartOutOfRange(1))));
}

#[test]
fn test_registering_plugins_twice_is_a_duplicate() {
    let builder = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2016)
        .unwrap();
    let again = builder.register_solver_plugins(|plugin| plugin.year == 2016 && plugin.day == 3);
    assert!(matches!(
        again,
        Err(aoc_solver::RegistrationError::DuplicateSolver(2016, 3))
    ));
}
