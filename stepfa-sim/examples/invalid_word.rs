use stepfa_model::{Automaton, StateKind};
use stepfa_sim::{ManualScheduler, Simulation, Verdict};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut automaton = Automaton::new(false);
    automaton.add_symbols("ab, c");

    let q0 = automaton.create_state();
    let q1 = automaton.create_state();
    automaton.set_kind(q1, StateKind::Final)?;
    let t = automaton.add_transition(q0, q1)?;
    automaton.add_conditions(t, "ab, c")?;

    let mut sim = Simulation::new(&automaton, ManualScheduler::new());

    // `b` alone is not a symbol of the alphabet
    if let Err(error) = sim.start("cb") {
        println!("{error}");
    }

    sim.start("ab")?;
    let verdict = sim.run(100)?;
    println!("{:?}", verdict.map(|verdict| verdict.to_string()));
    assert_eq!(verdict, Some(Verdict::Accepted));

    Ok(())
}
