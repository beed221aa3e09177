use stepfa::{
    validate, ActiveElement, Automaton, ManualScheduler, Simulation, SimulationEvent, StateKind,
    Status, Verdict, DEFAULT_SPEED,
};
use tracing_subscriber::EnvFilter;

/// Upper bound on timer ticks, an epsilon cycle would otherwise never finish.
const MAX_TICKS: usize = 10_000;

/// Words over `{a, b}` starting with `a` followed by any number of `b`s.
fn example_automaton() -> Result<Automaton, Box<dyn std::error::Error>> {
    let mut automaton = Automaton::new(false);
    automaton.add_symbols("a, b");

    let q0 = automaton.create_state();
    let q1 = automaton.create_state();
    automaton.set_kind(q1, StateKind::Final)?;

    let t = automaton.add_transition(q0, q1)?;
    automaton.add_condition(t, "a")?;
    let t = automaton.add_transition(q1, q1)?;
    automaton.add_condition(t, "b")?;

    Ok(automaton)
}

fn describe(automaton: &Automaton, event: SimulationEvent) -> String {
    match event {
        SimulationEvent::ActiveElementChanged(Some(ActiveElement::State(id))) => {
            let name = automaton.state(id).map_or("?", |state| state.name());
            format!("at state {name}")
        }
        SimulationEvent::ActiveElementChanged(Some(ActiveElement::Transition(id))) => {
            let label = automaton
                .transition(id)
                .map(|transition| transition.to_string())
                .unwrap_or_default();
            format!("following {id} [{label}]")
        }
        SimulationEvent::ActiveElementChanged(None) => "cleared".to_string(),
        SimulationEvent::Accepted => Verdict::Accepted.to_string(),
        SimulationEvent::Rejected => Verdict::Rejected.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let word = std::env::args().nth(1).unwrap_or_else(|| "abb".to_string());
    let automaton = example_automaton()?;

    println!("{}", automaton.alphabet());
    println!("{}", automaton.to_dot());

    if let Some(error) = validate(&automaton) {
        println!("{error}");
        return Ok(());
    }

    let mut sim = Simulation::new(&automaton, ManualScheduler::new());
    if let Err(error) = sim.initialize(&word) {
        println!("{error}");
        return Ok(());
    }

    let period = sim.config().speed_to_period(DEFAULT_SPEED);
    tracing::info!(%word, ?period, "simulating");
    sim.start_interval(period)?;

    for _ in 0..MAX_TICKS {
        for event in sim.drain_events().collect::<Vec<_>>() {
            println!("{}", describe(&automaton, event));
        }

        if sim.status() != Status::Running {
            break;
        }

        for handle in sim.scheduler_mut().advance(period) {
            sim.on_timer(handle)?;
        }
    }

    Ok(())
}
