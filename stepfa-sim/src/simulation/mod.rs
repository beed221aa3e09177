pub use self::{
    error::{SimulationError, SimulationResult},
    event::{ActiveElement, SimulationEvent, Verdict},
};

use std::time::Duration;

use stepfa_model::{longest_match, tokenize, Automaton, LexError, ModelError, StateId, TransitionId};

use crate::{
    scheduler::{Scheduler, TimerHandle},
    validator, SimulationConfig,
};

mod error;
mod event;

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Not initialized, or reset.
    Idle,
    /// Stepping automatically on a timer.
    Running,
    /// Initialized and waiting for the next step.
    Paused,
    /// Every branch has been explored.
    Completed,
}

/// Element of the depth-first search stack.
///
/// The depth is the byte offset into the word at which the element is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalItem {
    AtState { state: StateId, depth: usize },
    OnTransition { transition: TransitionId, depth: usize },
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Visited a state, branching on every transition matching the next symbol.
    State { state: StateId, depth: usize },
    /// Followed a transition.
    Transition {
        transition: TransitionId,
        depth: usize,
    },
    /// The search stack was empty.
    Exhausted,
}

/// Steppable search for an accepting run of an automaton on a word.
///
/// All nondeterministic branches are explored depth first using an explicit
/// stack, so the search can be paused after any step. The automaton is
/// borrowed for the lifetime of the simulation and can not change during a
/// run.
///
/// The word is accepted as soon as any branch ends the word in a final state.
/// Once accepted, the verdict never changes for the run.
pub struct Simulation<'a, S: Scheduler> {
    automaton: &'a Automaton,
    scheduler: S,
    config: SimulationConfig,
    /// `None` while idle.
    run: Option<Run>,
    /// The single timer driving automatic steps, if any.
    timer: Option<TimerHandle>,
    active: Option<ActiveElement>,
    /// Events not yet drained by the caller.
    events: Vec<SimulationEvent>,
}

/// State of a single run, discarded on reset.
#[derive(Debug)]
struct Run {
    word: String,
    stack: Vec<TraversalItem>,
    reached_acceptance: bool,
    last_depth: usize,
    verdict: Option<Verdict>,
    /// Set once a step found the stack empty.
    completed: bool,
}

impl Run {
    fn new(word: &str, initial_state: StateId) -> Self {
        Self {
            word: word.to_string(),
            stack: Vec::from([TraversalItem::AtState {
                state: initial_state,
                depth: 0,
            }]),
            reached_acceptance: false,
            last_depth: 0,
            verdict: None,
            completed: false,
        }
    }

    /// Records the verdict and returns it if it has to be reported. Acceptance
    /// is reported once, rejection only if nothing was reported before.
    fn report(&mut self, verdict: Verdict) -> Option<Verdict> {
        match verdict {
            Verdict::Accepted => {
                self.reached_acceptance = true;
                if self.verdict == Some(Verdict::Accepted) {
                    return None;
                }
            }
            Verdict::Rejected => {
                if self.reached_acceptance || self.verdict.is_some() {
                    return None;
                }
            }
        }

        self.verdict = Some(verdict);
        Some(verdict)
    }
}

impl<'a, S: Scheduler> Simulation<'a, S> {
    /// Creates an idle simulation using the default [`SimulationConfig`].
    pub fn new(automaton: &'a Automaton, scheduler: S) -> Self {
        Self::with_config(automaton, scheduler, SimulationConfig::default())
    }

    /// Creates an idle simulation.
    pub fn with_config(automaton: &'a Automaton, scheduler: S, config: SimulationConfig) -> Self {
        Self {
            automaton,
            scheduler,
            config,
            run: None,
            timer: None,
            active: None,
            events: Vec::new(),
        }
    }

    /// Validates the automaton and the word, then initializes the simulation.
    pub fn start(&mut self, word: &str) -> SimulationResult<()> {
        if let Some(error) = validator::validate(self.automaton) {
            return Err(error.into());
        }

        self.initialize(word)
    }

    /// Prepares a new run on `word`, starting at the initial state.
    ///
    /// Any previous run is discarded. The word has to be expressible with the
    /// alphabet and the automaton needs an initial state.
    pub fn initialize(&mut self, word: &str) -> SimulationResult<()> {
        tokenize(self.automaton.alphabet(), word)?;
        let initial_state = self
            .automaton
            .initial_state()
            .ok_or(SimulationError::NoInitialState)?
            .id();

        self.stop_interval();
        self.run = Some(Run::new(word, initial_state));
        self.set_active(Some(ActiveElement::State(initial_state)));

        tracing::info!(word, initial_state, "initialized simulation");
        Ok(())
    }

    /// Advances the search by one step.
    ///
    /// Automatic stepping is stopped first, so that only one caller ever
    /// advances the search.
    pub fn step(&mut self) -> SimulationResult<Step> {
        if self.run.is_none() {
            return Err(SimulationError::NotInitialized);
        }

        self.stop_interval();
        self.advance()
    }

    /// Steps until a verdict is known, the search is exhausted or `max_steps`
    /// steps were taken. Returns the verdict, if any.
    ///
    /// An automaton with a cycle of epsilon transitions can keep the search
    /// busy forever, hence the limit.
    pub fn run(&mut self, max_steps: usize) -> SimulationResult<Option<Verdict>> {
        for _ in 0..max_steps {
            if self.step()? == Step::Exhausted || self.verdict().is_some() {
                break;
            }
        }

        Ok(self.verdict())
    }

    /// Takes one step right away, then keeps stepping every `period` until
    /// [`stop_interval`](Self::stop_interval) is called or the search is
    /// exhausted.
    ///
    /// The period is raised to the configured minimum. A timer that was
    /// already running is replaced.
    pub fn start_interval(&mut self, period: Duration) -> SimulationResult<Step> {
        if self.run.is_none() {
            return Err(SimulationError::NotInitialized);
        }

        self.stop_interval();
        let step = self.advance()?;

        if step != Step::Exhausted {
            let period = self.config.clamp_period(period);
            self.timer = Some(self.scheduler.schedule_repeating(period));
            tracing::info!(?period, "started automatic stepping");
        }

        Ok(step)
    }

    /// Starts automatic stepping at a speed between 0 and 100.
    pub fn start_at_speed(&mut self, speed: u8) -> SimulationResult<Step> {
        self.start_interval(self.config.speed_to_period(speed))
    }

    /// Stops automatic stepping. Does nothing when not running.
    pub fn stop_interval(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            tracing::info!("stopped automatic stepping");
        }
    }

    /// Changes the period of automatic stepping without touching the search.
    /// Does nothing when not running.
    pub fn update_interval(&mut self, period: Duration) {
        let Some(handle) = self.timer.take() else {
            return;
        };

        self.scheduler.cancel(handle);
        let period = self.config.clamp_period(period);
        self.timer = Some(self.scheduler.schedule_repeating(period));
        tracing::debug!(?period, "updated step period");
    }

    /// Called by the host when a timer fires.
    ///
    /// Timers that do not belong to the current run are ignored and `None` is
    /// returned. On an error automatic stepping is stopped.
    pub fn on_timer(&mut self, handle: TimerHandle) -> SimulationResult<Option<Step>> {
        if self.timer != Some(handle) {
            tracing::trace!(?handle, "ignored stale timer");
            return Ok(None);
        }

        match self.advance() {
            Ok(step) => Ok(Some(step)),
            Err(err) => {
                self.stop_interval();
                Err(err)
            }
        }
    }

    /// Stops automatic stepping, clears the highlight and discards the run. A
    /// new run has to be initialized afterwards.
    pub fn reset(&mut self) {
        self.stop_interval();
        self.run = None;

        if self.active.is_some() {
            self.set_active(None);
        }
    }

    /// Whether the search still has elements to explore.
    pub fn has_remaining_elements(&self) -> bool {
        self.run.as_ref().is_some_and(|run| !run.stack.is_empty())
    }

    /// Whether the simulation is stepping automatically.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn status(&self) -> Status {
        match &self.run {
            None => Status::Idle,
            Some(run) if run.completed => Status::Completed,
            Some(_) if self.timer.is_some() => Status::Running,
            Some(_) => Status::Paused,
        }
    }

    /// The verdict reported for the current run, if any.
    pub fn verdict(&self) -> Option<Verdict> {
        self.run.as_ref().and_then(|run| run.verdict)
    }

    pub fn reached_acceptance(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.reached_acceptance)
    }

    /// The currently highlighted element.
    pub fn active_element(&self) -> Option<ActiveElement> {
        self.active
    }

    /// The word of the current run.
    pub fn word(&self) -> Option<&str> {
        self.run.as_ref().map(|run| run.word.as_str())
    }

    /// Depth of the last visited state.
    pub fn last_depth(&self) -> Option<usize> {
        self.run.as_ref().map(|run| run.last_depth)
    }

    /// Elements still to be explored. The last element is explored next.
    pub fn pending(&self) -> &[TraversalItem] {
        self.run
            .as_ref()
            .map(|run| run.stack.as_slice())
            .unwrap_or_default()
    }

    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Takes the events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SimulationEvent> + '_ {
        self.events.drain(..)
    }

    /// A single step of the search. Either the step is applied completely or,
    /// on an error, nothing changes.
    fn advance(&mut self) -> SimulationResult<Step> {
        let automaton = self.automaton;
        let run = self.run.as_mut().ok_or(SimulationError::NotInitialized)?;

        let Some(item) = run.stack.pop() else {
            run.completed = true;
            let verdict = run.report(Verdict::Rejected);

            tracing::debug!("search exhausted");
            self.stop_interval();
            self.emit_verdict(verdict);
            return Ok(Step::Exhausted);
        };

        match item {
            TraversalItem::AtState { state, depth } => {
                let Some(current) = automaton.state(state) else {
                    run.stack.push(item);
                    return Err(ModelError::UnknownState(state).into());
                };

                let next = if depth >= run.word.len() {
                    None
                } else {
                    match longest_match(automaton.alphabet(), &run.word, depth) {
                        Some(next) => Some(next),
                        None => {
                            run.stack.push(item);
                            return Err(LexError { pos: depth }.into());
                        }
                    }
                };

                tracing::debug!(state, depth, "visiting state");
                run.last_depth = depth;

                let verdict = match next {
                    // end of the word
                    None if current.kind().is_final() => run.report(Verdict::Accepted),
                    None if run.stack.is_empty() => run.report(Verdict::Rejected),
                    None => None,
                    Some((symbol, len)) => {
                        // Pushed in reverse so the first declared transition
                        // is explored first.
                        for transition in current
                            .transitions()
                            .iter()
                            .rev()
                            .filter(|transition| transition.accepts(symbol.as_str()))
                        {
                            let depth = if transition.is_epsilon() {
                                depth
                            } else {
                                depth + len
                            };

                            tracing::trace!(transition = %transition.id(), depth, "branching");
                            run.stack.push(TraversalItem::OnTransition {
                                transition: transition.id(),
                                depth,
                            });
                        }
                        None
                    }
                };

                self.set_active(Some(ActiveElement::State(state)));
                self.emit_verdict(verdict);
                Ok(Step::State { state, depth })
            }
            TraversalItem::OnTransition { transition, depth } => {
                tracing::debug!(%transition, depth, "following transition");
                run.stack.push(TraversalItem::AtState {
                    state: transition.destination,
                    depth,
                });

                self.set_active(Some(ActiveElement::Transition(transition)));
                Ok(Step::Transition { transition, depth })
            }
        }
    }

    fn set_active(&mut self, active: Option<ActiveElement>) {
        self.active = active;
        self.events.push(SimulationEvent::ActiveElementChanged(active));
    }

    fn emit_verdict(&mut self, verdict: Option<Verdict>) {
        if let Some(verdict) = verdict {
            tracing::info!(%verdict, "simulation verdict");
            self.events.push(verdict.into());
        }
    }
}

impl<S: Scheduler> Drop for Simulation<'_, S> {
    fn drop(&mut self) {
        self.stop_interval();
    }
}

#[cfg(test)]
mod tests {
    mod proptest;

    use super::{
        ActiveElement, Simulation, SimulationError, SimulationEvent, Status, Step, TraversalItem,
        Verdict,
    };
    use crate::{scheduler::ManualScheduler, SimulationConfig};
    use std::time::Duration;
    use stepfa_model::{Automaton, LexError, StateKind, TransitionId};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn t(origin: usize, destination: usize) -> TransitionId {
        TransitionId {
            origin,
            destination,
        }
    }

    /// `q0 -a-> q1`, `q1 -b-> q1` with `q1` final.
    fn scenario_a() -> Result<Automaton, Box<dyn std::error::Error>> {
        let mut automaton = Automaton::new(false);
        automaton.add_symbols("a, b");
        let q0 = automaton.create_state();
        let q1 = automaton.create_state();
        automaton.set_kind(q1, StateKind::Final)?;

        let t0 = automaton.add_transition(q0, q1)?;
        automaton.add_condition(t0, "a")?;
        let t1 = automaton.add_transition(q1, q1)?;
        automaton.add_condition(t1, "b")?;

        Ok(automaton)
    }

    /// `q0` branches on `a` to `q1` (dead end) and to `q2` (final), and has an
    /// epsilon transition to `q3` which accepts `a` too.
    fn branching() -> Result<Automaton, Box<dyn std::error::Error>> {
        let mut automaton = Automaton::new(false);
        automaton.add_symbols("a");
        let q0 = automaton.create_state();
        let q1 = automaton.create_state();
        let q2 = automaton.create_state();
        let q3 = automaton.create_state();
        automaton.set_kind(q2, StateKind::Final)?;
        automaton.set_kind(q3, StateKind::Final)?;

        let t = automaton.add_transition(q0, q1)?;
        automaton.add_condition(t, "a")?;
        let t = automaton.add_transition(q0, q2)?;
        automaton.add_condition(t, "a")?;
        automaton.add_transition(q0, q3)?;
        let t = automaton.add_transition(q3, q3)?;
        automaton.add_condition(t, "a")?;

        Ok(automaton)
    }

    #[test]
    fn steps_through_an_accepted_word() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("ab")?;

        assert_eq!(sim.status(), Status::Paused);
        assert_eq!(sim.active_element(), Some(ActiveElement::State(0)));

        let steps = (0..6).map(|_| sim.step()).collect::<Result<Vec<_>, _>>()?;
        assert_eq!(
            steps,
            [
                Step::State { state: 0, depth: 0 },
                Step::Transition {
                    transition: t(0, 1),
                    depth: 1
                },
                Step::State { state: 1, depth: 1 },
                Step::Transition {
                    transition: t(1, 1),
                    depth: 2
                },
                Step::State { state: 1, depth: 2 },
                Step::Exhausted,
            ]
        );

        assert_eq!(sim.verdict(), Some(Verdict::Accepted));
        assert_eq!(sim.status(), Status::Completed);
        assert_eq!(sim.last_depth(), Some(2));

        let verdicts = sim
            .drain_events()
            .filter(|e| !matches!(e, SimulationEvent::ActiveElementChanged(_)))
            .collect::<Vec<_>>();
        assert_eq!(verdicts, [SimulationEvent::Accepted]);

        Ok(())
    }

    #[test]
    fn rejects_when_the_search_is_exhausted() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("ba")?;

        assert_eq!(sim.step()?, Step::State { state: 0, depth: 0 });
        assert!(!sim.has_remaining_elements());
        assert_eq!(sim.verdict(), None);

        assert_eq!(sim.step()?, Step::Exhausted);
        assert_eq!(sim.verdict(), Some(Verdict::Rejected));

        // Stepping an exhausted search does not report again.
        sim.drain_events().for_each(drop);
        assert_eq!(sim.step()?, Step::Exhausted);
        assert_eq!(sim.drain_events().count(), 0);

        Ok(())
    }

    #[test]
    fn rejects_at_the_end_of_the_word_in_a_normal_state() -> TestResult {
        let mut automaton = scenario_a()?;
        automaton.set_kind(1, StateKind::Normal)?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("a")?;

        sim.step()?;
        sim.step()?;
        assert_eq!(sim.step()?, Step::State { state: 1, depth: 1 });
        assert_eq!(sim.verdict(), Some(Verdict::Rejected));
        assert_eq!(sim.step()?, Step::Exhausted);

        let verdicts = sim
            .drain_events()
            .filter(|e| !matches!(e, SimulationEvent::ActiveElementChanged(_)))
            .collect::<Vec<_>>();
        assert_eq!(verdicts, [SimulationEvent::Rejected]);

        Ok(())
    }

    #[test]
    fn empty_word_on_ambivalent_state() -> TestResult {
        let mut automaton = scenario_a()?;
        automaton.set_kind(0, StateKind::Ambivalent)?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("")?;

        assert_eq!(sim.step()?, Step::State { state: 0, depth: 0 });
        assert_eq!(sim.verdict(), Some(Verdict::Accepted));

        Ok(())
    }

    #[test]
    fn explores_branches_in_declaration_order() -> TestResult {
        let automaton = branching()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("a")?;

        sim.step()?;
        assert_eq!(
            sim.pending(),
            [
                // epsilon transitions do not consume input
                TraversalItem::OnTransition {
                    transition: t(0, 3),
                    depth: 0
                },
                TraversalItem::OnTransition {
                    transition: t(0, 2),
                    depth: 1
                },
                TraversalItem::OnTransition {
                    transition: t(0, 1),
                    depth: 1
                },
            ]
        );

        // q0 -> q1 is a dead end
        assert_eq!(
            sim.step()?,
            Step::Transition {
                transition: t(0, 1),
                depth: 1
            }
        );
        assert_eq!(sim.step()?, Step::State { state: 1, depth: 1 });
        assert_eq!(sim.verdict(), None);

        sim.step()?;
        assert_eq!(sim.step()?, Step::State { state: 2, depth: 1 });
        assert_eq!(sim.verdict(), Some(Verdict::Accepted));

        Ok(())
    }

    #[test]
    fn acceptance_is_never_downgraded() -> TestResult {
        let automaton = branching()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("a")?;

        while sim.step()? != Step::Exhausted {
            if sim.reached_acceptance() {
                assert_eq!(sim.verdict(), Some(Verdict::Accepted));
            }
        }

        let verdicts = sim
            .drain_events()
            .filter(|e| !matches!(e, SimulationEvent::ActiveElementChanged(_)))
            .collect::<Vec<_>>();
        // q2 and q3 both accept, the verdict is reported once.
        assert_eq!(verdicts, [SimulationEvent::Accepted]);

        Ok(())
    }

    #[test]
    fn run_stops_at_the_verdict() -> TestResult {
        let automaton = branching()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());

        sim.initialize("a")?;
        assert_eq!(sim.run(usize::MAX)?, Some(Verdict::Accepted));
        assert!(sim.has_remaining_elements());

        sim.initialize("")?;
        assert_eq!(sim.run(usize::MAX)?, Some(Verdict::Rejected));

        sim.initialize("a")?;
        assert_eq!(sim.run(1)?, None);

        Ok(())
    }

    #[test]
    fn automatic_stepping() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("ab")?;

        // The first step is taken right away.
        assert_eq!(
            sim.start_interval(Duration::from_millis(100))?,
            Step::State { state: 0, depth: 0 }
        );
        assert!(sim.is_running());
        assert_eq!(sim.status(), Status::Running);

        let fired = sim.scheduler_mut().advance(Duration::from_millis(250));
        assert_eq!(fired.len(), 2);
        for handle in fired {
            assert!(sim.on_timer(handle)?.is_some());
        }
        assert_eq!(sim.last_depth(), Some(1));

        let fired = sim.scheduler_mut().advance(Duration::from_secs(1));
        for handle in fired {
            sim.on_timer(handle)?;
        }

        assert_eq!(sim.verdict(), Some(Verdict::Accepted));
        assert_eq!(sim.status(), Status::Completed);
        assert!(!sim.is_running());
        assert_eq!(sim.scheduler().active_timers(), 0);

        Ok(())
    }

    #[test]
    fn manual_step_cancels_automatic_stepping() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("ab")?;
        sim.start_interval(Duration::from_millis(100))?;

        let fired = sim.scheduler_mut().advance(Duration::from_millis(100));
        sim.step()?;

        assert!(!sim.is_running());
        assert_eq!(sim.status(), Status::Paused);
        assert_eq!(sim.scheduler().active_timers(), 0);
        // The timer fired before the manual step is stale now.
        for handle in fired {
            assert_eq!(sim.on_timer(handle)?, None);
        }

        // Resume
        sim.start_interval(Duration::from_millis(100))?;
        assert_eq!(sim.scheduler().active_timers(), 1);

        Ok(())
    }

    #[test]
    fn period_is_clamped_and_updated() -> TestResult {
        let automaton = scenario_a()?;
        let config = SimulationConfig::default().with_min_period(Duration::from_millis(20));
        let mut sim = Simulation::with_config(&automaton, ManualScheduler::new(), config);
        sim.initialize("abbbb")?;

        sim.start_interval(Duration::from_millis(1))?;
        let handle = sim.scheduler_mut().advance(Duration::from_millis(20));
        assert_eq!(handle.len(), 1);

        sim.update_interval(Duration::from_millis(500));
        assert_eq!(sim.scheduler().active_timers(), 1);
        let depth = sim.last_depth();
        assert!(sim
            .scheduler_mut()
            .advance(Duration::from_millis(499))
            .is_empty());
        assert_eq!(sim.last_depth(), depth);
        assert!(sim.is_running());

        sim.stop_interval();
        sim.stop_interval();
        sim.update_interval(Duration::from_millis(10));
        assert!(!sim.is_running());
        assert_eq!(sim.scheduler().active_timers(), 0);

        Ok(())
    }

    #[test]
    fn starting_twice_keeps_a_single_timer() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("abbb")?;

        sim.start_interval(Duration::from_millis(100))?;
        sim.start_at_speed(50)?;

        assert_eq!(sim.scheduler().active_timers(), 1);

        Ok(())
    }

    #[test]
    fn reset() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());
        sim.initialize("ab")?;
        sim.start_interval(Duration::from_millis(100))?;
        sim.drain_events().for_each(drop);

        sim.reset();
        sim.reset();

        assert_eq!(sim.status(), Status::Idle);
        assert_eq!(sim.active_element(), None);
        assert_eq!(sim.scheduler().active_timers(), 0);
        assert!(!sim.has_remaining_elements());
        assert_eq!(
            sim.drain_events().collect::<Vec<_>>(),
            [SimulationEvent::ActiveElementChanged(None)]
        );
        assert_eq!(sim.step(), Err(SimulationError::NotInitialized));

        Ok(())
    }

    #[test]
    fn preconditions() -> TestResult {
        let automaton = scenario_a()?;
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());

        assert_eq!(sim.step(), Err(SimulationError::NotInitialized));
        assert_eq!(
            sim.start_interval(Duration::from_millis(100)),
            Err(SimulationError::NotInitialized)
        );
        assert_eq!(
            sim.initialize("abc"),
            Err(SimulationError::Word(LexError { pos: 2 }))
        );
        assert_eq!(sim.status(), Status::Idle);

        let empty = Automaton::new(false);
        let mut sim = Simulation::new(&empty, ManualScheduler::new());
        assert_eq!(sim.initialize(""), Err(SimulationError::NoInitialState));

        Ok(())
    }

    #[test]
    fn start_validates_the_automaton() -> TestResult {
        let mut automaton = scenario_a()?;
        automaton.set_deterministic(true);
        let mut sim = Simulation::new(&automaton, ManualScheduler::new());

        assert!(matches!(
            sim.start("ab"),
            Err(SimulationError::Structural(error)) if error.culprit == Some(0)
        ));
        assert_eq!(sim.status(), Status::Idle);

        Ok(())
    }

    #[test]
    fn dropping_cancels_the_timer() -> TestResult {
        let automaton = scenario_a()?;
        let mut scheduler = ManualScheduler::new();

        {
            let mut sim = Simulation::new(&automaton, &mut scheduler);
            sim.initialize("abb")?;
            sim.start_interval(Duration::from_millis(100))?;
        }

        assert_eq!(scheduler.active_timers(), 0);

        Ok(())
    }
}
