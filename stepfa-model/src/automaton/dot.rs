use super::model::{Automaton, State, Transition};

impl Automaton {
    /// Converts the automaton to the [graphviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format.
    pub fn to_dot(&self) -> String {
        let final_dot = format!(
            "node [shape = doublecircle]; {}",
            self.final_states()
                .map(node_id)
                .collect::<Vec<String>>()
                .join(" ")
        );

        let start_dot = match self.initial_state() {
            Some(state) => format!("__start [shape = point];\n\t__start -> {};", node_id(state)),
            None => "// no initial state".to_string(),
        };

        format!(
            "digraph automaton {{\n\
                \trankdir = LR;\n\
            \n\
                \t// final states\n\
                \t{}\n\
                \tnode [shape = circle];\n\
            \n\
                {}\n\
            \n\
                \t{}\n\
            \n\
                {}\n\
            }}",
            final_dot,
            self.label_dot()
                .map(|l| format!("\t{}", l))
                .collect::<Vec<String>>()
                .join("\n"),
            start_dot,
            self.transition_dot()
                .map(|l| format!("\t{}", l))
                .collect::<Vec<String>>()
                .join("\n")
        )
    }

    /// Labels every node with the display name of its state.
    fn label_dot(&self) -> impl Iterator<Item = String> + '_ {
        self.states()
            .iter()
            .map(|state| format!("{} [label = \"{}\"];", node_id(state), escape(state.name())))
    }

    /// Converts the transitions to the dot format and returns an iterator over it.
    fn transition_dot(&self) -> impl Iterator<Item = String> + '_ {
        self.transitions().map(|transition| {
            format!(
                "s{} -> s{} [label = \"{}\"];",
                transition.origin(),
                transition.destination(),
                escape(&edge_label(transition))
            )
        })
    }
}

fn node_id(state: &State) -> String {
    format!("s{}", state.id())
}

fn edge_label(transition: &Transition) -> String {
    if transition.is_epsilon() {
        "\u{03B5}".to_string()
    } else {
        transition.to_string()
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
