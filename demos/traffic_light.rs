//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic state machine in lenient mode.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Self-loops still run exit then enter callbacks
//! - Lenient mode ignoring events a state does not handle
//! - Graph validation before building
//!
//! Run with: cargo run --example traffic_light

use statecraft::{event_enum, state_enum, MachineBuilder};
use stillwater::validation::Validation;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

event_enum! {
    enum Controller {
        Tick,
        Hold,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let builder = MachineBuilder::<TrafficLight, Controller>::new(TrafficLight::Red)
        .add_transition(TrafficLight::Red, Controller::Tick, TrafficLight::Green)
        .add_transition(TrafficLight::Green, Controller::Tick, TrafficLight::Yellow)
        .add_transition(TrafficLight::Yellow, Controller::Tick, TrafficLight::Red)
        .add_transition(TrafficLight::Red, Controller::Hold, TrafficLight::Red)
        .on_exit(TrafficLight::Red, |_| println!("  red off"))
        .on_enter(TrafficLight::Red, |_| println!("  red on"))
        .strict_transitions(false);

    match builder.validate() {
        Validation::Success(_) => println!("Graph is well formed\n"),
        Validation::Failure(issues) => {
            for issue in issues.iter() {
                println!("Graph issue: {issue}");
            }
        }
    }

    let mut machine = builder.build();
    println!("Initial state: {:?}\n", machine.state());

    let events = [
        Controller::Hold,
        Controller::Tick,
        Controller::Hold,
        Controller::Tick,
        Controller::Tick,
    ];

    for event in events {
        println!("{event:?}");
        let before = *machine.state();
        machine
            .apply(event)
            .expect("lenient machines ignore unknown events");
        if before == *machine.state() && !machine.can_apply(&event) {
            println!("  ignored in {before:?}");
        } else {
            println!("  now {:?}", machine.state());
        }
    }

    println!("\nThis is a cyclic state machine - the sequence repeats:");
    println!("  Red -> Green -> Yellow -> Red -> Green -> ...");

    println!("\n=== Example Complete ===");
}
