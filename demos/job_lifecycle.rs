//! Job Lifecycle
//!
//! This example drives a job through its lifecycle with enter/exit
//! callbacks that receive a per-call context.
//!
//! Key concepts:
//! - Declaring states and events with the enum macros
//! - Enter/exit callbacks with a caller-defined context
//! - Strict mode rejecting an event the current state does not handle
//! - Transition history
//!
//! Run with: cargo run --example job_lifecycle

use statecraft::{event_enum, state_enum, MachineBuilder};

state_enum! {
    enum JobState {
        Init,
        Running,
        Paused,
        Completed,
    }
    final: [Completed]
}

event_enum! {
    enum JobEvent {
        Run,
        Pause,
        End,
    }
}

/// Who asked for the change.
#[derive(Default)]
struct Request {
    operator: &'static str,
}

fn main() {
    println!("=== Job Lifecycle Example ===\n");

    let mut machine = MachineBuilder::<JobState, JobEvent, Request>::new(JobState::Init)
        .add_transition(JobState::Init, JobEvent::Run, JobState::Running)
        .add_transition(JobState::Running, JobEvent::Pause, JobState::Paused)
        .add_transition(JobState::Running, JobEvent::End, JobState::Completed)
        .add_transition(JobState::Paused, JobEvent::Run, JobState::Running)
        .on_enter(JobState::Running, |req: &Request| {
            println!("  -> running (requested by {})", req.operator)
        })
        .on_exit(JobState::Running, |req: &Request| {
            println!("  <- leaving running (requested by {})", req.operator)
        })
        .on_enter(JobState::Completed, |_| println!("  job complete"))
        .record_history(true)
        .build();

    println!("Initial state: {:?}\n", machine.state());

    let steps = [
        (JobEvent::Run, "alice"),
        (JobEvent::Pause, "bob"),
        (JobEvent::Run, "alice"),
        (JobEvent::End, "scheduler"),
    ];

    for (event, operator) in steps {
        println!("apply {event:?}");
        if let Err(err) = machine.apply_with(event, &Request { operator }) {
            println!("  error: {err}");
        }
    }

    println!("\nRejected in strict mode:");
    if let Err(err) = machine.apply(JobEvent::Pause) {
        println!("  {err}");
    }

    println!("\nPath taken: {:?}", machine.history().get_path());
    println!("Is in final state: {}", machine.is_final());

    println!("\n=== Example Complete ===");
}
