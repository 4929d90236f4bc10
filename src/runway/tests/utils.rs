use crate::plane::Plane;
use crate::runway::queue::RunwayQueue;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub fn plane(flight_number: &str, airline_name: &str) -> Plane {
    Plane::new(flight_number, airline_name).unwrap()
}

pub fn numbered(i: usize) -> Plane {
    plane(&format!("F{i}"), &format!("A{i}"))
}

pub fn store_path(dir: &Path) -> PathBuf {
    dir.join("runway.txt")
}

pub fn queue(dir: &Path, capacity: usize) -> RunwayQueue {
    RunwayQueue::new(store_path(dir), NonZeroUsize::new(capacity).unwrap())
}

pub fn fill(queue: &mut RunwayQueue, planes: impl IntoIterator<Item = Plane>) {
    for plane in planes {
        assert!(queue.enqueue(plane));
    }
}

pub fn write_store(dir: &Path, content: &str) {
    fs::write(store_path(dir), content).unwrap();
}

pub fn read_store(dir: &Path) -> String {
    fs::read_to_string(store_path(dir)).unwrap()
}

pub fn arb_plane() -> impl Strategy<Value = Plane> {
    (
        prop_oneof![Just("LO"), Just("BA"), Just("FR"), Just("W6")],
        1..9999u32,
        prop_oneof![
            Just("LOT"),
            Just("British Airways"),
            Just("Ryanair"),
            Just("Wizz - Air"),
        ],
    )
        .prop_map(|(prefix, number, airline)| plane(&format!("{prefix}{number}"), airline))
}
