//! Tests for the structured events emitted by OrderedMap queries.

use extended_map::ordered::OrderedMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// A writer that appends everything into a shared buffer.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|guard| guard.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut guard) = self.0.lock() {
            guard.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(filter: &str, action: F) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

#[test]
fn test_empty_reduce_emits_debug_event() {
    let output = capture("extended_map=debug", || {
        let empty: OrderedMap<&str, i32> = OrderedMap::new();
        let _ = empty.reduce(|accumulator, value| accumulator + value);
    });

    assert!(output.contains("reduce called on an empty map without a seed"));
    assert!(output.contains("method=\"reduce\""));
}

#[test]
fn test_successful_reduce_is_silent() {
    let output = capture("extended_map=trace", || {
        let map = OrderedMap::from([("a", 1), ("b", 2)]);
        let _ = map.reduce(|accumulator, value| accumulator + value);
    });

    assert!(output.is_empty());
}

#[cfg(feature = "random")]
#[test]
fn test_random_emits_trace_event_with_position() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let output = capture("extended_map=trace", || {
        let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let mut rng = StdRng::seed_from_u64(3);
        let _ = map.random_with(&mut rng);
    });

    assert!(output.contains("sampled random position"));
    assert!(output.contains("length=3"));
}

#[cfg(feature = "random")]
#[test]
fn test_random_trace_is_filtered_at_debug_level() {
    let output = capture("extended_map=debug", || {
        let map = OrderedMap::from([("a", 1)]);
        let _ = map.random();
    });

    assert!(!output.contains("sampled random position"));
}
