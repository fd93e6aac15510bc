use countervec::{Counter, CounterVec, Error, Position, Result};

fn node_counters() -> CounterVec {
    let mut vec = CounterVec::new();
    vec.push(Counter::new("A", 1));
    vec.push(Counter::new("B", 1));
    vec
}

#[test]
fn test_push_and_len() {
    let mut vec = CounterVec::new();
    assert!(vec.is_empty());
    assert_eq!(vec.len(), 0);

    vec.push(Counter::new("A", 1));
    vec.push_new("B", 2);

    assert!(!vec.is_empty());
    assert_eq!(vec.len(), 2);
}

#[test]
fn test_push_new_matches_push() {
    let mut by_value = CounterVec::new();
    by_value.push(Counter::new("A", 1));

    let mut by_parts = CounterVec::new();
    by_parts.push_new("A", 1);

    assert_eq!(by_value, by_parts);
}

#[test]
fn test_get() {
    let vec = node_counters();

    assert_eq!(vec.get(0).map(Counter::node), Some("A"));
    assert_eq!(vec.get(1).map(Counter::node), Some("B"));
    assert!(vec.get(2).is_none());

    assert_eq!(unsafe { vec.get_unchecked(1) }, &Counter::new("B", 1));
}

#[test]
fn test_get_mut_replaces() {
    let mut vec = node_counters();

    if let Some(counter) = vec.get_mut(0) {
        *counter = Counter::new("A", 7);
    }

    assert_eq!(vec.get(0).map(Counter::count), Some(7));
}

#[test]
fn test_nodes() {
    let vec = node_counters();
    assert_eq!(vec.nodes(), vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_counters_slice() {
    let vec = node_counters();
    assert_eq!(vec.counters(), &[Counter::new("A", 1), Counter::new("B", 1)]);
}

#[test]
fn test_last_and_back() {
    let mut vec = node_counters();

    assert_eq!(vec.last().map(Counter::node), Some("B"));
    assert_eq!(unsafe { vec.back_unchecked() }.node(), "B");

    if let Some(counter) = vec.last_mut() {
        *counter = Counter::new("B", 9);
    }
    assert_eq!(unsafe { vec.back_unchecked_mut() }.count(), 9);

    let empty = CounterVec::new();
    assert!(empty.last().is_none());
}

#[test]
fn test_capacity() {
    let vec = CounterVec::with_capacity(8);
    assert!(vec.capacity() >= 8);
    assert!(vec.is_empty());
}

#[test]
fn test_conversions() {
    let counters = vec![Counter::new("A", 1), Counter::new("B", 2)];

    let from_vec = CounterVec::from(counters.clone());
    let collected: CounterVec = counters.clone().into_iter().collect();
    assert_eq!(from_vec, collected);

    let mut extended = CounterVec::new();
    extended.extend(counters.clone());
    assert_eq!(extended, from_vec);

    let back: Vec<Counter> = from_vec.into_iter().collect();
    assert_eq!(back, counters);
}

#[test]
fn test_positions() -> Result<()> {
    let vec = node_counters();

    assert_eq!(vec.end_position(), Position::from(2_usize));
    assert_eq!(vec.back_position(), Position::new(1));
    assert_eq!(vec.back_position().to_usize()?, 1);

    let empty = CounterVec::new();
    assert_eq!(empty.end_position(), Position::FIRST);
    assert_eq!(empty.back_position(), Position::REVERSE_END);

    Ok(())
}

#[test]
fn test_negative_position_has_no_index() {
    let err = Position::REVERSE_END.to_usize().unwrap_err();
    assert!(matches!(err, Error::NegativePosition(Position::REVERSE_END)));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn test_position_arithmetic() {
    assert_eq!(Position::FIRST + 3_usize, Position::new(3));
    assert_eq!(Position::new(3) - 4_usize, Position::REVERSE_END);
    assert_eq!(Position::FIRST.decremented(), Position::REVERSE_END);
    assert_eq!(Position::REVERSE_END.incremented(), Position::FIRST);
    assert_eq!(Position::from(5_usize).unwrap_to_usize(), 5);
}

#[test]
fn test_display() {
    assert_eq!(Counter::new("A", 1).to_string(), "A(1)");
    assert_eq!(Position::REVERSE_END.to_string(), "-1");
}

#[test]
fn test_serde_round_trip() -> Result<(), serde_json::Error> {
    let vec = node_counters();

    let json = serde_json::to_string(&vec)?;
    let back: CounterVec = serde_json::from_str(&json)?;
    assert_eq!(back, vec);

    let counter: Counter = serde_json::from_str(r#"{"node":"C","count":2}"#)?;
    assert_eq!(counter, Counter::new("C", 2));

    Ok(())
}
