use countervec::{Counter, CounterVec, Position, VecCursor};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The protocol being mirrored, on std containers first.
    let values = vec![100_u32, 200, 300];
    let mut total = 0;
    for value in &values {
        total += value;
    }
    assert_eq!(total, 600);

    let labels = vec!["A".to_string(), "B".to_string()];
    let mut joined = String::new();
    for label in labels.iter().rev() {
        joined.push_str(label);
    }
    assert_eq!(joined, "BA");

    let mut vec1 = CounterVec::new();
    vec1.push(Counter::new("A", 1));
    vec1.push(Counter::new("B", 1));

    let mut vec2 = CounterVec::new();
    vec2.push_new("D", 1);
    vec2.push_new("C", 2);
    vec2.push_new("E", 1);

    // Forward pass over both vecs.
    let mut forward = String::new();
    for counter in &vec1 {
        forward.push_str(&format!("{counter},"));
    }
    for counter in &vec2 {
        forward.push_str(&format!("{counter},"));
    }
    assert_eq!(forward, "A(1),B(1),D(1),C(2),E(1),");
    info!("forward: {forward}");

    // Explicit cursor loop with a one-slot look-ahead.
    let mut cursor = vec1.iter();
    let end = cursor.end();
    let mut ahead = String::new();
    while cursor != end {
        if let Some(next) = cursor.peek(1) {
            ahead.push_str(next.node());
        }
        cursor.advance();
    }
    assert_eq!(ahead, "B");

    // Positioned reads.
    let mut cursor = vec2.iter();
    assert!(cursor.get(Position::FIRST).map(Counter::node) == Some("D"));
    assert!(cursor.get_(2).map(Counter::node) == Some("E"));
    assert!(cursor.get_(3).is_none());

    // Unchecked neighbor read, one slot past the first counter.
    let cursor = vec2.iter();
    assert!(unsafe { cursor.add(1) }.node() == "C");

    // Reverse pass over both vecs.
    let mut reverse = String::new();
    let mut cursor = vec1.rev_iter();
    while cursor != Position::REVERSE_END {
        if let Some(counter) = cursor.current() {
            reverse.push_str(&format!("{counter},"));
        }
        cursor.advance();
    }
    let mut cursor = vec2.rev_iter();
    while cursor != Position::REVERSE_END {
        if let Some(counter) = cursor.current() {
            reverse.push_str(&format!("{counter},"));
        }
        cursor.advance();
    }
    assert_eq!(reverse, "B(1),A(1),E(1),C(2),D(1),");
    info!("reverse: {reverse}");

    // Counters only change by replacement, through a mutable cursor.
    let mut cursor = vec2.iter_mut();
    cursor.set_position_(1);
    if let Some(counter) = cursor.current() {
        *counter = Counter::new(counter.node(), counter.count() + 1);
    }
    assert!(vec2.get(1).map(Counter::count) == Some(3));

    Ok(())
}
