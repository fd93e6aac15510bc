use countervec::{Counter, CounterVec, Position, Result, VecCursor};

fn small_vec() -> CounterVec {
    let mut vec = CounterVec::new();
    vec.push(Counter::new("A", 1));
    vec.push(Counter::new("B", 1));
    vec
}

fn big_vec() -> CounterVec {
    let mut vec = CounterVec::new();
    vec.push_new("D", 1);
    vec.push_new("C", 2);
    vec.push_new("E", 1);
    vec
}

#[test]
fn test_forward_order() {
    let vec = big_vec();
    let nodes: Vec<&str> = vec.iter().map(Counter::node).collect();
    assert_eq!(nodes, ["D", "C", "E"]);
}

#[test]
fn test_reverse_order() {
    let mut vec = big_vec();

    let mut nodes = Vec::new();
    let mut cursor = vec.rev_iter();
    while cursor != Position::REVERSE_END {
        if let Some(counter) = cursor.current() {
            nodes.push(counter.node().to_string());
        }
        cursor.advance();
    }

    assert_eq!(nodes, ["E", "C", "D"]);
}

#[test]
fn test_advance_post_matches_advance() {
    let vec = big_vec();

    let mut pre = vec.iter();
    let mut post = vec.iter();

    let advanced = pre.advance();
    let post_advanced = post.advance_post();

    // Both forms return the stepped cursor, never the starting one.
    assert!(advanced == post_advanced);
    assert_eq!(advanced.current().map(Counter::node), Some("C"));
    assert_eq!(post_advanced.current().map(Counter::node), Some("C"));
    assert!(pre == post);
    assert!(pre == Position::new(1));
}

#[test]
fn test_mut_cursor_advance_post_also_steps_first() {
    let mut vec = big_vec();

    let mut cursor = vec.iter_mut();
    let node = cursor
        .advance_post()
        .current()
        .map(|counter| counter.node().to_string());
    assert_eq!(node, Some("C".to_string()));
    assert!(cursor == Position::new(1));
}

#[test]
fn test_reverse_advance_post_also_steps_first() {
    let mut vec = big_vec();

    let mut cursor = vec.rev_iter();
    let node = cursor
        .advance_post()
        .current()
        .map(|counter| counter.node().to_string());
    assert_eq!(node, Some("C".to_string()));
    assert!(cursor == Position::new(1));
}

#[test]
fn test_forward_offset_read() {
    let vec = big_vec();

    let mut cursor = vec.iter();
    assert_eq!(cursor.peek(1).map(Counter::node), Some("C"));
    assert_eq!(unsafe { cursor.add(1) }.node(), "C");
    assert_eq!(cursor.peek(2).map(Counter::node), Some("E"));
    assert!(cursor.peek(3).is_none());

    // peek(1) reads what one advance lands on.
    let peeked = cursor.peek(1).map(Counter::node);
    cursor.advance();
    assert_eq!(cursor.current().map(Counter::node), peeked);
}

#[test]
fn test_reverse_offset_read() {
    let mut vec = big_vec();

    let mut cursor = vec.rev_iter();
    // Offsets move toward the front: one "ahead" is one earlier in
    // insertion order.
    assert_eq!(cursor.peek(1).map(Counter::node), Some("C"));
    assert_eq!(unsafe { cursor.add(1) }.node(), "C");
    assert_eq!(cursor.peek(2).map(Counter::node), Some("D"));
    assert!(cursor.peek(3).is_none());

    let peeked = cursor.peek(1).map(|counter| counter.node().to_string());
    cursor.advance();
    let landed = cursor.current().map(|counter| counter.node().to_string());
    assert_eq!(landed, peeked);
}

#[test]
fn test_equality_ignores_container() {
    let vec_a = small_vec();
    let vec_b = big_vec();

    // Same position, different vecs: equal.
    assert!(vec_a.iter() == vec_b.iter());
    assert!(vec_a.iter_at_(1) == vec_b.iter_at_(1));
    assert!(vec_a.iter() != vec_b.iter_at_(1));

    let mut mut_a = small_vec();
    let mut mut_b = big_vec();
    assert!(mut_a.iter_mut() == mut_b.iter_mut());

    let mut rev_a = small_vec();
    let mut rev_b = small_vec();
    assert!(rev_a.rev_iter() == rev_b.rev_iter());
}

#[test]
fn test_end_sentinels() {
    let vec = small_vec();

    let mut cursor = vec.iter();
    let end = cursor.end();
    assert!(cursor != end);

    cursor.advance();
    cursor.advance();
    assert!(cursor == end);
    assert!(cursor == vec.end_position());
    assert!(cursor.current().is_none());
}

#[test]
fn test_empty_vec_edges() {
    let mut empty = CounterVec::new();

    assert!(empty.iter().next().is_none());
    assert!(empty.iter().last().is_none());
    assert!(empty.iter().current().is_none());
    assert_eq!(empty.iter().count(), 0);

    // A reverse cursor on an empty vec starts on the sentinel.
    let mut cursor = empty.rev_iter();
    assert!(cursor == Position::REVERSE_END);
    assert!(cursor.current().is_none());
    assert!(!cursor.can_read());
}

#[test]
fn test_traversal_strings() {
    let mut vec1 = small_vec();
    let mut vec2 = big_vec();

    let mut forward = String::new();
    for counter in vec1.iter().chain(vec2.iter()) {
        forward.push_str(&format!("{counter},"));
    }
    assert_eq!(forward, "A(1),B(1),D(1),C(2),E(1),");

    let mut reverse = String::new();
    for vec in [&mut vec1, &mut vec2] {
        let mut cursor = vec.rev_iter();
        while cursor != Position::REVERSE_END {
            if let Some(counter) = cursor.current() {
                reverse.push_str(&format!("{counter},"));
            }
            cursor.advance();
        }
    }
    assert_eq!(reverse, "B(1),A(1),E(1),C(2),D(1),");
}

#[test]
fn test_positioned_get() -> Result<()> {
    let vec = big_vec();

    let mut cursor = vec.iter();
    assert!(cursor.get_(0).map(Counter::node) == Some("D"));
    assert!(cursor.get_(2).map(Counter::node) == Some("E"));
    assert!(cursor.get_(2).map(Counter::node) == Some("E"));
    assert!(cursor.get_(0).map(Counter::node) == Some("D"));
    assert!(cursor.get_(3).is_none());

    // get leaves the cursor one past the read position.
    let pos = vec.back_position();
    assert!(cursor.get(pos).map(Counter::node) == Some("E"));
    assert_eq!(pos.to_usize()?, 2);
    assert!(cursor == vec.end_position());

    Ok(())
}

#[test]
fn test_iterator_overrides() {
    let vec = big_vec();

    assert_eq!(vec.iter().nth(1).map(Counter::node), Some("C"));
    assert_eq!(vec.iter().last().map(Counter::node), Some("E"));
    assert_eq!(vec.iter().count(), 3);

    let mut cursor = vec.iter();
    assert_eq!(cursor.size_hint(), (3, Some(3)));
    cursor.next();
    assert_eq!(cursor.size_hint(), (2, Some(2)));

    // Exhausted cursors stay exhausted.
    let mut cursor = vec.iter_at_(3);
    assert!(cursor.next().is_none());
    assert!(cursor.next().is_none());

    // nth consumes through the target.
    let mut cursor = vec.iter();
    cursor.nth(1);
    assert_eq!(cursor.next().map(Counter::node), Some("E"));
}

#[test]
fn test_mut_cursor_replacement() {
    let mut vec = big_vec();

    let mut cursor = vec.iter_mut();
    while let Some(counter) = cursor.current() {
        *counter = Counter::new(counter.node(), counter.count() * 10);
        cursor.advance();
    }

    let counts: Vec<u32> = vec.iter().map(Counter::count).collect();
    assert_eq!(counts, [10, 20, 10]);
}

#[test]
fn test_mut_cursor_peek_is_read_only() {
    let mut vec = big_vec();

    let cursor = vec.iter_mut();
    assert_eq!(cursor.peek(0).map(Counter::node), Some("D"));
    assert_eq!(cursor.peek(1).map(Counter::node), Some("C"));
    assert!(cursor.peek(3).is_none());
}

#[test]
fn test_can_read_bounds() {
    let vec = small_vec();

    assert!(vec.iter().can_read());
    assert!(!vec.iter_at_(2).can_read());
    assert!(!vec.iter_at(Position::REVERSE_END).can_read());
    assert!(vec.iter_at(Position::REVERSE_END).next().is_none());
}
