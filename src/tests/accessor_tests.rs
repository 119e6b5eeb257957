use crate::{Cursor, RangeAccessor, RunMap};

fn sample_map() -> RunMap<char> {
    let mut map = RunMap::new('d');
    map.set_value(0, 3, 'x').unwrap();
    map.set_value(3, 3, 'y').unwrap();
    map
}

#[test]
fn test_accessor_starts_at_origin() {
    let map = sample_map();
    let accessor = RangeAccessor::new(&map);

    assert!(accessor.is_bounded());
    assert_eq!(accessor.position(), 0);
    assert_eq!(*accessor.value(), 'x');
    assert_eq!(accessor.span_start(), 0);
    assert_eq!(accessor.remaining(), Some(3));
}

#[test]
fn test_accessor_over_empty_map() {
    let map = RunMap::new('d');
    let mut accessor = RangeAccessor::new(&map);

    assert!(!accessor.is_bounded());
    assert_eq!(*accessor.value(), 'd');
    assert_eq!(accessor.remaining(), None);
    assert_eq!(accessor.span_start(), 0);

    assert!(!accessor.seek(42));
    assert_eq!(*accessor.value(), 'd');
}

#[test]
fn test_seek_within_runs() {
    let map = sample_map();
    let mut accessor = RangeAccessor::new(&map);

    assert!(accessor.seek(4));
    assert_eq!(*accessor.value(), 'y');
    assert_eq!(accessor.span_start(), 3);
    assert_eq!(accessor.position(), 4);
    assert_eq!(accessor.remaining(), Some(2));

    // Backward seek reuses the cached cursor as the scan hint.
    assert!(accessor.seek(1));
    assert_eq!(*accessor.value(), 'x');
    assert_eq!(accessor.remaining(), Some(2));

    assert!(accessor.seek(5));
    assert_eq!(*accessor.value(), 'y');
    assert_eq!(accessor.remaining(), Some(1));
}

#[test]
fn test_seek_past_end_is_unbounded() {
    let map = sample_map();
    let mut accessor = RangeAccessor::new(&map);

    assert!(!accessor.seek(6));
    assert!(!accessor.is_bounded());
    assert_eq!(*accessor.value(), 'd');
    assert_eq!(accessor.span_start(), map.total_length());
    assert_eq!(accessor.remaining(), None);

    assert!(!accessor.seek(100));
    assert_eq!(accessor.span_start(), map.total_length());

    // Seeking back inside a run transitions to bounded.
    assert!(accessor.seek(2));
    assert!(accessor.is_bounded());
    assert_eq!(*accessor.value(), 'x');
}

#[test]
fn test_with_cursor_positions_at_run_start() {
    let map = sample_map();
    let (cursor, in_range) = map.find(4, Cursor::ORIGIN);
    assert!(in_range);

    let accessor = RangeAccessor::with_cursor(&map, cursor);
    assert!(accessor.is_bounded());
    assert_eq!(accessor.position(), 3);
    assert_eq!(*accessor.value(), 'y');
    assert_eq!(accessor.remaining(), Some(3));
}

#[test]
fn test_with_position_seeks_immediately() {
    let map = sample_map();
    let (cursor, _) = map.find(1, Cursor::ORIGIN);

    let accessor = RangeAccessor::with_position(&map, cursor, 5);
    assert!(accessor.is_bounded());
    assert_eq!(accessor.position(), 5);
    assert_eq!(*accessor.value(), 'y');
    assert_eq!(accessor.remaining(), Some(1));

    let accessor = RangeAccessor::with_position(&map, cursor, 9);
    assert!(!accessor.is_bounded());
    assert_eq!(*accessor.value(), 'd');
}

#[test]
fn test_walk_runs_via_remaining() {
    let mut map = RunMap::new(0u32);
    map.set_value(0, 4, 1).unwrap();
    map.set_value(4, 2, 2).unwrap();
    map.set_value(9, 3, 3).unwrap();

    let mut accessor = RangeAccessor::new(&map);
    let mut collected = Vec::new();
    while accessor.is_bounded() {
        collected.push((accessor.position(), *accessor.value()));
        let next = accessor.position() + accessor.remaining().unwrap();
        accessor.seek(next);
    }

    assert_eq!(collected, vec![(0, 1), (4, 2), (6, 0), (9, 3)]);
    assert_eq!(accessor.position(), map.total_length());
}

#[test]
fn test_accessor_cursor_usable_as_hint() {
    let map = sample_map();
    let mut accessor = RangeAccessor::new(&map);
    accessor.seek(4);

    let (cursor, in_range) = map.find(3, accessor.cursor());
    assert!(in_range);
    assert_eq!(cursor, accessor.cursor());
}
