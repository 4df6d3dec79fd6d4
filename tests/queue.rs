use strq::{Queue, QueueConfig, QueueError};
#[path = "common/mod.rs"]
mod common;
use common::{queue_of, values};

#[test]
fn test_insert_head_remove_head_round_trip() {
    let mut queue = Queue::new().unwrap();
    queue.insert_head("gerbil").unwrap();

    let element = queue.remove_head(None).unwrap();
    assert_eq!(element.value(), "gerbil");
    assert!(queue.is_empty());
    element.release();
}

#[test]
fn test_insert_tail_remove_tail_round_trip() {
    let mut queue = queue_of(&["bear"]);
    queue.insert_tail("meerkat").unwrap();

    let element = queue.remove_tail(None).unwrap();
    assert_eq!(element.into_value(), "meerkat");
    assert_eq!(values(&queue), vec!["bear"]);
}

#[test]
fn test_insert_copies_value() {
    let mut queue = Queue::new().unwrap();
    let mut source = String::from("vulture");
    queue.insert_tail(&source).unwrap();
    source.clear();

    assert_eq!(queue.head(), Some("vulture"));
}

#[test]
fn test_remove_with_small_buffer() {
    let mut queue = queue_of(&["abcdefgh"]);
    let mut buf = [0xaau8; 5];

    let element = queue.remove_head(Some(&mut buf)).unwrap();
    assert_eq!(&buf, b"abcd\0");
    // The element itself keeps the full value
    assert_eq!(element.value(), "abcdefgh");
}

#[test]
fn test_remove_with_zero_length_buffer() {
    let mut queue = queue_of(&["a", "b"]);
    let mut buf: [u8; 0] = [];

    let element = queue.remove_tail(Some(&mut buf)).unwrap();
    assert_eq!(element, "b");
    assert_eq!(values(&queue), vec!["a"]);
}

#[test]
fn test_remove_from_empty() {
    let mut queue = Queue::new().unwrap();
    let mut buf = [0x55u8; 4];

    assert!(queue.remove_head(Some(&mut buf)).is_none());
    assert!(queue.remove_tail(None).is_none());
    // Nothing was removed so nothing was copied
    assert_eq!(buf, [0x55u8; 4]);
}

#[test]
fn test_size_follows_operations() {
    let mut queue = Queue::new().unwrap();
    assert_eq!(queue.size(), 0);

    for value in ["a", "b", "c", "d"] {
        queue.insert_tail(value).unwrap();
    }
    assert_eq!(queue.size(), 4);

    queue.remove_head(None);
    assert_eq!(queue.size(), 3);

    queue.delete_mid().unwrap();
    assert_eq!(queue.size(), 2);
    assert_eq!(queue.size(), queue.iter().count());
}

#[test]
fn test_delete_mid_six_removes_index_three() {
    let mut queue = queue_of(&["a", "b", "c", "d", "e", "f"]);
    queue.delete_mid().unwrap();
    assert_eq!(values(&queue), vec!["a", "b", "c", "e", "f"]);
    assert!(queue.is_well_formed());
}

#[test]
fn test_delete_mid_follows_floor_half_rule() {
    let all = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
    for n in 1..=all.len() {
        let mut queue = queue_of(&all[..n]);
        queue.delete_mid().unwrap();

        let mut expected: Vec<&str> = all[..n].to_vec();
        expected.remove(n / 2);
        assert_eq!(values(&queue), expected, "n = {n}");
        assert!(queue.is_well_formed());
    }
}

#[test]
fn test_delete_mid_empty() {
    let mut queue = Queue::new().unwrap();
    assert_eq!(queue.delete_mid(), Err(QueueError::Empty));
}

#[test]
fn test_delete_dup() {
    let mut queue = queue_of(&["a", "a", "b", "c", "c", "c"]);
    queue.delete_dup();
    assert_eq!(values(&queue), vec!["b"]);
    assert!(queue.is_well_formed());
}

#[test]
fn test_delete_dup_keeps_unique_values() {
    let mut queue = queue_of(&["a", "b", "b", "c", "d", "d", "e"]);
    queue.delete_dup();
    assert_eq!(values(&queue), vec!["a", "c", "e"]);

    let mut queue = queue_of(&["x", "x"]);
    queue.delete_dup();
    assert!(queue.is_empty());
    assert!(queue.is_well_formed());
}

#[test]
fn test_sort_then_delete_dup() {
    let mut queue = queue_of(&["c", "a", "b", "a", "c", "d"]);
    queue.sort();
    queue.delete_dup();
    assert_eq!(values(&queue), vec!["b", "d"]);
}

#[test]
fn test_swap() {
    let mut queue = queue_of(&["a", "b", "c", "d"]);
    queue.swap();
    assert_eq!(values(&queue), vec!["b", "a", "d", "c"]);

    let mut queue = queue_of(&["a", "b", "c"]);
    queue.swap();
    assert_eq!(values(&queue), vec!["b", "a", "c"]);

    let mut queue = queue_of(&["a"]);
    queue.swap();
    assert_eq!(values(&queue), vec!["a"]);
    assert!(queue.is_well_formed());
}

#[test]
fn test_reverse_twice_restores() {
    let input = ["dolphin", "bear", "gerbil", "ant"];
    let mut queue = queue_of(&input);

    queue.reverse();
    assert_eq!(values(&queue), vec!["ant", "gerbil", "bear", "dolphin"]);
    assert_eq!(queue.head(), Some("ant"));
    assert_eq!(queue.tail(), Some("dolphin"));
    assert!(queue.is_well_formed());

    queue.reverse();
    assert_eq!(values(&queue), input.to_vec());
    assert!(queue.is_well_formed());
}

#[test]
fn test_sort() {
    let mut queue = queue_of(&["c", "a", "b"]);
    queue.sort();
    assert_eq!(values(&queue), vec!["a", "b", "c"]);
    assert!(queue.is_well_formed());
}

#[test]
fn test_sort_idempotent() {
    let mut queue = queue_of(&["pear", "apple", "fig", "apple", "kiwi"]);
    queue.sort();
    let once = values(&queue);

    queue.sort();
    assert_eq!(values(&queue), once);
    assert_eq!(once, vec!["apple", "apple", "fig", "kiwi", "pear"]);
}

#[test]
fn test_operations_after_sort_keep_ring() {
    let mut queue = queue_of(&["e", "d", "c", "b", "a"]);
    queue.sort();
    queue.insert_head("0").unwrap();
    queue.insert_tail("z").unwrap();
    queue.swap();
    queue.reverse();

    assert_eq!(values(&queue), vec!["z", "d", "e", "b", "c", "0", "a"]);
    assert!(queue.is_well_formed());
}

#[test]
fn test_with_config_capacity_is_not_a_bound() {
    let config = QueueConfig::default().with_capacity(2);
    let mut queue = Queue::with_config(config).unwrap();
    for i in 0..10 {
        queue.insert_tail(&i.to_string()).unwrap();
    }
    assert_eq!(queue.size(), 10);
}

#[test]
fn test_iter_and_into_iter() {
    let queue = queue_of(&["a", "b", "c"]);

    let forward: Vec<&str> = (&queue).into_iter().collect();
    assert_eq!(forward, vec!["a", "b", "c"]);

    let backward: Vec<&str> = queue.iter().rev().collect();
    assert_eq!(backward, vec!["c", "b", "a"]);

    let mut joined = String::new();
    for value in &queue {
        joined.push_str(value);
    }
    assert_eq!(joined, "abc");
}

#[test]
fn test_default_and_free() {
    let mut queue = Queue::default();
    queue.insert_tail("a").unwrap();
    queue.free();
}
