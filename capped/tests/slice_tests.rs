use capped::CappedSlice;

#[test]
fn test_capped_bytes_keep_the_tail() {
    let mut buffer = [0u8; 5];
    let mut bytes = CappedSlice::new(&mut buffer).unwrap();

    let data = "example data";
    for b in data.bytes() {
        bytes.push(b);
    }

    let mut tail = Vec::new();
    while let Some(&b) = bytes.pop() {
        tail.push(b);
    }
    assert_eq!(tail, &data.as_bytes()[data.len() - 5..]);
    assert_eq!(tail, b" data");
}

#[test]
fn test_capped_strings_storage_layout() {
    let mut buffer = [""; 3];
    let mut strings = CappedSlice::new(&mut buffer).unwrap();

    assert_eq!(strings.push("one"), None);
    assert_eq!(strings.as_slice(), ["one", "", ""]);

    assert_eq!(strings.push("two"), None);
    assert_eq!(strings.as_slice(), ["one", "two", ""]);

    assert_eq!(strings.push("three"), None);
    assert_eq!(strings.as_slice(), ["one", "two", "three"]);

    assert_eq!(strings.push("four"), Some("one"));
    assert_eq!(strings.as_slice(), ["four", "two", "three"]);

    assert_eq!(strings.push("five"), Some("two"));
    assert_eq!(strings.as_slice(), ["four", "five", "three"]);

    assert_eq!(strings.pop(), Some(&"three"));
}

#[test]
fn test_owned_strings_are_returned_when_displaced() {
    let mut buffer: [String; 2] = Default::default();
    let mut strings = CappedSlice::new(&mut buffer).unwrap();

    assert_eq!(strings.push("alpha".to_string()), None);
    assert_eq!(strings.push("beta".to_string()), None);
    assert_eq!(strings.push("gamma".to_string()), Some("alpha".to_string()));

    assert_eq!(strings.pop().map(String::as_str), Some("beta"));
    assert_eq!(strings.pop().map(String::as_str), Some("gamma"));
    assert_eq!(strings.pop(), None);

    // Slots that were read are reused silently.
    assert_eq!(strings.push("delta".to_string()), None);
}

#[test]
fn test_len_and_flags() {
    let mut buffer = [0i32; 4];
    let mut ints = CappedSlice::new(&mut buffer).unwrap();

    assert!(ints.is_empty());
    assert_eq!(ints.capacity(), 4);

    for i in 1..=4 {
        ints.push(i);
        assert_eq!(ints.len(), i as usize);
    }
    assert!(ints.is_full());

    ints.push(5);
    assert_eq!(ints.len(), 4);
    assert_eq!(ints.peek(), Some(&2));
    assert_eq!(ints.len(), 4);
}

#[test]
fn test_drain_yields_oldest_first() {
    let mut buffer = [0u32; 4];
    let mut ints = CappedSlice::new(&mut buffer).unwrap();

    for i in 0..10 {
        ints.push(i);
    }

    let drain = ints.drain();
    assert_eq!(drain.len(), 4);
    assert_eq!(drain.copied().collect::<Vec<_>>(), [6, 7, 8, 9]);
    assert!(ints.is_empty());
    assert_eq!(ints.pop(), None);
}

#[test]
fn test_partial_drain_leaves_rest_unread() {
    let mut buffer = ['\0'; 3];
    let mut chars = CappedSlice::new(&mut buffer).unwrap();
    for c in "abc".chars() {
        chars.push(c);
    }

    assert_eq!(chars.drain().next(), Some(&'a'));
    assert_eq!(chars.len(), 2);
    assert_eq!(chars.peek(), Some(&'b'));
}

#[test]
fn test_clear_keeps_storage() {
    let mut buffer = [0u8; 3];
    let mut bytes = CappedSlice::new(&mut buffer).unwrap();
    bytes.push(7);
    bytes.push(8);

    bytes.clear();

    assert!(bytes.is_empty());
    assert_eq!(bytes.pop(), None);
    assert_eq!(bytes.as_slice(), [7, 8, 0]);

    bytes.push(9);
    assert_eq!(bytes.as_slice(), [9, 8, 0]);
    assert_eq!(bytes.pop(), Some(&9));
}
