use std::cell::Cell;
use std::rc::Rc;

use dynvec::DynVec;

/// Counts destructor runs so reallocation and removal can be checked
/// for exactly-once destruction.
struct Tracked {
    id: usize,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(id: usize, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_every_element_dropped_exactly_once() {
    let drops = Rc::new(Cell::new(0));

    {
        let mut vector = DynVec::new();
        // Enough appends to force several growth reallocations
        for id in 0..40 {
            vector.push(Tracked::new(id, &drops)).unwrap();
        }
        assert_eq!(drops.get(), 0);

        // Popped values drop as they go out of scope; shrink
        // reallocations along the way must not double-drop survivors
        for _ in 0..25 {
            vector.pop();
        }
        assert_eq!(drops.get(), 25);
        assert_eq!(vector.len(), 15);
    }

    // Dropping the vector destroys the remaining live elements
    assert_eq!(drops.get(), 40);
}

#[test]
fn test_clear_drops_all_live_elements() {
    let drops = Rc::new(Cell::new(0));
    let mut vector = DynVec::new();

    for id in 0..7 {
        vector.push(Tracked::new(id, &drops)).unwrap();
    }
    let capacity = vector.capacity();

    vector.clear();

    assert_eq!(drops.get(), 7);
    assert_eq!(vector.len(), 0);
    assert_eq!(vector.capacity(), capacity);

    // The buffer is reusable after a clear
    vector.push(Tracked::new(99, &drops)).unwrap();
    assert_eq!(vector.len(), 1);
    assert_eq!(vector.back().map(|t| t.id), Some(99));
}

#[test]
fn test_pop_transfers_ownership() {
    let drops = Rc::new(Cell::new(0));
    let mut vector = DynVec::new();
    vector.push(Tracked::new(1, &drops)).unwrap();

    let popped = vector.pop().unwrap();
    assert_eq!(popped.id, 1);
    assert_eq!(drops.get(), 0); // still alive in the caller's hands

    drop(popped);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_owned_string_elements() {
    let mut vector = DynVec::new();

    vector.push(String::from("alpha")).unwrap();
    vector.push(String::from("beta")).unwrap();
    vector.extend_from_slice(&[String::from("gamma"), String::from("delta")]).unwrap();

    assert_eq!(vector.len(), 4);
    assert_eq!(vector[0], "alpha");
    assert_eq!(vector.pop().as_deref(), Some("delta"));

    let copy = vector.try_clone().unwrap();
    assert_eq!(copy, vector);
}

#[test]
fn test_growth_preserves_element_order_and_values() {
    let mut vector = DynVec::new();
    for i in 0..1000 {
        vector.push(i).unwrap();
    }

    assert_eq!(vector.len(), 1000);
    assert_eq!(vector.front(), Some(&0));
    assert_eq!(vector.back(), Some(&999));
    for i in (0..1000).step_by(97) {
        assert_eq!(vector[i], i);
    }
}

#[test]
fn test_mixed_workload_invariants() {
    let mut vector = DynVec::new();

    for round in 0..10 {
        for i in 0..20 {
            vector.push(round * 100 + i).unwrap();
            assert!(vector.len() <= vector.capacity());
        }
        for _ in 0..15 {
            vector.pop();
            assert!(vector.len() <= vector.capacity());
        }
    }

    // 10 rounds of net +5 elements
    assert_eq!(vector.len(), 50);
    let collected: Vec<i32> = vector.iter().copied().collect();
    assert_eq!(collected.len(), 50);
    // Each round leaves its first five appends behind
    assert_eq!(collected[0], 0);
    assert_eq!(collected[5], 100);
    assert_eq!(collected[45], 900);
}

#[test]
fn test_concat_of_built_vectors() {
    let mut left = DynVec::new();
    let mut right = DynVec::new();
    for i in 0..30 {
        left.push(i).unwrap();
        right.push(30 + i).unwrap();
    }

    let combined = left.concat(&right).unwrap();

    assert_eq!(combined.len(), 60);
    for i in 0..60 {
        assert_eq!(combined[i], i as i32);
    }
}
