#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::io::Write;
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_len() {
    let mut vec = Vector::<i32>::new();
    assert_eq!(vec.len(), 0, "A new Vector should be empty.");
    assert!(vec.is_empty());

    vec.push(11);
    vec.push(12);
    assert_eq!(vec.len(), 2, "Two pushes should give a length of two.");
    assert_eq!(&*vec, &[11, 12], "Values should be kept in insertion order.");
    assert_eq!(*vec.at(0), 11);
    assert_eq!(*vec.at(1), 12);
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([11, 12]);

    assert_eq!(
        vec.try_at(2),
        Err(IndexOutOfBounds { index: 2, len: 2 }),
        "Index equal to len should be out of bounds."
    );
    assert!(vec.try_at(usize::MAX).is_err());
    assert!(Vector::<u8>::new().try_at(0).is_err(), "Nothing is in bounds for an empty Vector.");

    assert_panics!({
        vec.at(2);
    });
    assert_panics!({
        vec.at_mut(5);
    });

    *vec.at_mut(0) += 100;
    assert_eq!(vec.try_at(0), Ok(&111));

    assert_eq!(
        IndexOutOfBounds { index: 2, len: 2 }.to_string(),
        "Index 2 out of bounds for collection with 2 elements!"
    );
}

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "Nothing should be allocated up front.");

    vec.push(0_u64);
    assert_eq!(vec.cap(), MIN_CAP, "First growth should use the minimum capacity.");

    for i in 1..5 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 8, "Capacity should double each time the Vector is full.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 5);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Shrinking shouldn't lose any values.");

    vec.reserve(10);
    assert_eq!(vec.cap(), 15);
    vec.reserve(2);
    assert_eq!(vec.cap(), 15, "Reserving less than is available shouldn't reallocate.");

    assert_eq!(vec.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(
        vec.try_reserve(isize::MAX as usize),
        Err(CapacityOverflow),
        "A layout over isize::MAX bytes should be rejected."
    );
    assert_eq!(vec.cap(), 15, "A failed reserve should leave the Vector untouched.");

    assert_panics!({
        Vector::<u16>::with_cap(isize::MAX as usize);
    });
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::<ZeroSizedType>::new();
    let old_ptr = vec.buf.ptr;

    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.buf.ptr, old_ptr, "Zero-sized types should never allocate.");
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 99);
}

#[test]
fn test_pop_insert_remove() {
    let mut vec = Vector::from([0, 1, 2]);

    vec.insert(0, 10);
    vec.insert(2, 20);
    vec.insert(5, 30);
    assert_eq!(&*vec, &[10, 0, 20, 1, 2, 30]);

    assert_eq!(
        vec.try_insert(7, 40),
        Err(IndexOrCapOverflow::IndexOutOfBounds(IndexOutOfBounds { index: 7, len: 6 })),
        "Inserting past len should fail."
    );
    assert!(vec.try_insert(7, 40).is_err_and(|e| e.is_index_out_of_bounds()));

    assert_eq!(vec.remove(0), 10);
    assert_eq!(vec.remove(4), 30);
    assert_eq!(&*vec, &[0, 20, 1, 2]);
    assert_panics!({
        vec.remove(4);
    });

    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.first(), Some(&0));
    assert_eq!(vec.last(), Some(&20));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(vec);
    assert_eq!(counter.dropped(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new();
    let mut vec = Vector::repeat(counter.clone(), 4);
    assert_eq!(counter.dropped(), 1, "The repeated item itself should be dropped.");

    drop(vec.remove(1));
    assert_eq!(counter.dropped(), 2);

    vec.clear();
    assert_eq!(counter.dropped(), 5, "Clearing should drop every remaining element.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 4, "Clearing should keep the capacity.");
}

#[test]
fn test_iterators() {
    let mut vec = Vector::from([1_usize, 2, 3, 4]);

    let mut total = 0_usize;
    for val in &vec {
        total += *val;
    }
    assert_eq!(total, 10);

    for val in &mut vec {
        *val *= 2;
    }
    assert_eq!(&*vec, &[2, 4, 6, 8]);

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    assert_eq!(vec, vec.clone().into_iter().collect(), "Collected iter should be equal.");

    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.dropped(), 2);
    drop(iter);
    assert_eq!(
        counter.dropped(),
        10,
        "Dropping an owned iterator should drop the remaining elements."
    );
}

#[test]
fn test_equality_and_hash() {
    let vec = Vector::from([0_usize, 1, 2, 3, 4]);

    assert_eq!(
        vec,
        (0..5).collect(),
        "Different construction methods should produce equal results."
    );
    assert_ne!(vec, Vector::from([0, 1, 2, 5, 4]));
    assert_eq!(Vector::repeat('a', 3), Vector::from(['a', 'a', 'a']));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Hash should match the equivalent slice."
    );
}

#[test]
fn test_formatting() {
    let vec = Vector::from([11, 12]);
    assert_eq!(vec.to_string(), "[11, 12]");
    assert_eq!(
        Vector::from([String::from("a"), String::from("b")]).to_string(),
        "[a, b]",
        "Display should use each element's Display, not Debug."
    );
    assert_eq!(Vector::<u8>::new().to_string(), "[]");
    assert_eq!(
        format!("{:?}", vec),
        "Vector { contents: [11, 12], len: 2, cap: 2 }"
    );
}

#[test]
fn test_write() {
    let mut out = Vector::<u8>::new();
    writeln!(out, "Size = {}", 0).expect("writing to a Vector can't fail here");
    write!(out, "{}", 12).expect("writing to a Vector can't fail here");

    assert_eq!(String::try_from(out).as_deref(), Ok("Size = 0\n12"));
    assert!(String::try_from(Vector::from([0xff_u8])).is_err());
}

#[test]
fn test_bulk_append_growth() {
    let mut out = Vector::<u8>::new();
    let mut reallocs = 0;
    for _ in 0..1000 {
        let old_cap = out.cap();
        out.write_all(b"x").expect("writing to a Vector can't fail here");
        if out.cap() != old_cap {
            reallocs += 1;
        }
    }
    assert_eq!(out.len(), 1000);
    assert!(
        reallocs <= 10,
        "Single byte writes should grow geometrically, reallocated {reallocs} times."
    );

    let mut vec = Vector::<u8>::new();
    let mut reallocs = 0;
    for _ in 0..1000 {
        let old_cap = vec.cap();
        vec.extend([1_u8]);
        if vec.cap() != old_cap {
            reallocs += 1;
        }
    }
    assert_eq!(vec.len(), 1000);
    assert!(
        reallocs <= 10,
        "Single item extends should grow geometrically, reallocated {reallocs} times."
    );

    let mut vec = Vector::from([0_u8; 4]);
    vec.extend([1_u8; 10]);
    assert_eq!(vec.cap(), 14, "A large extend should reserve everything it needs at once.");
}

#[test]
fn test_send_sync() {
    const fn assert_send_sync<T: Send + Sync>() {}
    const _: () = assert_send_sync::<Vector<u8>>();
    const _: () = assert_send_sync::<IntoIter<String>>();
}
