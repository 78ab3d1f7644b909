//! Ready-made base reducers for common reductions.

use crate::core::{Reducer, Step};
use std::marker::PhantomData;
use std::ops::Add;

/// Collects every input into a `Vec`, seeded with an empty one.
#[derive(Debug)]
pub struct Collect<T> {
    _phantom: PhantomData<fn(T)>,
}

impl<T> Reducer<T> for Collect<T> {
    type Acc = Vec<T>;

    fn init(&mut self) -> Option<Vec<T>> {
        Some(Vec::new())
    }

    fn step(&mut self, mut acc: Vec<T>, input: T) -> Step<Vec<T>> {
        acc.push(input);
        Step::Continue(acc)
    }
}

pub fn collect<T>() -> Collect<T> {
    Collect {
        _phantom: PhantomData,
    }
}

/// Adds inputs together, seeded with `T::default()`.
#[derive(Debug)]
pub struct Sum<T> {
    _phantom: PhantomData<fn(T)>,
}

impl<T> Reducer<T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    type Acc = T;

    fn init(&mut self) -> Option<T> {
        Some(T::default())
    }

    fn step(&mut self, acc: T, input: T) -> Step<T> {
        Step::Continue(acc + input)
    }
}

pub fn sum<T>() -> Sum<T> {
    Sum {
        _phantom: PhantomData,
    }
}

/// Builds a `String` from characters or string slices.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringBuilder;

impl Reducer<char> for StringBuilder {
    type Acc = String;

    fn init(&mut self) -> Option<String> {
        Some(String::new())
    }

    fn step(&mut self, mut acc: String, input: char) -> Step<String> {
        acc.push(input);
        Step::Continue(acc)
    }
}

impl<'a> Reducer<&'a str> for StringBuilder {
    type Acc = String;

    fn init(&mut self) -> Option<String> {
        Some(String::new())
    }

    fn step(&mut self, mut acc: String, input: &'a str) -> Step<String> {
        acc.push_str(input);
        Step::Continue(acc)
    }
}

pub fn string() -> StringBuilder {
    StringBuilder
}

/// Counts inputs, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<T> Reducer<T> for Count {
    type Acc = usize;

    fn init(&mut self) -> Option<usize> {
        Some(0)
    }

    fn step(&mut self, acc: usize, _input: T) -> Step<usize> {
        Step::Continue(acc + 1)
    }
}

pub fn count() -> Count {
    Count
}
