#![no_main]
use arbitrary::Arbitrary;
use arraystack::{ArrayStack, StackEmpty};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Peek,
    PeekMut(char),
}

use self::Action::*;

fuzz_target!(|input: (u8, u16, Vec<Action>)| {
    let initial_size = input.0 as usize + 1;
    let max_size = initial_size + input.1 as usize;
    let mut stack = ArrayStack::with_initial_and_max_size(initial_size, max_size);
    let mut model = Vec::new();
    for action in input.2 {
        match action {
            Push(data) => {
                if model.len() == max_size {
                    let capacity = stack.capacity();
                    assert_eq!(data, stack.push(data.clone()).unwrap_err().into_inner());
                    assert_eq!(capacity, stack.capacity());
                } else {
                    stack.push(data.clone()).unwrap();
                    model.push(data);
                }
            }
            Pop => {
                assert_eq!(model.pop().ok_or(StackEmpty), stack.pop());
            }
            Peek => {
                assert_eq!(model.last().ok_or(StackEmpty), stack.peek());
            }
            PeekMut(ch) => {
                if let Some(top) = model.last_mut() {
                    top.push(ch);
                }
                if let Ok(top) = stack.peek_mut() {
                    top.push(ch);
                }
            }
        }
        assert_eq!(model.len(), stack.len());
        assert!(stack.capacity() >= stack.len());
        assert!(stack.capacity() >= initial_size);
        assert!(stack.capacity() <= max_size);
    }
});
