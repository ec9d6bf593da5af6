//! Growable array-backed LIFO stack.

mod array_stack;
mod array_stack_config;
mod growth;
mod stack_error;
mod stack_trait;

pub use array_stack::ArrayStack;
pub use array_stack_config::{ArrayStackConfig, DEFAULT_STACK_CAPACITY};
pub use growth::{MAX_STACK_CAPACITY, PLATFORM_MAX_COUNT, grown_capacity};
pub use stack_error::StackError;
pub use stack_trait::Stack;
