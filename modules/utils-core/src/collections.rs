pub mod lazy_map;
pub mod queue;
pub mod stack;
