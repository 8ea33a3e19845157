pub mod clock;
pub mod intent;
pub mod script;
pub mod todo_ops;
