pub mod greeter;

pub use greeter::say_hello;
