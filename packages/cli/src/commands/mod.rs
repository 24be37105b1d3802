pub mod classes;
pub mod compile;
pub mod init;

pub use classes::{classes, ClassesArgs};
pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
