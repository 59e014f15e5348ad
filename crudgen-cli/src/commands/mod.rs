//! CLI commands

mod make_crud;

pub use make_crud::MakeCrudCommand;
