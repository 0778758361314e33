pub mod module_store;

pub use module_store::{FileModuleStore, InMemoryModuleStore, ModuleStore};
