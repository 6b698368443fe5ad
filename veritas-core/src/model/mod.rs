pub use action::Action;
pub use prefab::PrefabAction;
pub use store::StoreDump;

pub mod action;
pub mod prefab;
pub mod store;
