pub mod dropdown;
pub mod input;

pub use dropdown::Dropdown;
pub use input::Input;
