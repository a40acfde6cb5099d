pub mod order;
pub mod selection;
pub mod view;
