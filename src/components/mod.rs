pub mod widget;

pub use widget::ChatWidget;
