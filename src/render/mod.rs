//! Presentation-template contract: render-ready page views

mod view;

pub use view::{PageView, Region};
