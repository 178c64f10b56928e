pub mod catalog;
pub mod company;
pub mod dispatch;
pub mod document;
pub mod metrics;
pub mod project;
pub mod research;
pub mod shared;
pub mod tag;
