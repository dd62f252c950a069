pub mod param;

pub use param::Param;
