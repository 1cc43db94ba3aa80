pub mod bottom_up;
pub mod common;
pub mod parallel;
pub mod top_down;
pub mod top_down_buffered;
