pub mod dispatch;
pub mod list;
pub mod run;
