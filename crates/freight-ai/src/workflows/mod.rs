pub mod dispatch;
pub mod leads;
