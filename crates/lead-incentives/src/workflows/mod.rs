pub mod incentives;
pub mod leads;
