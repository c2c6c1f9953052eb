//! Lead snapshots: the validated record type and the importers that build it
//! from REST payloads or CSV exports.

pub mod domain;
mod import;

pub use domain::{
    parse_timestamp, EmployeeTarget, LeadRecord, LeadValidationError, Qualification, RawLead,
    SessionContext, SessionRole,
};
pub use import::{LeadImport, LeadImportError, LeadImporter, RejectedLead};
