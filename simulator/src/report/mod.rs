pub mod model;

pub use model::ReportModel;
