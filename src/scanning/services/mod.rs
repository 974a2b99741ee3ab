/// Domain services - derived views over stored applications.
pub mod aggregator;

pub use aggregator::{
    ApplicationUsage, DependencyAggregator, DependencyDetail, DependencyRecord, PackageSummary,
};
