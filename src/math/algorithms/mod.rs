pub mod dedup;

pub use dedup::filter_duplicates;
