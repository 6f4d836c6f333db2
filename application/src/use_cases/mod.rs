//! Application use cases

pub mod answer_query;
