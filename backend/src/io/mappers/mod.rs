pub mod breakdown_mapper;
pub mod history_mapper;
