// Serializable views of extraction results.

pub mod dto;
