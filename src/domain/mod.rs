// Domain layer for beanfacts: bean model, identifier index, resolution and fact tables.

pub mod bean;
pub mod facts;
pub mod index;
pub mod resolver;
