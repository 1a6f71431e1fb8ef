// Service module exports

pub mod context;
pub mod navigator;
pub mod storage;
