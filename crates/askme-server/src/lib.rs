//! Askme HTTP server library (router and handlers, shared with integration tests).

pub mod gateway;
