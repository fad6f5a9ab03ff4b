//! quadcell_engine - Input classification and dependency primitives for the
//! four-cell sheet.

pub mod engine;
