//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State logic lives in plain types (`Pager`, `PortScanTcpForm`) so it can be
//! unit tested natively; pages wrap them in signals.

pub mod port_scan;
pub mod table;
