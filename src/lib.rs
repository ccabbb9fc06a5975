/// Named balances and the deposit, withdraw and transfer rules guarding them.
/// State is modified using events, which are created by handling commands
pub mod account;

/// Menu choices and the operations they turn into.
pub mod command;

/// Operation processor interface, plus "in memory" implementation owning
/// both accounts and the journal of applied operations.
pub mod processor;

/// Interactive console session driving the processor. Lives in the library so
/// integration tests can run whole sessions over in-memory buffers.
pub mod bin_utils;
