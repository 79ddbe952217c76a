/// Slice append command.
pub mod append;
/// Slice iteration command.
pub mod each;
/// Struct field lookup command.
pub mod field;
/// Classification report command.
pub mod inspect;
/// Empty typed slice command.
pub mod make_slice;
/// Indented value printer.
pub mod print;
/// Shared input loading and output helpers.
pub mod util;
/// Precondition guard command.
pub mod verify;
/// Zero value command.
pub mod zero;
