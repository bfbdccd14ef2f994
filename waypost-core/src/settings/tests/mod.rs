mod common;
mod wire_format_tests;
