// ATS compatibility scoring.
// Core: tokenizer → matcher → subscores → analyzer, all pure and synchronous.
// jd_parser and handlers are the HTTP-facing collaborators around it.

pub mod analyzer;
pub mod handlers;
pub mod jd_parser;
pub mod matcher;
pub mod subscores;
pub mod tokenizer;
