pub mod assembler;
pub mod distribution;
pub mod leaf;
pub mod prefab_parser;
