//! Integration tests for the depslot registry, provider, and accessors

mod cli_parse;
mod config_loading;
mod registry_properties;
mod scoped_reads;
