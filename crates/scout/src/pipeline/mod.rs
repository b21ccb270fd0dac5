pub mod channel_list;
pub mod controller;
pub mod error;

pub use channel_list::{
    ChannelEntry, DEFAULT_GROUP, DEFAULT_INPUT, Directive, GROUP_SUFFIX, parse_directives,
    parse_line, read_channel_list,
};
pub use controller::{AcceptPolicy, Pipeline, RunSummary};
pub use error::ChannelListError;
